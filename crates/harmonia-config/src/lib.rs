use chrono_tz::Tz;
use harmonia::chart::parse_birth_time;
use harmonia::settings::{ChartSettings, SynastrySettings, DEFAULT_TOP_ASPECTS};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
#[derive(Debug, Clone, Default)]
pub struct HarmoniaSettings {
    /// Swiss Ephemeris data directory; `None` means the analytical ephemeris
    pub ephemeris_path: Option<PathBuf>,
    pub chart: ChartSettings,
    pub synastry: SynastrySettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct EphemerisToml {
    #[serde(default)]
    path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
struct ChartToml {
    #[serde(default = "default_birth_time")]
    default_birth_time: String,
    #[serde(default = "default_fallback_timezone")]
    fallback_timezone: String,
}

impl Default for ChartToml {
    fn default() -> Self {
        Self {
            default_birth_time: default_birth_time(),
            fallback_timezone: default_fallback_timezone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct SynastryToml {
    #[serde(default = "default_top_aspects")]
    top_aspects: usize,
}

impl Default for SynastryToml {
    fn default() -> Self {
        Self {
            top_aspects: default_top_aspects(),
        }
    }
}

fn default_birth_time() -> String {
    "12:00".to_string()
}

fn default_fallback_timezone() -> String {
    "UTC".to_string()
}

fn default_top_aspects() -> usize {
    DEFAULT_TOP_ASPECTS
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    ephemeris: EphemerisToml,
    #[serde(default)]
    chart: ChartToml,
    #[serde(default)]
    synastry: SynastryToml,
}

const CONFIG_PATHS: [&str; 2] = ["configs/harmonia.toml", "../../configs/harmonia.toml"];

/// Try the usual relative paths for `configs/harmonia.toml`.
pub fn read_config_toml_text() -> Option<String> {
    CONFIG_PATHS.iter().find_map(|p| fs::read_to_string(p).ok())
}

/// Parse configuration text. `SWISS_EPHEMERIS_PATH` overrides `[ephemeris] path`.
pub fn parse_settings(text: &str) -> anyhow::Result<HarmoniaSettings> {
    let root: RootConfigToml =
        toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse harmonia.toml: {e}"))?;
    let RootConfigToml {
        ephemeris,
        chart,
        synastry,
    } = root;

    let default_birth_time = parse_birth_time(&chart.default_birth_time)
        .map_err(|e| anyhow::anyhow!("Invalid [chart] default_birth_time: {e}"))?;
    let fallback_timezone: Tz = chart.fallback_timezone.parse().map_err(|_| {
        anyhow::anyhow!(
            "Invalid [chart] fallback_timezone: {} is not an IANA zone name",
            chart.fallback_timezone
        )
    })?;

    let ephemeris_path = env::var_os("SWISS_EPHEMERIS_PATH")
        .map(PathBuf::from)
        .or(ephemeris.path);

    Ok(HarmoniaSettings {
        ephemeris_path,
        chart: ChartSettings {
            default_birth_time,
            fallback_timezone,
        },
        synastry: SynastrySettings {
            top_aspects: synastry.top_aspects,
        },
    })
}

/// Load settings from an explicit file.
pub fn load_settings_from(path: &Path) -> anyhow::Result<HarmoniaSettings> {
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Could not read config {}: {e}", path.display()))?;
    parse_settings(&text)
}

/// Load settings from `configs/harmonia.toml`, or defaults if no file exists.
pub fn load_settings() -> anyhow::Result<HarmoniaSettings> {
    match read_config_toml_text() {
        Some(text) => parse_settings(&text),
        None => parse_settings(""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use std::io::Write;

    #[test]
    fn test_empty_config_gives_defaults() {
        let settings = parse_settings("").unwrap();
        assert_eq!(settings.chart.default_birth_time, NaiveTime::from_hms_opt(12, 0, 0).unwrap());
        assert_eq!(settings.chart.fallback_timezone, Tz::UTC);
        assert_eq!(settings.synastry.top_aspects, 8);
    }

    #[test]
    fn test_sections_override_defaults() {
        let text = r#"
            [chart]
            default_birth_time = "06:30"
            fallback_timezone = "Europe/Moscow"

            [synastry]
            top_aspects = 5
        "#;
        let settings = parse_settings(text).unwrap();
        assert_eq!(settings.chart.default_birth_time, NaiveTime::from_hms_opt(6, 30, 0).unwrap());
        assert_eq!(settings.chart.fallback_timezone, Tz::Europe__Moscow);
        assert_eq!(settings.synastry.top_aspects, 5);
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(parse_settings("[chart]\nfallback_timezone = \"Mars/Olympus\"").is_err());
        assert!(parse_settings("[chart]\ndefault_birth_time = \"noon\"").is_err());
        assert!(parse_settings("[synastry\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[synastry]\ntop_aspects = 3").unwrap();
        let settings = load_settings_from(file.path()).unwrap();
        assert_eq!(settings.synastry.top_aspects, 3);
        assert!(load_settings_from(Path::new("/no/such/harmonia.toml")).is_err());
    }
}
