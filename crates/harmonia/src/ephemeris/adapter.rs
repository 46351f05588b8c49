use crate::ephemeris::types::{CelestialBody, EphemerisProvider};
use crate::zodiac::normalize_angle;
use chrono::{DateTime, Datelike, Timelike, Utc};
use std::env;
use std::path::{Path, PathBuf};
use swisseph::swe::{calc_ut, julday, set_ephe_path};
use thiserror::Error;

/// Errors that can occur during ephemeris calculations
#[derive(Error, Debug)]
pub enum EphemerisError {
    #[error("Ephemeris file not found at path: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("Failed to calculate position for {body} at {datetime}: {message}")]
    CalculationFailed {
        body: CelestialBody,
        datetime: DateTime<Utc>,
        message: String,
    },
    #[error("Ephemeris returned non-finite longitude {value} for {body} at {datetime}")]
    NonFiniteLongitude {
        body: CelestialBody,
        datetime: DateTime<Utc>,
        value: f64,
    },
}

// Swiss Ephemeris planet codes (SE_SUN .. SE_PLUTO)
const PLANET_CODES: &[(CelestialBody, u32)] = &[
    (CelestialBody::Sun, 0),
    (CelestialBody::Moon, 1),
    (CelestialBody::Mercury, 2),
    (CelestialBody::Venus, 3),
    (CelestialBody::Mars, 4),
    (CelestialBody::Jupiter, 5),
    (CelestialBody::Saturn, 6),
    (CelestialBody::Uranus, 7),
    (CelestialBody::Neptune, 8),
    (CelestialBody::Pluto, 9),
];

const FLG_SWIEPH: u32 = 2;
const FLG_MOSEPH: u32 = 4;
const GREG_CAL: u32 = 1;

/// Which Swiss Ephemeris backend to compute with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EphemerisMode {
    /// Built-in Moshier analytical theory, no data files needed
    Moshier,
    /// Swiss Ephemeris `.se1` data files in the given directory
    Files(PathBuf),
}

/// Swiss Ephemeris adapter implementation
pub struct SwissEphemerisAdapter {
    mode: EphemerisMode,
}

impl SwissEphemerisAdapter {
    /// Adapter backed by the analytical ephemeris
    pub fn moshier() -> Self {
        Self {
            mode: EphemerisMode::Moshier,
        }
    }

    /// Adapter backed by data files. `None` reads `SWISS_EPHEMERIS_PATH`, then
    /// falls back to `/usr/local/share/swisseph`.
    pub fn with_files(ephemeris_path: Option<PathBuf>) -> Result<Self, EphemerisError> {
        let path = ephemeris_path.unwrap_or_else(|| {
            env::var("SWISS_EPHEMERIS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("/usr/local/share/swisseph"))
        });

        if !path.exists() {
            return Err(EphemerisError::FileNotFound {
                path: path.display().to_string(),
                message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.".to_string(),
            });
        }

        // Process-wide setting inside the C library
        set_ephe_path(&path.to_string_lossy());
        log::debug!("Using Swiss Ephemeris data files at {}", path.display());

        Ok(Self {
            mode: EphemerisMode::Files(path),
        })
    }

    pub fn mode(&self) -> &EphemerisMode {
        &self.mode
    }

    pub fn ephemeris_path(&self) -> Option<&Path> {
        match &self.mode {
            EphemerisMode::Files(path) => Some(path.as_path()),
            EphemerisMode::Moshier => None,
        }
    }

    fn flags(&self) -> u32 {
        match self.mode {
            EphemerisMode::Moshier => FLG_MOSEPH,
            EphemerisMode::Files(_) => FLG_SWIEPH,
        }
    }
}

impl EphemerisProvider for SwissEphemerisAdapter {
    fn longitude_of(&self, body: CelestialBody, instant: DateTime<Utc>) -> Result<f64, EphemerisError> {
        let planet_code = PLANET_CODES
            .iter()
            .find(|(b, _)| *b == body)
            .map(|(_, code)| *code)
            .ok_or_else(|| EphemerisError::CalculationFailed {
                body,
                datetime: instant,
                message: format!("No Swiss Ephemeris code for {}", body.id()),
            })?;

        let jd = datetime_to_julian_day(instant);
        let flags = self.flags();
        let result = calc_ut(jd, planet_code, flags).map_err(|e| {
            EphemerisError::CalculationFailed {
                body,
                datetime: instant,
                message: format!("Swiss Ephemeris error: {}", e),
            }
        })?;

        // Missing data files make the library fall back to Moshier; only
        // the returned flags show it.
        if flags & FLG_SWIEPH != 0 && (result.code as u32) & FLG_SWIEPH == 0 {
            log::debug!(
                "Swiss Ephemeris files unavailable for {}, computed with flags {:#x}",
                body.id(),
                result.code
            );
        }

        let longitude = result.out[0];
        if !longitude.is_finite() {
            return Err(EphemerisError::NonFiniteLongitude {
                body,
                datetime: instant,
                value: longitude,
            });
        }
        Ok(normalize_angle(longitude))
    }
}

/// Convert UTC datetime to Julian Day (UT)
pub fn datetime_to_julian_day(dt: DateTime<Utc>) -> f64 {
    let hour = dt.hour() as f64;
    let minute = dt.minute() as f64;
    let second = dt.second() as f64;
    let hour_decimal = hour + minute / 60.0 + second / 3600.0;

    julday(dt.year(), dt.month() as i32, dt.day() as i32, hour_decimal, GREG_CAL)
}
