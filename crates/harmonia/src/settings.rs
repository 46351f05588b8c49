use chrono::NaiveTime;
use chrono_tz::Tz;

/// Number of aspects kept in `SynastryResult::top_aspects`
pub const DEFAULT_TOP_ASPECTS: usize = 8;

/// Settings for resolving and building a chart
#[derive(Debug, Clone)]
pub struct ChartSettings {
    /// Local civil time used when the birth time is unknown
    pub default_birth_time: NaiveTime,
    /// Zone used when the timezone resolver yields nothing
    pub fallback_timezone: Tz,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            default_birth_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default(),
            fallback_timezone: Tz::UTC,
        }
    }
}

/// Settings for synastry calculations
#[derive(Debug, Clone)]
pub struct SynastrySettings {
    pub top_aspects: usize,
}

impl Default for SynastrySettings {
    fn default() -> Self {
        Self {
            top_aspects: DEFAULT_TOP_ASPECTS,
        }
    }
}
