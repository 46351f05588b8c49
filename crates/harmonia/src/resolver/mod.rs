pub mod instant;
pub mod timezone;

pub use instant::{resolve_instant, ResolvedInstant};
pub use timezone::{resolve_timezone, FixedZoneResolver, GeoZoneResolver, TimezoneResolver};

use crate::chart::Person;
use crate::ephemeris::{CelestialBody, EphemerisError, EphemerisProvider};
use crate::settings::ChartSettings;
use crate::zodiac::normalize_angle;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Raw output of the resolver for one person
#[derive(Debug, Clone)]
pub struct ResolvedPositions {
    pub timezone: Tz,
    pub instant: ResolvedInstant,
    /// One normalized longitude per body, in `CelestialBody::ALL` order
    pub longitudes: Vec<(CelestialBody, f64)>,
}

/// Turns birth data into a UTC instant and per-body longitudes.
pub struct PositionResolver<'a> {
    timezones: &'a dyn TimezoneResolver,
    ephemeris: &'a dyn EphemerisProvider,
    settings: ChartSettings,
}

impl<'a> PositionResolver<'a> {
    pub fn new(
        timezones: &'a dyn TimezoneResolver,
        ephemeris: &'a dyn EphemerisProvider,
        settings: ChartSettings,
    ) -> Self {
        Self {
            timezones,
            ephemeris,
            settings,
        }
    }

    /// Resolve the zone and the instant for a person. Never fails: a zone
    /// lookup miss falls back to the configured zone.
    pub fn resolve_instant(&self, person: &Person) -> (Tz, ResolvedInstant) {
        let tz = resolve_timezone(self.timezones, &person.location.coordinates(), self.settings.fallback_timezone);
        let instant = resolve_instant(
            person.birth_date,
            person.birth_time,
            person.time_unknown,
            tz,
            self.settings.default_birth_time,
        );
        log::debug!(
            "Resolved birth of {} to {} UTC (local {} {}, time unknown: {})",
            person.name,
            instant.utc,
            instant.local,
            tz.name(),
            instant.time_unknown
        );
        (tz, instant)
    }

    /// Query the ephemeris once per tracked body.
    pub fn longitudes(&self, utc: DateTime<Utc>) -> Result<Vec<(CelestialBody, f64)>, EphemerisError> {
        CelestialBody::iter()
            .map(|body| {
                let lon = self.ephemeris.longitude_of(body, utc)?;
                if !lon.is_finite() {
                    return Err(EphemerisError::NonFiniteLongitude {
                        body,
                        datetime: utc,
                        value: lon,
                    });
                }
                Ok((body, normalize_angle(lon)))
            })
            .collect()
    }

    pub fn resolve(&self, person: &Person) -> Result<ResolvedPositions, EphemerisError> {
        let (timezone, instant) = self.resolve_instant(person);
        let longitudes = self.longitudes(instant.utc)?;
        Ok(ResolvedPositions {
            timezone,
            instant,
            longitudes,
        })
    }
}
