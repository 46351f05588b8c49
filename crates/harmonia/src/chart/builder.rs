use crate::chart::data::{Chart, ChartError, ElementBalance, Person, Position};
use crate::ephemeris::{CelestialBody, EphemerisProvider};
use crate::resolver::{PositionResolver, ResolvedInstant, TimezoneResolver};
use crate::settings::ChartSettings;
use crate::zodiac::{element_of, format_degrees, normalize_angle, sign_of};
use chrono_tz::Tz;

/// Classify a longitude into a chart position
pub fn position_for(body: CelestialBody, longitude: f64) -> Position {
    let lon = normalize_angle(longitude);
    Position {
        body,
        lon,
        sign: sign_of(lon),
        element: element_of(lon),
        formatted: format_degrees(lon),
    }
}

impl Chart {
    /// Assemble a chart from already resolved longitudes. Body order of
    /// `longitudes` is kept.
    pub fn from_longitudes(
        person: Person,
        timezone: Tz,
        instant: ResolvedInstant,
        longitudes: &[(CelestialBody, f64)],
    ) -> Self {
        let positions: Vec<Position> = longitudes
            .iter()
            .map(|&(body, lon)| position_for(body, lon))
            .collect();
        let element_balance = ElementBalance::from_positions(&positions);
        let element_percent = element_balance.percentages();

        Self {
            person,
            timezone,
            instant,
            positions,
            element_balance,
            element_percent,
        }
    }
}

/// Builds charts against a timezone resolver and an ephemeris provider
pub struct ChartBuilder<'a> {
    resolver: PositionResolver<'a>,
}

impl<'a> ChartBuilder<'a> {
    pub fn new(timezones: &'a dyn TimezoneResolver, ephemeris: &'a dyn EphemerisProvider) -> Self {
        Self::with_settings(timezones, ephemeris, ChartSettings::default())
    }

    pub fn with_settings(
        timezones: &'a dyn TimezoneResolver,
        ephemeris: &'a dyn EphemerisProvider,
        settings: ChartSettings,
    ) -> Self {
        Self {
            resolver: PositionResolver::new(timezones, ephemeris, settings),
        }
    }

    pub fn build_chart(&self, person: &Person) -> Result<Chart, ChartError> {
        person.validate()?;
        let resolved = self.resolver.resolve(person)?;
        Ok(Chart::from_longitudes(
            person.clone(),
            resolved.timezone,
            resolved.instant,
            &resolved.longitudes,
        ))
    }
}
