//! Natal chart positions and synastry scoring for two people.
//!
//! The pipeline is: resolve a birth instant and per-body longitudes
//! ([`resolver`]), classify them into a [`Chart`] ([`chart`]), then compare two
//! charts into a [`SynastryResult`] ([`aspects`]).

pub mod aspects;
pub mod chart;
pub mod ephemeris;
pub mod resolver;
pub mod settings;
pub mod zodiac;

pub use aspects::{build_synastry, AspectKind, AspectMatch, SynastryEngine, SynastryResult};
pub use chart::{BirthPlace, Chart, ChartBuilder, ChartError, Person, Position};
pub use ephemeris::{CelestialBody, EphemerisError, EphemerisProvider, GeoLocation, SwissEphemerisAdapter};
pub use resolver::{GeoZoneResolver, ResolvedInstant, TimezoneResolver};
pub use settings::{ChartSettings, SynastrySettings};
pub use zodiac::{Element, ZodiacSign};

/// Build a chart with the boundary-database timezone resolver and default settings.
pub fn build_chart(person: &Person, ephemeris: &dyn EphemerisProvider) -> Result<Chart, ChartError> {
    ChartBuilder::new(&GeoZoneResolver, ephemeris).build_chart(person)
}
