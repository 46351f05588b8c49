pub mod adapter;
pub mod types;

pub use adapter::{datetime_to_julian_day, EphemerisError, EphemerisMode, SwissEphemerisAdapter};
pub use types::{CelestialBody, EphemerisProvider, GeoLocation};
