use crate::ephemeris::adapter::EphemerisError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

impl GeoLocation {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    /// Latitude within [-90, 90] and longitude within [-180, 180]
    pub fn in_range(&self) -> bool {
        self.is_finite() && (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

/// Tracked bodies. Declaration order is the display order of every chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CelestialBody {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl CelestialBody {
    pub const ALL: [CelestialBody; 10] = [
        CelestialBody::Sun,
        CelestialBody::Moon,
        CelestialBody::Mercury,
        CelestialBody::Venus,
        CelestialBody::Mars,
        CelestialBody::Jupiter,
        CelestialBody::Saturn,
        CelestialBody::Uranus,
        CelestialBody::Neptune,
        CelestialBody::Pluto,
    ];

    pub fn iter() -> impl Iterator<Item = CelestialBody> {
        Self::ALL.iter().copied()
    }

    /// Lowercase identifier, e.g. `"mercury"`
    pub fn id(self) -> &'static str {
        match self {
            CelestialBody::Sun => "sun",
            CelestialBody::Moon => "moon",
            CelestialBody::Mercury => "mercury",
            CelestialBody::Venus => "venus",
            CelestialBody::Mars => "mars",
            CelestialBody::Jupiter => "jupiter",
            CelestialBody::Saturn => "saturn",
            CelestialBody::Uranus => "uranus",
            CelestialBody::Neptune => "neptune",
            CelestialBody::Pluto => "pluto",
        }
    }

    /// Display label, e.g. `"Mercury"`
    pub fn label(self) -> &'static str {
        match self {
            CelestialBody::Sun => "Sun",
            CelestialBody::Moon => "Moon",
            CelestialBody::Mercury => "Mercury",
            CelestialBody::Venus => "Venus",
            CelestialBody::Mars => "Mars",
            CelestialBody::Jupiter => "Jupiter",
            CelestialBody::Saturn => "Saturn",
            CelestialBody::Uranus => "Uranus",
            CelestialBody::Neptune => "Neptune",
            CelestialBody::Pluto => "Pluto",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::iter().find(|body| body.id().eq_ignore_ascii_case(id))
    }
}

impl fmt::Display for CelestialBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Source of geocentric ecliptic longitudes.
///
/// Implementations must be deterministic: the same body and instant always
/// yield the same longitude. Values may be outside [0, 360); callers
/// normalize them.
pub trait EphemerisProvider {
    fn longitude_of(&self, body: CelestialBody, instant: DateTime<Utc>) -> Result<f64, EphemerisError>;
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for &P {
    fn longitude_of(&self, body: CelestialBody, instant: DateTime<Utc>) -> Result<f64, EphemerisError> {
        (**self).longitude_of(body, instant)
    }
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for Box<P> {
    fn longitude_of(&self, body: CelestialBody, instant: DateTime<Utc>) -> Result<f64, EphemerisError> {
        (**self).longitude_of(body, instant)
    }
}
