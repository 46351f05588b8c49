//! Timezone lookup from birth coordinates.
//!
//! Lookup failure is never an error: an unmapped or out-of-range location
//! falls back to a default zone so a chart can still be drawn.

use crate::ephemeris::GeoLocation;
use chrono_tz::Tz;
use lazy_static::lazy_static;
use tzf_rs::DefaultFinder;

pub trait TimezoneResolver {
    /// Zone for the coordinates, or `None` when they cannot be mapped.
    fn resolve(&self, location: &GeoLocation) -> Option<Tz>;
}

impl<F> TimezoneResolver for F
where
    F: Fn(f64, f64) -> Option<Tz>,
{
    fn resolve(&self, location: &GeoLocation) -> Option<Tz> {
        self(location.lat, location.lon)
    }
}

/// Always answers with the same zone.
#[derive(Debug, Clone, Copy)]
pub struct FixedZoneResolver(pub Tz);

impl TimezoneResolver for FixedZoneResolver {
    fn resolve(&self, _location: &GeoLocation) -> Option<Tz> {
        Some(self.0)
    }
}

lazy_static! {
    static ref FINDER: DefaultFinder = DefaultFinder::new();
}

/// Looks the zone up in the bundled timezone boundary polygons.
///
/// The boundary data is loaded once, on first use, and shared by every
/// resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoZoneResolver;

impl TimezoneResolver for GeoZoneResolver {
    fn resolve(&self, location: &GeoLocation) -> Option<Tz> {
        if !location.in_range() {
            return None;
        }
        // tzf takes longitude first
        let name = FINDER.get_tz_name(location.lon, location.lat);
        if name.is_empty() {
            return None;
        }
        match name.parse::<Tz>() {
            Ok(tz) => Some(tz),
            Err(_) => {
                log::debug!("Boundary data returned unknown zone {name:?}");
                None
            }
        }
    }
}

/// Resolve the zone for a location, substituting `fallback` on failure.
pub fn resolve_timezone(resolver: &dyn TimezoneResolver, location: &GeoLocation, fallback: Tz) -> Tz {
    match resolver.resolve(location) {
        Some(tz) => tz,
        None => {
            log::warn!(
                "Could not resolve timezone for ({}, {}), falling back to {}",
                location.lat,
                location.lon,
                fallback.name()
            );
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_zone_moscow() {
        let tz = GeoZoneResolver.resolve(&GeoLocation::new(55.75, 37.62)).unwrap();
        assert_eq!(tz, Tz::Europe__Moscow);
    }

    #[test]
    fn test_geo_zone_new_york() {
        let tz = GeoZoneResolver.resolve(&GeoLocation::new(40.71, -74.0)).unwrap();
        assert_eq!(tz, Tz::America__New_York);
    }

    #[test]
    fn test_geo_zone_follows_borders_not_longitude() {
        // Beijing time covers all of China, far past its 15° band
        let tz = GeoZoneResolver.resolve(&GeoLocation::new(39.93, 116.39)).unwrap();
        assert_eq!(tz, Tz::Asia__Shanghai);
    }

    #[test]
    fn test_out_of_range_falls_back() {
        let location = GeoLocation::new(123.0, 500.0);
        assert!(GeoZoneResolver.resolve(&location).is_none());
        assert_eq!(resolve_timezone(&GeoZoneResolver, &location, Tz::UTC), Tz::UTC);
    }

    #[test]
    fn test_closure_resolver() {
        let resolver = |_lat: f64, _lon: f64| -> Option<Tz> { None };
        let tz = resolve_timezone(&resolver, &GeoLocation::new(0.0, 0.0), Tz::Europe__Moscow);
        assert_eq!(tz, Tz::Europe__Moscow);
    }
}
