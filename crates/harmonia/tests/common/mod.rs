#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use harmonia::chart::{BirthPlace, Chart, Person};
use harmonia::ephemeris::{CelestialBody, EphemerisError, EphemerisProvider};
use harmonia::resolver::ResolvedInstant;
use std::cell::RefCell;

/// Ephemeris that returns fixed longitudes and records the instants it saw
pub struct StubEphemeris {
    pub longitudes: [f64; 10],
    pub calls: RefCell<Vec<(CelestialBody, DateTime<Utc>)>>,
    pub fail_on: Option<CelestialBody>,
}

impl StubEphemeris {
    pub fn new(longitudes: [f64; 10]) -> Self {
        Self {
            longitudes,
            calls: RefCell::new(Vec::new()),
            fail_on: None,
        }
    }

    pub fn failing_on(mut self, body: CelestialBody) -> Self {
        self.fail_on = Some(body);
        self
    }
}

impl EphemerisProvider for StubEphemeris {
    fn longitude_of(&self, body: CelestialBody, instant: DateTime<Utc>) -> Result<f64, EphemerisError> {
        self.calls.borrow_mut().push((body, instant));
        if self.fail_on == Some(body) {
            return Err(EphemerisError::CalculationFailed {
                body,
                datetime: instant,
                message: "stub failure".to_string(),
            });
        }
        let idx = CelestialBody::ALL.iter().position(|b| *b == body).unwrap();
        Ok(self.longitudes[idx])
    }
}

pub fn person(name: &str) -> Person {
    Person::new(
        name,
        NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
        Some(NaiveTime::from_hms_opt(8, 30, 0).unwrap()),
        BirthPlace::new(55.75, 37.62),
    )
}

/// Chart with the given longitudes in body order, bypassing the resolver
pub fn chart_with(name: &str, longitudes: [f64; 10]) -> Chart {
    let instant = ResolvedInstant {
        utc: Utc.with_ymd_and_hms(1990, 6, 15, 5, 30, 0).unwrap(),
        local: NaiveDate::from_ymd_opt(1990, 6, 15)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap(),
        used_time: NaiveTime::from_hms_opt(8, 30, 0).unwrap(),
        time_unknown: false,
    };
    let pairs: Vec<(CelestialBody, f64)> = CelestialBody::ALL.iter().copied().zip(longitudes).collect();
    Chart::from_longitudes(person(name), Tz::UTC, instant, &pairs)
}

/// Bodies packed into 0°-9°. Against the same set shifted by 45° every
/// separation lands in 36°-54°, outside every orb.
pub const SPREAD: [f64; 10] = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
