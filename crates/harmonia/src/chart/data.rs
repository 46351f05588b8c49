use crate::ephemeris::{CelestialBody, EphemerisError, GeoLocation};
use crate::resolver::ResolvedInstant;
use crate::zodiac::{Element, ZodiacSign, ELEMENTS};
use chrono::{NaiveDate, NaiveTime};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors raised while building a chart
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Invalid birth date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },
    #[error("Invalid birth time '{value}': expected HH:MM or HH:MM:SS")]
    InvalidTime { value: String },
    #[error("Birth location must have finite coordinates, got lat {lat}, lon {lon}")]
    InvalidLocation { lat: f64, lon: f64 },
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthPlace {
    pub lat: f64,
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl BirthPlace {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            city: None,
            region: None,
        }
    }

    pub fn coordinates(&self) -> GeoLocation {
        GeoLocation::new(self.lat, self.lon)
    }
}

/// Birth data for one partner. Never modified by chart building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub birth_date: NaiveDate,
    #[serde(default, deserialize_with = "deserialize_birth_time")]
    pub birth_time: Option<NaiveTime>,
    #[serde(default)]
    pub time_unknown: bool,
    pub location: BirthPlace,
}

impl Person {
    pub fn new(name: impl Into<String>, birth_date: NaiveDate, birth_time: Option<NaiveTime>, location: BirthPlace) -> Self {
        Self {
            name: name.into(),
            birth_date,
            birth_time,
            time_unknown: birth_time.is_none(),
            location,
        }
    }

    /// Build a person from text fields. An empty or absent time means the
    /// birth time is unknown.
    pub fn parse(name: &str, date: &str, time: Option<&str>, lat: f64, lon: f64) -> Result<Self, ChartError> {
        let birth_date = parse_birth_date(date)?;
        let birth_time = match time.map(str::trim) {
            None | Some("") => None,
            Some(t) => Some(parse_birth_time(t)?),
        };
        let person = Self::new(name, birth_date, birth_time, BirthPlace::new(lat, lon));
        person.validate()?;
        Ok(person)
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        if !self.location.coordinates().is_finite() {
            return Err(ChartError::InvalidLocation {
                lat: self.location.lat,
                lon: self.location.lon,
            });
        }
        Ok(())
    }
}

pub fn parse_birth_date(value: &str) -> Result<NaiveDate, ChartError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| ChartError::InvalidDate {
        value: value.to_string(),
    })
}

pub fn parse_birth_time(value: &str) -> Result<NaiveTime, ChartError> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| ChartError::InvalidTime {
            value: value.to_string(),
        })
}

fn deserialize_birth_time<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(t) => parse_birth_time(t).map(Some).map_err(serde::de::Error::custom),
    }
}

/// One body's place in a chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Position {
    pub body: CelestialBody,
    /// Ecliptic longitude in [0, 360)
    pub lon: f64,
    pub sign: ZodiacSign,
    pub element: Element,
    /// Degrees and minutes, e.g. `15°07′`
    pub formatted: String,
}

/// Count of positions per element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ElementBalance {
    pub fire: u32,
    pub earth: u32,
    pub air: u32,
    pub water: u32,
}

impl ElementBalance {
    pub fn from_positions(positions: &[Position]) -> Self {
        let mut balance = Self::default();
        for p in positions {
            *balance.get_mut(p.element) += 1;
        }
        balance
    }

    pub fn get(&self, element: Element) -> u32 {
        match element {
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Air => self.air,
            Element::Water => self.water,
        }
    }

    fn get_mut(&mut self, element: Element) -> &mut u32 {
        match element {
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
            Element::Air => &mut self.air,
            Element::Water => &mut self.water,
        }
    }

    pub fn total(&self) -> u32 {
        self.fire + self.earth + self.air + self.water
    }

    /// Rounded percentage per element. An empty balance divides by 1
    /// and yields all zeros.
    pub fn percentages(&self) -> ElementPercent {
        let total = match self.total() {
            0 => 1.0,
            n => n as f64,
        };
        let pct = |count: u32| ((count as f64 / total) * 100.0).round() as u32;
        ElementPercent {
            fire: pct(self.fire),
            earth: pct(self.earth),
            air: pct(self.air),
            water: pct(self.water),
        }
    }
}

/// Element share in whole percent; sums to 100 up to rounding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ElementPercent {
    pub fire: u32,
    pub earth: u32,
    pub air: u32,
    pub water: u32,
}

impl ElementPercent {
    pub fn get(&self, element: Element) -> u32 {
        match element {
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Air => self.air,
            Element::Water => self.water,
        }
    }

    pub fn sum(&self) -> u32 {
        self.fire + self.earth + self.air + self.water
    }

    /// Element with the largest share; ties go to the earlier element.
    pub fn dominant(&self) -> Element {
        let mut best = ELEMENTS[0];
        for element in ELEMENTS.into_iter().skip(1) {
            if self.get(element) > self.get(best) {
                best = element;
            }
        }
        best
    }
}

/// A person's natal chart
#[derive(Debug, Clone, Serialize)]
pub struct Chart {
    pub person: Person,
    pub timezone: Tz,
    pub instant: ResolvedInstant,
    pub positions: Vec<Position>,
    pub element_balance: ElementBalance,
    pub element_percent: ElementPercent,
}

impl Chart {
    pub fn position(&self, body: CelestialBody) -> Option<&Position> {
        self.positions.iter().find(|p| p.body == body)
    }

    /// House and ascendant content must be suppressed when this is set.
    pub fn time_unknown(&self) -> bool {
        self.instant.time_unknown
    }

    pub fn dominant_element(&self) -> Element {
        self.element_percent.dominant()
    }
}
