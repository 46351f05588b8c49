//! Zodiac sign and element tables.
//!
//! The twelve signs are 30° sectors starting at 0° Aries. Elements cycle
//! Fire, Earth, Air, Water, so `element = sign index mod 4`.

use crate::ephemeris::CelestialBody;
use crate::zodiac::angles::normalize_angle;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// Signs in ecliptic order, indexed by `floor(longitude / 30)`.
pub const SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

pub const ELEMENTS: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];

const TRADITIONAL_RULERS: [CelestialBody; 12] = [
    CelestialBody::Mars,    // Aries
    CelestialBody::Venus,   // Taurus
    CelestialBody::Mercury, // Gemini
    CelestialBody::Moon,    // Cancer
    CelestialBody::Sun,     // Leo
    CelestialBody::Mercury, // Virgo
    CelestialBody::Venus,   // Libra
    CelestialBody::Mars,    // Scorpio
    CelestialBody::Jupiter, // Sagittarius
    CelestialBody::Saturn,  // Capricorn
    CelestialBody::Saturn,  // Aquarius
    CelestialBody::Jupiter, // Pisces
];

const MODERN_RULERS: [CelestialBody; 12] = [
    CelestialBody::Mars,
    CelestialBody::Venus,
    CelestialBody::Mercury,
    CelestialBody::Moon,
    CelestialBody::Sun,
    CelestialBody::Mercury,
    CelestialBody::Venus,
    CelestialBody::Pluto,
    CelestialBody::Jupiter,
    CelestialBody::Saturn,
    CelestialBody::Uranus,
    CelestialBody::Neptune,
];

/// Sign index (0-11) for any longitude.
pub fn sign_index(longitude: f64) -> usize {
    let idx = (normalize_angle(longitude) / 30.0).floor() as usize;
    idx.min(11)
}

pub fn sign_of(longitude: f64) -> ZodiacSign {
    SIGNS[sign_index(longitude)]
}

pub fn element_of(longitude: f64) -> Element {
    ELEMENTS[sign_index(longitude) % 4]
}

impl ZodiacSign {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn element(self) -> Element {
        ELEMENTS[self.index() % 4]
    }

    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    /// Ruling planet. Modern rulerships swap in the outer planets for
    /// Scorpio, Aquarius and Pisces.
    pub fn ruler(self, modern: bool) -> CelestialBody {
        if modern {
            MODERN_RULERS[self.index()]
        } else {
            TRADITIONAL_RULERS[self.index()]
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Element {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Air => "Air",
            Element::Water => "Water",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
