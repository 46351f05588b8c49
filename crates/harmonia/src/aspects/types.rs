use crate::ephemeris::CelestialBody;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
}

impl AspectKind {
    pub fn name(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "conjunction",
            AspectKind::Opposition => "opposition",
            AspectKind::Trine => "trine",
            AspectKind::Square => "square",
            AspectKind::Sextile => "sextile",
        }
    }

    pub fn definition(self) -> &'static AspectDefinition {
        match self {
            AspectKind::Conjunction => &ASPECT_DEFINITIONS[0],
            AspectKind::Opposition => &ASPECT_DEFINITIONS[1],
            AspectKind::Trine => &ASPECT_DEFINITIONS[2],
            AspectKind::Square => &ASPECT_DEFINITIONS[3],
            AspectKind::Sextile => &ASPECT_DEFINITIONS[4],
        }
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named angle with its tolerance and harmony weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AspectDefinition {
    pub kind: AspectKind,
    /// Exact angle in degrees (0-180)
    pub angle: f64,
    /// Maximum deviation from `angle` that still counts
    pub orb: f64,
    pub weight: i32,
}

/// Aspect definitions in check order. The first one within orb wins, so
/// reordering this table changes results.
pub static ASPECT_DEFINITIONS: [AspectDefinition; 5] = [
    AspectDefinition {
        kind: AspectKind::Conjunction,
        angle: 0.0,
        orb: 8.0,
        weight: 3,
    },
    AspectDefinition {
        kind: AspectKind::Opposition,
        angle: 180.0,
        orb: 8.0,
        weight: -2,
    },
    AspectDefinition {
        kind: AspectKind::Trine,
        angle: 120.0,
        orb: 6.0,
        weight: 2,
    },
    AspectDefinition {
        kind: AspectKind::Square,
        angle: 90.0,
        orb: 6.0,
        weight: -2,
    },
    AspectDefinition {
        kind: AspectKind::Sextile,
        angle: 60.0,
        orb: 4.0,
        weight: 1,
    },
];

/// Deviation below which an aspect counts as exact
pub const EXACT_THRESHOLD: f64 = 0.1;

/// An aspect between a body of chart A and a body of chart B
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AspectMatch {
    pub body_a: CelestialBody,
    pub body_b: CelestialBody,
    pub aspect: AspectKind,
    /// Angular separation of the two longitudes (0-180)
    pub separation: f64,
    /// Observed orb: |separation - exact angle|
    pub deviation: f64,
    pub weight: i32,
    pub is_exact: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SynastryResult {
    /// Every match, chart A bodies outer, chart B bodies inner
    pub aspects: Vec<AspectMatch>,
    pub total_weight: i32,
    /// 0-100, 50 is neutral
    pub harmony: u8,
    /// Tightest aspects first
    pub top_aspects: Vec<AspectMatch>,
}

impl SynastryResult {
    pub fn is_empty(&self) -> bool {
        self.aspects.is_empty()
    }
}
