use crate::aspects::types::{AspectDefinition, AspectMatch, SynastryResult, ASPECT_DEFINITIONS, EXACT_THRESHOLD};
use crate::chart::Chart;
use crate::ephemeris::CelestialBody;
use crate::settings::SynastrySettings;
use crate::zodiac::angle_diff;

/// Neutral harmony before any aspect is counted
const HARMONY_BASELINE: f64 = 50.0;
const WEIGHT_SCALE: f64 = 2.0;

/// Compares two charts body by body
pub struct SynastryEngine {
    definitions: &'static [AspectDefinition],
    settings: SynastrySettings,
}

impl SynastryEngine {
    pub fn new() -> Self {
        Self::with_settings(SynastrySettings::default())
    }

    pub fn with_settings(settings: SynastrySettings) -> Self {
        Self {
            definitions: &ASPECT_DEFINITIONS,
            settings,
        }
    }

    /// First definition within orb of the separation between two longitudes.
    ///
    /// Definitions are tested in table order and the search stops at the
    /// first hit, even if a later definition would be closer.
    pub fn match_aspect(&self, lon_a: f64, lon_b: f64) -> Option<(&AspectDefinition, f64, f64)> {
        let separation = angle_diff(lon_a, lon_b);
        self.definitions.iter().find_map(|def| {
            let deviation = (separation - def.angle).abs();
            (deviation <= def.orb).then_some((def, separation, deviation))
        })
    }

    fn aspect_between(&self, body_a: CelestialBody, lon_a: f64, body_b: CelestialBody, lon_b: f64) -> Option<AspectMatch> {
        self.match_aspect(lon_a, lon_b)
            .map(|(def, separation, deviation)| AspectMatch {
                body_a,
                body_b,
                aspect: def.kind,
                separation,
                deviation,
                weight: def.weight,
                is_exact: deviation < EXACT_THRESHOLD,
            })
    }

    /// All inter-chart aspects in enumeration order
    pub fn find_aspects(&self, chart_a: &Chart, chart_b: &Chart) -> Vec<AspectMatch> {
        let mut aspects = Vec::new();
        for a in &chart_a.positions {
            for b in &chart_b.positions {
                if let Some(aspect) = self.aspect_between(a.body, a.lon, b.body, b.lon) {
                    log::trace!(
                        "{} {} {} (separation {:.2}, orb {:.2})",
                        a.body,
                        aspect.aspect,
                        b.body,
                        aspect.separation,
                        aspect.deviation
                    );
                    aspects.push(aspect);
                }
            }
        }
        aspects
    }

    pub fn compute(&self, chart_a: &Chart, chart_b: &Chart) -> SynastryResult {
        let aspects = self.find_aspects(chart_a, chart_b);
        let total_weight: i32 = aspects.iter().map(|a| a.weight).sum();
        let harmony = harmony_score(total_weight);
        let top_aspects = select_top_aspects(&aspects, self.settings.top_aspects);

        log::debug!(
            "Synastry {} / {}: {} aspects, total weight {}, harmony {}",
            chart_a.person.name,
            chart_b.person.name,
            aspects.len(),
            total_weight,
            harmony
        );

        SynastryResult {
            aspects,
            total_weight,
            harmony,
            top_aspects,
        }
    }
}

impl Default for SynastryEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// `clamp(round(50 + 2 * weight), 0, 100)`
pub fn harmony_score(total_weight: i32) -> u8 {
    let raw = (HARMONY_BASELINE + total_weight as f64 * WEIGHT_SCALE).round();
    raw.clamp(0.0, 100.0) as u8
}

/// The `n` tightest aspects. Equal deviations keep enumeration order.
pub fn select_top_aspects(aspects: &[AspectMatch], n: usize) -> Vec<AspectMatch> {
    let mut sorted = aspects.to_vec();
    sorted.sort_by(|x, y| x.deviation.abs().total_cmp(&y.deviation.abs()));
    sorted.truncate(n);
    sorted
}

/// Synastry with the default aspect table and top-aspect count
pub fn build_synastry(chart_a: &Chart, chart_b: &Chart) -> SynastryResult {
    SynastryEngine::new().compute(chart_a, chart_b)
}
