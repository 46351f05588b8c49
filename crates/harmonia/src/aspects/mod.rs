pub mod calculator;
pub mod types;

pub use calculator::{build_synastry, harmony_score, select_top_aspects, SynastryEngine};
pub use types::{AspectDefinition, AspectKind, AspectMatch, SynastryResult, ASPECT_DEFINITIONS, EXACT_THRESHOLD};
