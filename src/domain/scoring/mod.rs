//! Space Scorer - weighted multi-factor scoring for a single room.
//!
//! Given one room's physical parameters, computes five sub-scores
//! (dimensions, orientation, proportions, lighting/ventilation, energy
//! flow), combines them into an overall score, and emits short textual
//! recommendations for every factor that falls below the threshold.
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take
//! validated parameters as input and return computed results. No ports or
//! adapters needed since there's no I/O or external dependencies.

mod parameters;
mod scorer;
mod tables;

pub use parameters::SpaceParameters;
pub use scorer::{ComponentScores, SpaceScorer, VastuScore};
pub use tables::{
    DEFAULT_ORIENTATION_SCORE, FALLBACK_IDEAL_DIMENSIONS, IDEAL_DIMENSIONS, ORIENTATION_SCORES,
    PREFERRED_RATIOS, RECOMMENDATION_THRESHOLD, SQUARE_FEET_PER_WINDOW, WEIGHT_DIMENSIONS,
    WEIGHT_ENERGY_FLOW, WEIGHT_LIGHTING_VENTILATION, WEIGHT_ORIENTATION, WEIGHT_PROPORTIONS,
};
