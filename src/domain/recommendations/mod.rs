//! Detailed recommendation engine.
//!
//! Composes recommendations from six independent generators (orientation,
//! dimensions, room type, element balance, furniture, color) and orders
//! them by priority for presentation.

mod engine;
mod recommendation;

pub use engine::RecommendationEngine;
pub use recommendation::{Category, Recommendation};
