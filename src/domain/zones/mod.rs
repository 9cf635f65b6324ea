//! Zone assessment - suitability of each Vastu zone for a room type.
//!
//! The floor plate divides into nine zones: the eight directional
//! sectors and the Brahmasthan at the center. Each zone carries
//! suitability notes per room type; a keyword classification grades the
//! notes into a quality level for display.

mod assessment;
mod zone;

pub use assessment::{ZoneAssessment, ZoneAssessor, ZoneQuality};
pub use zone::Zone;
