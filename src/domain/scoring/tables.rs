//! Static rule tables for the space scorer.
//!
//! Process-wide, read-only configuration: initialized once on first use
//! and never mutated, so concurrent evaluations share them freely.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::domain::foundation::{Direction, RoomType};

/// Sub-score weights for the overall score. They sum to 1.0, so the
/// weighted combination stays on the 0-100 scale.
pub const WEIGHT_DIMENSIONS: f64 = 0.20;
pub const WEIGHT_ORIENTATION: f64 = 0.25;
pub const WEIGHT_PROPORTIONS: f64 = 0.20;
pub const WEIGHT_LIGHTING_VENTILATION: f64 = 0.20;
pub const WEIGHT_ENERGY_FLOW: f64 = 0.15;

/// Sub-scores below this threshold trigger a recommendation.
pub const RECOMMENDATION_THRESHOLD: f64 = 70.0;

/// Orientation score when a room-type/direction pair has no table entry.
pub const DEFAULT_ORIENTATION_SCORE: f64 = 60.0;

/// Ideal floor area served by one window, in square feet.
pub const SQUARE_FEET_PER_WINDOW: f64 = 35.0;

/// Preferred length-to-width ratios, from square through the golden
/// ratio to 2:1.
pub const PREFERRED_RATIOS: [f64; 5] = [1.0, 1.33, 1.5, 1.618, 2.0];

/// Fallback ideal footprint for room types absent from the table.
pub const FALLBACK_IDEAL_DIMENSIONS: (f64, f64) = (16.0, 12.0);

/// Ideal (length, width) in feet per room type.
pub static IDEAL_DIMENSIONS: Lazy<HashMap<RoomType, (f64, f64)>> = Lazy::new(|| {
    HashMap::from([
        (RoomType::Bedroom, (15.0, 12.0)),
        (RoomType::LivingRoom, (20.0, 15.0)),
        (RoomType::Kitchen, (12.0, 10.0)),
        (RoomType::Office, (16.0, 14.0)),
        (RoomType::Meditation, (12.0, 12.0)),
        (RoomType::Entrance, (10.0, 8.0)),
    ])
});

/// Orientation suitability per room type and direction.
pub static ORIENTATION_SCORES: Lazy<HashMap<RoomType, HashMap<Direction, f64>>> =
    Lazy::new(|| {
        use Direction::*;

        let mut map = HashMap::new();
        map.insert(
            RoomType::Bedroom,
            HashMap::from([
                (Southwest, 90.0),
                (West, 80.0),
                (South, 75.0),
                (Southeast, 70.0),
                (Northwest, 65.0),
                (North, 60.0),
                (East, 55.0),
                (Northeast, 50.0),
            ]),
        );
        map.insert(
            RoomType::LivingRoom,
            HashMap::from([
                (North, 85.0),
                (Northeast, 80.0),
                (Northwest, 75.0),
                (East, 70.0),
                (West, 65.0),
                (Southeast, 60.0),
                (South, 55.0),
                (Southwest, 50.0),
            ]),
        );
        map.insert(
            RoomType::Kitchen,
            HashMap::from([
                (Southeast, 90.0),
                (East, 85.0),
                (South, 75.0),
                (Southwest, 70.0),
                (Northwest, 65.0),
                (North, 60.0),
                (Northeast, 55.0),
                (West, 50.0),
            ]),
        );
        map.insert(
            RoomType::Office,
            HashMap::from([
                (North, 90.0),
                (Northeast, 85.0),
                (East, 80.0),
                (Northwest, 70.0),
                (West, 60.0),
                (South, 55.0),
                (Southwest, 50.0),
                (Southeast, 45.0),
            ]),
        );
        map.insert(
            RoomType::Meditation,
            HashMap::from([
                (Northeast, 95.0),
                (North, 90.0),
                (East, 85.0),
                (Northwest, 75.0),
                (Southeast, 70.0),
                (West, 60.0),
                (South, 55.0),
                (Southwest, 45.0),
            ]),
        );
        map.insert(
            RoomType::Entrance,
            HashMap::from([
                (Northeast, 90.0),
                (North, 85.0),
                (East, 80.0),
                (Northwest, 75.0),
                (Southeast, 70.0),
                (West, 65.0),
                (South, 60.0),
                (Southwest, 55.0),
            ]),
        );
        map
    });

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        let total = WEIGHT_DIMENSIONS
            + WEIGHT_ORIENTATION
            + WEIGHT_PROPORTIONS
            + WEIGHT_LIGHTING_VENTILATION
            + WEIGHT_ENERGY_FLOW;
        assert!((total - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ideal_dimensions_cover_every_room_type() {
        for room_type in RoomType::all() {
            assert!(
                IDEAL_DIMENSIONS.contains_key(room_type),
                "missing ideal dimensions for {room_type}"
            );
        }
    }

    #[test]
    fn orientation_scores_cover_every_pairing() {
        for room_type in RoomType::all() {
            let by_direction = ORIENTATION_SCORES
                .get(room_type)
                .unwrap_or_else(|| panic!("missing orientation table for {room_type}"));
            for direction in Direction::all() {
                assert!(
                    by_direction.contains_key(direction),
                    "missing {room_type}/{direction} entry"
                );
            }
        }
    }

    #[test]
    fn orientation_scores_stay_in_range() {
        for by_direction in ORIENTATION_SCORES.values() {
            for score in by_direction.values() {
                assert!((0.0..=100.0).contains(score));
            }
        }
    }
}
