//! Space scorer - five sub-scores combined into one weighted result.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::foundation::Score;

use super::parameters::SpaceParameters;
use super::tables::{
    DEFAULT_ORIENTATION_SCORE, FALLBACK_IDEAL_DIMENSIONS, IDEAL_DIMENSIONS, ORIENTATION_SCORES,
    PREFERRED_RATIOS, RECOMMENDATION_THRESHOLD, SQUARE_FEET_PER_WINDOW, WEIGHT_DIMENSIONS,
    WEIGHT_ENERGY_FLOW, WEIGHT_LIGHTING_VENTILATION, WEIGHT_ORIENTATION, WEIGHT_PROPORTIONS,
};

/// The five named sub-scores of a space analysis.
///
/// A fixed-arity struct rather than a map, so the weighted combination
/// applies every weight exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub dimensions: Score,
    pub orientation: Score,
    pub proportions: Score,
    pub lighting_ventilation: Score,
    pub energy_flow: Score,
}

impl ComponentScores {
    /// Weighted combination of the five components.
    ///
    /// Weights sum to 1.0 and each term is already on the 0-100 scale,
    /// so no further normalization is applied.
    pub fn weighted_overall(&self) -> Score {
        Score::new(
            self.dimensions.value() * WEIGHT_DIMENSIONS
                + self.orientation.value() * WEIGHT_ORIENTATION
                + self.proportions.value() * WEIGHT_PROPORTIONS
                + self.lighting_ventilation.value() * WEIGHT_LIGHTING_VENTILATION
                + self.energy_flow.value() * WEIGHT_ENERGY_FLOW,
        )
    }
}

/// Full scoring result for one room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VastuScore {
    pub overall: u8,
    pub components: ComponentScores,
    pub recommendations: Vec<String>,
}

/// Scorer for a single room's Vastu alignment.
///
/// Pure and deterministic: identical parameters always produce an
/// identical result.
pub struct SpaceScorer;

impl SpaceScorer {
    /// Scores a room across the five factors and combines them.
    pub fn score(params: &SpaceParameters) -> VastuScore {
        let components = ComponentScores {
            dimensions: Self::dimension_score(params),
            orientation: Self::orientation_score(params),
            proportions: Self::proportion_score(params),
            lighting_ventilation: Self::lighting_score(params),
            energy_flow: Self::energy_flow_score(params),
        };

        let overall = components.weighted_overall().rounded();
        let recommendations = Self::recommendations(params, &components);

        debug!(
            room_type = %params.room_type,
            orientation = %params.orientation,
            overall,
            "scored space"
        );

        VastuScore {
            overall,
            components,
            recommendations,
        }
    }

    /// Fit of the footprint against the ideal dimensions for the room
    /// type, with a penalty for disproportionate ceiling height.
    pub fn dimension_score(params: &SpaceParameters) -> Score {
        let (ideal_length, ideal_width) = IDEAL_DIMENSIONS
            .get(&params.room_type)
            .copied()
            .unwrap_or(FALLBACK_IDEAL_DIMENSIONS);

        let length_deviation = (params.length - ideal_length).abs() / ideal_length;
        let width_deviation = (params.width - ideal_width).abs() / ideal_width;

        let mut score = 70.0;
        score -= length_deviation * 15.0;
        score -= width_deviation * 15.0;

        let min_height = params.base_average() / 2.5;
        let max_height = params.base_average() / 1.8;
        if params.height < min_height || params.height > max_height {
            score -= 10.0;
        }

        Score::new(score)
    }

    /// Direct table lookup for the room-type/direction pairing.
    pub fn orientation_score(params: &SpaceParameters) -> Score {
        let value = ORIENTATION_SCORES
            .get(&params.room_type)
            .and_then(|by_direction| by_direction.get(&params.orientation))
            .copied()
            .unwrap_or(DEFAULT_ORIENTATION_SCORE);
        Score::new(value)
    }

    /// Closeness of the aspect ratio to a preferred ratio, with a
    /// penalty when height falls outside 50-75% of the averaged base.
    pub fn proportion_score(params: &SpaceParameters) -> Score {
        let ratio = params.aspect_ratio();
        let closest = PREFERRED_RATIOS
            .iter()
            .copied()
            .fold(PREFERRED_RATIOS[0], |prev, curr| {
                if (curr - ratio).abs() < (prev - ratio).abs() {
                    curr
                } else {
                    prev
                }
            });

        let mut score = 75.0;
        score -= (ratio - closest).abs() * 20.0;

        let height_ratio = params.height_ratio();
        if !(0.5..=0.75).contains(&height_ratio) {
            score -= 15.0;
        }

        Score::new(score)
    }

    /// Natural light and circulation from window and door counts.
    pub fn lighting_score(params: &SpaceParameters) -> Score {
        let ideal_windows = params.area() / SQUARE_FEET_PER_WINDOW;
        let window_deviation = (f64::from(params.windows) - ideal_windows).abs();

        let mut score = 70.0;
        if window_deviation > 3.0 {
            score -= (window_deviation * 3.0).min(20.0);
        }

        // The doorless branch is reachable only for input that skipped
        // validation.
        if params.doors < 1 {
            score -= 20.0;
        } else if params.doors > 3 {
            score -= 10.0;
        }

        if params.windows >= 2 && params.doors >= 1 {
            score += 10.0;
        }

        Score::new(score)
    }

    /// Energy circulation from orientation and opening balance.
    pub fn energy_flow_score(params: &SpaceParameters) -> Score {
        let mut score = 75.0;

        if params.orientation.is_favorable() {
            score += 10.0;
        }

        if params.doors > 2 {
            score -= 10.0;
        }

        let opening_imbalance =
            (i64::from(params.windows) - i64::from(params.doors)).unsigned_abs();
        if opening_imbalance > 4 {
            score -= 10.0;
        }

        Score::new(score)
    }

    /// Short guidance for every factor under the threshold; a single
    /// positive message when nothing triggers.
    fn recommendations(params: &SpaceParameters, components: &ComponentScores) -> Vec<String> {
        let mut recommendations = Vec::new();

        if components.dimensions.is_below(RECOMMENDATION_THRESHOLD) {
            recommendations.push(
                "Consider adjusting room dimensions closer to ideal ratios for your room type"
                    .to_string(),
            );
        }

        if components.orientation.is_below(RECOMMENDATION_THRESHOLD) {
            recommendations.push(format!(
                "For a {}, {}-facing entrance is suboptimal. Consider interior layout adjustments",
                params.room_type,
                params.orientation.label()
            ));
        }

        if components.proportions.is_below(RECOMMENDATION_THRESHOLD) {
            recommendations.push(
                "Adjust ceiling height or base dimensions to achieve better proportional harmony"
                    .to_string(),
            );
        }

        if components
            .lighting_ventilation
            .is_below(RECOMMENDATION_THRESHOLD)
        {
            let ideal_windows = (params.area() / SQUARE_FEET_PER_WINDOW).round() as i64;
            recommendations.push(format!(
                "Increase windows to {ideal_windows} for optimal natural light and ventilation"
            ));
        }

        if components.energy_flow.is_below(RECOMMENDATION_THRESHOLD) {
            recommendations.push(
                "Balance door and window placement to ensure smooth energy circulation throughout the space"
                    .to_string(),
            );
        }

        if recommendations.is_empty() {
            recommendations.push(
                "Your space has excellent Vastu alignment! Maintain the current layout and consider adding plants in the north-east corner"
                    .to_string(),
            );
        }

        recommendations
    }
}
