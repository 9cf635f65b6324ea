//! Space parameters - the scorer's immutable input descriptor.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Direction, RoomType, ValidationError};

/// Physical parameters of a single room, in feet.
///
/// Constructed once per analysis request and discarded afterwards; the
/// scorer holds no state beyond these fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceParameters {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub room_type: RoomType,
    pub orientation: Direction,
    pub windows: u32,
    pub doors: u32,
}

impl SpaceParameters {
    /// Creates validated parameters.
    ///
    /// Dimensions must be positive and at least one door is required;
    /// ratio arithmetic downstream divides by width and by the averaged
    /// base, so degenerate dimensions are rejected here rather than
    /// propagated as infinities.
    pub fn new(
        length: f64,
        width: f64,
        height: f64,
        room_type: RoomType,
        orientation: Direction,
        windows: u32,
        doors: u32,
    ) -> Result<Self, ValidationError> {
        let params = Self {
            length,
            width,
            height,
            room_type,
            orientation,
            windows,
            doors,
        };
        params.validate()?;
        Ok(params)
    }

    /// Checks the documented preconditions.
    ///
    /// Deserialized parameters bypass [`SpaceParameters::new`]; callers
    /// accepting raw input should validate before scoring.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("length", self.length),
            ("width", self.width),
            ("height", self.height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ValidationError::not_positive(field, value));
            }
        }
        if self.doors < 1 {
            return Err(ValidationError::below_minimum("doors", 1, self.doors));
        }
        Ok(())
    }

    /// Floor area in square feet.
    pub fn area(&self) -> f64 {
        self.length * self.width
    }

    /// Mean of length and width, the base for the height proportion rules.
    pub fn base_average(&self) -> f64 {
        (self.length + self.width) / 2.0
    }

    /// Length-to-width aspect ratio.
    pub fn aspect_ratio(&self) -> f64 {
        self.length / self.width
    }

    /// Ceiling height relative to the averaged base.
    pub fn height_ratio(&self) -> f64 {
        self.height / self.base_average()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_valid_parameters() {
        let params = SpaceParameters::new(
            15.0,
            12.0,
            7.0,
            RoomType::Bedroom,
            Direction::Southwest,
            2,
            1,
        );
        assert!(params.is_ok());
    }

    #[test]
    fn new_rejects_non_positive_dimensions() {
        for (length, width, height) in [(0.0, 12.0, 7.0), (15.0, -1.0, 7.0), (15.0, 12.0, 0.0)] {
            let result = SpaceParameters::new(
                length,
                width,
                height,
                RoomType::Bedroom,
                Direction::North,
                2,
                1,
            );
            assert!(matches!(
                result,
                Err(ValidationError::NotPositive { .. })
            ));
        }
    }

    #[test]
    fn new_rejects_non_finite_dimensions() {
        let result = SpaceParameters::new(
            f64::NAN,
            12.0,
            7.0,
            RoomType::Bedroom,
            Direction::North,
            2,
            1,
        );
        assert!(result.is_err());
    }

    #[test]
    fn new_requires_at_least_one_door() {
        let result = SpaceParameters::new(
            15.0,
            12.0,
            7.0,
            RoomType::Bedroom,
            Direction::North,
            2,
            0,
        );
        assert!(matches!(
            result,
            Err(ValidationError::BelowMinimum { min: 1, actual: 0, .. })
        ));
    }

    #[test]
    fn derived_measures_compute_from_dimensions() {
        let params =
            SpaceParameters::new(16.0, 12.0, 7.0, RoomType::Office, Direction::North, 3, 1)
                .unwrap();
        assert_eq!(params.area(), 192.0);
        assert_eq!(params.base_average(), 14.0);
        assert_eq!(params.aspect_ratio(), 16.0 / 12.0);
        assert_eq!(params.height_ratio(), 0.5);
    }

    #[test]
    fn deserializes_camel_case_payload() {
        let json = r#"{
            "length": 15,
            "width": 12,
            "height": 7,
            "roomType": "living-room",
            "orientation": "northeast",
            "windows": 3,
            "doors": 1
        }"#;
        let params: SpaceParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params.room_type, RoomType::LivingRoom);
        assert_eq!(params.orientation, Direction::Northeast);
        assert!(params.validate().is_ok());
    }
}
