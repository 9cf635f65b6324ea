//! Room descriptors and the compliance request envelope.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Grid position of a room within the floor plan.
///
/// Retained for visualization; placement scoring ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// One room of a floor plan as submitted for compliance checking.
///
/// `room_type` and `direction` are free text by contract: labels that
/// match no known category degrade to an empty ideal-direction list
/// instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub name: String,
    #[serde(rename = "type")]
    pub room_type: String,
    pub direction: String,
    pub position: Position,
}

impl Room {
    /// Creates a room descriptor.
    pub fn new(
        name: impl Into<String>,
        room_type: impl Into<String>,
        direction: impl Into<String>,
        x: f64,
        y: f64,
    ) -> Self {
        Self {
            name: name.into(),
            room_type: room_type.into(),
            direction: direction.into(),
            position: Position { x, y },
        }
    }
}

/// Overall plot dimensions accompanying a compliance request.
///
/// Not used by placement scoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotDimensions {
    pub length: f64,
    pub width: f64,
}

/// The compliance-check request envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceRequest {
    pub rooms: Vec<Room>,
    pub dimensions: PlotDimensions,
}

impl ComplianceRequest {
    /// Applies the upstream schema rules: a non-empty room list,
    /// non-empty text fields, positive plot dimensions.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.rooms.is_empty() {
            return Err(ValidationError::empty_collection("rooms"));
        }
        for room in &self.rooms {
            if room.name.trim().is_empty() {
                return Err(ValidationError::empty_field("name"));
            }
            if room.room_type.trim().is_empty() {
                return Err(ValidationError::empty_field("type"));
            }
            if room.direction.trim().is_empty() {
                return Err(ValidationError::empty_field("direction"));
            }
        }
        if !(self.dimensions.length.is_finite() && self.dimensions.length > 0.0) {
            return Err(ValidationError::not_positive(
                "dimensions.length",
                self.dimensions.length,
            ));
        }
        if !(self.dimensions.width.is_finite() && self.dimensions.width > 0.0) {
            return Err(ValidationError::not_positive(
                "dimensions.width",
                self.dimensions.width,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ComplianceRequest {
        ComplianceRequest {
            rooms: vec![Room::new("Main Kitchen", "Kitchen", "Southeast", 3.0, 4.0)],
            dimensions: PlotDimensions {
                length: 40.0,
                width: 30.0,
            },
        }
    }

    #[test]
    fn validate_accepts_well_formed_request() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_room_list() {
        let mut req = request();
        req.rooms.clear();
        assert!(matches!(
            req.validate(),
            Err(ValidationError::EmptyCollection { .. })
        ));
    }

    #[test]
    fn validate_rejects_blank_text_fields() {
        let mut req = request();
        req.rooms[0].direction = "  ".to_string();
        assert!(matches!(
            req.validate(),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn validate_rejects_non_positive_plot() {
        let mut req = request();
        req.dimensions.width = 0.0;
        assert!(matches!(
            req.validate(),
            Err(ValidationError::NotPositive { .. })
        ));
    }

    #[test]
    fn deserializes_the_wire_envelope() {
        let json = r#"{
            "rooms": [
                {
                    "name": "Master",
                    "type": "Master Bedroom",
                    "direction": "Southwest",
                    "position": { "x": 0, "y": 1 }
                }
            ],
            "dimensions": { "length": 50, "width": 35 }
        }"#;
        let req: ComplianceRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.rooms[0].room_type, "Master Bedroom");
        assert_eq!(req.rooms[0].position.y, 1.0);
        assert!(req.validate().is_ok());
    }
}
