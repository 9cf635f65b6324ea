//! Room type enum for single-space analysis.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The room types the space scorer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoomType {
    Bedroom,
    LivingRoom,
    Kitchen,
    Office,
    Meditation,
    Entrance,
}

impl RoomType {
    /// Returns all room types.
    pub fn all() -> &'static [RoomType] {
        &[
            RoomType::Bedroom,
            RoomType::LivingRoom,
            RoomType::Kitchen,
            RoomType::Office,
            RoomType::Meditation,
            RoomType::Entrance,
        ]
    }

    /// Kebab-case wire label, also used verbatim in generated text.
    pub fn label(&self) -> &'static str {
        match self {
            RoomType::Bedroom => "bedroom",
            RoomType::LivingRoom => "living-room",
            RoomType::Kitchen => "kitchen",
            RoomType::Office => "office",
            RoomType::Meditation => "meditation",
            RoomType::Entrance => "entrance",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_6_room_types() {
        assert_eq!(RoomType::all().len(), 6);
    }

    #[test]
    fn serializes_kebab_case() {
        let json = serde_json::to_string(&RoomType::LivingRoom).unwrap();
        assert_eq!(json, "\"living-room\"");
    }

    #[test]
    fn deserializes_kebab_case() {
        let rt: RoomType = serde_json::from_str("\"living-room\"").unwrap();
        assert_eq!(rt, RoomType::LivingRoom);
    }

    #[test]
    fn display_matches_wire_label() {
        assert_eq!(format!("{}", RoomType::LivingRoom), "living-room");
        assert_eq!(format!("{}", RoomType::Kitchen), "kitchen");
    }
}
