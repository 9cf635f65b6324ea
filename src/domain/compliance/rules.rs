//! Placement rules - ideal directions and severity classes per category.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

use crate::domain::foundation::{Direction, Severity};

/// The room categories with placement rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomCategory {
    Kitchen,
    Bedroom,
    MasterBedroom,
    LivingRoom,
    Bathroom,
    PoojaRoom,
    StudyRoom,
    DiningRoom,
    StoreRoom,
    Balcony,
    Entrance,
}

impl RoomCategory {
    /// Returns all categories.
    pub fn all() -> &'static [RoomCategory] {
        &[
            RoomCategory::Kitchen,
            RoomCategory::Bedroom,
            RoomCategory::MasterBedroom,
            RoomCategory::LivingRoom,
            RoomCategory::Bathroom,
            RoomCategory::PoojaRoom,
            RoomCategory::StudyRoom,
            RoomCategory::DiningRoom,
            RoomCategory::StoreRoom,
            RoomCategory::Balcony,
            RoomCategory::Entrance,
        ]
    }

    /// Parses a free-text label, ignoring case and surrounding
    /// whitespace. Unknown labels have no category.
    pub fn parse(label: &str) -> Option<RoomCategory> {
        match label.trim().to_lowercase().as_str() {
            "kitchen" => Some(RoomCategory::Kitchen),
            "bedroom" => Some(RoomCategory::Bedroom),
            "master bedroom" => Some(RoomCategory::MasterBedroom),
            "living room" => Some(RoomCategory::LivingRoom),
            "bathroom" => Some(RoomCategory::Bathroom),
            "pooja room" => Some(RoomCategory::PoojaRoom),
            "study room" => Some(RoomCategory::StudyRoom),
            "dining room" => Some(RoomCategory::DiningRoom),
            "store room" => Some(RoomCategory::StoreRoom),
            "balcony" => Some(RoomCategory::Balcony),
            "entrance" => Some(RoomCategory::Entrance),
            _ => None,
        }
    }

    /// Display name matching the rule-table vocabulary.
    pub fn display_name(&self) -> &'static str {
        match self {
            RoomCategory::Kitchen => "Kitchen",
            RoomCategory::Bedroom => "Bedroom",
            RoomCategory::MasterBedroom => "Master Bedroom",
            RoomCategory::LivingRoom => "Living Room",
            RoomCategory::Bathroom => "Bathroom",
            RoomCategory::PoojaRoom => "Pooja Room",
            RoomCategory::StudyRoom => "Study Room",
            RoomCategory::DiningRoom => "Dining Room",
            RoomCategory::StoreRoom => "Store Room",
            RoomCategory::Balcony => "Balcony",
            RoomCategory::Entrance => "Entrance",
        }
    }

    /// Severity class when a room of this category is misplaced.
    ///
    /// Kitchens, master bedrooms, pooja rooms, and entrances anchor the
    /// plan and are critical; ordinary bedrooms and living rooms are
    /// moderate; everything else is minor.
    pub fn misplacement_severity(&self) -> Severity {
        match self {
            RoomCategory::Kitchen
            | RoomCategory::MasterBedroom
            | RoomCategory::PoojaRoom
            | RoomCategory::Entrance => Severity::Critical,
            RoomCategory::Bedroom | RoomCategory::LivingRoom => Severity::Moderate,
            _ => Severity::Minor,
        }
    }
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Ideal directions per room category.
pub static PLACEMENT_RULES: Lazy<HashMap<RoomCategory, Vec<Direction>>> = Lazy::new(|| {
    use Direction::*;

    HashMap::from([
        (RoomCategory::Kitchen, vec![Southeast, Northwest]),
        (RoomCategory::Bedroom, vec![Southwest, Northwest, West]),
        (RoomCategory::MasterBedroom, vec![Southwest]),
        (RoomCategory::LivingRoom, vec![Northeast, North, East]),
        (RoomCategory::Bathroom, vec![Northwest, Southeast, West]),
        (RoomCategory::PoojaRoom, vec![Northeast]),
        (RoomCategory::StudyRoom, vec![Northeast, East, North, West]),
        (RoomCategory::DiningRoom, vec![West, East, Northwest]),
        (RoomCategory::StoreRoom, vec![Southwest, Northwest]),
        (RoomCategory::Balcony, vec![North, East, Northeast]),
        (RoomCategory::Entrance, vec![North, East, Northeast]),
    ])
});

/// Ideal directions for a parsed category; free-text labels without a
/// category have none.
pub fn ideal_directions(category: Option<RoomCategory>) -> &'static [Direction] {
    category
        .and_then(|c| PLACEMENT_RULES.get(&c))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Life aspect affected by misplacing a room of the given type.
pub fn affected_aspect(room_type: &str) -> &'static str {
    match RoomCategory::parse(room_type) {
        Some(RoomCategory::Kitchen) => "health and prosperity",
        Some(RoomCategory::MasterBedroom) => "relationships and stability",
        Some(RoomCategory::PoojaRoom) => "spiritual growth and peace",
        Some(RoomCategory::Entrance) => "overall energy flow",
        Some(RoomCategory::LivingRoom) => "family harmony",
        Some(RoomCategory::Bathroom) => "energy balance",
        Some(RoomCategory::StudyRoom) => "concentration and learning",
        Some(_) | None => "overall energy",
    }
}
