//! The nine Vastu zones of a floor plate.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Direction;

/// A zone of the floor plate: eight directional sectors plus the
/// Brahmasthan at the center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Northeast,
    North,
    Northwest,
    East,
    Center,
    West,
    Southeast,
    South,
    Southwest,
}

impl Zone {
    /// Returns all nine zones in canonical display order.
    pub fn all() -> &'static [Zone] {
        &[
            Zone::Northeast,
            Zone::North,
            Zone::Northwest,
            Zone::East,
            Zone::Center,
            Zone::West,
            Zone::Southeast,
            Zone::South,
            Zone::Southwest,
        ]
    }

    /// Human-readable zone label.
    pub fn label(&self) -> &'static str {
        match self {
            Zone::Northeast => "Northeast",
            Zone::North => "North",
            Zone::Northwest => "Northwest",
            Zone::East => "East",
            Zone::Center => "Brahmasthan (Center)",
            Zone::West => "West",
            Zone::Southeast => "Southeast",
            Zone::South => "South",
            Zone::Southwest => "Southwest",
        }
    }

    /// The element traditionally associated with this zone.
    pub fn element(&self) -> &'static str {
        match self {
            Zone::Northeast => "Water & Wisdom",
            Zone::North => "Water",
            Zone::Northwest => "Air",
            Zone::East => "Sun/Energy",
            Zone::Center => "Space",
            Zone::West => "Air",
            Zone::Southeast => "Fire",
            Zone::South => "Fire",
            Zone::Southwest => "Earth",
        }
    }
}

impl From<Direction> for Zone {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::North => Zone::North,
            Direction::Northeast => Zone::Northeast,
            Direction::East => Zone::East,
            Direction::Southeast => Zone::Southeast,
            Direction::South => Zone::South,
            Direction::Southwest => Zone::Southwest,
            Direction::West => Zone::West,
            Direction::Northwest => Zone::Northwest,
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_9_zones() {
        assert_eq!(Zone::all().len(), 9);
    }

    #[test]
    fn center_is_the_brahmasthan() {
        assert_eq!(Zone::Center.label(), "Brahmasthan (Center)");
        assert_eq!(Zone::Center.element(), "Space");
    }

    #[test]
    fn fire_zones_share_the_element() {
        assert_eq!(Zone::Southeast.element(), "Fire");
        assert_eq!(Zone::South.element(), "Fire");
    }

    #[test]
    fn every_direction_maps_to_a_zone() {
        for direction in Direction::all() {
            let zone = Zone::from(*direction);
            assert_ne!(zone, Zone::Center);
        }
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Zone::Center).unwrap(), "\"center\"");
        assert_eq!(
            serde_json::to_string(&Zone::Northeast).unwrap(),
            "\"northeast\""
        );
    }
}
