//! Compass direction enum - the eight directional sectors of a plan.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The eight compass directions used throughout Vastu analysis.
///
/// Canonical wire casing is lowercase (`"southeast"`); [`Direction::parse`]
/// accepts any casing so that both vocabularies seen in submitted data
/// normalize to the same variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
}

impl Direction {
    /// Returns all directions in clockwise order starting from North.
    pub fn all() -> &'static [Direction] {
        &[
            Direction::North,
            Direction::Northeast,
            Direction::East,
            Direction::Southeast,
            Direction::South,
            Direction::Southwest,
            Direction::West,
            Direction::Northwest,
        ]
    }

    /// Parses a direction label, ignoring case and surrounding whitespace.
    pub fn parse(label: &str) -> Option<Direction> {
        match label.trim().to_lowercase().as_str() {
            "north" => Some(Direction::North),
            "northeast" => Some(Direction::Northeast),
            "east" => Some(Direction::East),
            "southeast" => Some(Direction::Southeast),
            "south" => Some(Direction::South),
            "southwest" => Some(Direction::Southwest),
            "west" => Some(Direction::West),
            "northwest" => Some(Direction::Northwest),
            _ => None,
        }
    }

    /// Lowercase wire label.
    pub fn label(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::Northeast => "northeast",
            Direction::East => "east",
            Direction::Southeast => "southeast",
            Direction::South => "south",
            Direction::Southwest => "southwest",
            Direction::West => "west",
            Direction::Northwest => "northwest",
        }
    }

    /// Title-case name for human-readable text.
    pub fn display_name(&self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::Northeast => "Northeast",
            Direction::East => "East",
            Direction::Southeast => "Southeast",
            Direction::South => "South",
            Direction::Southwest => "Southwest",
            Direction::West => "West",
            Direction::Northwest => "Northwest",
        }
    }

    /// True for the directions considered favorable for energy flow
    /// (north, northeast, east, northwest).
    pub fn is_favorable(&self) -> bool {
        matches!(
            self,
            Direction::North | Direction::Northeast | Direction::East | Direction::Northwest
        )
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
