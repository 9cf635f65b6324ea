//! Zone suitability assessment per room type.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::domain::foundation::RoomType;

use super::zone::Zone;

/// Suitability grade of a zone for a given room type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneQuality {
    Excellent,
    Good,
    Moderate,
    Poor,
}

impl ZoneQuality {
    /// Returns the wire label for this quality.
    pub fn label(&self) -> &'static str {
        match self {
            ZoneQuality::Excellent => "excellent",
            ZoneQuality::Good => "good",
            ZoneQuality::Moderate => "moderate",
            ZoneQuality::Poor => "poor",
        }
    }
}

impl fmt::Display for ZoneQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Suitability notes per zone and room type.
static ZONE_NOTES: Lazy<HashMap<Zone, HashMap<RoomType, Vec<&'static str>>>> = Lazy::new(|| {
    use RoomType::*;

    let mut map = HashMap::new();
    map.insert(
        Zone::Northeast,
        HashMap::from([
            (Bedroom, vec!["Ideal for prayer/meditation", "Guest bedroom", "Study room"]),
            (LivingRoom, vec!["Avoid", "Not recommended"]),
            (Kitchen, vec!["Avoid", "Causes expenses"]),
            (Office, vec!["Best for concentration", "Perfect for learning"]),
            (Meditation, vec!["Excellent location", "Highest spiritual energy"]),
            (Entrance, vec!["Excellent entrance", "Brings positive energy"]),
        ]),
    );
    map.insert(
        Zone::North,
        HashMap::from([
            (Bedroom, vec!["Good for wealth", "Money-related work"]),
            (LivingRoom, vec!["Ideal location", "Brings prosperity"]),
            (Kitchen, vec!["Acceptable", "Moderate position"]),
            (Office, vec!["Good for business", "Financial growth"]),
            (Meditation, vec!["Peaceful location", "Good energy flow"]),
            (Entrance, vec!["Auspicious entrance", "Brings opportunities"]),
        ]),
    );
    map.insert(
        Zone::Northwest,
        HashMap::from([
            (Bedroom, vec!["Suitable", "Secondary bedroom"]),
            (LivingRoom, vec!["Good", "Comfortable location"]),
            (Kitchen, vec!["Avoid if possible", "Not ideal"]),
            (Office, vec!["Acceptable for support staff"]),
            (Meditation, vec!["Moderate energy"]),
            (Entrance, vec!["Secondary entrance", "Acceptable"]),
        ]),
    );
    map.insert(
        Zone::East,
        HashMap::from([
            (Bedroom, vec!["Good for health", "Energizing position"]),
            (LivingRoom, vec!["Good for family", "Social space"]),
            (Kitchen, vec!["Good location", "Cooking area"]),
            (Office, vec!["Excellent", "Success and growth"]),
            (Meditation, vec!["Very good", "Rising sun energy"]),
            (Entrance, vec!["Auspicious", "Main entrance"]),
        ]),
    );
    map.insert(
        Zone::Center,
        HashMap::from([
            (Bedroom, vec!["Keep open", "Avoid cluttering"]),
            (LivingRoom, vec!["Keep free", "Central circulation"]),
            (Kitchen, vec!["Must avoid", "Very inauspicious"]),
            (Office, vec!["Keep open", "Central space"]),
            (Meditation, vec!["Must be open", "Heart of the space"]),
            (Entrance, vec!["Pathway area", "Keep clear"]),
        ]),
    );
    map.insert(
        Zone::West,
        HashMap::from([
            (Bedroom, vec!["Secondary bedroom", "Moderate position"]),
            (LivingRoom, vec!["Acceptable", "Guest seating"]),
            (Kitchen, vec!["Not ideal", "Heat issues"]),
            (Office, vec!["Acceptable", "Support area"]),
            (Meditation, vec!["Not ideal"]),
            (Entrance, vec!["Secondary entrance"]),
        ]),
    );
    map.insert(
        Zone::Southeast,
        HashMap::from([
            (Bedroom, vec!["Not recommended", "Avoid"]),
            (LivingRoom, vec!["Acceptable", "Social area"]),
            (Kitchen, vec!["Best location", "Fire element"]),
            (Office, vec!["Moderate", "Active area"]),
            (Meditation, vec!["Not suitable"]),
            (Entrance, vec!["Avoid as main"]),
        ]),
    );
    map.insert(
        Zone::South,
        HashMap::from([
            (Bedroom, vec!["Best for parents", "Master bedroom"]),
            (LivingRoom, vec!["Good", "Family area"]),
            (Kitchen, vec!["Avoid", "Not ideal"]),
            (Office, vec!["Good authority", "Leadership"]),
            (Meditation, vec!["Not ideal"]),
            (Entrance, vec!["Secondary entrance", "Avoid main"]),
        ]),
    );
    map.insert(
        Zone::Southwest,
        HashMap::from([
            (Bedroom, vec!["Excellent", "Master bedroom"]),
            (LivingRoom, vec!["Suitable", "Storage area"]),
            (Kitchen, vec!["Avoid", "Not recommended"]),
            (Office, vec!["Support area", "Storage"]),
            (Meditation, vec!["Not suitable"]),
            (Entrance, vec!["Avoid", "Not auspicious"]),
        ]),
    );
    map
});

/// Assessment of one zone for one room type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneAssessment {
    pub zone: Zone,
    pub quality: ZoneQuality,
    pub notes: Vec<String>,
}

/// Assessor grading zone suitability from the notes table.
pub struct ZoneAssessor;

impl ZoneAssessor {
    /// Grades one zone for the room type.
    pub fn assess(zone: Zone, room_type: RoomType) -> ZoneAssessment {
        let notes: Vec<String> = ZONE_NOTES
            .get(&zone)
            .and_then(|by_room| by_room.get(&room_type))
            .map(|notes| notes.iter().map(|n| n.to_string()).collect())
            .unwrap_or_default();

        let quality = Self::classify(&notes);

        ZoneAssessment {
            zone,
            quality,
            notes,
        }
    }

    /// Grades all nine zones in canonical order.
    pub fn assess_all(room_type: RoomType) -> Vec<ZoneAssessment> {
        Zone::all()
            .iter()
            .map(|zone| Self::assess(*zone, room_type))
            .collect()
    }

    /// Keyword classification over the joined note text.
    fn classify(notes: &[String]) -> ZoneQuality {
        let text = notes.join(" ").to_lowercase();

        if text.contains("best") || text.contains("excellent") || text.contains("ideal") {
            ZoneQuality::Excellent
        } else if text.contains("good") {
            ZoneQuality::Good
        } else if text.contains("avoid") || text.contains("not recommended") {
            ZoneQuality::Poor
        } else {
            ZoneQuality::Moderate
        }
    }
}
