//! Recommendation engine - six generators composed and priority-ordered.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::debug;

use crate::domain::foundation::{Direction, Priority, RoomType};
use crate::domain::scoring::{ComponentScores, SpaceParameters, RECOMMENDATION_THRESHOLD};

use super::recommendation::{Category, Recommendation};

/// Wall color palettes per room type.
static COLOR_PALETTES: Lazy<HashMap<RoomType, Vec<&'static str>>> = Lazy::new(|| {
    HashMap::from([
        (
            RoomType::Bedroom,
            vec!["Light blues", "soft greens", "pale yellows"],
        ),
        (RoomType::Kitchen, vec!["Reds", "oranges", "warm yellows"]),
        (
            RoomType::Office,
            vec!["Whites", "light greens", "soft blues"],
        ),
        (
            RoomType::Meditation,
            vec!["Light purples", "whites", "pale blues"],
        ),
        (
            RoomType::LivingRoom,
            vec!["Warm neutrals", "light greens", "soft oranges"],
        ),
        (
            RoomType::Entrance,
            vec!["Bright whites", "light yellows", "warm creams"],
        ),
    ])
});

/// Generator for detailed, categorized recommendations.
pub struct RecommendationEngine;

impl RecommendationEngine {
    /// Generates the full, priority-ordered recommendation list for a
    /// scored space.
    pub fn detailed(
        params: &SpaceParameters,
        components: &ComponentScores,
    ) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();

        recommendations.extend(Self::orientation_recommendations(params));
        recommendations.extend(Self::dimension_recommendations(params, components));
        recommendations.extend(Self::room_type_recommendations(params));
        recommendations.extend(Self::element_recommendations());
        recommendations.extend(Self::furniture_recommendations());
        recommendations.extend(Self::color_recommendations(params));

        // Stable sort: emission order is the tie-break within a rank.
        recommendations.sort_by_key(|r| r.priority.rank());

        debug!(
            room_type = %params.room_type,
            count = recommendations.len(),
            "generated detailed recommendations"
        );

        recommendations
    }

    /// Per-direction guidance; at most the first two entries are kept.
    fn orientation_recommendations(params: &SpaceParameters) -> Vec<Recommendation> {
        let mut recommendations = match params.orientation {
            Direction::Northeast => vec![
                Recommendation::new(
                    "northeast-1",
                    "Maximize North-East Light",
                    Category::Placement,
                    Priority::High,
                    "The North-East is the gateway of wisdom and abundance. Ensure maximum visibility and light from this direction.",
                    "Keep North-East corner clear and bright. Install windows or skylights if possible. Place a water element (fountain or aquarium) here.",
                    &[
                        "Enhanced wisdom and clarity",
                        "Improved prosperity",
                        "Better health and positivity",
                    ],
                ),
                Recommendation::new(
                    "northeast-2",
                    "North-East Prayer Corner",
                    Category::Placement,
                    Priority::Medium,
                    "Create a sacred corner in the North-East for meditation or prayer.",
                    "Set up a small altar or meditation cushion in the North-East corner. Use light colors like white or light blue.",
                    &["Spiritual growth", "Mental peace", "Enhanced intuition"],
                ),
            ],
            Direction::North => vec![
                Recommendation::new(
                    "north-1",
                    "Activate Wealth Corner",
                    Category::Elements,
                    Priority::High,
                    "North is the direction of Mercury and wealth accumulation. Activate this zone for financial growth.",
                    "Place water features (fountain, aquarium) in the North. Use blues and blacks. Avoid heavy storage here.",
                    &[
                        "Financial prosperity",
                        "Career advancement",
                        "Business success",
                    ],
                ),
                Recommendation::new(
                    "north-2",
                    "North-Facing Main Door",
                    Category::Placement,
                    Priority::Medium,
                    "A North-facing entrance brings wealth and positive opportunities.",
                    "Ensure the main door opens freely towards North. Place an auspicious symbol above the door.",
                    &[
                        "Positive energy flow",
                        "Guest attraction",
                        "Opportunity manifestation",
                    ],
                ),
            ],
            Direction::East => vec![Recommendation::new(
                "east-1",
                "Harness Sun Energy",
                Category::Placement,
                Priority::High,
                "East is ruled by the Sun. Maximize morning sunlight for health and vitality.",
                "Keep East windows and openings unobstructed. Use warm yellows and oranges. Place exercise or work area here.",
                &["Enhanced health", "Increased energy", "Career growth"],
            )],
            Direction::South => vec![Recommendation::new(
                "south-1",
                "Authority and Protection Zone",
                Category::Placement,
                Priority::High,
                "South is associated with strength and protection. Use this zone wisely.",
                "Keep South wall solid and strong. Place heavy furniture (bed for master, storage) in South. Avoid cutting South walls.",
                &[
                    "Enhanced authority",
                    "Better stability",
                    "Family protection",
                ],
            )],
            Direction::Southwest => vec![Recommendation::new(
                "sw-1",
                "Master Bedroom Location",
                Category::Placement,
                Priority::High,
                "South-West is ideal for master bedrooms and storage areas.",
                "Place master bed with head towards South or West. Use earth tones. Avoid mirrors in bedroom.",
                &[
                    "Better sleep",
                    "Improved relationships",
                    "Stability and grounding",
                ],
            )],
            Direction::Southeast => vec![Recommendation::new(
                "se-1",
                "Kitchen Placement",
                Category::Placement,
                Priority::High,
                "South-East is the ideal location for kitchens (Fire element).",
                "Place cooking stove in South-East corner. Face East while cooking if possible. Use reds and oranges.",
                &[
                    "Better health",
                    "Improved digestion",
                    "Enhanced family bonding",
                ],
            )],
            Direction::West => vec![Recommendation::new(
                "west-1",
                "Guest and Entertainment Zone",
                Category::Placement,
                Priority::Medium,
                "West is suitable for guest rooms and entertainment areas.",
                "Place guest bedroom or entertainment space in West. Use light colors and maintain good ventilation.",
                &["Happy guests", "Social harmony", "Balanced entertainment"],
            )],
            Direction::Northwest => vec![Recommendation::new(
                "nw-1",
                "Secondary Living Spaces",
                Category::Placement,
                Priority::Medium,
                "North-West is suitable for guest rooms and storage.",
                "Place guest bedroom, store room, or children's room in North-West. Use metal accents and light colors.",
                &[
                    "Good for guests",
                    "Organized storage",
                    "Helpful relationships",
                ],
            )],
        };

        recommendations.truncate(2);
        recommendations
    }

    /// Structural and remedial guidance when the footprint is off.
    fn dimension_recommendations(
        params: &SpaceParameters,
        components: &ComponentScores,
    ) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();

        if components.dimensions.is_below(RECOMMENDATION_THRESHOLD) {
            recommendations.push(Recommendation::new(
                "dim-1",
                "Optimize Room Proportions",
                Category::Structural,
                Priority::High,
                "Your room dimensions deviate from ideal Vastu proportions. Adjust if structurally possible.",
                format!(
                    "Current dimensions: {}' × {}'. Aim for aspect ratios closer to 1:1.33, 1:1.5, or 1:1.618 (Golden Ratio).",
                    params.length, params.width
                ),
                &[
                    "Better energy flow",
                    "Improved harmony",
                    "Enhanced well-being",
                ],
            ));
        }

        let height_ratio = params.height_ratio();
        if !(0.5..=0.75).contains(&height_ratio) {
            let implementation = if height_ratio < 0.5 {
                "Use light colors and vertical stripes to make ceiling appear higher. Add tall mirrors."
            } else {
                "Use darker colors on ceiling. Add horizontal elements to make space feel more balanced."
            };
            recommendations.push(Recommendation::new(
                "dim-2",
                "Adjust Ceiling Height Perception",
                Category::Remedies,
                Priority::Medium,
                "Your ceiling height is not in ideal proportion to floor dimensions.",
                implementation,
                &[
                    "Better spatial harmony",
                    "Improved comfort",
                    "Visual balance",
                ],
            ));
        }

        recommendations
    }

    /// Room-type playbooks; living rooms and entrances have none.
    fn room_type_recommendations(params: &SpaceParameters) -> Vec<Recommendation> {
        match params.room_type {
            RoomType::Bedroom => {
                let bed_placement = if matches!(
                    params.orientation,
                    Direction::Southwest | Direction::South
                ) {
                    "Place bed with head towards South or West. Avoid head towards North. Place bed away from direct door view."
                } else {
                    "Place bed diagonally from the door for privacy. Head towards South is ideal."
                };
                vec![
                    Recommendation::new(
                        "bed-1",
                        "Optimal Bed Placement",
                        Category::Placement,
                        Priority::High,
                        "Bed position significantly affects sleep quality and relationships.",
                        bed_placement,
                        &[
                            "Better sleep quality",
                            "Improved relationships",
                            "Enhanced peace",
                        ],
                    ),
                    Recommendation::new(
                        "bed-2",
                        "Bedroom Window Placement",
                        Category::Placement,
                        Priority::Medium,
                        "Windows affect air flow and energy in bedroom.",
                        "Keep windows on East and North walls. Avoid windows on South and West if possible. Use window treatments for privacy.",
                        &["Better ventilation", "Improved privacy", "Regulated light"],
                    ),
                ]
            }
            RoomType::Kitchen => vec![
                Recommendation::new(
                    "kit-1",
                    "Stove Position and Direction",
                    Category::Placement,
                    Priority::High,
                    "Cook facing East for health benefits and proper energy alignment.",
                    "Position cooking stove in South-East corner. Ensure cook faces East while cooking. Avoid stove in North or center.",
                    &[
                        "Better digestion",
                        "Improved health",
                        "Positive food energy",
                    ],
                ),
                Recommendation::new(
                    "kit-2",
                    "Kitchen Element Balance",
                    Category::Elements,
                    Priority::Medium,
                    "Balance fire (stove) with water (sink) in kitchen.",
                    "Place sink in North or East. Maintain distance between stove and sink. Use water colors (blues) with fire colors (reds/oranges).",
                    &["Elemental harmony", "Better cooking energy", "Family health"],
                ),
            ],
            RoomType::Office => vec![
                Recommendation::new(
                    "off-1",
                    "Desk Orientation",
                    Category::Placement,
                    Priority::High,
                    "Desk position affects focus, productivity, and success.",
                    "Place desk facing North or East for better concentration. Avoid facing South or back to door. Wall behind desk for support.",
                    &[
                        "Enhanced focus",
                        "Increased productivity",
                        "Career success",
                    ],
                ),
                Recommendation::new(
                    "off-2",
                    "Office Lighting",
                    Category::Elements,
                    Priority::Medium,
                    "Proper lighting improves work performance.",
                    "Maximize natural light from East. Use full-spectrum lighting. Avoid harsh shadows on work area.",
                    &["Better focus", "Reduced eye strain", "Improved mood"],
                ),
            ],
            RoomType::Meditation => vec![
                Recommendation::new(
                    "med-1",
                    "Meditation Corner Setup",
                    Category::Placement,
                    Priority::High,
                    "Create an optimal meditation space in North-East corner.",
                    "Set up in North-East if possible. Use light colors, natural materials. Keep space clutter-free and peaceful.",
                    &["Deeper meditation", "Spiritual growth", "Mental clarity"],
                ),
                Recommendation::new(
                    "med-2",
                    "Meditation Room Acoustics",
                    Category::Elements,
                    Priority::Medium,
                    "Sound affects meditation quality.",
                    "Use soft furnishings to absorb sound. Add water sound or wind chimes gently. Avoid harsh noise sources.",
                    &["Better focus", "Peaceful atmosphere", "Spiritual connection"],
                ),
            ],
            RoomType::LivingRoom | RoomType::Entrance => Vec::new(),
        }
    }

    /// Five-element guidance, emitted for every space.
    fn element_recommendations() -> Vec<Recommendation> {
        vec![
            Recommendation::new(
                "elem-1",
                "Five Element Balance",
                Category::Elements,
                Priority::High,
                "Ensure all five elements (Earth, Water, Fire, Air, Space) are represented.",
                "Earth: plants, rocks | Water: fountain, aquarium | Fire: candles, lamps | Air: wind chimes, fans | Space: keep areas open.",
                &[
                    "Holistic energy balance",
                    "Enhanced harmony",
                    "Improved well-being",
                ],
            ),
            Recommendation::new(
                "elem-2",
                "Water Element Enhancement",
                Category::Elements,
                Priority::Medium,
                "Water element promotes prosperity and calm.",
                "Place water fountain or aquarium in North or North-East corner. Use blues and blacks. Keep water clean and moving.",
                &["Increased prosperity", "Better sleep", "Emotional calm"],
            ),
        ]
    }

    /// Furniture arrangement guidance, emitted for every space.
    fn furniture_recommendations() -> Vec<Recommendation> {
        vec![Recommendation::new(
            "furn-1",
            "Furniture Arrangement",
            Category::Placement,
            Priority::Medium,
            "Proper furniture placement ensures smooth energy flow.",
            "Arrange furniture away from center of room. Create clear pathways. Avoid cluttering corners. Leave breathing space.",
            &["Smooth energy flow", "Better movement", "Spacious feel"],
        )]
    }

    /// Color scheme guidance from the per-room-type palette table.
    fn color_recommendations(params: &SpaceParameters) -> Vec<Recommendation> {
        let colors = COLOR_PALETTES
            .get(&params.room_type)
            .map(|palette| palette.join(", "))
            .unwrap_or_else(|| "neutral tones".to_string());

        vec![Recommendation::new(
            "col-1",
            "Optimal Color Scheme",
            Category::Color,
            Priority::Medium,
            format!(
                "For a {}, specific colors enhance Vastu alignment.",
                params.room_type
            ),
            format!(
                "Use primary colors: {colors}. Avoid dark colors on walls. Use darker shades for accents only."
            ),
            &["Better mood", "Enhanced energy", "Visual harmony"],
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scoring::SpaceScorer;

    fn space(room_type: RoomType, orientation: Direction) -> SpaceParameters {
        SpaceParameters::new(15.0, 12.0, 7.0, room_type, orientation, 2, 1).unwrap()
    }

    fn detailed_for(params: &SpaceParameters) -> Vec<Recommendation> {
        let score = SpaceScorer::score(params);
        RecommendationEngine::detailed(params, &score.components)
    }

    #[test]
    fn list_is_ordered_by_priority() {
        for orientation in Direction::all() {
            for room_type in RoomType::all() {
                let params = space(*room_type, *orientation);
                let recommendations = detailed_for(&params);

                let ranks: Vec<u8> = recommendations
                    .iter()
                    .map(|r| r.priority.rank())
                    .collect();
                let mut sorted = ranks.clone();
                sorted.sort_unstable();
                assert_eq!(ranks, sorted, "{room_type}/{orientation} out of order");
            }
        }
    }

    #[test]
    fn orientation_generator_keeps_at_most_two() {
        let northeast = detailed_for(&space(RoomType::Meditation, Direction::Northeast));
        assert!(northeast.iter().any(|r| r.id == "northeast-1"));
        assert!(northeast.iter().any(|r| r.id == "northeast-2"));

        let east = detailed_for(&space(RoomType::Office, Direction::East));
        assert!(east.iter().any(|r| r.id == "east-1"));
        assert!(!east.iter().any(|r| r.id == "east-2"));
    }

    #[test]
    fn equal_priority_preserves_generator_order() {
        // 12 x 12 is the meditation ideal, so the dimension generator
        // stays quiet and only one high entry per generator remains.
        let params = SpaceParameters::new(
            12.0,
            12.0,
            6.5,
            RoomType::Meditation,
            Direction::Northeast,
            2,
            1,
        )
        .unwrap();
        let recommendations = detailed_for(&params);

        let high_ids: Vec<&str> = recommendations
            .iter()
            .filter(|r| r.priority == Priority::High)
            .map(|r| r.id.as_str())
            .collect();

        // Orientation fires before room type, which fires before elements.
        assert_eq!(high_ids, vec!["northeast-1", "med-1", "elem-1"]);
    }

    #[test]
    fn bed_placement_follows_orientation() {
        let southwest = detailed_for(&space(RoomType::Bedroom, Direction::Southwest));
        let bed = southwest.iter().find(|r| r.id == "bed-1").unwrap();
        assert!(bed.implementation.contains("head towards South or West"));

        let north = detailed_for(&space(RoomType::Bedroom, Direction::North));
        let bed = north.iter().find(|r| r.id == "bed-1").unwrap();
        assert!(bed.implementation.contains("diagonally from the door"));
    }

    #[test]
    fn poor_dimensions_trigger_structural_recommendation() {
        let params =
            SpaceParameters::new(30.0, 6.0, 4.0, RoomType::Bedroom, Direction::North, 2, 1)
                .unwrap();
        let recommendations = detailed_for(&params);

        let structural = recommendations.iter().find(|r| r.id == "dim-1").unwrap();
        assert_eq!(structural.category, Category::Structural);
        assert_eq!(structural.priority, Priority::High);
        assert!(structural.implementation.contains("30' × 6'"));
    }

    #[test]
    fn low_ceiling_gets_heightening_remedy() {
        // Height ratio 4 / 18 is well under 0.5.
        let params =
            SpaceParameters::new(20.0, 16.0, 4.0, RoomType::LivingRoom, Direction::North, 2, 1)
                .unwrap();
        let recommendations = detailed_for(&params);

        let remedy = recommendations.iter().find(|r| r.id == "dim-2").unwrap();
        assert_eq!(remedy.category, Category::Remedies);
        assert!(remedy.implementation.contains("appear higher"));
    }

    #[test]
    fn element_and_furniture_recommendations_always_present() {
        for room_type in RoomType::all() {
            let recommendations = detailed_for(&space(*room_type, Direction::West));
            assert!(recommendations.iter().any(|r| r.id == "elem-1"));
            assert!(recommendations.iter().any(|r| r.id == "elem-2"));
            assert!(recommendations.iter().any(|r| r.id == "furn-1"));
        }
    }

    #[test]
    fn color_scheme_names_the_room_palette() {
        let recommendations = detailed_for(&space(RoomType::Kitchen, Direction::Southeast));
        let color = recommendations.iter().find(|r| r.id == "col-1").unwrap();
        assert!(color
            .implementation
            .contains("Reds, oranges, warm yellows"));
        assert!(color.description.contains("For a kitchen"));
    }

    #[test]
    fn living_room_has_no_room_type_playbook() {
        let recommendations = detailed_for(&space(RoomType::LivingRoom, Direction::North));
        assert!(!recommendations
            .iter()
            .any(|r| r.id.starts_with("bed-") || r.id.starts_with("kit-")));
    }
}
