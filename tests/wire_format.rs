//! Wire-format coverage: the JSON shapes exchanged with the HTTP layer.

use serde_json::{json, Value};

use vastu_vista::domain::compliance::{ComplianceChecker, ComplianceRequest};
use vastu_vista::domain::foundation::{Direction, RoomType};
use vastu_vista::domain::scoring::{SpaceParameters, SpaceScorer};

#[test]
fn space_parameters_accept_the_analyzer_payload() {
    let payload = json!({
        "length": 18.5,
        "width": 12.0,
        "height": 8.0,
        "roomType": "office",
        "orientation": "north",
        "windows": 2,
        "doors": 1
    });

    let params: SpaceParameters = serde_json::from_value(payload).unwrap();
    assert_eq!(params.room_type, RoomType::Office);
    assert_eq!(params.orientation, Direction::North);
    params.validate().unwrap();
}

#[test]
fn space_parameters_reject_unknown_enum_labels() {
    let payload = json!({
        "length": 18.5,
        "width": 12.0,
        "height": 8.0,
        "roomType": "garage",
        "orientation": "north",
        "windows": 2,
        "doors": 1
    });

    assert!(serde_json::from_value::<SpaceParameters>(payload).is_err());
}

#[test]
fn vastu_score_serializes_the_component_map() {
    let params = SpaceParameters::new(
        12.0,
        10.0,
        6.0,
        RoomType::Kitchen,
        Direction::Southeast,
        3,
        1,
    )
    .unwrap();

    let value = serde_json::to_value(SpaceScorer::score(&params)).unwrap();

    assert!(value["overall"].is_u64());
    for component in [
        "dimensions",
        "orientation",
        "proportions",
        "lighting_ventilation",
        "energy_flow",
    ] {
        let score = value["components"][component]
            .as_f64()
            .unwrap_or_else(|| panic!("missing component {component}"));
        assert!((0.0..=100.0).contains(&score));
    }
    assert!(value["recommendations"].is_array());
}

#[test]
fn compliance_request_parses_the_check_envelope() {
    let payload = json!({
        "rooms": [
            {
                "name": "Main Kitchen",
                "type": "Kitchen",
                "direction": "Southeast",
                "position": { "x": 3, "y": 4 }
            },
            {
                "name": "Master Suite",
                "type": "Master Bedroom",
                "direction": "North",
                "position": { "x": 0, "y": 0 }
            }
        ],
        "dimensions": { "length": 40, "width": 30 }
    });

    let request: ComplianceRequest = serde_json::from_value(payload).unwrap();
    request.validate().unwrap();
    assert_eq!(request.rooms.len(), 2);
    assert_eq!(request.rooms[1].room_type, "Master Bedroom");
}

#[test]
fn compliance_report_matches_the_response_shape() {
    let request: ComplianceRequest = serde_json::from_value(json!({
        "rooms": [
            {
                "name": "Main Kitchen",
                "type": "Kitchen",
                "direction": "North",
                "position": { "x": 3, "y": 4 }
            }
        ],
        "dimensions": { "length": 40, "width": 30 }
    }))
    .unwrap();

    let report = ComplianceChecker::check(&request.rooms);
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["vastuScore"], json!(0));
    assert_eq!(value["vastuCompliant"], json!(false));

    let analysis = &value["analysis"][0];
    assert_eq!(analysis["room"], json!("Main Kitchen"));
    assert_eq!(analysis["type"], json!("Kitchen"));
    assert_eq!(analysis["currentDirection"], json!("North"));
    assert_eq!(
        analysis["idealDirections"],
        json!(["Southeast", "Northwest"])
    );
    assert_eq!(analysis["isCompliant"], json!(false));
    assert_eq!(analysis["severity"], json!("critical"));

    let summary = &value["summary"];
    assert_eq!(summary["totalRooms"], json!(1));
    assert_eq!(summary["criticalIssues"], json!(1));

    let recommendations: &Value = &value["recommendations"];
    assert!(recommendations
        .as_array()
        .unwrap()
        .iter()
        .any(|r| r.as_str().unwrap().contains("Priority Fix")));
}

#[test]
fn round_trip_preserves_the_report() {
    let request: ComplianceRequest = serde_json::from_value(json!({
        "rooms": [
            {
                "name": "Hall",
                "type": "Living Room",
                "direction": "East",
                "position": { "x": 1, "y": 2 }
            }
        ],
        "dimensions": { "length": 20, "width": 20 }
    }))
    .unwrap();

    let report = ComplianceChecker::check(&request.rooms);
    let json = serde_json::to_string(&report).unwrap();
    let parsed: vastu_vista::domain::compliance::ComplianceReport =
        serde_json::from_str(&json).unwrap();
    assert_eq!(report, parsed);
}
