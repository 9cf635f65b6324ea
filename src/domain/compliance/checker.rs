//! Compliance checker - per-room verdicts aggregated into a plan score.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::foundation::{Direction, Severity};

use super::room::Room;
use super::rules::{affected_aspect, ideal_directions, RoomCategory};

/// Plans scoring at least this percentage are Vastu compliant.
pub const COMPLIANCE_THRESHOLD: u8 = 70;

/// Analysis verdict for a single room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomAnalysis {
    pub room: String,
    #[serde(rename = "type")]
    pub room_type: String,
    pub current_direction: String,
    pub ideal_directions: Vec<String>,
    pub is_compliant: bool,
    pub severity: Severity,
    pub recommendation: String,
}

/// Counts of compliant rooms and issues by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceSummary {
    pub total_rooms: usize,
    pub compliant_rooms: usize,
    pub non_compliant_rooms: usize,
    pub critical_issues: usize,
    pub moderate_issues: usize,
    pub minor_issues: usize,
}

/// Result of a floor-plan compliance check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceReport {
    pub vastu_score: u8,
    pub vastu_compliant: bool,
    pub analysis: Vec<RoomAnalysis>,
    pub summary: ComplianceSummary,
    pub recommendations: Vec<String>,
}

/// Checker for multi-room floor plans.
///
/// Linear in the number of rooms; each room is judged independently
/// against the static placement rules.
pub struct ComplianceChecker;

impl ComplianceChecker {
    /// Checks every room against the placement rules and aggregates the
    /// verdicts.
    pub fn check(rooms: &[Room]) -> ComplianceReport {
        let analysis: Vec<RoomAnalysis> = rooms.iter().map(Self::analyze_room).collect();

        let total_rooms = rooms.len();
        let compliant_rooms = analysis.iter().filter(|a| a.is_compliant).count();

        let vastu_score = if total_rooms > 0 {
            ((compliant_rooms as f64 / total_rooms as f64) * 100.0).round() as u8
        } else {
            0
        };
        let vastu_compliant = vastu_score >= COMPLIANCE_THRESHOLD;

        let count_severity = |severity: Severity| {
            analysis.iter().filter(|a| a.severity == severity).count()
        };
        let summary = ComplianceSummary {
            total_rooms,
            compliant_rooms,
            non_compliant_rooms: total_rooms - compliant_rooms,
            critical_issues: count_severity(Severity::Critical),
            moderate_issues: count_severity(Severity::Moderate),
            minor_issues: count_severity(Severity::Minor),
        };

        let recommendations = Self::overall_recommendations(&analysis);

        debug!(total_rooms, vastu_score, vastu_compliant, "checked floor plan");

        ComplianceReport {
            vastu_score,
            vastu_compliant,
            analysis,
            summary,
            recommendations,
        }
    }

    /// Judges one room: rule lookup, compliance, severity, message.
    fn analyze_room(room: &Room) -> RoomAnalysis {
        let category = RoomCategory::parse(&room.room_type);
        let ideals = ideal_directions(category);
        let direction = Direction::parse(&room.direction);
        let is_compliant = direction.is_some_and(|d| ideals.contains(&d));

        let severity = if is_compliant {
            Severity::Compliant
        } else {
            category.map_or(Severity::Minor, |c| c.misplacement_severity())
        };

        let recommendation = Self::room_recommendation(room, ideals, is_compliant, severity);

        RoomAnalysis {
            room: room.name.clone(),
            room_type: room.room_type.clone(),
            current_direction: room.direction.clone(),
            ideal_directions: ideals
                .iter()
                .map(|d| d.display_name().to_string())
                .collect(),
            is_compliant,
            severity,
            recommendation,
        }
    }

    fn room_recommendation(
        room: &Room,
        ideals: &[Direction],
        is_compliant: bool,
        severity: Severity,
    ) -> String {
        if is_compliant {
            return format!(
                "✅ {} is correctly placed in {} direction according to Vastu principles.",
                room.room_type, room.direction
            );
        }

        let ideal_list = ideals
            .iter()
            .map(|d| d.display_name())
            .collect::<Vec<_>>()
            .join(" or ");

        format!(
            "{}{} should ideally be placed in {} direction. Current placement in {} may affect {}.",
            severity.message_prefix(),
            room.room_type,
            ideal_list,
            room.direction,
            affected_aspect(&room.room_type)
        )
    }

    /// Plan-level guidance; each rule fires at most once, in fixed order.
    fn overall_recommendations(analysis: &[RoomAnalysis]) -> Vec<String> {
        let mut recommendations = Vec::new();

        let critical_types: Vec<&str> = analysis
            .iter()
            .filter(|a| a.severity == Severity::Critical)
            .map(|a| a.room_type.as_str())
            .collect();
        if !critical_types.is_empty() {
            recommendations.push(format!(
                "Priority Fix: Address {} placement as these are critical for Vastu compliance.",
                critical_types.join(", ")
            ));
        }

        let non_compliant = analysis.iter().filter(|a| !a.is_compliant).count();
        if non_compliant * 2 > analysis.len() {
            recommendations.push(
                "Consider a comprehensive redesign to improve overall Vastu compliance and energy flow."
                    .to_string(),
            );
        }

        let kitchen_misplaced = analysis.iter().any(|a| {
            !a.is_compliant && RoomCategory::parse(&a.room_type) == Some(RoomCategory::Kitchen)
        });
        if kitchen_misplaced {
            recommendations.push(
                "Kitchen placement significantly impacts health and prosperity. Consider relocating to Southeast or Northwest."
                    .to_string(),
            );
        }

        recommendations
    }
}
