//! Recommendation value object for the detailed guidance engine.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Priority;

/// Thematic category of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Placement,
    Color,
    Elements,
    Furniture,
    Remedies,
    Structural,
}

impl Category {
    /// Returns the wire label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Placement => "placement",
            Category::Color => "color",
            Category::Elements => "elements",
            Category::Furniture => "furniture",
            Category::Remedies => "remedies",
            Category::Structural => "structural",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single actionable recommendation.
///
/// Value object generated fresh per request; ids are stable strings so
/// clients can key on them across requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub priority: Priority,
    pub description: String,
    pub implementation: String,
    pub benefits: Vec<String>,
}

impl Recommendation {
    /// Creates a recommendation.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: Category,
        priority: Priority,
        description: impl Into<String>,
        implementation: impl Into<String>,
        benefits: &[&str],
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category,
            priority,
            description: description.into(),
            implementation: implementation.into(),
            benefits: benefits.iter().map(|b| b.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stores_all_fields() {
        let rec = Recommendation::new(
            "test-1",
            "Test Title",
            Category::Placement,
            Priority::High,
            "A description.",
            "Do the thing.",
            &["First benefit", "Second benefit"],
        );

        assert_eq!(rec.id, "test-1");
        assert_eq!(rec.category, Category::Placement);
        assert_eq!(rec.priority, Priority::High);
        assert_eq!(rec.benefits.len(), 2);
    }

    #[test]
    fn serializes_with_lowercase_enums() {
        let rec = Recommendation::new(
            "test-1",
            "Test Title",
            Category::Structural,
            Priority::Medium,
            "d",
            "i",
            &[],
        );
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains("\"category\":\"structural\""));
        assert!(json.contains("\"priority\":\"medium\""));
    }
}
