//! The roadmap envelope: descriptive fields edited alongside the selection.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Level;

/// User-edited roadmap fields.
///
/// `duration` and `instructor` are also written by selection derivation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RoadmapForm {
    pub title: String,
    pub description: String,
    pub category: String,
    pub level: Option<Level>,
    pub duration: String,
    pub instructor: String,
}

/// Names of the envelope fields, used to report validation failures.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RoadmapField {
    Title,
    Description,
    Category,
    Level,
    Duration,
    Instructor,
}

impl RoadmapField {
    /// Fields that must be filled before a roadmap can be submitted.
    pub const REQUIRED: [RoadmapField; 5] = [
        RoadmapField::Title,
        RoadmapField::Description,
        RoadmapField::Category,
        RoadmapField::Level,
        RoadmapField::Duration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoadmapField::Title => "title",
            RoadmapField::Description => "description",
            RoadmapField::Category => "category",
            RoadmapField::Level => "level",
            RoadmapField::Duration => "duration",
            RoadmapField::Instructor => "instructor",
        }
    }
}

impl FromStr for RoadmapField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "title" => Ok(RoadmapField::Title),
            "description" => Ok(RoadmapField::Description),
            "category" => Ok(RoadmapField::Category),
            "level" => Ok(RoadmapField::Level),
            "duration" => Ok(RoadmapField::Duration),
            "instructor" => Ok(RoadmapField::Instructor),
            _ => Err(format!("Invalid roadmap field: {s}")),
        }
    }
}

impl RoadmapForm {
    /// Whether the given field holds a usable value. Whitespace-only text
    /// counts as empty.
    pub fn is_filled(&self, field: RoadmapField) -> bool {
        let text = match field {
            RoadmapField::Title => &self.title,
            RoadmapField::Description => &self.description,
            RoadmapField::Category => &self.category,
            RoadmapField::Level => return self.level.is_some(),
            RoadmapField::Duration => &self.duration,
            RoadmapField::Instructor => &self.instructor,
        };
        !text.trim().is_empty()
    }
}
