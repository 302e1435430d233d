//! Persisted roadmap models.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Level, RoadmapPayload};

/// A roadmap accepted by the submission sink.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Roadmap {
    /// Unique identifier assigned by the store
    pub id: u64,

    /// Submitted content
    #[serde(flatten)]
    pub payload: RoadmapPayload,

    /// Timestamp when the roadmap was saved (UTC)
    pub created_at: Timestamp,
}

/// Compact roadmap row for list views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoadmapSummary {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub level: Level,
    pub duration: String,
    pub course_count: usize,
    pub created_at: Timestamp,
}

impl From<&Roadmap> for RoadmapSummary {
    fn from(roadmap: &Roadmap) -> Self {
        Self {
            id: roadmap.id,
            title: roadmap.payload.title.clone(),
            category: roadmap.payload.category.clone(),
            level: roadmap.payload.level,
            duration: roadmap.payload.duration.clone(),
            course_count: roadmap.payload.course_count,
            created_at: roadmap.created_at,
        }
    }
}
