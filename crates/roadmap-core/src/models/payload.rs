//! Submission payload handed to the submission sink.

use serde::{Deserialize, Serialize};

use super::Level;

/// Output of a successful `submit`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoadmapPayload {
    pub title: String,
    pub description: String,
    pub category: String,
    pub level: Level,
    pub duration: String,
    /// Empty when the selected courses have several instructors and none was
    /// entered by hand
    #[serde(default)]
    pub instructor: String,
    /// Deduplicated skill union, in order of first appearance
    pub skills: Vec<String>,
    /// Selected course ids in roadmap order
    pub course_ids: Vec<String>,
    pub course_count: usize,
}
