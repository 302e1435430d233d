//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::Roadmap;

/// Wrapper type for displaying the result of create operations.
///
/// ```rust
/// use jiff::Timestamp;
/// use roadmap_core::{
///     display::CreateResult,
///     models::{Level, Roadmap, RoadmapPayload},
/// };
///
/// let roadmap = Roadmap {
///     id: 1,
///     payload: RoadmapPayload {
///         title: "Backend Path".to_string(),
///         description: "APIs and storage".to_string(),
///         category: "Backend".to_string(),
///         level: Level::Beginner,
///         duration: "1 weeks".to_string(),
///         instructor: "John Smith".to_string(),
///         skills: vec!["MongoDB".to_string()],
///         course_ids: vec!["mongodb-essentials".to_string()],
///         course_count: 1,
///     },
///     created_at: Timestamp::now(),
/// };
///
/// let output = CreateResult::new(roadmap).to_string();
/// assert!(output.contains("Created roadmap with ID: 1"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Roadmap> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created roadmap with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Roadmap> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted roadmap {}: {}",
            self.resource.id, self.resource.payload.title
        )
    }
}
