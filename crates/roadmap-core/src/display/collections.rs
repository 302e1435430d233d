//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::models::{Course, RoadmapSummary};

/// Newtype wrapper for displaying a list of catalog courses.
pub struct Courses(pub Vec<Course>);

impl Courses {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Course> {
        self.0.iter()
    }
}

impl<'a> FromIterator<&'a Course> for Courses {
    fn from_iter<I: IntoIterator<Item = &'a Course>>(iter: I) -> Self {
        Self(iter.into_iter().cloned().collect())
    }
}

impl fmt::Display for Courses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No courses found.")
        } else {
            for course in &self.0 {
                write!(f, "{course}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying saved roadmap summaries.
pub struct RoadmapSummaries(pub Vec<RoadmapSummary>);

impl RoadmapSummaries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RoadmapSummary> {
        self.0.iter()
    }
}

impl IntoIterator for RoadmapSummaries {
    type Item = RoadmapSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for RoadmapSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No roadmaps found.")
        } else {
            for roadmap in &self.0 {
                write!(f, "{roadmap}")?;
            }
            Ok(())
        }
    }
}
