//! Course model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::Level;

/// A selectable catalog entry.
///
/// `is_selected` and `order` are the only fields that change after the
/// catalog is loaded; `order` is `Some` only while the course is selected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    /// Identifier, unique within the catalog
    pub id: String,

    /// Course title
    pub title: String,

    /// Short description of the course content
    #[serde(default)]
    pub description: String,

    /// Name of the instructor teaching the course
    pub instructor: String,

    /// Numeric-prefixed duration such as "40 hours"
    pub duration: String,

    /// Difficulty level
    pub level: Level,

    /// Category; "General" courses apply to every category
    pub category: String,

    /// Skill tags taught by the course
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,

    /// Whether the course is part of the roadmap being composed
    #[serde(default)]
    pub is_selected: bool,

    /// Position within the selected list (0-indexed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

impl Course {
    /// Create an unselected course with no description or skills.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        instructor: impl Into<String>,
        duration: impl Into<String>,
        level: Level,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            instructor: instructor.into(),
            duration: duration.into(),
            level,
            category: category.into(),
            skills: Vec::new(),
            is_selected: false,
            order: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the skill tags.
    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    /// Number of hours encoded in the duration string.
    ///
    /// Reads the leading digits of the token before the first space, so
    /// "40 hours" gives 40 and "12h" gives 12. Anything without a numeric
    /// prefix counts as zero; a prefix too large for `u64` saturates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roadmap_core::models::{Course, Level};
    ///
    /// let course = Course::new("c1", "Rust", "Ann Lee", "40 hours", Level::Beginner, "Backend");
    /// assert_eq!(course.duration_hours(), 40);
    ///
    /// let vague = Course::new("c2", "Misc", "Ann Lee", "self-paced", Level::Beginner, "General");
    /// assert_eq!(vague.duration_hours(), 0);
    /// ```
    pub fn duration_hours(&self) -> u64 {
        let token = self.duration.trim_start().split(' ').next().unwrap_or("");
        let digits: String = token.chars().take_while(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return 0;
        }
        // Only overflow can fail once the prefix is all digits
        digits.parse().unwrap_or(u64::MAX)
    }

    /// Case-insensitive substring match against title, instructor, or any
    /// skill tag. `needle` must already be lowercase.
    pub(crate) fn matches_search(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.instructor.to_lowercase().contains(needle)
            || self
                .skills
                .iter()
                .any(|skill| skill.to_lowercase().contains(needle))
    }
}
