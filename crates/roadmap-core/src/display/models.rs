//! Display implementations for domain models.
//!
//! All output is markdown so the CLI renderer can style it; plain mode
//! prints it as is.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{
    Course, Level, Roadmap, RoadmapField, RoadmapPayload, RoadmapSummary, SubmitRejected,
    ValidationFailure,
};

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for RoadmapField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.is_selected { "✓ " } else { "" };
        writeln!(f, "### {marker}{} ({})", self.title, self.id)?;
        writeln!(f)?;
        writeln!(f, "- Level: {}", self.level)?;
        writeln!(f, "- Category: {}", self.category)?;
        writeln!(f, "- Instructor: {}", self.instructor)?;
        writeln!(f, "- Duration: {}", self.duration)?;
        if !self.skills.is_empty() {
            writeln!(f, "- Skills: {}", self.skills.join(", "))?;
        }
        if let Some(order) = self.order {
            writeln!(f, "- Position: {}", order + 1)?;
        }
        writeln!(f)?;

        if !self.description.is_empty() {
            writeln!(f, "{}", self.description)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Metadata bullets shared by payloads and saved roadmaps.
fn fmt_payload_metadata(payload: &RoadmapPayload, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "- Category: {}", payload.category)?;
    writeln!(f, "- Level: {}", payload.level)?;
    writeln!(f, "- Duration: {}", payload.duration)?;
    if !payload.instructor.is_empty() {
        writeln!(f, "- Instructor: {}", payload.instructor)?;
    }
    Ok(())
}

/// Description, ordered course list and skills.
fn fmt_payload_sections(payload: &RoadmapPayload, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if !payload.description.is_empty() {
        writeln!(f)?;
        writeln!(f, "{}", payload.description)?;
    }

    writeln!(f, "\n## Courses ({})", payload.course_count)?;
    writeln!(f)?;
    for (position, course_id) in payload.course_ids.iter().enumerate() {
        writeln!(f, "{}. {course_id}", position + 1)?;
    }

    if !payload.skills.is_empty() {
        writeln!(f, "\n## Skills")?;
        writeln!(f)?;
        writeln!(f, "{}", payload.skills.join(", "))?;
    }
    Ok(())
}

impl fmt::Display for RoadmapPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;
        fmt_payload_metadata(self, f)?;
        fmt_payload_sections(self, f)
    }
}

impl fmt::Display for Roadmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.payload.title)?;
        writeln!(f)?;
        fmt_payload_metadata(&self.payload, f)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        fmt_payload_sections(&self.payload, f)
    }
}

impl fmt::Display for RoadmapSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} (ID: {}) ({} courses)",
            self.title, self.id, self.course_count
        )?;
        writeln!(f)?;
        writeln!(f, "- **Category**: {}", self.category)?;
        writeln!(f, "- **Level**: {}", self.level)?;
        writeln!(f, "- **Duration**: {}", self.duration)?;
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationFailure::MissingField(field) => {
                write!(f, "Missing required field: {field}")
            }
            ValidationFailure::EmptySelection => write!(f, "No courses selected"),
        }
    }
}

impl fmt::Display for SubmitRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Roadmap cannot be submitted:")?;
        for failure in &self.failures {
            writeln!(f, "- {failure}")?;
        }
        Ok(())
    }
}
