//! Submission validation.

use serde::Serialize;

use super::{Level, RoadmapField, RoadmapForm};

/// A single reason a roadmap cannot be submitted.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "field", rename_all = "snake_case")]
pub enum ValidationFailure {
    /// A required envelope field is empty
    MissingField(RoadmapField),

    /// No course has been selected
    EmptySelection,
}

/// Structured rejection returned by `submit`. Always holds at least one
/// failure, listed in field order with the selection check last.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SubmitRejected {
    pub failures: Vec<ValidationFailure>,
}

impl SubmitRejected {
    /// Required fields that were empty.
    pub fn missing_fields(&self) -> Vec<RoadmapField> {
        self.failures
            .iter()
            .filter_map(|failure| match failure {
                ValidationFailure::MissingField(field) => Some(*field),
                ValidationFailure::EmptySelection => None,
            })
            .collect()
    }

    /// Whether the rejection includes an empty selection.
    pub fn is_empty_selection(&self) -> bool {
        self.failures.contains(&ValidationFailure::EmptySelection)
    }

    /// Whether the rejection includes the given missing field.
    pub fn is_missing(&self, field: RoadmapField) -> bool {
        self.failures
            .contains(&ValidationFailure::MissingField(field))
    }
}

impl std::error::Error for SubmitRejected {}

/// Check the envelope and the number of selected courses, returning the
/// chosen level on success.
///
/// Pure function: reports every failed condition instead of stopping at the
/// first one.
///
/// # Examples
///
/// ```rust
/// use roadmap_core::models::{validate_submission, RoadmapField, RoadmapForm};
///
/// let form = RoadmapForm::default();
/// let rejected = validate_submission(&form, 0).unwrap_err();
/// assert!(rejected.is_missing(RoadmapField::Title));
/// assert!(rejected.is_empty_selection());
/// ```
pub fn validate_submission(
    form: &RoadmapForm,
    selected_count: usize,
) -> Result<Level, SubmitRejected> {
    let mut failures: Vec<ValidationFailure> = RoadmapField::REQUIRED
        .iter()
        .filter(|field| !form.is_filled(**field))
        .map(|field| ValidationFailure::MissingField(*field))
        .collect();

    if selected_count == 0 {
        failures.push(ValidationFailure::EmptySelection);
    }

    match form.level {
        Some(level) if failures.is_empty() => Ok(level),
        _ => Err(SubmitRejected { failures }),
    }
}
