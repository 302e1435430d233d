//! Submission: validate the envelope and selection, then build the payload.

use log::{debug, info};

use super::RoadmapComposer;
use crate::models::{validate_submission, RoadmapPayload, SubmitRejected};

impl RoadmapComposer {
    /// Validates the roadmap and produces the payload for the submission
    /// sink. Never mutates the composer.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitRejected`] listing every empty required field and,
    /// when nothing is selected, the empty selection.
    pub fn submit(&self) -> Result<RoadmapPayload, SubmitRejected> {
        let level = validate_submission(&self.form, self.selected.len()).map_err(|rejected| {
            debug!("Submission rejected: {:?}", rejected.failures);
            rejected
        })?;

        let payload = RoadmapPayload {
            title: self.form.title.trim().to_string(),
            description: self.form.description.trim().to_string(),
            category: self.form.category.trim().to_string(),
            level,
            duration: self.form.duration.clone(),
            instructor: self.form.instructor.trim().to_string(),
            skills: self.skills(),
            course_ids: self.selected.iter().map(|course| course.id.clone()).collect(),
            course_count: self.selected.len(),
        };

        info!(
            "Roadmap '{}' ready with {} course(s)",
            payload.title, payload.course_count
        );
        Ok(payload)
    }
}
