//! The roadmap composer: catalog selection, derived ordering and the
//! roadmap envelope.
//!
//! [`RoadmapComposer`] owns the course catalog, the ordered list of selected
//! courses derived from it, the active visibility filter and the
//! [`RoadmapForm`] envelope. Every mutation is synchronous and runs to
//! completion before the next one.
//!
//! ```text
//! toggle / toggle-all ──▶ derive selected list ──▶ duration + instructor
//!                                │
//!            reorder ────────────┘ (rewrites order indices only)
//!                                │
//!                         submit ▼ payload or SubmitRejected
//! ```
//!
//! # Examples
//!
//! ```rust
//! use roadmap_core::{catalog::sample_courses, RoadmapComposer};
//!
//! let mut composer = RoadmapComposer::new(sample_courses());
//! composer.toggle_course("angular-fundamentals")?;
//! composer.toggle_course("node-rest-apis")?;
//! assert_eq!(composer.form().duration, "3 weeks");
//!
//! composer.reorder(1, 0)?;
//! assert_eq!(composer.selected()[0].id, "node-rest-apis");
//! # Ok::<(), roadmap_core::ComposerError>(())
//! ```

use crate::models::{CatalogFilter, Course, RoadmapForm};

pub mod derivation;
pub mod filtering;
pub mod loading;
pub mod selection;
pub mod submission;

#[cfg(test)]
mod tests;

pub use derivation::{derive_selection, skill_union, sole_instructor, total_duration};
pub use loading::{LoadOutcome, LoadToken};

/// Stateful composer for a single roadmap.
#[derive(Debug, Clone, Default)]
pub struct RoadmapComposer {
    catalog: Vec<Course>,
    selected: Vec<Course>,
    filter: CatalogFilter,
    form: RoadmapForm,
    catalog_error: Option<String>,
    latest_load: u64,
}

impl RoadmapComposer {
    /// Creates a composer over the given catalog.
    ///
    /// Courses that arrive already flagged as selected keep their relative
    /// order; the selected list is derived immediately.
    pub fn new(catalog: Vec<Course>) -> Self {
        let mut composer = Self {
            catalog,
            ..Self::default()
        };
        composer.rederive();
        composer
    }

    /// Replaces the envelope, e.g. when editing an existing roadmap.
    pub fn with_form(mut self, form: RoadmapForm) -> Self {
        self.form = form;
        self
    }

    /// The full catalog in its original order.
    pub fn catalog(&self) -> &[Course] {
        &self.catalog
    }

    /// Selected courses in roadmap order.
    pub fn selected(&self) -> &[Course] {
        &self.selected
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn form(&self) -> &RoadmapForm {
        &self.form
    }

    /// Mutable access for hand edits to the envelope.
    pub fn form_mut(&mut self) -> &mut RoadmapForm {
        &mut self.form
    }

    pub fn filter(&self) -> &CatalogFilter {
        &self.filter
    }

    /// Message from the most recent failed catalog load, if the catalog has
    /// not been loaded successfully since.
    pub fn catalog_error(&self) -> Option<&str> {
        self.catalog_error.as_deref()
    }

    /// Looks up a catalog course by id.
    pub fn course(&self, id: &str) -> Option<&Course> {
        self.catalog.iter().find(|course| course.id == id)
    }

    pub(crate) fn course_index(&self, id: &str) -> Option<usize> {
        self.catalog.iter().position(|course| course.id == id)
    }
}
