//! Selection derivation: the ordered selected list and the envelope fields
//! computed from it.

use std::collections::{BTreeSet, HashMap, HashSet};

use log::debug;

use super::RoadmapComposer;
use crate::models::Course;

/// Study hours that make up one week of a roadmap.
pub const HOURS_PER_WEEK: u64 = 40;

/// Builds the ordered selected list from the catalog's flags.
///
/// Selected courses are sorted by `order` (missing orders sort as 0; ties
/// keep catalog order) and then renumbered densely from 0.
pub fn derive_selection(catalog: &[Course]) -> Vec<Course> {
    let mut selected: Vec<Course> = catalog
        .iter()
        .filter(|course| course.is_selected)
        .cloned()
        .collect();

    selected.sort_by_key(|course| course.order.unwrap_or(0));
    renumber(&mut selected);
    selected
}

pub(crate) fn renumber(selected: &mut [Course]) {
    for (position, course) in selected.iter_mut().enumerate() {
        course.order = Some(position as u32);
    }
}

/// Roadmap duration in weeks, or `None` when nothing is selected.
///
/// The hour total saturates at `u64::MAX`.
///
/// # Examples
///
/// ```rust
/// use roadmap_core::{composer::total_duration, models::{Course, Level}};
///
/// let a = Course::new("a", "A", "X", "40 hours", Level::Beginner, "General");
/// let b = Course::new("b", "B", "X", "50 hours", Level::Beginner, "General");
/// assert_eq!(total_duration(&[a, b]).as_deref(), Some("3 weeks"));
/// assert_eq!(total_duration(&[]), None);
/// ```
pub fn total_duration(selected: &[Course]) -> Option<String> {
    if selected.is_empty() {
        return None;
    }
    let hours = selected
        .iter()
        .map(Course::duration_hours)
        .fold(0u64, u64::saturating_add);
    Some(format!("{} weeks", hours.div_ceil(HOURS_PER_WEEK)))
}

/// The instructor shared by every selected course, if there is exactly one.
pub fn sole_instructor(selected: &[Course]) -> Option<&str> {
    let instructors: BTreeSet<&str> = selected
        .iter()
        .map(|course| course.instructor.as_str())
        .collect();

    if instructors.len() == 1 {
        instructors.into_iter().next()
    } else {
        None
    }
}

/// Union of the selected courses' skill tags, in order of first appearance.
pub fn skill_union(selected: &[Course]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut skills = Vec::new();
    for skill in selected.iter().flat_map(|course| &course.skills) {
        if seen.insert(skill.as_str()) {
            skills.push(skill.clone());
        }
    }
    skills
}

impl RoadmapComposer {
    /// Recomputes the selected list, writes the dense order indices back into
    /// the catalog and refreshes the derived envelope fields.
    pub(crate) fn rederive(&mut self) {
        self.selected = derive_selection(&self.catalog);
        self.write_back_orders();
        self.apply_derived_fields();
    }

    /// Copies the selected list's order indices into the catalog. Unselected
    /// courses lose their order.
    pub(crate) fn write_back_orders(&mut self) {
        let positions: HashMap<&str, u32> = self
            .selected
            .iter()
            .filter_map(|course| course.order.map(|order| (course.id.as_str(), order)))
            .collect();

        for course in &mut self.catalog {
            course.order = if course.is_selected {
                positions.get(course.id.as_str()).copied()
            } else {
                None
            };
        }
    }

    /// Duration is kept at its last value when the selection is empty;
    /// instructor is only written when exactly one instructor is involved.
    fn apply_derived_fields(&mut self) {
        if let Some(duration) = total_duration(&self.selected) {
            self.form.duration = duration;
        }
        if let Some(instructor) = sole_instructor(&self.selected) {
            self.form.instructor = instructor.to_string();
        }
        debug!(
            "Derived selection: {} course(s), duration '{}', instructor '{}'",
            self.selected.len(),
            self.form.duration,
            self.form.instructor
        );
    }

    /// Skill union of the current selection.
    pub fn skills(&self) -> Vec<String> {
        skill_union(&self.selected)
    }
}
