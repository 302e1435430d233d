//! Selection mutations: toggling, bulk toggling, removal and reordering.

use log::debug;

use super::{derivation::renumber, RoadmapComposer};
use crate::error::{ComposerError, Result};

impl RoadmapComposer {
    /// Flips a course's selection flag and re-derives the selection.
    ///
    /// A newly selected course is appended to the end of the selected list.
    /// Returns the course's new selection state.
    ///
    /// # Errors
    ///
    /// * `ComposerError::CourseNotFound` - When no catalog course has the id
    pub fn toggle_course(&mut self, id: &str) -> Result<bool> {
        let index = self
            .course_index(id)
            .ok_or_else(|| ComposerError::CourseNotFound { id: id.to_string() })?;

        let next_order = self.selected.len() as u32;
        let course = &mut self.catalog[index];
        course.is_selected = !course.is_selected;
        course.order = course.is_selected.then_some(next_order);
        let now_selected = course.is_selected;

        debug!(
            "Course '{id}' {}",
            if now_selected { "selected" } else { "deselected" }
        );
        self.rederive();
        Ok(now_selected)
    }

    /// Selects every visible course, or deselects them all when every visible
    /// course is already selected. Courses hidden by the filter are never
    /// touched.
    ///
    /// Returns `true` when the visible courses end up selected. An empty
    /// visible set is left as is and reports `false`.
    pub fn toggle_all_visible(&mut self) -> bool {
        let visible: Vec<usize> = self
            .catalog
            .iter()
            .enumerate()
            .filter(|(_, course)| self.filter.matches(course))
            .map(|(index, _)| index)
            .collect();

        if visible.is_empty() {
            return false;
        }

        let all_selected = visible
            .iter()
            .all(|&index| self.catalog[index].is_selected);

        if all_selected {
            for &index in &visible {
                let course = &mut self.catalog[index];
                course.is_selected = false;
                course.order = None;
            }
        } else {
            let mut next_order = self.selected.len() as u32;
            for &index in &visible {
                let course = &mut self.catalog[index];
                if !course.is_selected {
                    course.is_selected = true;
                    course.order = Some(next_order);
                    next_order += 1;
                }
            }
        }

        debug!(
            "{} {} visible course(s)",
            if all_selected { "Deselected" } else { "Selected" },
            visible.len()
        );
        self.rederive();
        !all_selected
    }

    /// Deselects a course if it is currently selected.
    ///
    /// Returns `false` without touching anything when the course is not
    /// selected or not in the catalog.
    pub fn remove_from_selection(&mut self, id: &str) -> Result<bool> {
        match self.course(id) {
            Some(course) if course.is_selected => {
                self.toggle_course(id)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Moves the selected course at `from` to position `to`, shifting the
    /// courses in between, then renumbers every selected course.
    ///
    /// # Errors
    ///
    /// * `ComposerError::InvalidInput` - When either index is outside the
    ///   selected list; nothing is changed
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.selected.len();
        for (name, index) in [("from", from), ("to", to)] {
            if index >= len {
                return Err(ComposerError::invalid_input("index").with_reason(format!(
                    "{name} index {index} is out of range for {len} selected course(s)"
                )));
            }
        }

        if from == to {
            return Ok(());
        }

        let mut reordered = self.selected.clone();
        let moved = reordered.remove(from);
        reordered.insert(to, moved);
        renumber(&mut reordered);

        debug!("Moved selected course from {from} to {to}");
        self.selected = reordered;
        self.write_back_orders();
        Ok(())
    }

    /// Whether the course with the given id is currently selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.course(id).is_some_and(|course| course.is_selected)
    }
}
