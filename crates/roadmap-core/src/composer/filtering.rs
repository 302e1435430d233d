//! Catalog visibility: category scoping and free-text search.

use super::RoadmapComposer;
use crate::models::{filters::normalize, CatalogFilter, Course};

impl RoadmapComposer {
    /// Restricts the visible catalog to a category plus "General" courses.
    /// `None` or an empty string shows every category again.
    pub fn set_category_filter(&mut self, category: Option<&str>) {
        self.filter.category = normalize(category);
    }

    /// Narrows the visible catalog by title, instructor or skill tag.
    /// An empty term clears the search.
    pub fn set_search_term(&mut self, term: &str) {
        self.filter.search = normalize(Some(term));
    }

    /// Replaces both filter inputs at once.
    pub fn set_filter(&mut self, filter: CatalogFilter) {
        self.filter = filter;
    }

    pub fn clear_filters(&mut self) {
        self.filter = CatalogFilter::default();
    }

    /// Courses passing the current filter, in catalog order.
    pub fn visible_courses(&self) -> Vec<&Course> {
        self.catalog
            .iter()
            .filter(|course| self.filter.matches(course))
            .collect()
    }

    /// Whether the visible subset is non-empty and fully selected.
    pub fn all_visible_selected(&self) -> bool {
        let mut visible = self.visible_courses().into_iter().peekable();
        visible.peek().is_some() && visible.all(|course| course.is_selected)
    }
}
