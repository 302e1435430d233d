//! Filter types for narrowing the catalog and querying saved roadmaps.

use super::Course;

/// Category whose courses are visible under every category filter.
pub const GENERAL_CATEGORY: &str = "General";

/// Visibility filter over the course catalog.
///
/// Filtering never touches selection state; it only decides which courses
/// are shown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogFilter {
    /// Restrict to this category (plus [`GENERAL_CATEGORY`])
    pub category: Option<String>,

    /// Case-insensitive substring matched against title, instructor and
    /// skill tags
    pub search: Option<String>,
}

impl CatalogFilter {
    /// Create a filter from optional category and search inputs. Empty or
    /// whitespace-only values are treated as absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roadmap_core::models::CatalogFilter;
    ///
    /// let filter = CatalogFilter::new(Some("Backend"), Some("  "));
    /// assert_eq!(filter.category.as_deref(), Some("Backend"));
    /// assert_eq!(filter.search, None);
    /// ```
    pub fn new(category: Option<&str>, search: Option<&str>) -> Self {
        Self {
            category: normalize(category),
            search: normalize(search),
        }
    }

    /// Whether the course is visible under this filter.
    pub fn matches(&self, course: &Course) -> bool {
        if let Some(category) = &self.category {
            if course.category != *category && course.category != GENERAL_CATEGORY {
                return false;
            }
        }

        match &self.search {
            Some(term) => course.matches_search(&term.to_lowercase()),
            None => true,
        }
    }

    /// Whether the filter lets every course through.
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.search.is_none()
    }
}

pub(crate) fn normalize(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

/// Filter options for querying saved roadmaps.
#[derive(Debug, Clone, Default)]
pub struct RoadmapFilter {
    /// Filter by category (exact match)
    pub category: Option<String>,

    /// Filter by roadmap title (case-insensitive partial match)
    pub title_contains: Option<String>,
}

impl From<&crate::params::ListRoadmaps> for RoadmapFilter {
    fn from(params: &crate::params::ListRoadmaps) -> Self {
        Self {
            category: normalize(params.category.as_deref()),
            title_contains: normalize(params.title.as_deref()),
        }
    }
}
