//! Catalog loading with stale-response protection.
//!
//! A load is split into [`RoadmapComposer::begin_catalog_load`], which hands
//! out a [`LoadToken`], and [`RoadmapComposer::finish_catalog_load`], which
//! applies the fetched result. Only the most recently issued token is
//! honoured, so when two fetches overlap the last one started wins no
//! matter which response arrives first.

use std::collections::HashMap;

use log::{debug, info, warn};

use super::RoadmapComposer;
use crate::{catalog::CatalogService, error::Result, models::Course};

/// Identifies one catalog fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadToken(u64);

/// What happened to a finished catalog fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The catalog was replaced with this many courses
    Applied { courses: usize },

    /// The fetch failed; the previous catalog is kept and the error is
    /// exposed through `catalog_error`
    Failed { message: String },

    /// A newer fetch was started after this one; the result was discarded
    Stale,
}

impl RoadmapComposer {
    /// Starts a catalog fetch, superseding any fetch still in flight.
    pub fn begin_catalog_load(&mut self) -> LoadToken {
        self.latest_load += 1;
        debug!("Catalog load {} started", self.latest_load);
        LoadToken(self.latest_load)
    }

    /// Applies the result of the fetch identified by `token`.
    pub fn finish_catalog_load(
        &mut self,
        token: LoadToken,
        result: Result<Vec<Course>>,
    ) -> LoadOutcome {
        if token.0 != self.latest_load {
            debug!(
                "Ignoring catalog load {} (latest is {})",
                token.0, self.latest_load
            );
            return LoadOutcome::Stale;
        }

        match result {
            Ok(courses) => {
                let count = courses.len();
                self.replace_catalog(courses);
                self.catalog_error = None;
                info!("Catalog loaded with {count} course(s)");
                LoadOutcome::Applied { courses: count }
            }
            Err(e) => {
                let message = e.to_string();
                warn!("Catalog load failed: {message}");
                self.catalog_error = Some(message.clone());
                LoadOutcome::Failed { message }
            }
        }
    }

    /// Fetches the catalog through `service` and applies it.
    pub async fn load_catalog(&mut self, service: &CatalogService) -> LoadOutcome {
        let token = self.begin_catalog_load();
        let result = service.fetch().await;
        self.finish_catalog_load(token, result)
    }

    /// Swaps in a new catalog. Courses that were selected before and still
    /// exist keep their selection and relative order; selection flags on the
    /// incoming courses are otherwise honoured as given.
    fn replace_catalog(&mut self, mut courses: Vec<Course>) {
        let previous: HashMap<&str, u32> = self
            .selected
            .iter()
            .filter_map(|course| course.order.map(|order| (course.id.as_str(), order)))
            .collect();

        let offset = previous.len() as u32;
        for course in &mut courses {
            if let Some(&order) = previous.get(course.id.as_str()) {
                course.is_selected = true;
                course.order = Some(order);
            } else if course.is_selected {
                course.order = Some(offset.saturating_add(course.order.unwrap_or(0)));
            }
        }

        self.catalog = courses;
        self.rederive();
    }
}
