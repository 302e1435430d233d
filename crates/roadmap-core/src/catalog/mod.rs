//! Course catalog providers.
//!
//! The catalog is supplied by an external collaborator implementing
//! [`CatalogProvider`]. Two providers ship with the crate:
//!
//! - [`StaticCatalog`]: the built-in sample catalog
//! - [`JsonFileCatalog`]: a JSON array of courses read from disk
//!
//! [`CatalogService`] wraps a provider and runs it on a blocking task so
//! callers can await a fetch without stalling the runtime.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
    sync::Arc,
};

use log::debug;
use tokio::task;

use crate::{
    error::{ComposerError, Result},
    models::Course,
};

pub mod sample;

pub use sample::sample_courses;

/// Source of catalog courses.
pub trait CatalogProvider: Send + Sync {
    /// Fetch the full catalog. Returned courses are keyed by unique id.
    fn fetch(&self) -> Result<Vec<Course>>;
}

/// Provider returning a fixed, in-memory course list.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    courses: Vec<Course>,
}

impl StaticCatalog {
    /// Create a provider over the given courses.
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    /// The built-in sample catalog.
    pub fn sample() -> Self {
        Self::new(sample_courses())
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::sample()
    }
}

impl CatalogProvider for StaticCatalog {
    fn fetch(&self) -> Result<Vec<Course>> {
        Ok(self.courses.clone())
    }
}

/// Provider reading a JSON array of courses from a file.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogProvider for JsonFileCatalog {
    fn fetch(&self) -> Result<Vec<Course>> {
        debug!("Reading catalog from {}", self.path.display());
        let contents =
            std::fs::read_to_string(&self.path).map_err(|e| ComposerError::FileSystem {
                path: self.path.clone(),
                source: e,
            })?;
        let courses: Vec<Course> =
            serde_json::from_str(&contents).map_err(|e| ComposerError::CatalogLoad {
                message: format!("Malformed catalog '{}': {e}", self.path.display()),
            })?;
        Ok(courses)
    }
}

/// Reject catalogs where two courses share an id.
///
/// # Errors
///
/// * `ComposerError::InvalidInput` - When an id appears more than once
pub fn check_unique_ids(courses: &[Course]) -> Result<()> {
    let mut seen = HashSet::with_capacity(courses.len());
    for course in courses {
        if !seen.insert(course.id.as_str()) {
            return Err(ComposerError::invalid_input("id")
                .with_reason(format!("Duplicate course id '{}' in catalog", course.id)));
        }
    }
    Ok(())
}

/// Async facade over a [`CatalogProvider`].
#[derive(Clone)]
pub struct CatalogService {
    provider: Arc<dyn CatalogProvider>,
}

impl CatalogService {
    pub fn new<P: CatalogProvider + 'static>(provider: P) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }

    /// Fetches the catalog on a blocking task and rejects duplicate ids.
    pub async fn fetch(&self) -> Result<Vec<Course>> {
        let provider = Arc::clone(&self.provider);

        task::spawn_blocking(move || {
            let courses = provider.fetch()?;
            check_unique_ids(&courses)?;
            Ok(courses)
        })
        .await
        .map_err(ComposerError::join)?
    }
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new(StaticCatalog::sample())
    }
}
