//! Async roadmap store: the submission sink for composed roadmaps.
//!
//! [`RoadmapStore`] wraps the SQLite [`Database`] and runs each operation on
//! a blocking task, opening a fresh connection per call.
//!
//! ```rust,no_run
//! use roadmap_core::{catalog::sample_courses, RoadmapComposer, RoadmapStoreBuilder, SubmissionSink};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = RoadmapStoreBuilder::new()
//!     .with_database_path(Some("roadmaps.db"))
//!     .build()
//!     .await?;
//!
//! let mut composer = RoadmapComposer::new(sample_courses());
//! composer.toggle_course("git-workflow")?;
//! // ... fill in the envelope ...
//! let payload = composer.submit()?;
//! let saved = store.submit(&payload).await?;
//! println!("{}", saved);
//! # Ok(())
//! # }
//! ```

use std::{future::Future, path::PathBuf};

use log::info;
use tokio::task;

use crate::{
    db::Database,
    error::{ComposerError, Result},
    models::{Roadmap, RoadmapFilter, RoadmapPayload, RoadmapSummary},
    params::{Id, ListRoadmaps},
};

pub mod builder;

pub use builder::RoadmapStoreBuilder;

/// Receiver of submitted roadmap payloads.
pub trait SubmissionSink {
    /// Persists the payload and returns the stored roadmap.
    fn submit(&self, payload: &RoadmapPayload) -> impl Future<Output = Result<Roadmap>> + Send;
}

/// SQLite-backed store for saved roadmaps.
#[derive(Debug, Clone)]
pub struct RoadmapStore {
    db_path: PathBuf,
}

impl RoadmapStore {
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the underlying database file.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Saves a roadmap payload.
    pub async fn save_roadmap(&self, payload: &RoadmapPayload) -> Result<Roadmap> {
        let db_path = self.db_path.clone();
        let payload = payload.clone();

        let roadmap = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.save_roadmap(&payload)
        })
        .await
        .map_err(ComposerError::join)??;

        info!("Saved roadmap {} '{}'", roadmap.id, roadmap.payload.title);
        Ok(roadmap)
    }

    /// Retrieves a saved roadmap by its ID.
    pub async fn get_roadmap(&self, params: &Id) -> Result<Option<Roadmap>> {
        let db_path = self.db_path.clone();
        let id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_roadmap(id)
        })
        .await
        .map_err(ComposerError::join)?
    }

    /// Lists saved roadmaps matching the parameters.
    pub async fn list_roadmaps(&self, params: &ListRoadmaps) -> Result<Vec<RoadmapSummary>> {
        let db_path = self.db_path.clone();
        let filter = RoadmapFilter::from(params);

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_roadmaps(Some(&filter))
        })
        .await
        .map_err(ComposerError::join)?
    }

    /// Deletes a saved roadmap, returning it as it was before deletion.
    ///
    /// Returns `Ok(None)` when no roadmap has the id.
    pub async fn delete_roadmap(&self, params: &Id) -> Result<Option<Roadmap>> {
        let Some(roadmap) = self.get_roadmap(params).await? else {
            return Ok(None);
        };

        let db_path = self.db_path.clone();
        let id = params.id;
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_roadmap(id)
        })
        .await
        .map_err(ComposerError::join)??;

        info!("Deleted roadmap {id}");
        Ok(Some(roadmap))
    }
}

impl SubmissionSink for RoadmapStore {
    fn submit(&self, payload: &RoadmapPayload) -> impl Future<Output = Result<Roadmap>> + Send {
        self.save_roadmap(payload)
    }
}
