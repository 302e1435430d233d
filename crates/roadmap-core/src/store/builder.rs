//! Builder for creating and configuring RoadmapStore instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::RoadmapStore;
use crate::{
    db::Database,
    error::{ComposerError, Result},
};

/// Builder for creating and configuring RoadmapStore instances.
#[derive(Debug, Clone, Default)]
pub struct RoadmapStoreBuilder {
    database_path: Option<PathBuf>,
}

impl RoadmapStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/roadmap/roadmap.db` or `~/.local/share/roadmap/roadmap.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured store, creating the database file and schema
    /// if needed.
    ///
    /// # Errors
    ///
    /// Returns `ComposerError::FileSystem` if the database directory cannot
    /// be created.
    /// Returns `ComposerError::Database` if database initialization fails.
    pub async fn build(self) -> Result<RoadmapStore> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ComposerError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), ComposerError>(())
        })
        .await
        .map_err(ComposerError::join)??;

        Ok(RoadmapStore::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("roadmap")
            .place_data_file("roadmap.db")
            .map_err(|e| ComposerError::XdgDirectory(e.to_string()))
    }
}
