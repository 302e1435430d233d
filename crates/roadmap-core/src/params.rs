//! Parameter structures for roadmap operations
//!
//! Shared parameter structures used by the CLI (and any future interface)
//! without framework-specific derives. Interface layers define their own
//! argument wrappers and convert into these types via `From`:
//!
//! ```text
//! CLI Args (clap) ──▶ Core Params ──▶ Composer / Store
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    error::{ComposerError, Result},
    models::{CatalogFilter, Level},
};

/// Generic parameters for operations requiring just an ID.
///
/// Used for show_roadmap and delete_roadmap.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the saved roadmap to operate on
    pub id: u64,
}

/// Parameters for listing saved roadmaps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListRoadmaps {
    /// Only roadmaps in this category
    pub category: Option<String>,
    /// Only roadmaps whose title contains this text
    pub title: Option<String>,
}

/// Parameters for browsing the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

impl From<&CatalogQuery> for CatalogFilter {
    fn from(query: &CatalogQuery) -> Self {
        CatalogFilter::new(query.category.as_deref(), query.search.as_deref())
    }
}

/// A single move within the selected list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Move {
    pub from: usize,
    pub to: usize,
}

impl FromStr for Move {
    type Err = String;

    /// Parses `FROM:TO`, e.g. `2:0`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (from, to) = s
            .split_once(':')
            .ok_or_else(|| format!("Invalid move '{s}': expected FROM:TO"))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|_| format!("Invalid move '{s}': '{part}' is not an index"))
        };
        Ok(Move {
            from: parse(from)?,
            to: parse(to)?,
        })
    }
}

/// Parameters for composing and submitting a roadmap in one pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComposeRoadmap {
    pub title: String,
    pub description: String,
    pub category: String,
    /// Level name (beginner, intermediate, advanced)
    pub level: Option<String>,
    /// Instructor to use when the selection does not determine one
    pub instructor: Option<String>,
    /// Course ids, selected in this order
    pub course_ids: Vec<String>,
    /// Moves applied to the selected list after selection
    #[serde(default)]
    pub moves: Vec<Move>,
}

impl ComposeRoadmap {
    /// Parse the level name, if one was given.
    ///
    /// # Errors
    ///
    /// * `ComposerError::InvalidInput` - When the level name is not recognized
    pub fn parsed_level(&self) -> Result<Option<Level>> {
        self.level
            .as_deref()
            .map(|raw| {
                raw.parse::<Level>()
                    .map_err(|reason| ComposerError::invalid_input("level").with_reason(reason))
            })
            .transpose()
    }
}
