//! Core library for composing learning roadmaps from a course catalog.
//!
//! This crate provides the roadmap composer (selection, ordering and derived
//! envelope fields), catalog providers, a SQLite-backed submission sink and
//! markdown display formatting.
//!
//! # Architecture
//!
//! - **Models** ([`models`]): courses, the roadmap envelope, payloads and
//!   saved roadmaps
//! - **Composer** ([`composer`]): in-memory, synchronous selection state
//! - **Catalog** ([`catalog`]): where courses come from
//! - **Store** ([`store`]): where submitted roadmaps go
//! - **Display** ([`display`]): markdown rendering for every model
//!
//! # Quick Start
//!
//! ```rust
//! use roadmap_core::{catalog::sample_courses, models::Level, RoadmapComposer};
//!
//! let mut composer = RoadmapComposer::new(sample_courses());
//! composer.set_category_filter(Some("Backend"));
//! composer.set_search_term("mongo");
//! let id = composer.visible_courses()[0].id.clone();
//! composer.toggle_course(&id)?;
//!
//! let form = composer.form_mut();
//! form.title = "Data Layer".to_string();
//! form.description = "Persistence for web services".to_string();
//! form.category = "Backend".to_string();
//! form.level = Some(Level::Beginner);
//!
//! let payload = composer.submit().expect("valid roadmap");
//! assert_eq!(payload.course_ids, vec!["mongodb-essentials"]);
//! assert_eq!(payload.instructor, "John Smith");
//! # Ok::<(), roadmap_core::ComposerError>(())
//! ```

pub mod catalog;
pub mod composer;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod store;

// Re-export commonly used types
pub use catalog::{CatalogProvider, CatalogService, JsonFileCatalog, StaticCatalog};
pub use composer::{LoadOutcome, LoadToken, RoadmapComposer};
pub use db::Database;
pub use display::{CreateResult, Courses, DeleteResult, RoadmapSummaries};
pub use error::{ComposerError, Result};
pub use models::{
    CatalogFilter, Course, Level, Roadmap, RoadmapField, RoadmapFilter, RoadmapForm,
    RoadmapPayload, RoadmapSummary, SubmitRejected, ValidationFailure,
};
pub use params::{CatalogQuery, ComposeRoadmap, Id, ListRoadmaps, Move};
pub use store::{RoadmapStore, RoadmapStoreBuilder, SubmissionSink};
