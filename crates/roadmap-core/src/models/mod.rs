//! Data models for courses, roadmap envelopes and saved roadmaps.
//!
//! This module contains the core domain types of the roadmap composer.
//! Display implementations for these models live in
//! [`crate::display::models`] so that presentation stays separate from the
//! data structures.
//!
//! # Model Overview
//!
//! - [`Course`]: a catalog entry; carries the mutable selection flag and
//!   order index
//! - [`RoadmapForm`]: the envelope (title, description, category, level,
//!   duration, instructor)
//! - [`RoadmapPayload`]: what a successful submission produces
//! - [`Roadmap`] / [`RoadmapSummary`]: payloads as persisted by the store
//! - [`CatalogFilter`] / [`RoadmapFilter`]: query types
//! - [`ValidationFailure`] / [`SubmitRejected`]: structured validation
//!   results
//!
//! # Examples
//!
//! ```rust
//! use roadmap_core::models::{CatalogFilter, Course, Level};
//!
//! let course = Course::new("db-101", "MongoDB Basics", "John Smith", "40 hours", Level::Beginner, "Backend")
//!     .with_skills(["MongoDB", "NoSQL"]);
//!
//! let filter = CatalogFilter::new(Some("Backend"), Some("mongo"));
//! assert!(filter.matches(&course));
//! println!("{}", course); // Markdown with level, instructor and skills
//! ```

pub mod course;
pub mod filters;
pub mod form;
pub mod level;
pub mod payload;
pub mod roadmap;
pub mod validation;


pub use course::Course;
pub use filters::{CatalogFilter, RoadmapFilter, GENERAL_CATEGORY};
pub use form::{RoadmapField, RoadmapForm};
pub use level::Level;
pub use payload::RoadmapPayload;
pub use roadmap::{Roadmap, RoadmapSummary};
pub use validation::{validate_submission, SubmitRejected, ValidationFailure};
