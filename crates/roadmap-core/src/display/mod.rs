//! Display formatting for courses, roadmaps and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrappers here cover collections and operation outcomes. Everything
//! renders as markdown for the terminal renderer.
//!
//! - [`collections`]: `Courses`, `RoadmapSummaries`
//! - [`results`]: `CreateResult`, `DeleteResult`
//! - [`datetime`]: `LocalDateTime`

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;

pub use collections::{Courses, RoadmapSummaries};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult};
