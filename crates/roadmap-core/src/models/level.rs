//! Difficulty level enumeration for courses and roadmaps.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of course difficulty levels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Level {
    /// No prior knowledge assumed
    Beginner,

    /// Builds on foundational material
    Intermediate,

    /// Expects working experience in the area
    Advanced,
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Level::Beginner),
            "intermediate" => Ok(Level::Intermediate),
            "advanced" => Ok(Level::Advanced),
            _ => Err(format!("Invalid level: {s}")),
        }
    }
}

impl Level {
    /// Convert to the canonical string representation used in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}
