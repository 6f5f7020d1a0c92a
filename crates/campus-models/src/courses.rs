//! Course metadata needed for credit-weighted grade rules.

use crate::ids::CourseId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    #[serde(default)]
    pub code: String,
    pub credits: u32,
    /// Courses that must be passed before this one can be taken.
    #[serde(default)]
    pub prerequisites: Vec<CourseId>,
}

impl Course {
    pub fn new(id: CourseId, code: &str, credits: u32) -> Self {
        Self {
            id,
            code: code.to_string(),
            credits,
            prerequisites: Vec::new(),
        }
    }

    pub fn with_prerequisites(mut self, prerequisites: Vec<CourseId>) -> Self {
        self.prerequisites = prerequisites;
        self
    }
}
