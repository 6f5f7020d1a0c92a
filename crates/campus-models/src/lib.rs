//! # Campus Models
//!
//! Domain types shared by the access policy and grading crates.
//!
//! # Modules
//!
//! - [`courses`]: Course credits and prerequisites
//! - [`grades`]: Assessment records, composite grades and standing
//! - [`ids`]: Strongly-typed student and course ids
//! - [`resources`]: Protected resources and navigation items
//! - [`roles`]: Institutional roles and session role state
//!
//! # Example
//!
//! ```ignore
//! use campus_models::{Role, SessionRole};
//!
//! let session = SessionRole::from_raw(Some("Instructor"));
//! assert_eq!(session.role(), Some(Role::Instructor));
//! ```

pub mod courses;
pub mod grades;
pub mod ids;
pub mod resources;
pub mod roles;

// Re-export commonly used types at crate root for convenience
pub use courses::Course;
pub use grades::{
    AssessmentKind, AssessmentRecord, AssessmentType, CompositeGrade, NewAssessmentRecord,
    PASS_THRESHOLD, RESIT_THRESHOLD, Standing,
};
pub use ids::{CourseId, StudentId};
pub use resources::{NavItem, Resource};
pub use roles::{ParseRoleError, Role, SessionRole};
