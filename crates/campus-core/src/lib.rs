//! # Campus Core
//!
//! Access control and grade aggregation for the campus ERP.
//!
//! Both halves are pure and synchronous; nothing here performs I/O or keeps
//! mutable state, so every function may be called from any thread.
//!
//! - [`access`]: Permission table, access decisions and navigation filtering
//! - [`guard`]: Per-navigation route guard state machine
//! - [`grading`]: Composite grade aggregation with pluggable weighting
//! - [`permissions`]: Resource constants and the standard permission table
//! - [`rules`]: Grade points, CGPA, classification and eligibility rules
//!
//! # Example
//!
//! ```ignore
//! use campus_core::{AccessPolicy, RouteDecision, aggregate, permissions};
//! use campus_models::Role;
//!
//! let policy = AccessPolicy::default();
//! assert_eq!(
//!     policy.decide_route_guard(Some(Role::Staff), permissions::FINANCE),
//!     RouteDecision::Render,
//! );
//!
//! let grade = aggregate(&records);
//! println!("{:.1} ({})", grade.weighted_total, grade.standing.label());
//! ```

pub mod access;
pub mod grading;
pub mod guard;
pub mod permissions;
pub mod rules;

// Re-export commonly used types at crate root
pub use access::{AccessPolicy, LOGIN_PATH, PermissionTable, PermissionTableBuilder, RouteDecision};
pub use grading::{
    AggregationPolicy, GradeAggregator, GradeInputs, SplitWithResit, WeightedMean, aggregate,
    aggregate_with, group_records,
};
pub use guard::{GuardState, RouteGuard};
pub use rules::{Classification, EligibilityError, Transcript};
