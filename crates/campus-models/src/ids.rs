//! Strongly-typed ID newtypes for domain entities.
//!
//! Records arrive from the data service keyed by integer ids. Wrapping them
//! keeps a `StudentId` from being passed where a `CourseId` is expected.
//!
//! # Example
//!
//! ```ignore
//! use campus_models::ids::{CourseId, StudentId};
//!
//! fn transcript(student: StudentId) { /* ... */ }
//!
//! transcript(StudentId::new(7));    // OK
//! // transcript(CourseId::new(7)); // Compile error! Type mismatch.
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to define a strongly-typed ID newtype over `i64`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Create an ID from its raw value.
            #[inline]
            pub const fn new(v: i64) -> Self {
                Self(v)
            }

            /// Get the inner value.
            #[inline]
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            #[inline]
            fn from(v: i64) -> Self {
                Self(v)
            }
        }

        impl From<$name> for i64 {
            #[inline]
            fn from(id: $name) -> i64 {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }
    };
}

define_id!(
    /// Identifier of a student record.
    StudentId
);

define_id!(
    /// Identifier of a course.
    CourseId
);
