//! Institutional roles and the session view of the current user's role.
//!
//! A user holds exactly one [`Role`] at a time. The auth layer reports it as a
//! raw string; [`SessionRole::from_raw`] turns that into an explicit state so
//! that a missing or unrecognized role is never silently treated as a student.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role slugs, used in configuration files and serialized output.
pub mod slugs {
    pub const SUPER_ADMIN: &str = "super_admin";
    pub const ADMINISTRATOR: &str = "administrator";
    pub const INSTRUCTOR: &str = "instructor";
    pub const STUDENT: &str = "student";
    pub const STAFF: &str = "staff";
}

/// An institutional role.
///
/// `SuperAdmin` bypasses every allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Role {
    SuperAdmin,
    Administrator,
    Instructor,
    Student,
    Staff,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::SuperAdmin,
        Role::Administrator,
        Role::Instructor,
        Role::Student,
        Role::Staff,
    ];

    /// Display name as shown to users.
    pub fn name(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Admin",
            Role::Administrator => "Administrator",
            Role::Instructor => "Instructor",
            Role::Student => "Student",
            Role::Staff => "Staff",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Role::SuperAdmin => slugs::SUPER_ADMIN,
            Role::Administrator => slugs::ADMINISTRATOR,
            Role::Instructor => slugs::INSTRUCTOR,
            Role::Student => slugs::STUDENT,
            Role::Staff => slugs::STAFF,
        }
    }

    #[inline]
    pub fn is_super_admin(&self) -> bool {
        matches!(self, Role::SuperAdmin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string does not name a known role.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: '{0}'")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    /// Accepts display names ("Super Admin") and slugs ("super_admin"),
    /// ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == ' ' || c == '-' { '_' } else { c })
            .collect();

        match normalized.as_str() {
            slugs::SUPER_ADMIN | "superadmin" => Ok(Role::SuperAdmin),
            slugs::ADMINISTRATOR => Ok(Role::Administrator),
            slugs::INSTRUCTOR => Ok(Role::Instructor),
            slugs::STUDENT => Ok(Role::Student),
            slugs::STAFF => Ok(Role::Staff),
            _ => Err(ParseRoleError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = ParseRoleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// The role state of the current session as reported by the auth layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionRole {
    Authenticated(Role),
    Unauthenticated,
    /// A session exists but its role string is not one we recognize.
    UnknownRole(String),
}

impl SessionRole {
    /// Classify the raw role field of a session.
    ///
    /// `None` or a blank string means there is no authenticated session.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => SessionRole::Unauthenticated,
            Some(value) => match value.parse() {
                Ok(role) => SessionRole::Authenticated(role),
                Err(_) => SessionRole::UnknownRole(value.to_string()),
            },
        }
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            SessionRole::Authenticated(role) => Some(*role),
            _ => None,
        }
    }
}

impl From<Option<Role>> for SessionRole {
    fn from(role: Option<Role>) -> Self {
        match role {
            Some(role) => SessionRole::Authenticated(role),
            None => SessionRole::Unauthenticated,
        }
    }
}
