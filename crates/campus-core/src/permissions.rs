//! Resource constants and the built-in permission table.
//!
//! Every role-gated page and action is named here once, so views never carry
//! their own role lists.
//!
//! # Example
//!
//! ```ignore
//! use campus_core::{AccessPolicy, permissions};
//!
//! let policy = AccessPolicy::default();
//! if policy.is_allowed(role, permissions::GRADES_RECORD) {
//!     // Show the grade entry form
//! }
//! ```

use crate::access::PermissionTable;
use campus_models::{NavItem, Role};

// =============================================================================
// Pages
// =============================================================================

pub const DASHBOARD: &str = "dashboard";
pub const COURSES: &str = "courses";
pub const PROGRAMS: &str = "programs";
pub const GRADES: &str = "grades";
pub const STUDENTS: &str = "students";
pub const MARKETING: &str = "marketing";
pub const FINANCE: &str = "finance";
pub const HR: &str = "hr";
pub const ASSETS: &str = "assets";
pub const ANALYTICS: &str = "analytics";
pub const COLLABORATION: &str = "collaboration";
pub const PROFILE: &str = "profile";
pub const SECURITY: &str = "security";
pub const SETTINGS: &str = "settings";

// =============================================================================
// Actions
// =============================================================================

/// Permission to enter grades
pub const GRADES_RECORD: &str = "grades:record";
/// Permission to create and edit student records
pub const STUDENTS_MANAGE: &str = "students:manage";
/// Permission to issue invoices and record payments
pub const FINANCE_MANAGE: &str = "finance:manage";
/// Permission to change institution settings
pub const SETTINGS_CONFIGURE: &str = "settings:configure";
/// Permission to read the audit log
pub const AUDIT_READ: &str = "audit:read";

use Role::{Administrator, Instructor, Staff, Student, SuperAdmin};

const EVERYONE: &[Role] = &Role::ALL;
const ADMINS: &[Role] = &[SuperAdmin, Administrator];
const FACULTY: &[Role] = &[SuperAdmin, Administrator, Instructor];
const OPERATIONS: &[Role] = &[SuperAdmin, Administrator, Staff];

/// The institution's standard permission table.
///
/// `settings` is limited to super admins here; deployments that let
/// administrators in extend the entry at startup.
pub fn default_table() -> PermissionTable {
    PermissionTable::builder()
        .allow(DASHBOARD, EVERYONE)
        .allow(COURSES, EVERYONE)
        .allow(PROGRAMS, ADMINS)
        .allow(MARKETING, ADMINS)
        .allow(ANALYTICS, ADMINS)
        .allow(GRADES, &[SuperAdmin, Administrator, Instructor, Student])
        .allow(STUDENTS, FACULTY)
        .allow(FINANCE, OPERATIONS)
        .allow(HR, OPERATIONS)
        .allow(ASSETS, OPERATIONS)
        .allow(COLLABORATION, EVERYONE)
        .allow(PROFILE, EVERYONE)
        .allow(SECURITY, &[SuperAdmin])
        .allow(SETTINGS, &[SuperAdmin])
        .allow(GRADES_RECORD, FACULTY)
        .allow(STUDENTS_MANAGE, FACULTY)
        .allow(FINANCE_MANAGE, OPERATIONS)
        .allow(SETTINGS_CONFIGURE, ADMINS)
        .allow(AUDIT_READ, &[SuperAdmin])
        .build()
}

/// Sidebar entries in display order.
pub fn default_navigation() -> Vec<NavItem> {
    vec![
        NavItem::new(DASHBOARD, "Dashboard", "layout-dashboard"),
        NavItem::new(COURSES, "Courses", "book-open"),
        NavItem::new(PROGRAMS, "Programs", "graduation-cap"),
        NavItem::new(GRADES, "Grades", "award"),
        NavItem::new(STUDENTS, "Students", "users"),
        NavItem::new(MARKETING, "Marketing", "megaphone"),
        NavItem::new(FINANCE, "Finance", "credit-card"),
        NavItem::new(HR, "HR", "briefcase"),
        NavItem::new(ASSETS, "Assets", "package"),
        NavItem::new(ANALYTICS, "Analytics", "bar-chart-3"),
        NavItem::new(COLLABORATION, "Collaboration", "message-square"),
        NavItem::new(SECURITY, "Security", "shield"),
        NavItem::new(SETTINGS, "Settings", "settings"),
        NavItem::new(PROFILE, "Profile", "user"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_nav_item_has_table_entry() {
        let table = default_table();
        for item in default_navigation() {
            assert!(
                table.contains(item.resource.as_str()),
                "missing permission entry for {}",
                item.resource
            );
        }
    }

    #[test]
    fn test_security_is_super_admin_only() {
        let table = default_table();
        let roles = table.roles_for(SECURITY).unwrap();
        assert_eq!(roles.len(), 1);
        assert!(roles.contains(&SuperAdmin));
    }

    #[test]
    fn test_students_cannot_record_grades() {
        let table = default_table();
        let roles = table.roles_for(GRADES_RECORD).unwrap();
        assert!(!roles.contains(&Student));
        assert!(roles.contains(&Instructor));
    }
}
