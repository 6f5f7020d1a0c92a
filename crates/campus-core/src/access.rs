//! Role-based access decisions for routes, pages and actions.
//!
//! The [`PermissionTable`] maps each resource to the roles allowed to reach
//! it. It is assembled once at startup and never mutated afterwards, so a
//! single [`AccessPolicy`] can be shared across threads behind an `Arc`.
//!
//! Every check here is total: unknown resources, missing roles and
//! unrecognized role strings all resolve to a deny-closed outcome instead of
//! an error.

use campus_models::{NavItem, Resource, Role, SessionRole};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

use crate::permissions;

/// Path unauthenticated users are sent to.
pub const LOGIN_PATH: &str = "/login";

/// Immutable mapping from resource to allowed roles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionTable {
    entries: BTreeMap<Resource, BTreeSet<Role>>,
}

impl PermissionTable {
    pub fn builder() -> PermissionTableBuilder {
        PermissionTableBuilder::default()
    }

    /// Starts a builder seeded with this table's entries.
    pub fn to_builder(&self) -> PermissionTableBuilder {
        PermissionTableBuilder {
            entries: self.entries.clone(),
        }
    }

    /// The institution's standard table; see [`permissions::default_table`].
    pub fn default_table() -> Self {
        permissions::default_table()
    }

    pub fn contains(&self, resource: &str) -> bool {
        self.entries.contains_key(resource)
    }

    pub fn roles_for(&self, resource: &str) -> Option<&BTreeSet<Role>> {
        self.entries.get(resource)
    }

    pub fn resources(&self) -> impl Iterator<Item = &Resource> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builder for [`PermissionTable`].
#[derive(Debug, Clone, Default)]
pub struct PermissionTableBuilder {
    entries: BTreeMap<Resource, BTreeSet<Role>>,
}

impl PermissionTableBuilder {
    /// Sets the allowed roles for `resource`, replacing any previous entry.
    pub fn allow(mut self, resource: impl Into<Resource>, roles: &[Role]) -> Self {
        self.entries
            .insert(resource.into(), roles.iter().copied().collect());
        self
    }

    /// Adds roles to the entry for `resource`, creating it if needed.
    pub fn extend(mut self, resource: impl Into<Resource>, roles: &[Role]) -> Self {
        self.entries
            .entry(resource.into())
            .or_default()
            .extend(roles.iter().copied());
        self
    }

    /// Keeps the entry but empties it, leaving only the super admin override.
    pub fn revoke_all(mut self, resource: impl Into<Resource>) -> Self {
        self.entries.insert(resource.into(), BTreeSet::new());
        self
    }

    pub fn build(self) -> PermissionTable {
        PermissionTable {
            entries: self.entries,
        }
    }
}

/// Outcome of guarding a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteDecision {
    Render,
    RedirectToLogin,
    /// Authenticated but not permitted; send the user to the landing page.
    RedirectToDefault,
}

/// Access policy: a permission table plus the landing resource used for
/// unauthorized-but-authenticated users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPolicy {
    table: PermissionTable,
    default_landing: Resource,
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::new(PermissionTable::default_table())
    }
}

impl AccessPolicy {
    pub fn new(table: PermissionTable) -> Self {
        Self {
            table,
            default_landing: Resource::from(permissions::DASHBOARD),
        }
    }

    pub fn with_default_landing(mut self, landing: impl Into<Resource>) -> Self {
        self.default_landing = landing.into();
        self
    }

    pub fn table(&self) -> &PermissionTable {
        &self.table
    }

    pub fn default_landing(&self) -> &Resource {
        &self.default_landing
    }

    /// `true` iff `role` is the super admin or is listed for `resource`.
    ///
    /// A resource without an entry is treated as allowing nobody else.
    pub fn is_allowed(&self, role: Role, resource: &str) -> bool {
        role.is_super_admin()
            || self
                .table
                .roles_for(resource)
                .is_some_and(|roles| roles.contains(&role))
    }

    /// Keeps the items `role` may see, in their original order.
    pub fn filter_navigation(&self, role: Role, items: &[NavItem]) -> Vec<NavItem> {
        items
            .iter()
            .filter(|item| self.is_allowed(role, item.resource.as_str()))
            .cloned()
            .collect()
    }

    pub fn decide_route_guard(&self, role: Option<Role>, resource: &str) -> RouteDecision {
        let Some(role) = role else {
            debug!(resource = %resource, "No authenticated role, redirecting to login");
            return RouteDecision::RedirectToLogin;
        };

        if self.is_allowed(role, resource) {
            RouteDecision::Render
        } else {
            debug!(
                role = %role.slug(),
                resource = %resource,
                landing = %self.default_landing,
                "Access denied, redirecting to landing page"
            );
            RouteDecision::RedirectToDefault
        }
    }

    /// Like [`decide_route_guard`](Self::decide_route_guard), for the
    /// session view reported by the auth layer. An unrecognized role is
    /// handled exactly like a missing one.
    pub fn decide_for_session(&self, session: &SessionRole, resource: &str) -> RouteDecision {
        if let SessionRole::UnknownRole(raw) = session {
            debug!(raw_role = %raw, resource = %resource, "Unrecognized session role");
        }
        self.decide_route_guard(session.role(), resource)
    }

    /// Where the caller should navigate for `decision`, or `None` to render.
    pub fn redirect_target(&self, decision: RouteDecision) -> Option<String> {
        match decision {
            RouteDecision::Render => None,
            RouteDecision::RedirectToLogin => Some(LOGIN_PATH.to_string()),
            RouteDecision::RedirectToDefault => Some(format!("/{}", self.default_landing)),
        }
    }

    /// Every resource in the table `role` may access, sorted by id.
    pub fn allowed_resources(&self, role: Role) -> Vec<&Resource> {
        self.table
            .resources()
            .filter(|resource| self.is_allowed(role, resource.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permissions::*;

    #[test]
    fn test_super_admin_allowed_everywhere() {
        let policy = AccessPolicy::new(PermissionTable::default());
        assert!(policy.is_allowed(Role::SuperAdmin, "anything"));
        assert!(policy.is_allowed(Role::SuperAdmin, SECURITY));
    }

    #[test]
    fn test_unknown_resource_denied_to_everyone_else() {
        let policy = AccessPolicy::default();
        for role in Role::ALL {
            assert_eq!(policy.is_allowed(role, "payroll-export"), role.is_super_admin());
        }
    }

    #[test]
    fn test_default_table_matrix() {
        let policy = AccessPolicy::default();

        assert!(policy.is_allowed(Role::Student, DASHBOARD));
        assert!(policy.is_allowed(Role::Student, GRADES));
        assert!(!policy.is_allowed(Role::Student, STUDENTS));
        assert!(!policy.is_allowed(Role::Student, FINANCE));

        assert!(policy.is_allowed(Role::Instructor, STUDENTS));
        assert!(!policy.is_allowed(Role::Instructor, HR));

        assert!(policy.is_allowed(Role::Staff, FINANCE));
        assert!(policy.is_allowed(Role::Staff, ASSETS));
        assert!(!policy.is_allowed(Role::Staff, GRADES));

        assert!(policy.is_allowed(Role::Administrator, ANALYTICS));
        assert!(!policy.is_allowed(Role::Administrator, SECURITY));
        assert!(!policy.is_allowed(Role::Administrator, SETTINGS));
    }

    #[test]
    fn test_builder_extend_and_revoke() {
        let table = PermissionTable::default_table()
            .to_builder()
            .extend(SETTINGS, &[Role::Administrator])
            .revoke_all(MARKETING)
            .build();
        let policy = AccessPolicy::new(table);

        assert!(policy.is_allowed(Role::Administrator, SETTINGS));
        assert!(!policy.is_allowed(Role::Administrator, MARKETING));
        assert!(policy.is_allowed(Role::SuperAdmin, MARKETING));
        assert!(policy.table().contains(MARKETING));
    }

    #[test]
    fn test_filter_navigation_preserves_order() {
        let policy = AccessPolicy::default();
        let visible = policy.filter_navigation(Role::Staff, &default_navigation());
        let ids: Vec<&str> = visible.iter().map(|i| i.resource.as_str()).collect();
        assert_eq!(
            ids,
            vec![DASHBOARD, COURSES, FINANCE, HR, ASSETS, COLLABORATION, PROFILE]
        );
    }

    #[test]
    fn test_route_guard_decisions() {
        let policy = AccessPolicy::default();
        assert_eq!(
            policy.decide_route_guard(None, DASHBOARD),
            RouteDecision::RedirectToLogin
        );
        assert_eq!(
            policy.decide_route_guard(Some(Role::Student), GRADES),
            RouteDecision::Render
        );
        assert_eq!(
            policy.decide_route_guard(Some(Role::Student), FINANCE),
            RouteDecision::RedirectToDefault
        );
    }

    #[test]
    fn test_unknown_session_role_goes_to_login() {
        let policy = AccessPolicy::default();
        let session = SessionRole::UnknownRole("Teacher".to_string());
        assert_eq!(
            policy.decide_for_session(&session, DASHBOARD),
            RouteDecision::RedirectToLogin
        );
    }

    #[test]
    fn test_redirect_targets() {
        let policy = AccessPolicy::default().with_default_landing("profile");
        assert_eq!(policy.redirect_target(RouteDecision::Render), None);
        assert_eq!(
            policy.redirect_target(RouteDecision::RedirectToLogin).as_deref(),
            Some("/login")
        );
        assert_eq!(
            policy.redirect_target(RouteDecision::RedirectToDefault).as_deref(),
            Some("/profile")
        );
    }

    #[test]
    fn test_allowed_resources_sorted() {
        let policy = AccessPolicy::default();
        let resources: Vec<&str> = policy
            .allowed_resources(Role::Student)
            .into_iter()
            .map(Resource::as_str)
            .collect();
        assert_eq!(
            resources,
            vec![COLLABORATION, COURSES, DASHBOARD, GRADES, PROFILE]
        );
    }
}
