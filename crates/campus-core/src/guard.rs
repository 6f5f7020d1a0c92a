//! Per-navigation route guard.
//!
//! Each navigation attempt gets its own [`RouteGuard`]. It moves from
//! `Unchecked` to `Checking` when navigation starts and resolves
//! synchronously into one terminal state. Terminal states are final: asking
//! again returns the same decision without re-evaluating.

use campus_models::{Resource, SessionRole};
use serde::Serialize;

use crate::access::{AccessPolicy, RouteDecision};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardState {
    Unchecked,
    Checking,
    Render,
    RedirectLogin,
    RedirectDefault,
}

impl GuardState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            GuardState::Render | GuardState::RedirectLogin | GuardState::RedirectDefault
        )
    }

    fn decision(&self) -> Option<RouteDecision> {
        match self {
            GuardState::Render => Some(RouteDecision::Render),
            GuardState::RedirectLogin => Some(RouteDecision::RedirectToLogin),
            GuardState::RedirectDefault => Some(RouteDecision::RedirectToDefault),
            GuardState::Unchecked | GuardState::Checking => None,
        }
    }
}

impl From<RouteDecision> for GuardState {
    fn from(decision: RouteDecision) -> Self {
        match decision {
            RouteDecision::Render => GuardState::Render,
            RouteDecision::RedirectToLogin => GuardState::RedirectLogin,
            RouteDecision::RedirectToDefault => GuardState::RedirectDefault,
        }
    }
}

#[derive(Debug)]
pub struct RouteGuard<'a> {
    policy: &'a AccessPolicy,
    resource: Resource,
    state: GuardState,
}

impl<'a> RouteGuard<'a> {
    pub fn new(policy: &'a AccessPolicy, resource: impl Into<Resource>) -> Self {
        Self {
            policy,
            resource: resource.into(),
            state: GuardState::Unchecked,
        }
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// Navigation event: `Unchecked -> Checking`. No-op in any other state.
    pub fn begin(&mut self) {
        if self.state == GuardState::Unchecked {
            self.state = GuardState::Checking;
        }
    }

    /// Resolves the guard for `session`, starting it first if needed.
    pub fn resolve(&mut self, session: &SessionRole) -> RouteDecision {
        if let Some(decision) = self.state.decision() {
            return decision;
        }

        self.begin();
        let decision = self
            .policy
            .decide_for_session(session, self.resource.as_str());
        self.state = decision.into();
        decision
    }

    /// Redirect path once resolved; `None` while unresolved or rendering.
    pub fn redirect_target(&self) -> Option<String> {
        self.state
            .decision()
            .and_then(|decision| self.policy.redirect_target(decision))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permissions::{FINANCE, GRADES};
    use campus_models::Role;

    #[test]
    fn test_guard_lifecycle() {
        let policy = AccessPolicy::default();
        let mut guard = RouteGuard::new(&policy, GRADES);
        assert_eq!(guard.state(), GuardState::Unchecked);

        guard.begin();
        assert_eq!(guard.state(), GuardState::Checking);

        let decision = guard.resolve(&SessionRole::Authenticated(Role::Student));
        assert_eq!(decision, RouteDecision::Render);
        assert_eq!(guard.state(), GuardState::Render);
        assert!(guard.state().is_terminal());
        assert_eq!(guard.redirect_target(), None);
    }

    #[test]
    fn test_guard_resolves_without_explicit_begin() {
        let policy = AccessPolicy::default();
        let mut guard = RouteGuard::new(&policy, FINANCE);
        let decision = guard.resolve(&SessionRole::Unauthenticated);
        assert_eq!(decision, RouteDecision::RedirectToLogin);
        assert_eq!(guard.state(), GuardState::RedirectLogin);
        assert_eq!(guard.redirect_target().as_deref(), Some("/login"));
    }

    #[test]
    fn test_terminal_state_is_final() {
        let policy = AccessPolicy::default();
        let mut guard = RouteGuard::new(&policy, FINANCE);

        let first = guard.resolve(&SessionRole::Authenticated(Role::Student));
        assert_eq!(first, RouteDecision::RedirectToDefault);
        assert_eq!(guard.redirect_target().as_deref(), Some("/dashboard"));

        let second = guard.resolve(&SessionRole::Authenticated(Role::SuperAdmin));
        assert_eq!(second, RouteDecision::RedirectToDefault);

        guard.begin();
        assert_eq!(guard.state(), GuardState::RedirectDefault);
    }
}
