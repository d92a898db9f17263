//! # Session State
//!
//! The client's belief about who is logged in, independent of server-side
//! truth. A tagged variant rather than a nullable-user-plus-loading-flag
//! pair: there is no representable state where the UI both "has no user"
//! and "is not loading" yet believes it is authenticated.

use taskflow_types::User;

/// The session machine.
///
/// Transitions:
/// - `Unknown → Authenticated` on a successful bootstrap probe, login, or
///   registration
/// - `Unknown → Unauthenticated` on a failed bootstrap probe
/// - `Authenticated → Unauthenticated` on logout
/// - `Unauthenticated → Authenticated` only through login/register
///
/// Protected views render a loading affordance while `Unknown` and
/// redirect only once `Unauthenticated` is confirmed.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    /// Bootstrap probe still in flight.
    #[default]
    Unknown,
    /// A session exists; the payload is the current user.
    Authenticated(User),
    /// No session; protected routes redirect to login.
    Unauthenticated,
}

impl SessionState {
    /// Whether the bootstrap probe has resolved either way.
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// The current user, when authenticated.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "u1".into(),
            username: "ada".into(),
            email: "ada@example.com".into(),
            avatar: None,
            bio: None,
        }
    }

    #[test]
    fn default_is_unknown() {
        let state = SessionState::default();
        assert!(!state.is_known());
        assert!(!state.is_authenticated());
        assert!(state.user().is_none());
    }

    #[test]
    fn authenticated_exposes_the_user() {
        let state = SessionState::Authenticated(user());
        assert!(state.is_known());
        assert_eq!(state.user().map(|u| u.id.as_str()), Some("u1"));
    }
}
