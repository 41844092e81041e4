//! Authentication context
//!
//! Holds the bearer credential and role of the signed-in staff member.
//! The context is an explicit shared handle: it is created once per process,
//! initialised on login, cleared on logout and passed to every store through
//! the API client rather than looked up from ambient storage.

use std::fmt;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{info, debug};

/// Opaque bearer token; never printed
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Signed-in session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub access: Credential,
    pub refresh: Option<Credential>,
    /// Role string as issued by the backend; may be one the router does not know
    pub role: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Session {
    pub fn new(access: Credential, role: impl Into<String>) -> Self {
        Self {
            access,
            refresh: None,
            role: role.into(),
            name: None,
            email: None,
        }
    }
}

/// Process-wide authentication handle; clones share the same session
#[derive(Debug, Clone, Default)]
pub struct AuthContext {
    session: Arc<RwLock<Option<Session>>>,
}

impl AuthContext {
    /// Create an empty (signed-out) context
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session, replacing any previous one
    pub fn login(&self, session: Session) {
        info!(role = %session.role, name = ?session.name, "Session started");
        *self.write() = Some(session);
    }

    /// End the session and drop the credential
    pub fn logout(&self) {
        let previous = self.write().take();
        match previous {
            Some(session) => info!(role = %session.role, "Session ended"),
            None => debug!("Logout requested without an active session"),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_some()
    }

    /// Current bearer credential, if signed in
    pub fn credential(&self) -> Option<Credential> {
        self.read().as_ref().map(|session| session.access.clone())
    }

    /// Current role string, if signed in
    pub fn role(&self) -> Option<String> {
        self.read().as_ref().map(|session| session.role.clone())
    }

    fn read(&self) -> RwLockReadGuard<'_, Option<Session>> {
        self.session.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<Session>> {
        self.session.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_logout_lifecycle() {
        let auth = AuthContext::new();
        assert!(!auth.is_authenticated());
        assert!(auth.credential().is_none());

        auth.login(Session::new(Credential::new("abc"), "manager"));
        assert!(auth.is_authenticated());
        assert_eq!(auth.credential().unwrap().expose(), "abc");
        assert_eq!(auth.role().as_deref(), Some("manager"));

        auth.logout();
        assert!(!auth.is_authenticated());
        assert!(auth.role().is_none());
    }

    #[test]
    fn test_clones_share_session() {
        let auth = AuthContext::new();
        let handle = auth.clone();
        auth.login(Session::new(Credential::new("t"), "sales"));
        assert!(handle.is_authenticated());
        handle.logout();
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn test_credential_debug_is_redacted() {
        let credential = Credential::new("super-secret");
        assert_eq!(format!("{:?}", credential), "Credential(***)");
    }
}
