#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::auth::User;

/// Authentication state tracking the current user and session restore.
///
/// `loading` starts true so authenticated routes wait for the restore
/// round trip instead of bouncing to the login page on every reload.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// Whether a session is established.
    #[must_use]
    pub fn signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Email of the signed-in user, for the dashboard header.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.email.as_str())
    }
}
