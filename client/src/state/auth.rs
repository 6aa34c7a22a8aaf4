//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the sign-in gate and the toolbar to coordinate login redirects and
//! identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State while the provider lookup is in flight.
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user), loading: false }
    }

    pub fn sign_out(&mut self) {
        self.user = None;
        self.loading = false;
    }

    /// Name shown in the toolbar.
    pub fn display_name(&self) -> &str {
        self.user.as_ref().map_or("", |u| u.name.as_str())
    }
}
