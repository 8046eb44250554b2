//! Session view of the authenticated portal user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once at the composition root as an `RwSignal` context; the navbar
//! and role-aware pages read it instead of reaching for a global. The server
//! owns identity; this is only the client-side projection.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Portal role of the signed-in user, if any.
    pub fn role(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.role.as_deref())
    }

    /// Drop the local identity. Always succeeds, synchronously, so the UI
    /// reflects logged-out status before any navigation or remote call.
    pub fn clear(&mut self) {
        self.user = None;
        self.loading = false;
    }
}
