//! Browser localStorage persistence for the signed-in identity.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `userType` and `username` keys are the portal's stored-data contract
//! shared with the login flow; logout must remove both. Centralizing the
//! hydrate-only web-sys glue here keeps pages and components free of it.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use crate::net::types::User;

/// Key holding the portal role (doctor, patient, ...).
pub const ROLE_KEY: &str = "userType";
/// Key holding the display username.
pub const USERNAME_KEY: &str = "username";

/// Load the persisted identity, if a username is stored. Returns `None` on
/// the server or when nothing is persisted.
pub fn load_persisted_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let username = storage.get_item(USERNAME_KEY).ok().flatten()?;
        let role = storage.get_item(ROLE_KEY).ok().flatten();
        Some(User { username, role })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the identity for the next visit. Best-effort.
pub fn save(username: &str, role: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.set_item(USERNAME_KEY, username);
        let _ = storage.set_item(ROLE_KEY, role);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, role);
    }
}

/// Remove both identity keys. Local clearing always succeeds.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.remove_item(ROLE_KEY);
        let _ = storage.remove_item(USERNAME_KEY);
    }
}
