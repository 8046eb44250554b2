//! DTOs for the session provider boundary.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated portal user as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display username.
    pub username: String,
    /// Portal role (e.g. `"doctor"`, `"patient"`); drives the dashboard
    /// path. Absent for accounts that have no role assigned yet.
    #[serde(default)]
    pub role: Option<String>,
}
