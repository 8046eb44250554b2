//! Networking modules for the session provider HTTP boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the REST calls and `types` defines the shared wire schema.

pub mod api;
pub mod types;
