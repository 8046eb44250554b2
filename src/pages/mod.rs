//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates chrome to
//! `components`. Bodies stay minimal; layout and styling live in the
//! stylesheet.

pub mod appointments;
pub mod contact;
pub mod dashboard;
pub mod faq;
pub mod home;
pub mod login;
pub mod monitoring;
pub mod prescriptions;
pub mod support;
