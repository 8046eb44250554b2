//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`nav`, `session`) so individual components can
//! depend on small focused models provided via context at the composition
//! root.

pub mod nav;
pub mod session;
