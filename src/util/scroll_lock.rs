//! Page scroll suppression while the mobile menu overlay is visible.
//!
//! SYSTEM CONTEXT
//! ==============
//! `state::nav` owns the acquire/release pairing; this module is only the
//! DOM effect behind it. Release removes the inline `overflow` property so
//! whatever the stylesheet set beforehand is restored.

#[cfg(test)]
#[path = "scroll_lock_test.rs"]
mod scroll_lock_test;

use crate::state::nav::ScrollLock;

/// Apply or clear `overflow: hidden` on `<body>`. SSR paths no-op.
pub fn apply(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let style = body.style();
        if locked {
            let _ = style.set_property("overflow", "hidden");
        } else {
            let _ = style.remove_property("overflow");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}

/// [`ScrollLock`] backed by the document body style.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomScrollLock;

impl ScrollLock for DomScrollLock {
    fn acquire(&mut self) {
        apply(true);
    }

    fn release(&mut self) {
        apply(false);
    }
}
