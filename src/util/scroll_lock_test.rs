#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::state::nav::ScrollLock as _;

#[test]
fn apply_is_noop_but_callable() {
    apply(true);
    apply(false);
}

#[test]
fn dom_lock_acquire_release_are_noops_off_browser() {
    let mut lock = DomScrollLock;
    lock.acquire();
    lock.release();
}
