use super::*;

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Counts {
    acquires: usize,
    releases: usize,
}

/// Scroll lock fake that records acquire/release calls, observable after the
/// controller that owns it is dropped.
#[derive(Clone, Debug, Default)]
struct RecordingLock(Rc<RefCell<Counts>>);

impl RecordingLock {
    fn acquires(&self) -> usize {
        self.0.borrow().acquires
    }

    fn releases(&self) -> usize {
        self.0.borrow().releases
    }

    fn held(&self) -> bool {
        let counts = self.0.borrow();
        counts.acquires == counts.releases + 1
    }
}

impl ScrollLock for RecordingLock {
    fn acquire(&mut self) {
        self.0.borrow_mut().acquires += 1;
    }

    fn release(&mut self) {
        self.0.borrow_mut().releases += 1;
    }
}

fn controller() -> (NavController<RecordingLock>, RecordingLock) {
    let lock = RecordingLock::default();
    (NavController::new(lock.clone()), lock)
}

// =============================================================
// Menu state machine
// =============================================================

#[test]
fn menu_starts_closed_and_unscrolled() {
    let (nav, lock) = controller();
    assert_eq!(nav.state(), NavState::default());
    assert!(!nav.menu_open());
    assert!(!nav.scrolled());
    assert!(!lock.held());
}

#[test]
fn toggle_parity_matches_menu_state() {
    let (mut nav, lock) = controller();
    for toggles in 1..=6 {
        nav.toggle_menu();
        assert_eq!(nav.menu_open(), toggles % 2 == 1);
        assert_eq!(lock.held(), nav.menu_open());
    }
}

#[test]
fn close_menu_forces_closed_and_releases_lock() {
    let (mut nav, lock) = controller();
    nav.toggle_menu();
    nav.close_menu();
    assert!(!nav.menu_open());
    assert_eq!(lock.acquires(), 1);
    assert_eq!(lock.releases(), 1);
}

#[test]
fn close_menu_when_already_closed_is_noop() {
    let (mut nav, lock) = controller();
    nav.close_menu();
    nav.close_menu();
    assert!(!nav.menu_open());
    assert_eq!(lock.acquires(), 0);
    assert_eq!(lock.releases(), 0);
}

#[test]
fn route_change_closes_open_menu() {
    let (mut nav, lock) = controller();
    nav.toggle_menu();
    assert!(nav.menu_open());
    nav.on_route_change();
    assert!(!nav.menu_open());
    assert!(!lock.held());
}

#[test]
fn route_change_with_closed_menu_does_not_touch_lock() {
    let (mut nav, lock) = controller();
    nav.on_route_change();
    assert_eq!(lock.releases(), 0);
}

// =============================================================
// Scroll-lock pairing across drop
// =============================================================

#[test]
fn drop_while_open_releases_lock() {
    let lock = RecordingLock::default();
    {
        let mut nav = NavController::new(lock.clone());
        nav.toggle_menu();
        assert!(lock.held());
    }
    assert!(!lock.held());
    assert_eq!(lock.releases(), 1);
}

#[test]
fn drop_while_closed_does_not_release() {
    let lock = RecordingLock::default();
    {
        let mut nav = NavController::new(lock.clone());
        nav.toggle_menu();
        nav.toggle_menu();
    }
    assert_eq!(lock.acquires(), 1);
    assert_eq!(lock.releases(), 1);
}

// =============================================================
// Scroll threshold
// =============================================================

#[test]
fn scroll_offset_zero_is_not_scrolled() {
    let (mut nav, _lock) = controller();
    nav.on_scroll(0.0);
    assert!(!nav.scrolled());
}

#[test]
fn scroll_offset_at_threshold_is_not_scrolled() {
    let (mut nav, _lock) = controller();
    nav.on_scroll(10.0);
    assert!(!nav.scrolled());
}

#[test]
fn scroll_offset_past_threshold_is_scrolled() {
    let (mut nav, _lock) = controller();
    nav.on_scroll(11.0);
    assert!(nav.scrolled());
}

#[test]
fn scroll_flag_clears_when_returning_to_top() {
    let (mut nav, _lock) = controller();
    nav.on_scroll(250.0);
    assert!(nav.scrolled());
    nav.on_scroll(0.0);
    assert!(!nav.scrolled());
}

// =============================================================
// Navigation targets
// =============================================================

#[test]
fn login_target_is_login_page() {
    assert_eq!(login_target(), "/login");
}

#[test]
fn dashboard_target_requires_role() {
    assert_eq!(dashboard_target(None), None);
    assert_eq!(dashboard_target(Some("")), None);
}

#[test]
fn dashboard_target_builds_role_path() {
    assert_eq!(dashboard_target(Some("doctor")), Some("/doctor/dashboard".to_owned()));
    assert_eq!(dashboard_target(Some("patient")), Some("/patient/dashboard".to_owned()));
}
