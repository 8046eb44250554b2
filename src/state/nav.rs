//! Navbar menu/scroll view-state controller.
//!
//! DESIGN
//! ======
//! The mobile menu is modeled as an explicit two-state machine instead of a
//! bare boolean so the scroll-lock pairing rule lives in one place: the lock
//! is held exactly while the menu is `Open` and released on every exit path,
//! including controller drop during unmount. The page-level lock itself is
//! injected as a capability (`ScrollLock`) so transitions are testable
//! without a document.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Vertical offset beyond which the bar renders in its "scrolled" style.
/// Comparison is strict: an offset of exactly 10 still counts as top-of-page.
pub const SCROLL_THRESHOLD_PX: f64 = 10.0;

/// Page-level scroll suppression capability.
///
/// The DOM implementation lives in `util::scroll_lock`; tests inject a
/// recording fake.
pub trait ScrollLock {
    /// Suppress page scrolling.
    fn acquire(&mut self);
    /// Restore page scrolling.
    fn release(&mut self);
}

/// Mobile menu machine states.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }
}

/// Transient navbar view state. Created with both flags cleared on mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu: MenuState,
    pub scrolled: bool,
}

/// Owns `NavState` plus the injected scroll lock and performs all state
/// transitions for the navbar.
///
/// Every transition is synchronous and infallible; navigation-triggering
/// actions route through [`NavController::close_menu`] so the menu never
/// stays open across navigation.
#[derive(Debug)]
pub struct NavController<L: ScrollLock> {
    state: NavState,
    lock: L,
}

impl<L: ScrollLock> NavController<L> {
    pub fn new(lock: L) -> Self {
        Self { state: NavState::default(), lock }
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn menu_open(&self) -> bool {
        self.state.menu.is_open()
    }

    pub fn scrolled(&self) -> bool {
        self.state.scrolled
    }

    /// Toggle the mobile menu, applying or releasing the scroll lock to
    /// match the new state.
    pub fn toggle_menu(&mut self) {
        match self.state.menu {
            MenuState::Closed => {
                self.state.menu = MenuState::Open;
                self.lock.acquire();
            }
            MenuState::Open => {
                self.state.menu = MenuState::Closed;
                self.lock.release();
            }
        }
    }

    /// Force the menu closed, releasing the scroll lock only if held.
    /// Idempotent when already closed.
    pub fn close_menu(&mut self) {
        if self.state.menu.is_open() {
            self.state.menu = MenuState::Closed;
            self.lock.release();
        }
    }

    /// Route navigation has started; close the menu before the new page
    /// renders.
    pub fn on_route_change(&mut self) {
        self.close_menu();
    }

    /// Track whether the viewport is scrolled past the threshold. Pure
    /// function of the offset, no hysteresis.
    pub fn on_scroll(&mut self, offset_y: f64) {
        self.state.scrolled = offset_y > SCROLL_THRESHOLD_PX;
    }
}

impl<L: ScrollLock> Drop for NavController<L> {
    fn drop(&mut self) {
        // Unmounting while the menu is open must still restore page scroll.
        if self.state.menu.is_open() {
            self.lock.release();
        }
    }
}

/// Target path for the login redirect.
pub fn login_target() -> &'static str {
    "/login"
}

/// Target path for the role dashboard, or `None` when no role is known.
/// The missing-role case is a silent no-op by design, not an error.
pub fn dashboard_target(role: Option<&str>) -> Option<String> {
    role.filter(|r| !r.is_empty()).map(|r| format!("/{r}/dashboard"))
}
