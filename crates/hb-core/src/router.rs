//! View routing
//!
//! `SiteController` is the single owner of the active page and the mobile
//! menu flag. The page layer reads `NavState` snapshots and sends requests
//! back through `navigate` / `toggle_menu`.

use tracing::debug;

use crate::page::Page;
use crate::scroll::{ScrollLock, ScrollLockGuard, Viewport};

/// Snapshot of the router state handed to the view layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    pub page: Page,
    pub menu_open: bool,
}

/// Root controller for navigation and the overlay menu
///
/// The scroll lock is held exactly while the menu is open. Dropping the
/// controller releases it.
pub struct SiteController<V: Viewport, L: ScrollLock + Clone> {
    state: NavState,
    viewport: V,
    lock: L,
    held: Option<ScrollLockGuard<L>>,
}

impl<V: Viewport, L: ScrollLock + Clone> SiteController<V, L> {
    pub fn new(viewport: V, lock: L) -> Self {
        Self {
            state: NavState::default(),
            viewport,
            lock,
            held: None,
        }
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn active_page(&self) -> Page {
        self.state.page
    }

    pub fn is_menu_open(&self) -> bool {
        self.state.menu_open
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.held.is_some()
    }

    /// Switch to `target`, close the menu and scroll back to the top.
    pub fn navigate(&mut self, target: Page) {
        let from = self.state.page;
        self.state.page = target;
        self.set_menu_open(false);
        self.viewport.scroll_to(0.0, 0.0);
        debug!(%from, to = %target, "navigate");
    }

    /// Flip the overlay menu. Returns the new value.
    pub fn toggle_menu(&mut self) -> bool {
        let open = !self.state.menu_open;
        self.set_menu_open(open);
        debug!(open, "menu toggled");
        open
    }

    pub fn close_menu(&mut self) {
        self.set_menu_open(false);
    }

    fn set_menu_open(&mut self, open: bool) {
        self.state.menu_open = open;
        match (open, self.held.is_some()) {
            (true, false) => self.held = Some(ScrollLockGuard::acquire(self.lock.clone())),
            (false, true) => self.held = None,
            _ => {}
        }
    }
}
