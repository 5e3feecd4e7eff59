//! Application State Management
//!
//! Reactive wrapper around `hb_core::SiteController` and the DOM
//! implementations of its viewport and scroll-lock seams.

use hb_core::{NavState, Page, ScrollLock, SiteController, Viewport};
use leptos::*;

/// Scrolls the browser window
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowViewport;

impl Viewport for WindowViewport {
    fn scroll_to(&self, x: f64, y: f64) {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(x, y);
        }
    }
}

/// Toggles `overflow` on `<body>`
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyScrollLock;

impl BodyScrollLock {
    fn set_overflow(value: &str) {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            tracing::warn!("no document body; scroll lock skipped");
            return;
        };
        if let Err(e) = body.style().set_property("overflow", value) {
            tracing::warn!("failed to set body overflow: {:?}", e);
        }
    }
}

impl ScrollLock for BodyScrollLock {
    fn lock(&self) {
        Self::set_overflow("hidden");
    }

    fn unlock(&self) {
        Self::set_overflow("auto");
    }
}

pub type DomController = SiteController<WindowViewport, BodyScrollLock>;

/// Navigation handle passed to the chrome and pages
#[derive(Clone, Copy)]
pub struct SiteNav {
    pub state: ReadSignal<NavState>,
    pub page: Memo<Page>,
    pub menu_open: Memo<bool>,
    pub navigate: Callback<Page>,
    pub toggle_menu: Callback<()>,
}

impl SiteNav {
    /// Create the controller under the current reactive owner. The scroll
    /// lock is released when that owner is cleaned up.
    pub fn new() -> Self {
        let controller = store_value(DomController::new(WindowViewport, BodyScrollLock));
        let (state, set_state) = create_signal(NavState::default());

        let sync = move || set_state.set(controller.with_value(|c| c.state()));

        let navigate = Callback::new(move |target: Page| {
            controller.update_value(|c| c.navigate(target));
            sync();
        });
        let toggle_menu = Callback::new(move |_: ()| {
            controller.update_value(|c| {
                c.toggle_menu();
            });
            sync();
        });

        on_cleanup(move || controller.update_value(|c| c.close_menu()));

        Self {
            state,
            page: create_memo(move |_| state.get().page),
            menu_open: create_memo(move |_| state.get().menu_open),
            navigate,
            toggle_menu,
        }
    }
}

impl Default for SiteNav {
    fn default() -> Self {
        Self::new()
    }
}
