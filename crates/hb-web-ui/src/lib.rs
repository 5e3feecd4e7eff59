//! Pure Rust WebAssembly frontend for the HopeBridge site
//!
//! A Leptos CSR app with five views selected by local state (no URL routing,
//! no requests). Build with `trunk build --release` from this directory and
//! serve `dist/` with `hopebridge-web`.

use hb_core::SiteContent;
use leptos::*;

mod components;
mod pages;
mod state;

pub use components::*;
pub use pages::*;
pub use state::*;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    let content = match SiteContent::embedded() {
        Ok(content) => content,
        Err(e) => {
            tracing::error!("Failed to load site content: {}", e);
            return view! { <ErrorDisplay message=e.to_string()/> }.into_view();
        }
    };

    let organization = content.organization.name.clone();
    provide_context(store_value(content));

    // Root owner of page and menu state; children get read-only signals
    // and callbacks.
    let nav = SiteNav::new();

    view! {
        <div class="site">
            <Navbar nav=nav brand=organization/>
            <main class="site-main">
                <PageOutlet nav=nav/>
            </main>
            <Footer on_navigate=nav.navigate/>
        </div>
    }
    .into_view()
}

/// Application entry point for WASM
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    mount_to_body(App);
}
