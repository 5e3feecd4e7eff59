//! Core types for the HopeBridge site
//!
//! Everything the page layer needs that is not DOM plumbing lives here so it
//! can be exercised natively.
//!
//! # Modules
//!
//! - `page`: The closed set of page identifiers
//! - `router`: `SiteController`, owner of the active page and menu state
//! - `scroll`: Viewport and scroll-lock seams plus the lock guard
//! - `chrome`: Header, overlay and footer link models
//! - `content`: Static content catalogs loaded from the embedded TOML document
//! - `image`: One-shot image fallback
//! - `contact`: Contact form model and acknowledgment
//! - `error`: Error types and Result alias

pub mod chrome;
pub mod contact;
pub mod content;
pub mod error;
pub mod image;
pub mod page;
pub mod router;
pub mod scroll;

// Re-exports
pub use chrome::{CallToAction, NavLink, RenderedLink};
pub use contact::{ContactField, ContactForm, ContactPageState, ACKNOWLEDGMENT};
pub use content::SiteContent;
pub use error::{Error, Result};
pub use image::{FallbackImage, ImageSource};
pub use page::Page;
pub use router::{NavState, SiteController};
pub use scroll::{ScrollLock, ScrollLockGuard, Viewport};
