//! # blog-pages
//!
//! WASM page behaviors for the blog's server-rendered pages: theme switch,
//! autohiding navbar, tooltips, delete confirmations, bookmark and delete
//! actions, the upload panel switch, looping carousels, share buttons, and
//! the web-font check.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Light/dark preference |
//! | [`scroll`] | Scroll-direction tracking for the navbar |
//! | [`tooltip`] | Tooltip attribute set |
//! | [`confirm`] | Delete-confirmation prompts |
//! | [`mark`] | Bookmark state machine and button markup |
//! | [`actions`] | Action response contract and delete targets |
//! | [`upload`] | Upload panel modes and summary |
//! | [`carousel`] | Carousel animation rules |
//! | [`share`] | Share URLs per platform |
//! | [`config`] | Page config block |
//! | [`consts`] | DOM ids, selectors, and attribute names |
//! | `dom` | Browser wiring (`web` feature) |
//! | `net` | Action endpoint requests (`web` feature) |
//!
//! Everything outside `dom` and `net` is plain Rust and tested natively.

pub mod actions;
pub mod carousel;
pub mod config;
pub mod confirm;
pub mod consts;
pub mod error;
pub mod mark;
pub mod scroll;
pub mod share;
pub mod theme;
pub mod tooltip;
pub mod upload;

#[cfg(feature = "web")]
pub mod dom;
#[cfg(feature = "web")]
pub mod net;

/// Module entry point: runs once when the WASM module is instantiated.
#[cfg(feature = "web")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = dom::boot() {
        web_sys::console::error_1(&err.to_string().into());
    }
}
