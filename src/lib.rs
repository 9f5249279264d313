//! Page interactivity for the portfolio site, compiled to WebAssembly.
//!
//! Six independent behaviors are wired once when the module is instantiated:
//! mobile navigation, the persisted light/dark theme, smooth in-page
//! scrolling, the scroll-to-top button, contact-form validation, and the
//! progress-bar reveal animation. Each feature pairs a pure, natively
//! testable core with a `wire` function that binds it to the DOM; a feature
//! whose expected elements are absent simply stays unwired and the rest of
//! the page keeps working.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`menu`] | Mobile navigation toggle |
//! | [`theme`] | Light/dark theme switch persisted in `localStorage` |
//! | [`scroll`] | Smooth anchor scrolling and the scroll-to-top button |
//! | [`form`] | Contact-form validation |
//! | [`progress`] | One-shot progress-bar width animation |
//! | [`dom`] | Shared `web-sys` access helpers |
//! | [`consts`] | Class names, selectors, and thresholds |

pub mod consts;
pub mod dom;
pub mod form;
pub mod menu;
pub mod progress;
pub mod scroll;
pub mod theme;

use wasm_bindgen::prelude::wasm_bindgen;

/// Entry point, invoked by the runtime when the wasm module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("logger init failed: {err}").into());
    }
    init();
}

/// Wire every page behavior.
///
/// Features are wired independently: one feature failing to wire is logged
/// and never blocks the others.
pub fn init() {
    let Some(doc) = dom::document() else {
        return;
    };

    if let Err(err) = menu::wire(&doc) {
        log::warn!("menu wiring failed: {err:?}");
    }
    if let Err(err) = theme::wire(&doc) {
        log::warn!("theme wiring failed: {err:?}");
    }
    if let Err(err) = scroll::wire_anchors(&doc) {
        log::warn!("anchor wiring failed: {err:?}");
    }
    if let Err(err) = scroll::wire_top_button(&doc) {
        log::warn!("scroll-top wiring failed: {err:?}");
    }
    if let Err(err) = form::wire(&doc) {
        log::warn!("form wiring failed: {err:?}");
    }
    if let Err(err) = progress::wire(&doc) {
        log::warn!("progress wiring failed: {err:?}");
    }

    log::info!("page behaviors ready");
}
