//! Smooth in-page scrolling and the scroll-to-top button.
//!
//! Anchor clicks are intercepted and turned into smooth viewport scrolls,
//! offset by the rendered header height so a fixed header never obscures the
//! target. The floating scroll-top button shows once the page is scrolled
//! past a fixed threshold and smooth-scrolls back to the origin on click.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::consts::{ACTIVE_CLASS, ANCHOR_SELECTOR, HEADER_SELECTOR, SCROLL_TOP_ID, SCROLL_TOP_THRESHOLD};
use crate::dom;

/// The fragment selector of an in-page anchor href.
///
/// Returns `None` for a bare `"#"` (nothing to resolve) and for hrefs that do
/// not start with `#` at all.
#[must_use]
pub fn anchor_fragment(href: &str) -> Option<&str> {
    if href == "#" || !href.starts_with('#') {
        return None;
    }
    Some(href)
}

/// Vertical destination for an anchor target: the element's document offset
/// minus the rendered header height.
#[must_use]
pub fn destination(target_top: f64, header_height: f64) -> f64 {
    target_top - header_height
}

/// Whether the scroll-top button shows at the given scroll offset.
/// The threshold itself counts as visible.
#[must_use]
pub fn top_button_visible(offset: f64) -> bool {
    offset >= SCROLL_TOP_THRESHOLD
}

/// Issue a smooth-behavior scroll to the given vertical offset.
fn scroll_to(top: f64) {
    let Some(window) = dom::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Intercept every in-page anchor link and smooth-scroll to its target.
///
/// A bare `"#"` href or a fragment with no matching element scrolls nothing.
pub fn wire_anchors(doc: &Document) -> Result<(), JsValue> {
    for anchor in dom::query_all(doc, ANCHOR_SELECTOR) {
        let doc_in = doc.clone();
        let anchor_in = anchor.clone();
        dom::listen(&anchor, "click", move |event| {
            event.prevent_default();

            let Some(href) = anchor_in.get_attribute("href") else {
                return;
            };
            let Some(selector) = anchor_fragment(&href) else {
                return;
            };
            let Some(target) = dom::query(&doc_in, selector).and_then(|el| el.dyn_into::<HtmlElement>().ok())
            else {
                return;
            };

            let header_height = dom::query(&doc_in, HEADER_SELECTOR)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                .map_or(0.0, |header| f64::from(header.offset_height()));

            scroll_to(destination(f64::from(target.offset_top()), header_height));
        })?;
    }
    Ok(())
}

/// Wire the floating scroll-top button.
///
/// No-op entirely when the button is absent.
pub fn wire_top_button(doc: &Document) -> Result<(), JsValue> {
    let Some(button) = doc.get_element_by_id(SCROLL_TOP_ID) else {
        log::debug!("scroll: no #{SCROLL_TOP_ID} element, skipping");
        return Ok(());
    };
    let Some(window) = dom::window() else {
        return Ok(());
    };

    {
        let button_in = button.clone();
        let window_in = window.clone();
        dom::listen(&window, "scroll", move |_event| {
            let offset = window_in.scroll_y().unwrap_or(0.0);
            dom::set_class(&button_in, ACTIVE_CLASS, top_button_visible(offset));
        })?;
    }

    dom::listen(&button, "click", move |_event| {
        scroll_to(0.0);
    })?;

    Ok(())
}
