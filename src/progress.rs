//! Progress-bar width animation, played the first time each bar becomes
//! fully visible.
//!
//! On startup and on every scroll event, any `.progress` element whose
//! bounding box lies entirely inside the viewport has its inline width
//! replayed from zero, letting the CSS transition animate it up to the
//! declared value. A wiring-held set of element references guarantees the
//! replay happens at most once per element per page load.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use crate::consts::{ANIMATED_CLASS, PROGRESS_SELECTOR};
use crate::dom;

/// An element's bounding box in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

/// Strict full containment: every edge of the box lies inside the viewport.
/// Partial intersection does not count.
#[must_use]
pub fn fully_visible(rect: Rect, viewport_width: f64, viewport_height: f64) -> bool {
    rect.top >= 0.0 && rect.left >= 0.0 && rect.bottom <= viewport_height && rect.right <= viewport_width
}

/// Viewport dimensions, falling back to the root element's client box when
/// the window inner size is unavailable.
fn viewport_size(window: &Window, doc: &Document) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or_else(|| doc.document_element().map_or(0.0, |el| f64::from(el.client_width())));
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or_else(|| doc.document_element().map_or(0.0, |el| f64::from(el.client_height())));
    (width, height)
}

/// Replay the width transition: zero the width, force a layout pass so the
/// zero write is not coalesced with the restore, then restore the declared
/// width. The transition timing itself is CSS-owned.
fn play_width_animation(bar: &HtmlElement) {
    let style = bar.style();
    let target = match style.get_property_value("width") {
        Ok(width) => width,
        Err(err) => {
            log::warn!("progress: failed to read declared width: {err:?}");
            return;
        }
    };
    if let Err(err) = style.set_property("width", "0") {
        log::warn!("progress: failed to zero width: {err:?}");
        return;
    }
    bar.offset_width(); // forced layout between the two width writes
    if let Err(err) = style.set_property("width", &target) {
        log::warn!("progress: failed to restore width {target:?}: {err:?}");
    }
}

/// Animate every not-yet-animated progress bar that is fully in view.
fn reveal_visible(doc: &Document, window: &Window, animated: &RefCell<Vec<Element>>) {
    let (viewport_width, viewport_height) = viewport_size(window, doc);

    for bar in dom::query_all(doc, PROGRESS_SELECTOR) {
        if animated.borrow().iter().any(|seen| *seen == bar) {
            continue;
        }

        let bounds = bar.get_bounding_client_rect();
        let rect = Rect {
            top: bounds.top(),
            left: bounds.left(),
            bottom: bounds.bottom(),
            right: bounds.right(),
        };
        if !fully_visible(rect, viewport_width, viewport_height) {
            continue;
        }

        if let Some(html) = bar.dyn_ref::<HtmlElement>() {
            play_width_animation(html);
        }
        dom::set_class(&bar, ANIMATED_CLASS, true);
        animated.borrow_mut().push(bar);
    }
}

/// Run the initial visibility pass and re-check on every scroll event.
pub fn wire(doc: &Document) -> Result<(), JsValue> {
    let Some(window) = dom::window() else {
        return Ok(());
    };

    let animated: Rc<RefCell<Vec<Element>>> = Rc::new(RefCell::new(Vec::new()));

    reveal_visible(doc, &window, &animated);

    let doc_in = doc.clone();
    let window_in = window.clone();
    let animated_in = Rc::clone(&animated);
    dom::listen(&window, "scroll", move |_event| {
        reveal_visible(&doc_in, &window_in, &animated_in);
    })?;

    Ok(())
}
