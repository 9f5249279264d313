//! Thin access layer over `web-sys`.
//!
//! Every feature module goes through these helpers so that "expected element
//! missing" short-circuits look the same everywhere, DOM API failures are
//! logged instead of unwrapped, and listener registration follows one
//! page-lifetime ownership pattern.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, Window};

/// The page window, when running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// The page document, when running in a browser.
#[must_use]
pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// First element matching `selector`, or `None`.
#[must_use]
pub fn query(doc: &Document, selector: &str) -> Option<Element> {
    doc.query_selector(selector).ok().flatten()
}

/// First descendant of `parent` matching `selector`, or `None`.
#[must_use]
pub fn query_within(parent: &Element, selector: &str) -> Option<Element> {
    parent.query_selector(selector).ok().flatten()
}

/// All elements matching `selector`, in document order.
#[must_use]
pub fn query_all(doc: &Document, selector: &str) -> Vec<Element> {
    let mut out = Vec::new();
    if let Ok(list) = doc.query_selector_all(selector) {
        for index in 0..list.length() {
            if let Some(el) = list.get(index).and_then(|node| node.dyn_into::<Element>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

/// Attach a page-lifetime event listener.
///
/// The closure is leaked via `forget`: listeners registered at startup live
/// exactly as long as the page, so there is nothing to unhook.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let function: &js_sys::Function = closure.as_ref().unchecked_ref();
    target.add_event_listener_with_callback(event, function)?;
    closure.forget();
    Ok(())
}

/// Add or remove a class flag on an element.
pub fn set_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let result = if on { list.add_1(class) } else { list.remove_1(class) };
    if let Err(err) = result {
        log::warn!("class update {class:?} failed: {err:?}");
    }
}

/// Whether the element currently carries `class`.
#[must_use]
pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

/// Show a blocking browser alert.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.alert_with_message(message) {
            log::warn!("alert failed: {err:?}");
        }
    }
}
