//! Mobile navigation toggle.
//!
//! The hamburger button opens and closes the collapsible nav-link container;
//! clicking any individual link closes the menu again. While open, both the
//! button and the container carry the `active` class flag and the styling
//! layer does the actual show/hide.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::consts::{ACTIVE_CLASS, HAMBURGER_SELECTOR, NAV_LINKS_SELECTOR, NAV_LINK_SELECTOR};
use crate::dom;

/// Open/closed state of the collapsible menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    /// Menu hidden; neither element carries the flag.
    #[default]
    Closed,
    /// Menu shown; both elements carry the flag.
    Open,
}

impl MenuState {
    /// The state after a hamburger click.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// Whether the `active` flag should be present in this state.
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Wire the hamburger and nav-link container.
///
/// No-op when either element is absent.
pub fn wire(doc: &Document) -> Result<(), JsValue> {
    let Some(hamburger) = dom::query(doc, HAMBURGER_SELECTOR) else {
        log::debug!("menu: no {HAMBURGER_SELECTOR} element, skipping");
        return Ok(());
    };
    let Some(nav_links) = dom::query(doc, NAV_LINKS_SELECTOR) else {
        log::debug!("menu: no {NAV_LINKS_SELECTOR} element, skipping");
        return Ok(());
    };

    let state = Rc::new(Cell::new(MenuState::Closed));

    {
        let state = Rc::clone(&state);
        let hamburger_in = hamburger.clone();
        let nav_links_in = nav_links.clone();
        dom::listen(&hamburger, "click", move |_event| {
            let next = state.get().toggled();
            state.set(next);
            dom::set_class(&hamburger_in, ACTIVE_CLASS, next.is_open());
            dom::set_class(&nav_links_in, ACTIVE_CLASS, next.is_open());
        })?;
    }

    // Any nav link closes the menu, whatever state it was in.
    for link in dom::query_all(doc, NAV_LINK_SELECTOR) {
        let state = Rc::clone(&state);
        let hamburger_in = hamburger.clone();
        let nav_links_in = nav_links.clone();
        dom::listen(&link, "click", move |_event| {
            state.set(MenuState::Closed);
            dom::set_class(&hamburger_in, ACTIVE_CLASS, false);
            dom::set_class(&nav_links_in, ACTIVE_CLASS, false);
        })?;
    }

    Ok(())
}
