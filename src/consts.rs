//! Shared names and thresholds for the page behaviors.

// ── Storage ─────────────────────────────────────────────────────

/// `localStorage` key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

// ── Class flags ─────────────────────────────────────────────────

/// Open/visible flag shared by the hamburger, nav links, and scroll-top button.
pub const ACTIVE_CLASS: &str = "active";

/// Dark theme flag applied to the document root element.
pub const DARK_THEME_CLASS: &str = "dark-theme";

/// Invalid-field flag applied to contact-form inputs.
pub const ERROR_CLASS: &str = "error";

/// One-shot marker for progress bars that have played their width animation.
pub const ANIMATED_CLASS: &str = "animated";

// ── Selectors and ids ───────────────────────────────────────────

pub const HAMBURGER_SELECTOR: &str = ".hamburger";
pub const NAV_LINKS_SELECTOR: &str = ".nav-links";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const THEME_TOGGLE_SELECTOR: &str = ".theme-toggle";
pub const ANCHOR_SELECTOR: &str = "a[href^='#']";
pub const HEADER_SELECTOR: &str = "header";
pub const ERROR_MESSAGE_SELECTOR: &str = ".error-message";
pub const PROGRESS_SELECTOR: &str = ".progress";

pub const SCROLL_TOP_ID: &str = "scroll-top";
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const NAME_FIELD_ID: &str = "name";
pub const EMAIL_FIELD_ID: &str = "email";
pub const MESSAGE_FIELD_ID: &str = "message";

// ── Scrolling ───────────────────────────────────────────────────

/// Scroll offset (CSS pixels) at and beyond which the scroll-top button shows.
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;
