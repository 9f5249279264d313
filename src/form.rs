//! Contact-form validation.
//!
//! Submission is intercepted and the three required fields are checked
//! independently. Invalid fields get the `error` class flag plus a message in
//! the sibling error region; valid fields get both cleared. When everything
//! passes, submission is simulated with an acknowledgment alert and the form
//! is reset. No network call is ever made.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use crate::consts::{
    CONTACT_FORM_ID, EMAIL_FIELD_ID, ERROR_CLASS, ERROR_MESSAGE_SELECTOR, MESSAGE_FIELD_ID, NAME_FIELD_ID,
};
use crate::dom;

/// The three required contact-form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// Error message shown when the field's trimmed value is empty.
    #[must_use]
    pub fn empty_message(self) -> &'static str {
        match self {
            Self::Name => "Please enter your name",
            Self::Email => "Please enter your email",
            Self::Message => "Please enter your message",
        }
    }
}

/// Message for a non-empty email value that fails the shape check.
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

/// Acknowledgment shown when every field passes. Submission is simulated.
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Message sent successfully! (This is a simulation)";

/// Shape check for email addresses: one `@` separating a non-empty local run
/// from a domain holding a `.` with non-empty runs around it, and no
/// whitespace anywhere. Deliberately looser than RFC 5322.
#[must_use]
pub fn email_shape_ok(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tail)) => !host.is_empty() && !tail.is_empty(),
        None => false,
    }
}

/// Validate one field: required (trimmed), plus the shape check for email.
///
/// The shape check runs on the raw value, so surrounding whitespace fails an
/// otherwise well-formed address.
#[must_use]
pub fn validate_field(field: Field, value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        return Some(field.empty_message());
    }
    if field == Field::Email && !email_shape_ok(value) {
        return Some(INVALID_EMAIL_MESSAGE);
    }
    None
}

/// Per-field verdicts for one submit attempt.
///
/// Fields are checked independently; a later field's verdict never depends
/// on an earlier failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Validation {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl Validation {
    /// Whether the submission should be treated as successful.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

/// Validate the whole form.
#[must_use]
pub fn validate(name: &str, email: &str, message: &str) -> Validation {
    Validation {
        name: validate_field(Field::Name, name),
        email: validate_field(Field::Email, email),
        message: validate_field(Field::Message, message),
    }
}

/// Current value of a field element (text input or textarea).
fn field_value(el: &Element) -> Option<String> {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    el.dyn_ref::<HtmlTextAreaElement>().map(HtmlTextAreaElement::value)
}

/// Render one field's verdict: the `error` class flag plus the error-region
/// text inside the field's wrapper.
///
/// A wrapper without an error region keeps the class flag but has nowhere to
/// put the message; that structural gap is logged rather than faulting.
fn render_verdict(field_el: &Element, verdict: Option<&'static str>) {
    dom::set_class(field_el, ERROR_CLASS, verdict.is_some());
    let region = field_el
        .parent_element()
        .and_then(|wrapper| dom::query_within(&wrapper, ERROR_MESSAGE_SELECTOR));
    match region {
        Some(region) => region.set_text_content(Some(verdict.unwrap_or(""))),
        None => log::warn!("form: field wrapper has no {ERROR_MESSAGE_SELECTOR} region"),
    }
}

/// Wire the contact form's submit handler.
///
/// No-op when the form or any of the three fields is absent.
pub fn wire(doc: &Document) -> Result<(), JsValue> {
    let Some(form) = doc
        .get_element_by_id(CONTACT_FORM_ID)
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        log::debug!("form: no #{CONTACT_FORM_ID} form, skipping");
        return Ok(());
    };
    let (Some(name), Some(email), Some(message)) = (
        doc.get_element_by_id(NAME_FIELD_ID),
        doc.get_element_by_id(EMAIL_FIELD_ID),
        doc.get_element_by_id(MESSAGE_FIELD_ID),
    ) else {
        log::debug!("form: missing name/email/message fields, skipping");
        return Ok(());
    };

    let form_in = form.clone();
    dom::listen(&form, "submit", move |event| {
        event.prevent_default();

        let verdicts = validate(
            &field_value(&name).unwrap_or_default(),
            &field_value(&email).unwrap_or_default(),
            &field_value(&message).unwrap_or_default(),
        );

        render_verdict(&name, verdicts.name);
        render_verdict(&email, verdicts.email);
        render_verdict(&message, verdicts.message);

        if verdicts.is_valid() {
            dom::alert(SUBMIT_SUCCESS_MESSAGE);
            form_in.reset();
        }
    })?;

    Ok(())
}
