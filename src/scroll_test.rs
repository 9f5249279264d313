#![allow(clippy::float_cmp)]

use super::*;

// --- anchor_fragment ---

#[test]
fn fragment_href_is_kept_as_selector() {
    assert_eq!(anchor_fragment("#about"), Some("#about"));
}

#[test]
fn bare_hash_resolves_to_nothing() {
    assert_eq!(anchor_fragment("#"), None);
}

#[test]
fn non_fragment_href_resolves_to_nothing() {
    assert_eq!(anchor_fragment("https://example.com/#about"), None);
    assert_eq!(anchor_fragment("about"), None);
    assert_eq!(anchor_fragment(""), None);
}

// --- destination ---

#[test]
fn destination_subtracts_header_height() {
    assert_eq!(destination(800.0, 80.0), 720.0);
}

#[test]
fn destination_without_header_is_the_element_offset() {
    assert_eq!(destination(800.0, 0.0), 800.0);
}

#[test]
fn destination_can_go_negative_for_targets_above_the_header() {
    assert_eq!(destination(50.0, 80.0), -30.0);
}

// --- top_button_visible ---

#[test]
fn hidden_at_origin() {
    assert!(!top_button_visible(0.0));
}

#[test]
fn hidden_just_below_the_threshold() {
    assert!(!top_button_visible(299.0));
}

#[test]
fn visible_at_the_threshold() {
    assert!(top_button_visible(300.0));
}

#[test]
fn visible_beyond_the_threshold() {
    assert!(top_button_visible(301.0));
    assert!(top_button_visible(10_000.0));
}
