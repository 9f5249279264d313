use super::*;

// --- Email shape ---

#[test]
fn plain_address_passes() {
    assert!(email_shape_ok("a@b.co"));
    assert!(email_shape_ok("ada@example.com"));
}

#[test]
fn missing_dot_segment_fails() {
    assert!(!email_shape_ok("a@b"));
}

#[test]
fn embedded_whitespace_fails() {
    assert!(!email_shape_ok("a b@c.com"));
    assert!(!email_shape_ok("a@b .co"));
}

#[test]
fn surrounding_whitespace_fails() {
    assert!(!email_shape_ok(" a@b.co"));
    assert!(!email_shape_ok("a@b.co "));
}

#[test]
fn empty_local_part_fails() {
    assert!(!email_shape_ok("@b.com"));
}

#[test]
fn second_at_sign_fails() {
    assert!(!email_shape_ok("a@b.c@d.co"));
}

#[test]
fn empty_domain_runs_fail() {
    assert!(!email_shape_ok("a@.co"));
    assert!(!email_shape_ok("a@b."));
    assert!(!email_shape_ok("a@"));
}

#[test]
fn dotted_subdomains_pass() {
    assert!(email_shape_ok("a@mail.example.co"));
}

// --- Single-field validation ---

#[test]
fn empty_name_gets_the_name_message() {
    assert_eq!(validate_field(Field::Name, ""), Some("Please enter your name"));
}

#[test]
fn whitespace_only_values_count_as_empty() {
    assert_eq!(validate_field(Field::Name, "   "), Some("Please enter your name"));
    assert_eq!(validate_field(Field::Message, "\n\t"), Some("Please enter your message"));
}

#[test]
fn empty_email_reports_missing_not_malformed() {
    assert_eq!(validate_field(Field::Email, ""), Some("Please enter your email"));
}

#[test]
fn malformed_email_gets_the_shape_message() {
    assert_eq!(validate_field(Field::Email, "bad-email"), Some(INVALID_EMAIL_MESSAGE));
}

#[test]
fn padded_email_fails_the_shape_check_on_the_raw_value() {
    // Trimming only decides emptiness; the shape check sees the raw value.
    assert_eq!(validate_field(Field::Email, " ada@example.com "), Some(INVALID_EMAIL_MESSAGE));
}

#[test]
fn valid_values_produce_no_message() {
    assert_eq!(validate_field(Field::Name, "Ada"), None);
    assert_eq!(validate_field(Field::Email, "ada@example.com"), None);
    assert_eq!(validate_field(Field::Message, "hello"), None);
}

// --- Whole-form validation ---

#[test]
fn mixed_failure_flags_each_field_independently() {
    let verdicts = validate("", "bad-email", "hi");
    assert_eq!(verdicts.name, Some("Please enter your name"));
    assert_eq!(verdicts.email, Some(INVALID_EMAIL_MESSAGE));
    assert_eq!(verdicts.message, None);
    assert!(!verdicts.is_valid());
}

#[test]
fn all_fields_valid_takes_the_success_path() {
    let verdicts = validate("Ada", "ada@example.com", "hello");
    assert_eq!(verdicts, Validation::default());
    assert!(verdicts.is_valid());
}

#[test]
fn all_fields_empty_reports_all_three() {
    let verdicts = validate("", "", "");
    assert!(verdicts.name.is_some());
    assert!(verdicts.email.is_some());
    assert!(verdicts.message.is_some());
}

#[test]
fn later_fields_are_checked_even_when_earlier_ones_fail() {
    let verdicts = validate("", "", "note");
    assert_eq!(verdicts.message, None);
}
