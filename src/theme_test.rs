use super::*;

// --- Stored-value interpretation ---

#[test]
fn absent_value_means_light() {
    assert_eq!(Theme::from_stored(None), Theme::Light);
}

#[test]
fn stored_light_means_light() {
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
}

#[test]
fn stored_dark_means_dark() {
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
}

#[test]
fn unrecognized_value_means_light() {
    assert_eq!(Theme::from_stored(Some("solarized")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("DARK")), Theme::Light);
}

// --- Persisted representation ---

#[test]
fn as_str_round_trips_through_from_stored() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::from_stored(Some(theme.as_str())), theme);
    }
}

// --- Toggling ---

#[test]
fn toggle_inverts_both_ways() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn flag_present_iff_dark_after_any_toggle_count() {
    let mut theme = Theme::Light;
    for clicks in 1..=8 {
        theme = theme.toggled();
        assert_eq!(theme.is_dark(), clicks % 2 == 1);
    }
}

#[test]
fn default_is_light() {
    assert!(!Theme::default().is_dark());
}
