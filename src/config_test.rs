use super::*;

#[test]
fn override_wins_in_both_modes() {
    assert_eq!(select_base(Some("https://api.example.com"), true), "https://api.example.com");
    assert_eq!(select_base(Some("https://api.example.com"), false), "https://api.example.com");
}

#[test]
fn debug_defaults_to_dev_origin() {
    assert_eq!(select_base(None, true), DEV_API_URL);
}

#[test]
fn release_defaults_to_same_origin() {
    assert_eq!(select_base(None, false), "");
}

#[test]
fn dev_origin_has_no_trailing_slash() {
    assert!(!DEV_API_URL.ends_with('/'));
}
