use super::*;

// ============================================================
// parse_money
// ============================================================

#[test]
fn blank_money_field_is_not_recorded() {
    assert_eq!(parse_money(""), Ok(None));
    assert_eq!(parse_money("   "), Ok(None));
}

#[test]
fn plain_numbers_parse_with_surrounding_whitespace() {
    assert_eq!(parse_money("1500"), Ok(Some(1500.0)));
    assert_eq!(parse_money(" 99.95 "), Ok(Some(99.95)));
}

#[test]
fn garbage_reports_the_offending_text() {
    let error = parse_money("12,50").unwrap_err();
    assert!(error.contains("12,50"), "unexpected message: {error}");
    assert!(parse_money("$40").is_err());
}
