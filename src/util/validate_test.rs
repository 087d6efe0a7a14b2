use super::*;

fn valid_input() -> SignupInput<'static> {
    SignupInput {
        first_name: "Ada",
        middle_name: "",
        last_name: "Material",
        country: "Norway",
        date_of_birth: "1990-04-01",
        email: "ada@example.com",
        password: "griStle9!",
        confirm_password: "griStle9!",
    }
}

fn june_15_2025() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

// =============================================================================
// Whole-form checks
// =============================================================================

#[test]
fn a_valid_form_passes_with_a_parsed_date() {
    let (errors, dob) = validate_signup(&valid_input(), june_15_2025());
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    assert_eq!(dob, NaiveDate::from_ymd_opt(1990, 4, 1));
}

#[test]
fn an_empty_form_reports_every_required_field() {
    let (errors, dob) = validate_signup(&SignupInput::default(), june_15_2025());

    assert_eq!(errors.get("first_name").map(String::as_str), Some("First name is required."));
    assert_eq!(errors.get("last_name").map(String::as_str), Some("Last name is required."));
    assert_eq!(errors.get("country").map(String::as_str), Some("Country is required."));
    assert_eq!(
        errors.get("date_of_birth").map(String::as_str),
        Some("Date of birth is required.")
    );
    assert_eq!(errors.get("email").map(String::as_str), Some("Email is required."));
    assert_eq!(errors.get("password").map(String::as_str), Some("Password is required."));
    assert_eq!(
        errors.get("confirm_password").map(String::as_str),
        Some("Confirm password is required.")
    );

    // Format checks do not pile onto empty fields.
    assert_eq!(errors.len(), 7);
    assert_eq!(dob, None);
}

#[test]
fn a_malformed_email_is_flagged() {
    let input = SignupInput { email: "ada.example.com", ..valid_input() };
    let (errors, _) = validate_signup(&input, june_15_2025());
    assert_eq!(errors.get("email").map(String::as_str), Some("Invalid email format."));
}

#[test]
fn a_weak_password_gets_the_policy_message() {
    let input = SignupInput { password: "letmein", confirm_password: "letmein", ..valid_input() };
    let (errors, _) = validate_signup(&input, june_15_2025());
    assert_eq!(
        errors.get("password").map(String::as_str),
        Some("Password must contain at least 8 characters, a number, and a special character.")
    );
}

#[test]
fn mismatched_passwords_are_flagged_on_the_confirmation() {
    let input = SignupInput { confirm_password: "griStle9?", ..valid_input() };
    let (errors, _) = validate_signup(&input, june_15_2025());
    assert_eq!(errors.get("confirm_password").map(String::as_str), Some("Passwords do not match."));
}

#[test]
fn an_unparseable_date_is_keyed_under_dob() {
    let input = SignupInput { date_of_birth: "01/04/1990", ..valid_input() };
    let (errors, dob) = validate_signup(&input, june_15_2025());
    assert_eq!(errors.get("dob").map(String::as_str), Some("Invalid date format."));
    assert!(errors.get("date_of_birth").is_none());
    assert_eq!(dob, None);
}

#[test]
fn an_eighteenth_birthday_today_is_old_enough() {
    let input = SignupInput { date_of_birth: "2007-06-15", ..valid_input() };
    let (errors, _) = validate_signup(&input, june_15_2025());
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
}

#[test]
fn one_day_short_of_eighteen_is_rejected() {
    let input = SignupInput { date_of_birth: "2007-06-16", ..valid_input() };
    let (errors, dob) = validate_signup(&input, june_15_2025());
    assert_eq!(
        errors.get("dob").map(String::as_str),
        Some("You must be at least 18 years old to sign up.")
    );
    // The date itself parsed fine.
    assert_eq!(dob, NaiveDate::from_ymd_opt(2007, 6, 16));
}

#[test]
fn display_errors_folds_dob_onto_the_date_field() {
    let mut errors = FieldErrors::new();
    errors.insert("dob".to_owned(), "Invalid date format.".to_owned());

    let displayed = display_errors(errors);
    assert_eq!(displayed.get("date_of_birth").map(String::as_str), Some("Invalid date format."));
    assert!(displayed.get("dob").is_none());
}

#[test]
fn display_errors_keeps_an_existing_date_message() {
    let mut errors = FieldErrors::new();
    errors.insert("date_of_birth".to_owned(), "Date of birth is required.".to_owned());
    errors.insert("dob".to_owned(), "Invalid date format.".to_owned());

    let displayed = display_errors(errors);
    assert_eq!(
        displayed.get("date_of_birth").map(String::as_str),
        Some("Date of birth is required.")
    );
}

// =============================================================================
// Individual checks
// =============================================================================

#[test]
fn email_structure_cases() {
    assert!(is_valid_email("ada@example.com"));
    assert!(is_valid_email("first.last@sub.example.co"));

    assert!(!is_valid_email("ada"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("ada@"));
    assert!(!is_valid_email("ada@example"));
    assert!(!is_valid_email("ada@.com"));
    assert!(!is_valid_email("ada@example.c"));
    assert!(!is_valid_email("a da@example.com"));
    assert!(!is_valid_email("ada@exa@mple.com"));
}

#[test]
fn password_policy_cases() {
    assert!(password_ok("abcdef1@"));
    assert!(password_ok("griStle9!"));

    assert!(!password_ok("short1!"));
    assert!(!password_ok("nodigits!!"));
    assert!(!password_ok("nospecial11"));
    assert!(!password_ok("12345678@"));
    assert!(!password_ok("bad pass1!"));
    assert!(!password_ok("outside#set1"));
}

#[test]
fn age_counts_birthdays_not_calendar_years() {
    let dob = NaiveDate::from_ymd_opt(2007, 6, 15).unwrap();
    assert_eq!(age_on(june_15_2025(), dob), 18);

    let later_dob = NaiveDate::from_ymd_opt(2007, 6, 16).unwrap();
    assert_eq!(age_on(june_15_2025(), later_dob), 17);
}

#[test]
fn leap_day_birthdays_roll_over_on_march_first() {
    let dob = NaiveDate::from_ymd_opt(2008, 2, 29).unwrap();

    let feb_28 = NaiveDate::from_ymd_opt(2026, 2, 28).unwrap();
    assert_eq!(age_on(feb_28, dob), 17);

    let mar_1 = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    assert_eq!(age_on(mar_1, dob), 18);
}
