//! Client-side signup validation.
//!
//! DESIGN
//! ======
//! These checks duplicate the backend's signup rules, message for message,
//! so the form can reject bad input without a round trip. The backend
//! still validates; anything it rejects lands in the same field-keyed map
//! and renders the same way. One inherited quirk is kept: date-format and
//! age problems are keyed under `dob`, not `date_of_birth`.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use chrono::{Datelike, NaiveDate};

use crate::net::types::FieldErrors;

/// Message shown when the duplicate-email probe answers yes.
pub const EMAIL_TAKEN: &str = "Email is already registered.";

/// Raw form values as typed, before any parsing.
#[derive(Clone, Copy, Debug, Default)]
pub struct SignupInput<'a> {
    pub first_name: &'a str,
    pub middle_name: &'a str,
    pub last_name: &'a str,
    pub country: &'a str,
    pub date_of_birth: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
}

/// Check a signup form against the backend's rules.
///
/// Returns the field-keyed messages plus the parsed date of birth when the
/// date field parsed at all. Format checks only apply to fields that were
/// filled in; empty fields get their required message alone.
pub fn validate_signup(input: &SignupInput<'_>, today: NaiveDate) -> (FieldErrors, Option<NaiveDate>) {
    let mut errors = FieldErrors::new();

    require(&mut errors, "first_name", "First name is required.", input.first_name);
    require(&mut errors, "last_name", "Last name is required.", input.last_name);
    require(&mut errors, "country", "Country is required.", input.country);
    require(&mut errors, "date_of_birth", "Date of birth is required.", input.date_of_birth);
    require(&mut errors, "email", "Email is required.", input.email);
    require(&mut errors, "password", "Password is required.", input.password);
    require(&mut errors, "confirm_password", "Confirm password is required.", input.confirm_password);

    if !input.email.is_empty() && !is_valid_email(input.email) {
        errors.insert("email".to_owned(), "Invalid email format.".to_owned());
    }

    if !input.password.is_empty() && !password_ok(input.password) {
        errors.insert(
            "password".to_owned(),
            "Password must contain at least 8 characters, a number, and a special character."
                .to_owned(),
        );
    }

    if input.password != input.confirm_password {
        errors.insert("confirm_password".to_owned(), "Passwords do not match.".to_owned());
    }

    let mut dob = None;
    if !input.date_of_birth.is_empty() {
        match NaiveDate::parse_from_str(input.date_of_birth, "%Y-%m-%d") {
            Ok(parsed) => {
                dob = Some(parsed);
                if age_on(today, parsed) < 18 {
                    errors.insert(
                        "dob".to_owned(),
                        "You must be at least 18 years old to sign up.".to_owned(),
                    );
                }
            }
            Err(_) => {
                errors.insert("dob".to_owned(), "Invalid date format.".to_owned());
            }
        }
    }

    (errors, dob)
}

/// Fold `dob`-keyed messages onto the date field for display. A message
/// already keyed on the field wins; the `dob` one fills in otherwise.
pub fn display_errors(mut errors: FieldErrors) -> FieldErrors {
    if let Some(message) = errors.remove("dob") {
        errors.entry("date_of_birth".to_owned()).or_insert(message);
    }
    errors
}

fn require(errors: &mut FieldErrors, key: &str, message: &str, value: &str) {
    if value.is_empty() {
        errors.insert(key.to_owned(), message.to_owned());
    }
}

/// Structural email check: one `@`, a non-empty local part, and a dotted
/// domain. The backend has the authoritative validator.
pub(crate) fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !host.starts_with('.') && tld.len() >= 2
}

/// Password policy: at least 8 characters, a letter, a digit, and one of
/// `@$!%*?&`, with no characters outside that set.
pub(crate) fn password_ok(password: &str) -> bool {
    const SPECIALS: &str = "@$!%*?&";
    password.chars().count() >= 8
        && password.chars().all(|c| c.is_ascii_alphanumeric() || SPECIALS.contains(c))
        && password.chars().any(|c| c.is_ascii_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| SPECIALS.contains(c))
}

/// Whole years between `dob` and `today`, not counting a birthday that has
/// not come around yet this year.
pub(crate) fn age_on(today: NaiveDate, dob: NaiveDate) -> i32 {
    today.year() - dob.year() - i32::from((today.month(), today.day()) < (dob.month(), dob.day()))
}
