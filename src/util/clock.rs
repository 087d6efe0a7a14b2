//! Browser date source.
//!
//! Signup validation needs today's date for the age check. Reading it from
//! the JS clock is isolated here so the checks themselves stay pure and
//! testable off the browser.

use chrono::NaiveDate;

/// Today's date from the browser clock. Off the browser this returns the
/// epoch date, which no caller treats as meaningful.
pub fn today() -> NaiveDate {
    #[cfg(feature = "csr")]
    {
        let now = js_sys::Date::new_0();
        #[allow(clippy::cast_possible_wrap)]
        let year = now.get_full_year() as i32;
        // get_month is zero-based
        NaiveDate::from_ymd_opt(year, now.get_month() + 1, now.get_date()).unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        NaiveDate::default()
    }
}
