//! Build-mode API address configuration.
//!
//! DESIGN
//! ======
//! Debug builds talk to the backend dev server on its own origin (which is
//! why the transport includes credentials and echoes the CSRF cookie);
//! release builds are served from the backend's static files and call the
//! API same-origin. `ECOVEST_API_URL` overrides both at compile time.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend origin used by debug builds.
const DEV_API_URL: &str = "http://localhost:8000";

/// Base address prepended to every API path.
///
/// Empty means same-origin; endpoint paths always carry the root-relative
/// `/api/...` prefix themselves.
pub fn api_base() -> &'static str {
    select_base(option_env!("ECOVEST_API_URL"), cfg!(debug_assertions))
}

fn select_base(override_url: Option<&'static str>, debug: bool) -> &'static str {
    match override_url {
        Some(url) => url,
        None if debug => DEV_API_URL,
        None => "",
    }
}
