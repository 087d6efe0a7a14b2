//! Utility helpers shared across pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` applies the shared unauthenticated-redirect behavior, `validate`
//! holds the client-side signup checks, and `clock` isolates the browser
//! date source so validation stays testable off the browser.

pub mod auth;
pub mod clock;
pub mod validate;
