//! Shared application state provided to components via context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` owns the authenticated-session record and the actions that
//! change it; `portfolio` holds the holdings list the portfolio page works
//! on. Both are provided once at the app root so pages never reach for
//! globals.

pub mod portfolio;
pub mod session;

pub use portfolio::PortfolioState;
pub use session::{LoginOutcome, SessionState, SessionStore};
