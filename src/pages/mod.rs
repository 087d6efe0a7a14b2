//! Page components, one per route table entry.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages read shared state through the contexts provided in
//! [`crate::app::App`] and talk to the backend through
//! [`crate::net::api`]. Pages behind a login install the shared
//! unauthenticated-redirect guard from [`crate::util::auth`].

pub mod account;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod portfolio;
pub mod preferences;
pub mod settings;
pub mod signup;
