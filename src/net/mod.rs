//! Networking modules for the EcoVest HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the transport adapter (base address, credentials, CSRF header),
//! `api` wraps each backend endpoint, and `types` defines the wire schema.

pub mod api;
pub mod http;
pub mod types;

pub use http::{Error, Http, HttpResponse};
