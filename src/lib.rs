//! # ecovest-client
//!
//! Leptos + WASM frontend for the EcoVest sustainable-investing service.
//! A single-page client: session state, routing, and all API traffic run
//! through this crate, speaking JSON to the EcoVest backend at the
//! configured base address with cookie-based sessions and CSRF headers.
//!
//! The crate compiles in two shapes: with the `csr` feature for the
//! browser bundle, and without it for native unit tests, where every
//! network call reports itself unavailable instead of touching the DOM.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;
