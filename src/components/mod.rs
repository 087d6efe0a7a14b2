//! Reusable view components shared across pages.

pub mod esg_badge;
pub mod nav_bar;
