//! Score badge for composite ESG values.

#[cfg(test)]
#[path = "esg_badge_test.rs"]
mod esg_badge_test;

use leptos::prelude::*;

/// Map a 0-100 score to its display tier: label plus BEM modifier class.
/// The cutoffs match the dashboard's traffic-light reading of scores.
pub(crate) fn score_tier(score: f64) -> (&'static str, &'static str) {
    if score >= 70.0 {
        ("High", "esg-badge--high")
    } else if score >= 40.0 {
        ("Medium", "esg-badge--medium")
    } else {
        ("Low", "esg-badge--low")
    }
}

/// Small pill showing a rounded score and its tier.
#[component]
pub fn EsgBadge(score: f64) -> impl IntoView {
    let (label, modifier) = score_tier(score);

    view! {
        <span class=format!("esg-badge {modifier}")>
            <span class="esg-badge__score">{format!("{score:.0}")}</span>
            <span class="esg-badge__label">{label}</span>
        </span>
    }
}
