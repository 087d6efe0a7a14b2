//! Public landing page.

use leptos::prelude::*;

use crate::routes::RouteName;
use crate::state::SessionStore;

#[component]
pub fn HomePage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let session = store.session();

    view! {
        <section class="home-page">
            <div class="home-page__hero">
                <h1>"Invest in what lasts."</h1>
                <p class="home-page__tagline">
                    "Track your portfolio's value and its ESG footprint in one place, \
                     with scores, peer comparisons, and sustainability news for every holding."
                </p>
                <Show
                    when=move || session.get().logged_in
                    fallback=move || {
                        view! {
                            <div class="home-page__actions">
                                <a class="btn btn--primary" href=RouteName::Signup.path()>
                                    "Create an account"
                                </a>
                                <a class="btn" href=RouteName::Login.path()>"Log in"</a>
                            </div>
                        }
                    }
                >
                    <div class="home-page__actions">
                        <a class="btn btn--primary" href=RouteName::Dashboard.path()>
                            "Go to your dashboard"
                        </a>
                    </div>
                </Show>
            </div>
            <div class="home-page__features">
                <div class="feature-card">
                    <h2>"Scored holdings"</h2>
                    <p>"Every company in your portfolio carries a 0-100 ESG score built from reported metrics."</p>
                </div>
                <div class="feature-card">
                    <h2>"Peer context"</h2>
                    <p>"See how a company stacks up against its industry peers before you buy."</p>
                </div>
                <div class="feature-card">
                    <h2>"Your preferences"</h2>
                    <p>"Tell us your risk level and exclusions once; the app reads the market your way."</p>
                </div>
            </div>
        </section>
    }
}
