//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::routes::{self, RouteName};
use crate::state::{PortfolioState, SessionStore};

/// Root application component.
///
/// Provides the session store and portfolio state as contexts, kicks off
/// the initial session probe, and sets up client-side routing. Paths are
/// resolved through the central route table so deferred pages are only
/// built on first visit.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::new();
    provide_context(store.clone());
    provide_context(RwSignal::new(PortfolioState::default()));

    // Ask the backend who is logged in before pages render their
    // session-dependent chrome.
    #[cfg(feature = "csr")]
    {
        let store = store.clone();
        leptos::task::spawn_local(async move {
            if let Err(error) = store.fetch_user().await {
                log::error!("session probe failed: {error}");
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = &store;
    }

    view! {
        <Title text="EcoVest"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route
                        path=StaticSegment("")
                        view=|| routes::table().view_of(RouteName::Home)
                    />
                    <Route
                        path=StaticSegment("login")
                        view=|| routes::table().view_of(RouteName::Login)
                    />
                    <Route
                        path=StaticSegment("signup")
                        view=|| routes::table().view_of(RouteName::Signup)
                    />
                    <Route
                        path=StaticSegment("account")
                        view=|| routes::table().view_of(RouteName::Account)
                    />
                    <Route
                        path=(StaticSegment("account"), StaticSegment("preferences"))
                        view=|| routes::table().view_of(RouteName::Preferences)
                    />
                    <Route
                        path=(StaticSegment("account"), StaticSegment("settings"))
                        view=|| routes::table().view_of(RouteName::Settings)
                    />
                    <Route
                        path=(StaticSegment("account"), StaticSegment("portfolio"))
                        view=|| routes::table().view_of(RouteName::Portfolio)
                    />
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| routes::table().view_of(RouteName::Dashboard)
                    />
                </Routes>
            </main>
        </Router>
    }
}
