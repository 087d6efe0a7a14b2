//! Session-aware top navigation bar.

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
#[cfg(feature = "csr")]
use leptos_router::hooks::use_navigate;

use crate::routes::RouteName;
use crate::state::SessionStore;

/// Site-wide navigation. Shows the app sections and a logout button while
/// a session is live, and login/signup links otherwise.
#[component]
pub fn NavBar() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let session = store.session();

    #[cfg(feature = "csr")]
    let navigate = use_navigate();

    // Callback so the logged-in branch can re-render without consuming it.
    let on_logout = Callback::new(move |()| {
        #[cfg(feature = "csr")]
        {
            let store = store.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                if let Err(error) = store.logout().await {
                    log::error!("logout call failed: {error}");
                }
                // Local state is already reset either way.
                navigate(RouteName::Login.path(), NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &store;
        }
    });

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href=RouteName::Home.path()>"EcoVest"</a>
            <Show
                when=move || session.get().logged_in
                fallback=move || {
                    view! {
                        <div class="nav-bar__links">
                            <a class="nav-bar__link" href=RouteName::Login.path()>"Log in"</a>
                            <a
                                class="nav-bar__link nav-bar__link--primary"
                                href=RouteName::Signup.path()
                            >
                                "Sign up"
                            </a>
                        </div>
                    }
                }
            >
                <div class="nav-bar__links">
                    <a class="nav-bar__link" href=RouteName::Dashboard.path()>"Dashboard"</a>
                    <a class="nav-bar__link" href=RouteName::Portfolio.path()>"Portfolio"</a>
                    <a class="nav-bar__link" href=RouteName::Account.path()>"Account"</a>
                    <span class="nav-bar__user">
                        {move || session.get().user.map(|u| u.email).unwrap_or_default()}
                    </span>
                    <button class="nav-bar__logout" on:click=move |_| on_logout.run(())>
                        "Log out"
                    </button>
                </div>
            </Show>
        </nav>
    }
}
