//! Account overview page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::routes::RouteName;
use crate::state::SessionStore;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn AccountPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    install_unauth_redirect(&store, use_navigate());
    let session = store.session();

    view! {
        <section class="account-page">
            <h1>"Account"</h1>
            {move || {
                session
                    .get()
                    .user
                    .map(|user| {
                        let name = [Some(user.first_name), user.middle_name, Some(user.last_name)]
                            .into_iter()
                            .flatten()
                            .collect::<Vec<_>>()
                            .join(" ");
                        let dob = user.date_of_birth.to_string();
                        view! {
                            <dl class="account-page__profile">
                                <dt>"Name"</dt>
                                <dd>{name}</dd>
                                <dt>"Email"</dt>
                                <dd>{user.email}</dd>
                                <dt>"Country"</dt>
                                <dd>{user.country}</dd>
                                <dt>"Date of birth"</dt>
                                <dd>{dob}</dd>
                            </dl>
                        }
                    })
            }}
            <Show when=move || session.get().user.is_some_and(|u| !u.preferences_completed)>
                <p class="account-page__nudge">
                    "Your investment preferences are not set yet. "
                    <a href=RouteName::Preferences.path()>"Complete them now."</a>
                </p>
            </Show>
            <nav class="account-page__links">
                <a class="link-card" href=RouteName::Preferences.path()>
                    <h2>"Preferences"</h2>
                    <p>"Risk level, strategy, and exclusions."</p>
                </a>
                <a class="link-card" href=RouteName::Settings.path()>
                    <h2>"Settings"</h2>
                    <p>"Name and country on the account."</p>
                </a>
                <a class="link-card" href=RouteName::Portfolio.path()>
                    <h2>"Portfolio"</h2>
                    <p>"Holdings, stock search, and quotes."</p>
                </a>
            </nav>
        </section>
    }
}
