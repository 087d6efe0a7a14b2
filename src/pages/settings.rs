//! Account settings: edit the profile's name and country.
//!
//! The form prefills from the session record once it is available and
//! never overwrites what the user has started typing.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "csr")]
use crate::net::{api, types::UpdateSettingsRequest};
use crate::net::types::FieldErrors;
use crate::state::SessionStore;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    install_unauth_redirect(&store, use_navigate());
    let session = store.session();

    let first_name = RwSignal::new(String::new());
    let middle_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let country = RwSignal::new(String::new());

    let errors = RwSignal::new(FieldErrors::new());
    let status = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // The session probe may still be in flight on a hard reload, so the
    // prefill waits for the profile and then runs exactly once.
    let filled = RwSignal::new(false);
    Effect::new(move |_| {
        if filled.get_untracked() {
            return;
        }
        if let Some(user) = session.get().user {
            first_name.set(user.first_name);
            middle_name.set(user.middle_name.unwrap_or_default());
            last_name.set(user.last_name);
            country.set(user.country);
            filled.set(true);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        errors.set(FieldErrors::new());
        status.set(String::new());

        #[cfg(feature = "csr")]
        {
            let store = store.clone();
            let request = UpdateSettingsRequest {
                first_name: first_name.get(),
                middle_name: middle_name.get(),
                last_name: last_name.get(),
                country: country.get(),
            };
            leptos::task::spawn_local(async move {
                match api::update_settings(store.http(), &request).await {
                    Ok(response) if response.success => {
                        if let Err(error) = store.fetch_user().await {
                            log::debug!("session refresh failed: {error}");
                        }
                        status.set("Settings saved.".to_owned());
                        busy.set(false);
                    }
                    Ok(response) => {
                        errors.set(response.errors);
                        busy.set(false);
                    }
                    Err(error) => {
                        log::error!("saving settings failed: {error}");
                        status.set("Could not reach the server. Try again.".to_owned());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &store;
        }
    };

    view! {
        <section class="settings-page">
            <h1>"Settings"</h1>
            <form class="settings-form" on:submit=on_submit>
                <SettingsField label="First name" key="first_name" value=first_name errors=errors/>
                <SettingsField label="Middle name" key="middle_name" value=middle_name errors=errors/>
                <SettingsField label="Last name" key="last_name" value=last_name errors=errors/>
                <SettingsField label="Country" key="country" value=country errors=errors/>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Save settings" }}
                </button>
            </form>
            <Show when=move || !status.get().is_empty()>
                <p class="form-status">{move || status.get()}</p>
            </Show>
        </section>
    }
}

#[component]
fn SettingsField(
    label: &'static str,
    key: &'static str,
    value: RwSignal<String>,
    errors: RwSignal<FieldErrors>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <input
                class="form-field__input"
                type="text"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=move || errors.with(|map| map.contains_key(key))>
                <span class="form-field__error">
                    {move || errors.with(|map| map.get(key).cloned().unwrap_or_default())}
                </span>
            </Show>
        </label>
    }
}
