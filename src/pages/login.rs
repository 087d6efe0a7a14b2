//! Login page.

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
#[cfg(feature = "csr")]
use leptos_router::hooks::use_navigate;

use crate::net::types::FieldErrors;
use crate::routes::RouteName;
use crate::state::SessionStore;
#[cfg(feature = "csr")]
use crate::state::LoginOutcome;

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "csr")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if email_value.is_empty() || password_value.is_empty() {
            errors.set(FieldErrors::from([(
                "login".to_owned(),
                "Enter both email and password.".to_owned(),
            )]));
            return;
        }
        busy.set(true);
        errors.set(FieldErrors::new());

        #[cfg(feature = "csr")]
        {
            let store = store.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match store.login(&email_value, &password_value).await {
                    Ok(LoginOutcome::Accepted { redirect }) => {
                        navigate(&redirect, NavigateOptions::default());
                    }
                    Ok(LoginOutcome::Rejected { errors: messages }) => {
                        errors.set(messages);
                        busy.set(false);
                    }
                    Err(error) => {
                        log::error!("login request failed: {error}");
                        errors.set(FieldErrors::from([(
                            "login".to_owned(),
                            "Could not reach the server. Try again.".to_owned(),
                        )]));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&store, email_value, password_value);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label class="form-field">
                        <span class="form-field__label">"Email"</span>
                        <input
                            class="form-field__input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span class="form-field__label">"Password"</span>
                        <input
                            class="form-field__input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || !errors.get().is_empty()>
                    <ul class="form-errors">
                        {move || {
                            errors
                                .get()
                                .into_values()
                                .map(|message| view! { <li>{message}</li> })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
                <p class="auth-card__alt">
                    "No account yet? "
                    <a href=RouteName::Signup.path()>"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
