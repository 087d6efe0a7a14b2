//! Signup page with client-side validation and a duplicate-email probe.

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
#[cfg(feature = "csr")]
use leptos_router::hooks::use_navigate;

use crate::net::types::FieldErrors;
#[cfg(feature = "csr")]
use crate::net::{api, types::SignupRequest};
use crate::routes::RouteName;
use crate::state::SessionStore;
use crate::util::clock;
use crate::util::validate::{self, SignupInput};

#[component]
pub fn SignupPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();

    let first_name = RwSignal::new(String::new());
    let middle_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let country = RwSignal::new(String::new());
    let date_of_birth = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());

    let errors = RwSignal::new(FieldErrors::new());
    let status = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "csr")]
    let navigate = use_navigate();

    // Ask the backend whether the email is taken as soon as the field is
    // left, so the form can say so before submit.
    let on_email_blur = Callback::new({
        let store = store.clone();
        move |()| {
            let email_value = email.get().trim().to_owned();
            if email_value.is_empty() {
                return;
            }
            #[cfg(feature = "csr")]
            {
                let store = store.clone();
                leptos::task::spawn_local(async move {
                    match api::check_user_exists(store.http(), &email_value).await {
                        Ok(answer) if answer.exists => {
                            errors.update(|e| {
                                e.insert("email".to_owned(), validate::EMAIL_TAKEN.to_owned());
                            });
                        }
                        Ok(_) => {
                            errors.update(|e| {
                                if e.get("email").map(String::as_str) == Some(validate::EMAIL_TAKEN) {
                                    e.remove("email");
                                }
                            });
                        }
                        Err(error) => log::debug!("email probe failed: {error}"),
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (&store, email_value);
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }

        let first = first_name.get();
        let middle = middle_name.get();
        let last = last_name.get();
        let country_value = country.get();
        let dob_value = date_of_birth.get();
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        let confirm_value = confirm_password.get();

        let input = SignupInput {
            first_name: &first,
            middle_name: &middle,
            last_name: &last,
            country: &country_value,
            date_of_birth: &dob_value,
            email: &email_value,
            password: &password_value,
            confirm_password: &confirm_value,
        };
        let (found, parsed_dob) = validate::validate_signup(&input, clock::today());
        if !found.is_empty() {
            errors.set(validate::display_errors(found));
            return;
        }
        let Some(dob) = parsed_dob else {
            return;
        };

        busy.set(true);
        errors.set(FieldErrors::new());
        status.set(String::new());

        #[cfg(feature = "csr")]
        {
            let store = store.clone();
            let navigate = navigate.clone();
            let request = SignupRequest {
                first_name: first,
                middle_name: middle,
                last_name: last,
                country: country_value,
                date_of_birth: dob,
                email: email_value,
                password: password_value,
                confirm_password: confirm_value,
            };
            leptos::task::spawn_local(async move {
                match api::signup(store.http(), &request).await {
                    Ok(response) if response.success => {
                        navigate(RouteName::Login.path(), NavigateOptions::default());
                    }
                    Ok(response) => {
                        errors.set(validate::display_errors(response.errors));
                        busy.set(false);
                    }
                    Err(error) => {
                        log::error!("signup request failed: {error}");
                        status.set("Could not reach the server. Try again.".to_owned());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&store, dob, first, middle, last, country_value);
            let _ = (email_value, password_value, confirm_value);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--wide">
                <h1>"Create your account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <div class="auth-form__row">
                        <FormField label="First name" key="first_name" value=first_name errors=errors/>
                        <FormField label="Middle name" key="middle_name" value=middle_name errors=errors/>
                        <FormField label="Last name" key="last_name" value=last_name errors=errors/>
                    </div>
                    <div class="auth-form__row">
                        <FormField label="Country" key="country" value=country errors=errors/>
                        <FormField
                            label="Date of birth"
                            key="date_of_birth"
                            input_type="date"
                            value=date_of_birth
                            errors=errors
                        />
                    </div>
                    <FormField
                        label="Email"
                        key="email"
                        input_type="email"
                        value=email
                        errors=errors
                        on_blur=on_email_blur
                    />
                    <div class="auth-form__row">
                        <FormField
                            label="Password"
                            key="password"
                            input_type="password"
                            value=password
                            errors=errors
                        />
                        <FormField
                            label="Confirm password"
                            key="confirm_password"
                            input_type="password"
                            value=confirm_password
                            errors=errors
                        />
                    </div>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign up" }}
                    </button>
                </form>
                <Show when=move || !status.get().is_empty()>
                    <p class="form-status form-status--error">{move || status.get()}</p>
                </Show>
                <p class="auth-card__alt">
                    "Already registered? "
                    <a href=RouteName::Login.path()>"Log in"</a>
                </p>
            </div>
        </div>
    }
}

/// Labeled input bound to one signal, with its field error underneath.
#[component]
fn FormField(
    label: &'static str,
    key: &'static str,
    value: RwSignal<String>,
    errors: RwSignal<FieldErrors>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] on_blur: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <input
                class="form-field__input"
                type=input_type
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                on:blur=move |_| {
                    if let Some(on_blur) = on_blur {
                        on_blur.run(());
                    }
                }
            />
            <Show when=move || errors.with(|e| e.contains_key(key))>
                <span class="form-field__error">
                    {move || errors.with(|e| e.get(key).cloned().unwrap_or_default())}
                </span>
            </Show>
        </label>
    }
}
