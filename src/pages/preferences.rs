//! Investment-preferences questionnaire.
//!
//! The stored values prefill the form on mount; saving refreshes the
//! session so the profile's completed flag catches up, then moves on to
//! the dashboard.

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "csr")]
use crate::net::{api, types::PreferencesUpdate};
#[cfg(feature = "csr")]
use crate::routes::RouteName;
use crate::state::SessionStore;
use crate::util::auth::install_unauth_redirect;

const RISK_LEVELS: &[(&str, &str)] =
    &[("low", "Low"), ("medium", "Medium"), ("high", "High")];

const STRATEGIES: &[(&str, &str)] = &[
    ("impact_investing", "Impact investing"),
    ("esg_integration", "ESG integration"),
    ("ethical_screening", "Ethical screening"),
    ("traditional_esg", "Traditional investing with ESG consideration"),
];

const TRANSPARENCY_LEVELS: &[(&str, &str)] =
    &[("simple_summary", "Simple summary"), ("detailed_breakdown", "Detailed breakdown")];

const ESG_FACTORS: &[(&str, &str)] = &[
    ("carbon_emissions", "Carbon emissions"),
    ("renewable_energy", "Renewable energy use"),
    ("water_usage", "Water usage"),
    ("waste_management", "Waste management"),
    ("board_diversity", "Board diversity"),
    ("labor_practices", "Labor practices"),
    ("business_ethics", "Business ethics"),
];

const INDUSTRIES: &[(&str, &str)] = &[
    ("renewables", "Renewables"),
    ("technology", "Technology"),
    ("healthcare", "Healthcare"),
    ("finance", "Finance"),
    ("consumer_goods", "Consumer goods"),
    ("industrials", "Industrials"),
    ("utilities", "Utilities"),
];

const EXCLUSIONS: &[(&str, &str)] = &[
    ("fossil_fuels", "Fossil fuels"),
    ("tobacco", "Tobacco"),
    ("weapons", "Weapons"),
    ("gambling", "Gambling"),
    ("fast_fashion", "Fast fashion"),
];

#[component]
pub fn PreferencesPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    install_unauth_redirect(&store, use_navigate());

    let risk_level = RwSignal::new("medium".to_owned());
    let investment_strategy = RwSignal::new("esg_integration".to_owned());
    let esg_factors = RwSignal::new(Vec::<String>::new());
    let industry_preferences = RwSignal::new(Vec::<String>::new());
    let exclusions = RwSignal::new(Vec::<String>::new());
    let sentiment_analysis = RwSignal::new("yes".to_owned());
    let transparency_level = RwSignal::new("simple_summary".to_owned());

    let status = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "csr")]
    let navigate = use_navigate();

    #[cfg(feature = "csr")]
    {
        let store = store.clone();
        leptos::task::spawn_local(async move {
            match api::fetch_preferences(store.http()).await {
                Ok(stored) => {
                    risk_level.set(stored.risk_level);
                    investment_strategy.set(stored.investment_strategy);
                    esg_factors.set(stored.esg_factors);
                    industry_preferences.set(stored.industry_preferences);
                    exclusions.set(stored.exclusions);
                    sentiment_analysis.set(stored.sentiment_analysis);
                    transparency_level.set(stored.transparency_level);
                }
                // First visit: nothing stored yet, keep the defaults.
                Err(error) => log::debug!("no stored preferences: {error}"),
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        status.set(String::new());

        #[cfg(feature = "csr")]
        {
            let store = store.clone();
            let navigate = navigate.clone();
            let update = PreferencesUpdate {
                risk_level: risk_level.get(),
                investment_strategy: investment_strategy.get(),
                esg_factors: esg_factors.get(),
                industry_preferences: industry_preferences.get(),
                exclusions: exclusions.get(),
                sentiment_analysis: sentiment_analysis.get(),
                transparency_level: transparency_level.get(),
            };
            leptos::task::spawn_local(async move {
                match api::save_preferences(store.http(), &update).await {
                    Ok(response) if response.success => {
                        // The profile's completed flag just changed.
                        if let Err(error) = store.fetch_user().await {
                            log::debug!("session refresh failed: {error}");
                        }
                        navigate(RouteName::Dashboard.path(), NavigateOptions::default());
                    }
                    Ok(response) => {
                        let message = response
                            .errors
                            .into_values()
                            .next()
                            .or(response.message)
                            .unwrap_or_else(|| "Preferences were not saved.".to_owned());
                        status.set(message);
                        busy.set(false);
                    }
                    Err(error) => {
                        log::error!("saving preferences failed: {error}");
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
        <section class="prefs-page">
            <h1>"Investment preferences"</h1>
            <p class="page-intro">
                "These choices shape the scores and suggestions you see across the app."
            </p>
            <form class="prefs-form" on:submit=on_submit>
                <div class="prefs-form__row">
                    <SelectField label="Risk level" options=RISK_LEVELS value=risk_level/>
                    <SelectField
                        label="Investment strategy"
                        options=STRATEGIES
                        value=investment_strategy
                    />
                    <SelectField
                        label="Result detail"
                        options=TRANSPARENCY_LEVELS
                        value=transparency_level
                    />
                </div>
                <CheckboxGroup legend="ESG factors you care about" options=ESG_FACTORS selected=esg_factors/>
                <CheckboxGroup
                    legend="Industries you prefer"
                    options=INDUSTRIES
                    selected=industry_preferences
                />
                <CheckboxGroup legend="Industries to exclude" options=EXCLUSIONS selected=exclusions/>
                <fieldset class="form-group">
                    <legend>"Weigh news sentiment into scores?"</legend>
                    <label class="radio">
                        <input
                            type="radio"
                            name="sentiment"
                            prop:checked=move || sentiment_analysis.get() == "yes"
                            on:change=move |_| sentiment_analysis.set("yes".to_owned())
                        />
                        <span>"Yes"</span>
                    </label>
                    <label class="radio">
                        <input
                            type="radio"
                            name="sentiment"
                            prop:checked=move || sentiment_analysis.get() == "no"
                            on:change=move |_| sentiment_analysis.set("no".to_owned())
                        />
                        <span>"No"</span>
                    </label>
                </fieldset>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Save preferences" }}
                </button>
            </form>
            <Show when=move || !status.get().is_empty()>
                <p class="form-status form-status--error">{move || status.get()}</p>
            </Show>
        </section>
    }
}

/// Labeled `<select>` bound to one signal.
#[component]
fn SelectField(
    label: &'static str,
    options: &'static [(&'static str, &'static str)],
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <select class="form-field__input" on:change=move |ev| value.set(event_target_value(&ev))>
                {options
                    .iter()
                    .map(|&(option_value, option_label)| {
                        view! {
                            <option
                                value=option_value
                                selected=move || value.get() == option_value
                            >
                                {option_label}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </label>
    }
}

/// Fieldset of checkboxes backed by a list of selected values.
#[component]
fn CheckboxGroup(
    legend: &'static str,
    options: &'static [(&'static str, &'static str)],
    selected: RwSignal<Vec<String>>,
) -> impl IntoView {
    view! {
        <fieldset class="form-group">
            <legend>{legend}</legend>
            <div class="form-group__options">
                {options
                    .iter()
                    .map(|&(value, label)| {
                        view! {
                            <label class="checkbox">
                                <input
                                    type="checkbox"
                                    prop:checked=move || {
                                        selected.with(|items| items.iter().any(|item| item == value))
                                    }
                                    on:change=move |_| toggle(selected, value)
                                />
                                <span>{label}</span>
                            </label>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </fieldset>
    }
}

fn toggle(list: RwSignal<Vec<String>>, value: &str) {
    list.update(|items| {
        if let Some(index) = items.iter().position(|item| item == value) {
            items.remove(index);
        } else {
            items.push(value.to_owned());
        }
    });
}
