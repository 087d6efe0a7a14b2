//! Portfolio management: holdings table plus the add-stock form.
//!
//! DESIGN
//! ======
//! Company search runs as a debounced typeahead: each keystroke bumps a
//! sequence counter and the spawned lookup only publishes its results if
//! the counter has not moved on. Stale responses are therefore dropped
//! on the client regardless of arrival order.
//!
//! The holdings list itself lives in an app-wide `RwSignal<PortfolioState>`
//! so a successful add survives route changes; the page refetches on
//! mount to stay honest with the backend.

#[cfg(test)]
#[path = "portfolio_test.rs"]
mod portfolio_test;

use std::collections::BTreeMap;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "csr")]
use gloo_timers::future::TimeoutFuture;

#[cfg(feature = "csr")]
use crate::net::api;
#[cfg(feature = "csr")]
use crate::net::types::AddStockRequest;
use crate::net::types::{CompanyMatch, PortfolioStock, StockQuote};
use crate::state::{PortfolioState, SessionStore};
use crate::util::auth::install_unauth_redirect;

/// How long typing may pause before the search request fires.
#[cfg(feature = "csr")]
const SEARCH_DEBOUNCE_MS: u32 = 250;

/// Queries shorter than this never hit the search endpoint.
#[cfg(feature = "csr")]
const MIN_QUERY_LEN: usize = 2;

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    install_unauth_redirect(&store, use_navigate());
    let portfolio = expect_context::<RwSignal<PortfolioState>>();

    let query = RwSignal::new(String::new());
    let matches = RwSignal::new(Vec::<CompanyMatch>::new());
    let selected = RwSignal::new(Option::<CompanyMatch>::None);
    let search_seq = RwSignal::new(0u64);

    let shares_text = RwSignal::new(String::new());
    let amount_text = RwSignal::new(String::new());
    let price_text = RwSignal::new(String::new());
    let form_status = RwSignal::new(String::new());
    let adding = RwSignal::new(false);

    let quotes = RwSignal::new(BTreeMap::<i64, StockQuote>::new());

    #[cfg(feature = "csr")]
    {
        let store = store.clone();
        portfolio.update(|state| state.loading = true);
        leptos::task::spawn_local(async move {
            match api::fetch_portfolio(store.http()).await {
                Ok(listing) => portfolio.update(|state| state.set_stocks(listing.stocks)),
                Err(error) => {
                    log::error!("loading portfolio failed: {error}");
                    portfolio.update(|state| state.loading = false);
                }
            }
        });
    }

    let on_query_input = {
        let store = store.clone();
        move |ev| {
            let text = event_target_value(&ev);
            query.set(text.clone());
            selected.set(None);
            let seq = search_seq.get_untracked() + 1;
            search_seq.set(seq);

            #[cfg(feature = "csr")]
            {
                let store = store.clone();
                leptos::task::spawn_local(async move {
                    // Let typing settle before asking the backend.
                    TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
                    if search_seq.get_untracked() != seq {
                        return;
                    }
                    let term = text.trim().to_owned();
                    if term.len() < MIN_QUERY_LEN {
                        matches.set(Vec::new());
                        return;
                    }
                    match api::search_companies(store.http(), &term).await {
                        Ok(found) => {
                            if search_seq.get_untracked() == seq {
                                matches.set(found.companies);
                            }
                        }
                        Err(error) => log::debug!("company search failed: {error}"),
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (&store, text);
            }
        }
    };

    let on_add = {
        let store = store.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if adding.get() {
                return;
            }
            let Some(company) = selected.get() else {
                form_status.set("Pick a company from the search results first.".to_owned());
                return;
            };
            let Ok(shares) = shares_text.get().trim().parse::<u32>() else {
                form_status.set("Shares must be a whole number.".to_owned());
                return;
            };
            if shares == 0 {
                form_status.set("Shares must be at least 1.".to_owned());
                return;
            }
            let amount_invested = match parse_money(&amount_text.get()) {
                Ok(value) => value,
                Err(message) => {
                    form_status.set(message);
                    return;
                }
            };
            let price_bought_at = match parse_money(&price_text.get()) {
                Ok(value) => value,
                Err(message) => {
                    form_status.set(message);
                    return;
                }
            };
            adding.set(true);
            form_status.set(String::new());

            #[cfg(feature = "csr")]
            {
                let store = store.clone();
                let request = AddStockRequest {
                    symbol: company.ticker.clone(),
                    company_name: company.name.clone(),
                    shares,
                    amount_invested,
                    price_bought_at,
                };
                leptos::task::spawn_local(async move {
                    match api::add_stock(store.http(), &request).await {
                        Ok(response) if response.success => {
                            if let Some(stored) = response.stock {
                                portfolio.update(|state| state.upsert(stored));
                            } else if let Ok(listing) = api::fetch_portfolio(store.http()).await {
                                // The row came back without a body; resync instead.
                                portfolio.update(|state| state.set_stocks(listing.stocks));
                            }
                            query.set(String::new());
                            selected.set(None);
                            shares_text.set(String::new());
                            amount_text.set(String::new());
                            price_text.set(String::new());
                            adding.set(false);
                        }
                        Ok(response) => {
                            let message = response
                                .errors
                                .into_values()
                                .next()
                                .unwrap_or_else(|| "The stock could not be added.".to_owned());
                            form_status.set(message);
                            adding.set(false);
                        }
                        Err(error) => {
                            log::error!("adding stock failed: {error}");
                            form_status.set("Could not reach the server. Try again.".to_owned());
                            adding.set(false);
                        }
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (&store, company, shares, amount_invested, price_bought_at);
                adding.set(false);
            }
        }
    };

    view! {
        <section class="portfolio-page">
            <h1>"Portfolio"</h1>

            <form class="add-stock" on:submit=on_add>
                <div class="add-stock__search">
                    <label class="form-field">
                        <span class="form-field__label">"Company"</span>
                        <input
                            class="form-field__input"
                            type="text"
                            placeholder="Search by name or ticker"
                            prop:value=move || query.get()
                            on:input=on_query_input
                        />
                    </label>
                    <Show when=move || matches.with(|found| !found.is_empty())>
                        <ul class="add-stock__matches">
                            {move || {
                                matches
                                    .get()
                                    .into_iter()
                                    .map(|company| {
                                        let label = format!("{} ({})", company.name, company.ticker);
                                        view! {
                                            <li>
                                                <button
                                                    type="button"
                                                    class="add-stock__match"
                                                    on:click=move |_| {
                                                        query.set(company.name.clone());
                                                        selected.set(Some(company.clone()));
                                                        matches.set(Vec::new());
                                                    }
                                                >
                                                    {label}
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </Show>
                </div>
                <div class="add-stock__fields">
                    <label class="form-field">
                        <span class="form-field__label">"Shares"</span>
                        <input
                            class="form-field__input"
                            type="number"
                            min="1"
                            prop:value=move || shares_text.get()
                            on:input=move |ev| shares_text.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span class="form-field__label">"Amount invested (optional)"</span>
                        <input
                            class="form-field__input"
                            type="text"
                            prop:value=move || amount_text.get()
                            on:input=move |ev| amount_text.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-field">
                        <span class="form-field__label">"Price paid per share (optional)"</span>
                        <input
                            class="form-field__input"
                            type="text"
                            prop:value=move || price_text.get()
                            on:input=move |ev| price_text.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || adding.get()>
                        {move || if adding.get() { "Adding..." } else { "Add stock" }}
                    </button>
                </div>
            </form>
            <Show when=move || !form_status.get().is_empty()>
                <p class="form-status form-status--error">{move || form_status.get()}</p>
            </Show>

            {move || {
                let state = portfolio.get();
                if state.loading {
                    view! { <p class="portfolio-empty">"Loading portfolio..."</p> }.into_any()
                } else if state.stocks.is_empty() {
                    view! { <p class="portfolio-empty">"No stocks in your portfolio yet."</p> }
                        .into_any()
                } else {
                    let rows = state
                        .stocks
                        .into_iter()
                        .map(|stock| view! { <StockRow stock=stock quotes=quotes portfolio=portfolio/> })
                        .collect::<Vec<_>>();
                    view! {
                        <table class="portfolio-table">
                            <thead>
                                <tr>
                                    <th>"Symbol"</th>
                                    <th>"Company"</th>
                                    <th>"Shares"</th>
                                    <th>"Invested"</th>
                                    <th>"Last price"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>{rows}</tbody>
                        </table>
                    }
                    .into_any()
                }
            }}
            <p class="portfolio-total">
                "Total invested: "
                {move || format!("{:.2}", portfolio.with(PortfolioState::total_invested))}
            </p>
        </section>
    }
}

/// One holdings row with its quote and remove actions.
#[component]
fn StockRow(
    stock: PortfolioStock,
    quotes: RwSignal<BTreeMap<i64, StockQuote>>,
    portfolio: RwSignal<PortfolioState>,
) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let stock_id = stock.id;
    let symbol = stock.symbol.clone();

    let on_quote = {
        let store = store.clone();
        let symbol = symbol.clone();
        move |_| {
            #[cfg(feature = "csr")]
            {
                let store = store.clone();
                let symbol = symbol.clone();
                leptos::task::spawn_local(async move {
                    match api::fetch_stock_price(store.http(), &symbol).await {
                        Ok(quote) => {
                            quotes.update(|map| {
                                map.insert(stock_id, quote);
                            });
                        }
                        Err(error) => log::debug!("quote for {symbol} failed: {error}"),
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (&store, &symbol);
            }
        }
    };

    let on_remove = {
        let store = store.clone();
        move |_| {
            #[cfg(feature = "csr")]
            {
                let store = store.clone();
                leptos::task::spawn_local(async move {
                    match api::remove_stock(store.http(), stock_id).await {
                        Ok(response) if response.success => {
                            portfolio.update(|state| state.remove(stock_id));
                        }
                        Ok(_) => log::error!("backend refused to remove stock {stock_id}"),
                        Err(error) => log::error!("removing stock failed: {error}"),
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = &store;
            }
        }
    };

    let quote_cell = move || {
        quotes.with(|map| {
            map.get(&stock_id).map(|quote| {
                format!("{:.2} {}", quote.price, quote.currency.clone().unwrap_or_default())
                    .trim_end()
                    .to_owned()
            })
        })
    };

    view! {
        <tr class="portfolio-row">
            <td class="portfolio-row__symbol">{stock.symbol.clone()}</td>
            <td>{stock.company_name.clone()}</td>
            <td class="portfolio-row__num">{stock.shares}</td>
            <td class="portfolio-row__num">
                {stock.amount_invested.map_or_else(|| "-".to_owned(), |amount| format!("{amount:.2}"))}
            </td>
            <td class="portfolio-row__num">
                {move || quote_cell().unwrap_or_else(|| "-".to_owned())}
            </td>
            <td class="portfolio-row__actions">
                <button type="button" class="btn" on:click=on_quote>
                    "Quote"
                </button>
                <button type="button" class="btn btn--danger" on:click=on_remove>
                    "Remove"
                </button>
            </td>
        </tr>
    }
}

/// Parse an optional money field: blank means "not recorded", anything
/// else must be a number.
fn parse_money(text: &str) -> Result<Option<f64>, String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| format!("'{trimmed}' is not a valid amount."))
}
