//! Portfolio dashboard: aggregated value, ESG badges, news, and the
//! per-company ESG explorer.
//!
//! The two feed sections load through `LocalResource` so the page shell
//! renders immediately and each section fills in as its fetch lands.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::esg_badge::EsgBadge;
use crate::net::api;
use crate::net::types::{CompanyEsgResponse, NewsArticle, PeerScore};
use crate::state::SessionStore;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    install_unauth_redirect(&store, use_navigate());

    let summary = LocalResource::new({
        let store = store.clone();
        move || {
            let http = store.http().clone();
            async move { api::fetch_dashboard(&http).await }
        }
    });

    let news = LocalResource::new({
        let store = store.clone();
        move || {
            let http = store.http().clone();
            async move { api::fetch_esg_news(&http, None).await }
        }
    });

    view! {
        <section class="dashboard-page">
            <h1>"Dashboard"</h1>

            <Suspense fallback=move || {
                view! { <p class="dashboard-loading">"Loading dashboard..."</p> }
            }>
                {move || {
                    summary
                        .get()
                        .map(|result| match result {
                            Ok(data) => {
                                let gain = data.total_value - data.total_invested;
                                view! {
                                    <div class="dashboard-overview">
                                        <div class="dashboard-summary">
                                            <SummaryCard
                                                label="Portfolio value"
                                                value=format!("{:.2}", data.total_value)
                                            />
                                            <SummaryCard
                                                label="Invested"
                                                value=format!("{:.2}", data.total_invested)
                                            />
                                            <SummaryCard label="Gain" value=format!("{gain:+.2}")/>
                                            <div class="summary-card">
                                                <span class="summary-card__label">"ESG average"</span>
                                                {match data.esg_average {
                                                    Some(score) => view! { <EsgBadge score=score/> }.into_any(),
                                                    None => {
                                                        view! { <span class="summary-card__value">"-"</span> }
                                                            .into_any()
                                                    }
                                                }}
                                            </div>
                                        </div>
                                        {if data.holdings.is_empty() {
                                            view! {
                                                <p class="dashboard-empty">
                                                    "Add stocks to your portfolio to see them scored here."
                                                </p>
                                            }
                                                .into_any()
                                        } else {
                                            view! {
                                                <table class="dashboard-holdings">
                                                    <thead>
                                                        <tr>
                                                            <th>"Symbol"</th>
                                                            <th>"Company"</th>
                                                            <th>"Shares"</th>
                                                            <th>"Value"</th>
                                                            <th>"ESG"</th>
                                                        </tr>
                                                    </thead>
                                                    <tbody>
                                                        {data
                                                            .holdings
                                                            .into_iter()
                                                            .map(|holding| {
                                                                view! {
                                                                    <tr>
                                                                        <td class="portfolio-row__symbol">{holding.symbol}</td>
                                                                        <td>{holding.company_name}</td>
                                                                        <td class="portfolio-row__num">{holding.shares}</td>
                                                                        <td class="portfolio-row__num">
                                                                            {holding
                                                                                .value
                                                                                .map_or_else(
                                                                                    || "-".to_owned(),
                                                                                    |value| format!("{value:.2}"),
                                                                                )}
                                                                        </td>
                                                                        <td>
                                                                            {match holding.esg_score {
                                                                                Some(score) => {
                                                                                    view! { <EsgBadge score=score/> }.into_any()
                                                                                }
                                                                                None => view! { <span>"-"</span> }.into_any(),
                                                                            }}
                                                                        </td>
                                                                    </tr>
                                                                }
                                                            })
                                                            .collect::<Vec<_>>()}
                                                    </tbody>
                                                </table>
                                            }
                                                .into_any()
                                        }}
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(error) => {
                                view! {
                                    <p class="dashboard-error">
                                        {format!("The dashboard could not be loaded: {error}")}
                                    </p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            <EsgExplorer/>

            <section class="dashboard-news">
                <h2>"Sustainability news"</h2>
                <Suspense fallback=move || view! { <p>"Loading news..."</p> }>
                    {move || {
                        news.get()
                            .map(|result| match result {
                                Ok(feed) if feed.articles.is_empty() => {
                                    view! { <p>"No recent articles."</p> }.into_any()
                                }
                                Ok(feed) => {
                                    view! {
                                        <ul class="news-list">
                                            {feed
                                                .articles
                                                .into_iter()
                                                .map(news_item)
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    }
                                        .into_any()
                                }
                                Err(error) => {
                                    view! {
                                        <p class="dashboard-error">
                                            {format!("News is unavailable: {error}")}
                                        </p>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </section>
        </section>
    }
}

#[component]
fn SummaryCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="summary-card">
            <span class="summary-card__label">{label}</span>
            <span class="summary-card__value">{value}</span>
        </div>
    }
}

/// Ticker-driven drill-down: raw ESG metrics, industry peers, company
/// news, and the generated narrative.
#[component]
fn EsgExplorer() -> impl IntoView {
    let store = expect_context::<SessionStore>();

    let symbol = RwSignal::new(String::new());
    let scores = RwSignal::new(Option::<CompanyEsgResponse>::None);
    let peers = RwSignal::new(Vec::<PeerScore>::new());
    let articles = RwSignal::new(Vec::<NewsArticle>::new());
    let insight = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let generating = RwSignal::new(false);

    let on_load = {
        let store = store.clone();
        move |_| {
            let ticker = symbol.get().trim().to_uppercase();
            if ticker.is_empty() {
                status.set("Enter a ticker symbol first.".to_owned());
                return;
            }
            if loading.get() {
                return;
            }
            loading.set(true);
            status.set(String::new());
            insight.set(String::new());

            #[cfg(feature = "csr")]
            {
                let store = store.clone();
                leptos::task::spawn_local(async move {
                    match api::fetch_esg_scores(store.http(), &ticker).await {
                        Ok(company) => scores.set(Some(company)),
                        Err(error) => {
                            scores.set(None);
                            status.set(format!("No ESG data for {ticker}: {error}"));
                        }
                    }
                    match api::fetch_esg_peer_scores(store.http(), &ticker).await {
                        Ok(response) => peers.set(response.peers),
                        Err(error) => {
                            peers.set(Vec::new());
                            log::debug!("peer scores for {ticker} failed: {error}");
                        }
                    }
                    match api::fetch_esg_news(store.http(), Some(&ticker)).await {
                        Ok(feed) => articles.set(feed.articles),
                        Err(error) => {
                            articles.set(Vec::new());
                            log::debug!("news for {ticker} failed: {error}");
                        }
                    }
                    loading.set(false);
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (&store, ticker);
                loading.set(false);
            }
        }
    };

    let on_generate = {
        let store = store.clone();
        move |_| {
            let ticker = symbol.get().trim().to_uppercase();
            if ticker.is_empty() || generating.get() {
                return;
            }
            generating.set(true);

            #[cfg(feature = "csr")]
            {
                let store = store.clone();
                leptos::task::spawn_local(async move {
                    match api::generate_esg_insight(store.http(), &ticker).await {
                        Ok(response) if response.success => {
                            insight.set(response.insight.unwrap_or_default());
                        }
                        Ok(response) => {
                            let message = response
                                .errors
                                .into_values()
                                .next()
                                .unwrap_or_else(|| {
                                    "No insight is available for this company.".to_owned()
                                });
                            status.set(message);
                        }
                        Err(error) => {
                            log::error!("insight generation failed: {error}");
                            status.set("Could not reach the server. Try again.".to_owned());
                        }
                    }
                    generating.set(false);
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (&store, ticker);
                generating.set(false);
            }
        }
    };

    view! {
        <section class="esg-explorer">
            <h2>"ESG explorer"</h2>
            <div class="esg-explorer__controls">
                <input
                    class="form-field__input"
                    type="text"
                    placeholder="Ticker, e.g. ORSTED"
                    prop:value=move || symbol.get()
                    on:input=move |ev| symbol.set(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="btn btn--primary"
                    on:click=on_load
                    disabled=move || loading.get()
                >
                    {move || if loading.get() { "Loading..." } else { "Load ESG data" }}
                </button>
                <button
                    type="button"
                    class="btn"
                    on:click=on_generate
                    disabled=move || generating.get()
                >
                    {move || if generating.get() { "Generating..." } else { "Generate insight" }}
                </button>
            </div>
            <Show when=move || !status.get().is_empty()>
                <p class="form-status form-status--error">{move || status.get()}</p>
            </Show>
            <Show when=move || !insight.get().is_empty()>
                <blockquote class="esg-explorer__insight">{move || insight.get()}</blockquote>
            </Show>
            {move || {
                scores
                    .get()
                    .map(|company| {
                        view! {
                            <div class="esg-explorer__scores">
                                <h3>{format!("{} ({})", company.name, company.ticker)}</h3>
                                <table class="esg-table">
                                    <thead>
                                        <tr>
                                            <th>"Year"</th>
                                            <th>"Pillar"</th>
                                            <th>"Metric"</th>
                                            <th>"Value"</th>
                                            <th>"Score"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {company
                                            .metrics
                                            .into_iter()
                                            .map(|metric| {
                                                view! {
                                                    <tr>
                                                        <td>{metric.year}</td>
                                                        <td>{metric.pillar}</td>
                                                        <td>{metric.fieldname}</td>
                                                        <td>{metric.value}</td>
                                                        <td>{format!("{:.1}", metric.valuescore)}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            </div>
                        }
                    })
            }}
            <Show when=move || peers.with(|list| !list.is_empty())>
                <div class="esg-explorer__peers">
                    <h3>"Peer comparison"</h3>
                    <ul class="peer-list">
                        {move || {
                            peers
                                .get()
                                .into_iter()
                                .map(|peer| {
                                    view! {
                                        <li class="peer-list__item">
                                            <span class="peer-list__name">
                                                {format!("{} ({})", peer.name, peer.ticker)}
                                            </span>
                                            <EsgBadge score=peer.score/>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </div>
            </Show>
            <Show when=move || articles.with(|list| !list.is_empty())>
                <div class="esg-explorer__news">
                    <h3>"Company news"</h3>
                    <ul class="news-list">
                        {move || articles.get().into_iter().map(news_item).collect::<Vec<_>>()}
                    </ul>
                </div>
            </Show>
        </section>
    }
}

fn news_item(article: NewsArticle) -> impl IntoView {
    let meta = [article.source, article.published_at]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" · ");
    let has_meta = !meta.is_empty();

    view! {
        <li class="news-item">
            <a class="news-item__title" href=article.url target="_blank" rel="noreferrer">
                {article.title}
            </a>
            {has_meta.then(move || view! { <span class="news-item__meta">{meta}</span> })}
            {article.summary.map(|text| view! { <p class="news-item__summary">{text}</p> })}
        </li>
    }
}
