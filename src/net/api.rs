//! Endpoint wrappers for the EcoVest backend.
//!
//! One async function per endpoint, each returning a typed payload from
//! [`crate::net::types`]. All calls go through an [`Http`] handle so the
//! base address, credentials, and CSRF policy live in one place.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures pass through unchanged. Statuses are checked here:
//! plain endpoints accept only 2xx, while "flagged" endpoints (responses
//! shaped `{success, errors}`) also decode a 400 body, since the backend
//! answers validation failures that way.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::http::{Error, Http, HttpResponse};
use super::types::{
    AddStockRequest, AddStockResponse, AppData, CheckUserRequest, CheckUserResponse,
    CompanyEsgResponse, DashboardData, EsgNewsResponse, InsightRequest, InsightResponse,
    LoginRequest, LoginResponse, OpResponse, PeerScoresResponse, PortfolioResponse, Preferences,
    PreferencesUpdate, SearchResponse, SignupRequest, StockQuote, UpdateSettingsRequest,
};

fn remove_stock_path(stock_id: i64) -> String {
    format!("/api/remove-stock/{stock_id}/")
}

fn esg_scores_path(ticker: &str) -> String {
    format!("/api/get-esg-data/{ticker}/")
}

fn peer_scores_path(symbol: &str) -> String {
    format!("/api/fetch-esg-peer-scores/{symbol}/")
}

/// Decode a payload that is only present on 2xx responses.
fn decode_ok<T: serde::de::DeserializeOwned>(response: &HttpResponse) -> Result<T, Error> {
    if !response.ok() {
        return Err(Error::Http(response.status()));
    }
    response.json()
}

/// Decode a flagged `{success, errors}` payload. The backend sends these
/// with 200 on success and 400 on rejection; anything else has no
/// decodable body.
fn decode_flagged<T: serde::de::DeserializeOwned>(response: &HttpResponse) -> Result<T, Error> {
    if !response.ok() && response.status() != 400 {
        return Err(Error::Http(response.status()));
    }
    response.json()
}

/// Probe the session via `GET /api/app-data`.
///
/// # Errors
///
/// Returns [`Error::Http`] outside 2xx; transport failures pass through.
pub async fn fetch_app_data(http: &Http) -> Result<AppData, Error> {
    decode_ok(&http.get("/api/app-data").await?)
}

/// Submit credentials via `POST /api/account/login/`.
///
/// A rejection is a decoded [`LoginResponse`] with `success == false`, not
/// an error.
///
/// # Errors
///
/// Returns [`Error::Http`] outside 2xx/400; transport failures pass through.
pub async fn login(http: &Http, request: &LoginRequest) -> Result<LoginResponse, Error> {
    decode_flagged(&http.post_json("/api/account/login/", request).await?)
}

/// End the session via `POST /api/account/logout/`. The response body is
/// not interesting; only the status is checked.
///
/// # Errors
///
/// Returns [`Error::Http`] outside 2xx; transport failures pass through.
pub async fn logout(http: &Http) -> Result<(), Error> {
    let response = http.post("/api/account/logout/").await?;
    if response.ok() { Ok(()) } else { Err(Error::Http(response.status())) }
}

/// Create an account via `POST /api/account/signup/`.
///
/// # Errors
///
/// Returns [`Error::Http`] outside 2xx/400; transport failures pass through.
pub async fn signup(http: &Http, request: &SignupRequest) -> Result<OpResponse, Error> {
    decode_flagged(&http.post_json("/api/account/signup/", request).await?)
}

/// Ask whether an email is already registered via
/// `POST /api/account/check-user/`.
///
/// # Errors
///
/// Returns [`Error::Http`] outside 2xx/400; transport failures pass through.
pub async fn check_user_exists(http: &Http, email: &str) -> Result<CheckUserResponse, Error> {
    let request = CheckUserRequest { email: email.to_owned() };
    decode_flagged(&http.post_json("/api/account/check-user/", &request).await?)
}

/// Read stored investment preferences via `GET /api/account/preferences/`.
///
/// # Errors
///
/// Returns [`Error::Http`] outside 2xx; transport failures pass through.
pub async fn fetch_preferences(http: &Http) -> Result<Preferences, Error> {
    decode_ok(&http.get("/api/account/preferences/").await?)
}

/// Store investment preferences via `POST /api/account/preferences/`.
///
/// # Errors
///
/// Returns [`Error::Http`] outside 2xx/400; transport failures pass through.
pub async fn save_preferences(http: &Http, update: &PreferencesUpdate) -> Result<OpResponse, Error> {
    decode_flagged(&http.post_json("/api/account/preferences/", update).await?)
}

/// Update editable profile fields via `POST /api/account/update-settings/`.
///
/// # Errors
///
/// Returns [`Error::Http`] outside 2xx/400; transport failures pass through.
pub async fn update_settings(
    http: &Http,
    request: &UpdateSettingsRequest,
) -> Result<OpResponse, Error> {
    decode_flagged(&http.post_json("/api/account/update-settings/", request).await?)
}

/// Search the company index via `GET /api/search-company/?q=`.
///
/// # Errors
///
/// Returns [`Error::Http`] outside 2xx; transport failures pass through.
pub async fn search_companies(http: &Http, query: &str) -> Result<SearchResponse, Error> {
    decode_ok(&http.get_query("/api/search-company/", &[("q", query)]).await?)
}

/// Read the account's holdings via `GET /api/get-portfolio/`.
///
/// # Errors
///
/// Returns [`Error::Http`] outside 2xx; transport failures pass through.
pub async fn fetch_portfolio(http: &Http) -> Result<PortfolioResponse, Error> {
    decode_ok(&http.get("/api/get-portfolio/").await?)
}

/// Add a holding via `POST /api/add-stock/`.
///
/// # Errors
///
/// Returns [`Error::Http`] outside 2xx/400; transport failures pass through.
pub async fn add_stock(http: &Http, request: &AddStockRequest) -> Result<AddStockResponse, Error> {
    decode_flagged(&http.post_json("/api/add-stock/", request).await?)
}

/// Remove a holding via `DELETE /api/remove-stock/{id}/`.
///
/// # Errors
///
/// Returns [`Error::Http`] outside 2xx/400; transport failures pass through.
pub async fn remove_stock(http: &Http, stock_id: i64) -> Result<OpResponse, Error> {
    decode_flagged(&http.delete(&remove_stock_path(stock_id)).await?)
}

/// Read the latest quote for a ticker via `GET /api/get-stock-price/?symbol=`.
///
/// # Errors
///
/// Returns [`Error::Http`] outside 2xx; transport failures pass through.
pub async fn fetch_stock_price(http: &Http, symbol: &str) -> Result<StockQuote, Error> {
    decode_ok(&http.get_query("/api/get-stock-price/", &[("symbol", symbol)]).await?)
}

/// Read a company's scored ESG metrics via `GET /api/get-esg-data/{ticker}/`.
///
/// # Errors
///
/// Returns [`Error::Http`] outside 2xx; transport failures pass through.
pub async fn fetch_esg_scores(http: &Http, ticker: &str) -> Result<CompanyEsgResponse, Error> {
    decode_ok(&http.get(&esg_scores_path(ticker)).await?)
}

/// Read a peer comparison via `GET /api/fetch-esg-peer-scores/{symbol}/`.
///
/// # Errors
///
/// Returns [`Error::Http`] outside 2xx; transport failures pass through.
pub async fn fetch_esg_peer_scores(http: &Http, symbol: &str) -> Result<PeerScoresResponse, Error> {
    decode_ok(&http.get(&peer_scores_path(symbol)).await?)
}

/// Read the sustainability news feed via `GET /api/fetch-esg-news/`,
/// optionally narrowed to one ticker.
///
/// # Errors
///
/// Returns [`Error::Http`] outside 2xx; transport failures pass through.
pub async fn fetch_esg_news(http: &Http, symbol: Option<&str>) -> Result<EsgNewsResponse, Error> {
    let response = match symbol {
        Some(symbol) => http.get_query("/api/fetch-esg-news/", &[("symbol", symbol)]).await?,
        None => http.get("/api/fetch-esg-news/").await?,
    };
    decode_ok(&response)
}

/// Read the aggregated dashboard view via `GET /api/dashboard/`.
///
/// # Errors
///
/// Returns [`Error::Http`] outside 2xx; transport failures pass through.
pub async fn fetch_dashboard(http: &Http) -> Result<DashboardData, Error> {
    decode_ok(&http.get("/api/dashboard/").await?)
}

/// Generate an ESG narrative for a ticker via
/// `POST /api/generate-esg-insight/`.
///
/// # Errors
///
/// Returns [`Error::Http`] outside 2xx/400; transport failures pass through.
pub async fn generate_esg_insight(http: &Http, symbol: &str) -> Result<InsightResponse, Error> {
    let request = InsightRequest { symbol: symbol.to_owned() };
    decode_flagged(&http.post_json("/api/generate-esg-insight/", &request).await?)
}
