//! Wire-protocol DTOs for the EcoVest HTTP API.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads field for field so serde
//! does the schema checking and the endpoint wrappers in [`crate::net::api`]
//! stay declarative. Two backend quirks are modeled rather than papered
//! over: rejection payloads carry `errors` either as a field-keyed map or as
//! a bare message string, and preferences are read in snake_case but
//! written back in camelCase.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Field-keyed rejection messages from a flagged response.
pub type FieldErrors = BTreeMap<String, String>;

/// Key a bare-string `errors` payload is filed under, for rejections that
/// name no particular field.
pub const GENERAL_ERROR_KEY: &str = "detail";

/// An account profile as returned inside `/api/app-data` and login payloads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Given name.
    pub first_name: String,
    /// Middle name, if the account has one.
    #[serde(default)]
    pub middle_name: Option<String>,
    /// Family name.
    pub last_name: String,
    /// Country of residence.
    pub country: String,
    /// Date of birth (`YYYY-MM-DD`).
    pub date_of_birth: NaiveDate,
    /// Login identity; unique per account.
    pub email: String,
    /// Whether the investment-preferences questionnaire has been completed.
    #[serde(default)]
    pub preferences_completed: bool,
}

/// Bootstrap payload from `GET /api/app-data`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppData {
    /// Whether the request rode an authenticated session cookie.
    #[serde(rename = "isLoggedIn")]
    pub is_logged_in: bool,
    /// Profile of the session's account; absent when logged out.
    #[serde(default)]
    pub user: Option<UserProfile>,
}

/// Credentials for `POST /account/login/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Result envelope for a login attempt.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    /// Whether the credentials were accepted.
    pub success: bool,
    /// Authenticated profile, when the backend includes it.
    #[serde(default)]
    pub user: Option<UserProfile>,
    /// Path the app should navigate to after a successful login.
    #[serde(default)]
    pub redirect: Option<String>,
    /// Status line for banners (e.g. `"Login successful! Redirecting..."`).
    #[serde(default)]
    pub message: Option<String>,
    /// Rejection messages; `login` keys a bad-credentials message.
    #[serde(default, deserialize_with = "deserialize_field_errors")]
    pub errors: FieldErrors,
}

/// New-account payload for `POST /api/account/signup/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub first_name: String,
    /// Sent as an empty string when absent; the backend stores it blank.
    pub middle_name: String,
    pub last_name: String,
    pub country: String,
    /// Date of birth (`YYYY-MM-DD`).
    pub date_of_birth: NaiveDate,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Duplicate-email probe for `POST /api/account/check-user/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CheckUserRequest {
    pub email: String,
}

/// Answer to a duplicate-email probe.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CheckUserResponse {
    /// Whether an account already uses the probed email.
    pub exists: bool,
    /// Probe rejection reason, if the request itself was malformed.
    #[serde(default)]
    pub error: Option<String>,
}

/// Generic result envelope for state-changing endpoints that return no
/// domain payload (signup, settings update, preference save, stock removal).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct OpResponse {
    /// Whether the operation was applied.
    pub success: bool,
    /// Status line for banners.
    #[serde(default)]
    pub message: Option<String>,
    /// Rejection messages on failure.
    #[serde(default, deserialize_with = "deserialize_field_errors")]
    pub errors: FieldErrors,
}

/// Stored investment preferences, as the backend writes them out
/// (snake_case keys).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// `low`, `medium`, or `high`.
    pub risk_level: String,
    /// `impact_investing`, `esg_integration`, `ethical_screening`, or
    /// `traditional_esg`.
    pub investment_strategy: String,
    /// ESG factors the account weights (e.g. `"carbon_emissions"`).
    #[serde(default)]
    pub esg_factors: Vec<String>,
    /// Preferred industries; may be empty.
    #[serde(default)]
    pub industry_preferences: Vec<String>,
    /// Industries to exclude outright; may be empty.
    #[serde(default)]
    pub exclusions: Vec<String>,
    /// `yes` or `no`.
    pub sentiment_analysis: String,
    /// `simple_summary` or `detailed_breakdown`.
    pub transparency_level: String,
}

/// Preference update payload, as the backend reads it in (camelCase keys).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesUpdate {
    pub risk_level: String,
    pub investment_strategy: String,
    pub esg_factors: Vec<String>,
    pub industry_preferences: Vec<String>,
    pub exclusions: Vec<String>,
    pub sentiment_analysis: String,
    pub transparency_level: String,
}

impl From<Preferences> for PreferencesUpdate {
    fn from(p: Preferences) -> Self {
        Self {
            risk_level: p.risk_level,
            investment_strategy: p.investment_strategy,
            esg_factors: p.esg_factors,
            industry_preferences: p.industry_preferences,
            exclusions: p.exclusions,
            sentiment_analysis: p.sentiment_analysis,
            transparency_level: p.transparency_level,
        }
    }
}

/// Editable profile fields for `POST /api/account/update-settings/`. Email
/// and date of birth are fixed at signup and not editable here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UpdateSettingsRequest {
    pub first_name: String,
    /// Sent as an empty string to clear.
    pub middle_name: String,
    pub last_name: String,
    pub country: String,
}

/// One company from the typeahead index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyMatch {
    /// Exchange ticker (e.g. `"MSFT"`).
    pub ticker: String,
    /// Registered company name.
    pub name: String,
    /// ISIN, when the index has one.
    #[serde(default)]
    pub isin: Option<String>,
}

/// Matches for a company search query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub companies: Vec<CompanyMatch>,
}

/// New-holding payload for `POST /api/add-stock/`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AddStockRequest {
    pub symbol: String,
    pub company_name: String,
    pub shares: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_invested: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_bought_at: Option<f64>,
}

/// One holding in the account's portfolio.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortfolioStock {
    /// Row identifier; used for removal.
    pub id: i64,
    /// Exchange ticker.
    pub symbol: String,
    /// Registered company name.
    pub company_name: String,
    /// Number of shares held.
    pub shares: u32,
    /// Total paid, if recorded.
    #[serde(default, deserialize_with = "deserialize_opt_decimal")]
    pub amount_invested: Option<f64>,
    /// Per-share price at purchase, if recorded.
    #[serde(default, deserialize_with = "deserialize_opt_decimal")]
    pub price_bought_at: Option<f64>,
    /// ISO 8601 timestamp of when the holding was added, if known.
    #[serde(default)]
    pub added_at: Option<String>,
}

/// The account's full portfolio from `GET /api/get-portfolio/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortfolioResponse {
    #[serde(default)]
    pub stocks: Vec<PortfolioStock>,
}

/// Result envelope for adding a holding.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AddStockResponse {
    /// Whether the holding was stored.
    pub success: bool,
    /// The stored row, including its assigned `id`.
    #[serde(default)]
    pub stock: Option<PortfolioStock>,
    /// Rejection messages on failure.
    #[serde(default, deserialize_with = "deserialize_field_errors")]
    pub errors: FieldErrors,
}

/// Latest price for one ticker from `GET /api/get-stock-price/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StockQuote {
    /// Exchange ticker.
    pub symbol: String,
    /// Last traded price.
    #[serde(deserialize_with = "deserialize_decimal")]
    pub price: f64,
    /// Quote currency code, when the provider reports one.
    #[serde(default)]
    pub currency: Option<String>,
}

/// One scored ESG datapoint for a company-year.
///
/// Field names follow the backend's metric table; unknown columns in the
/// payload are ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EsgMetric {
    /// Reporting year.
    pub year: u16,
    /// Pillar the field rolls up into (e.g. `"Environmental"`).
    pub pillar: String,
    /// Human-readable field name.
    pub fieldname: String,
    /// Raw reported value; free text.
    pub value: String,
    /// Normalized 0-100 score for the value.
    pub valuescore: f64,
}

/// ESG metrics for one company from `GET /api/get-esg-data/<ticker>/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompanyEsgResponse {
    /// Exchange ticker the metrics belong to.
    pub ticker: String,
    /// Registered company name.
    pub name: String,
    #[serde(default)]
    pub metrics: Vec<EsgMetric>,
}

/// One industry peer and its composite ESG score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PeerScore {
    /// Exchange ticker.
    pub ticker: String,
    /// Registered company name.
    pub name: String,
    /// Composite 0-100 ESG score.
    pub score: f64,
}

/// Peer comparison from `GET /api/fetch-esg-peer-scores/<symbol>/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PeerScoresResponse {
    /// Ticker the peer set was built around.
    pub symbol: String,
    #[serde(default)]
    pub peers: Vec<PeerScore>,
}

/// One sustainability news item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsArticle {
    /// Headline.
    pub title: String,
    /// Link to the full article.
    pub url: String,
    /// Publishing outlet, when reported.
    #[serde(default)]
    pub source: Option<String>,
    /// ISO 8601 publication timestamp, when reported.
    #[serde(default)]
    pub published_at: Option<String>,
    /// Short teaser text, when reported.
    #[serde(default)]
    pub summary: Option<String>,
}

/// Curated news feed from `GET /api/fetch-esg-news/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EsgNewsResponse {
    #[serde(default)]
    pub articles: Vec<NewsArticle>,
}

/// One holding as aggregated for the dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HoldingSummary {
    /// Exchange ticker.
    pub symbol: String,
    /// Registered company name.
    pub company_name: String,
    /// Number of shares held.
    pub shares: u32,
    /// Market value of the position, when a quote was available.
    #[serde(default, deserialize_with = "deserialize_opt_decimal")]
    pub value: Option<f64>,
    /// Composite 0-100 ESG score, when the company is covered.
    #[serde(default)]
    pub esg_score: Option<f64>,
}

/// Aggregated portfolio view from `GET /api/dashboard/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    /// Current market value across all holdings.
    #[serde(deserialize_with = "deserialize_decimal")]
    pub total_value: f64,
    /// Total amount paid across all holdings.
    #[serde(deserialize_with = "deserialize_decimal")]
    pub total_invested: f64,
    /// Value-weighted ESG score, when any holding is covered.
    #[serde(default)]
    pub esg_average: Option<f64>,
    #[serde(default)]
    pub holdings: Vec<HoldingSummary>,
}

/// Symbol to build an ESG narrative for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InsightRequest {
    pub symbol: String,
}

/// Generated ESG narrative from `POST /api/generate-esg-insight/`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct InsightResponse {
    /// Whether a narrative was produced.
    pub success: bool,
    /// The narrative text on success.
    #[serde(default)]
    pub insight: Option<String>,
    /// Rejection messages on failure.
    #[serde(default, deserialize_with = "deserialize_field_errors")]
    pub errors: FieldErrors,
}

/// Accept `errors` as either a field-keyed map or a bare message string;
/// bare strings are filed under [`GENERAL_ERROR_KEY`]. Map values that are
/// themselves lists of messages are joined with spaces.
fn deserialize_field_errors<'de, D>(deserializer: D) -> Result<FieldErrors, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(FieldErrors::new()),
        serde_json::Value::String(message) => {
            Ok(FieldErrors::from([(GENERAL_ERROR_KEY.to_owned(), message)]))
        }
        serde_json::Value::Object(map) => {
            let mut errors = FieldErrors::new();
            for (key, value) in map {
                let message = match value {
                    serde_json::Value::String(message) => message,
                    serde_json::Value::Array(items) => items
                        .iter()
                        .filter_map(serde_json::Value::as_str)
                        .collect::<Vec<_>>()
                        .join(" "),
                    other => other.to_string(),
                };
                errors.insert(key, message);
            }
            Ok(errors)
        }
        _ => Err(D::Error::custom("expected error map or message string")),
    }
}

/// Accept a decimal as either a JSON number or its string form. The backend
/// stores money in decimal columns and is inconsistent about quoting them.
fn deserialize_decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| D::Error::custom("expected finite number")),
        serde_json::Value::String(text) => text
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("expected numeric string, got {text:?}"))),
        _ => Err(D::Error::custom("expected number or numeric string")),
    }
}

fn deserialize_opt_decimal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    deserialize_decimal(value).map(Some).map_err(D::Error::custom)
}
