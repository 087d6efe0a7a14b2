use super::*;

// =============================================================================
// Session payloads
// =============================================================================

#[test]
fn app_data_decodes_logged_out() {
    let payload = r#"{"isLoggedIn": false}"#;
    let data: AppData = serde_json::from_str(payload).unwrap();
    assert!(!data.is_logged_in);
    assert_eq!(data.user, None);
}

#[test]
fn app_data_decodes_logged_in_profile() {
    let payload = r#"{
        "isLoggedIn": true,
        "user": {
            "first_name": "Ada",
            "last_name": "Material",
            "country": "Norway",
            "date_of_birth": "1990-04-01",
            "email": "ada@example.com",
            "preferences_completed": true
        }
    }"#;

    let data: AppData = serde_json::from_str(payload).unwrap();
    assert!(data.is_logged_in);
    let user = data.user.unwrap();
    assert_eq!(user.middle_name, None);
    assert_eq!(user.date_of_birth, NaiveDate::from_ymd_opt(1990, 4, 1).unwrap());
    assert!(user.preferences_completed);
}

#[test]
fn profile_tolerates_missing_preferences_flag() {
    let payload = r#"{
        "first_name": "Ada",
        "last_name": "Material",
        "country": "Norway",
        "date_of_birth": "1990-04-01",
        "email": "ada@example.com"
    }"#;

    let user: UserProfile = serde_json::from_str(payload).unwrap();
    assert!(!user.preferences_completed);
}

#[test]
fn login_success_decodes_message_and_redirect() {
    let payload = r#"{"success": true, "message": "Login successful! Redirecting...", "redirect": "/dashboard"}"#;
    let response: LoginResponse = serde_json::from_str(payload).unwrap();
    assert!(response.success);
    assert_eq!(response.redirect.as_deref(), Some("/dashboard"));
    assert!(response.errors.is_empty());
}

#[test]
fn login_rejection_decodes_field_errors() {
    let payload = r#"{"success": false, "errors": {"login": "Invalid email or password."}}"#;
    let response: LoginResponse = serde_json::from_str(payload).unwrap();
    assert!(!response.success);
    assert_eq!(response.errors.get("login").map(String::as_str), Some("Invalid email or password."));
}

#[test]
fn signup_request_serializes_snake_case_with_iso_date() {
    let request = SignupRequest {
        first_name: "Ada".into(),
        middle_name: String::new(),
        last_name: "Material".into(),
        country: "Norway".into(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 4, 1).unwrap(),
        email: "ada@example.com".into(),
        password: "griStle9!".into(),
        confirm_password: "griStle9!".into(),
    };

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["date_of_birth"], "1990-04-01");
    assert_eq!(value["middle_name"], "");
    assert_eq!(value["confirm_password"], "griStle9!");
}

// =============================================================================
// Flagged error payloads
// =============================================================================

#[test]
fn bare_string_errors_land_under_the_general_key() {
    let payload = r#"{"success": false, "errors": "Invalid JSON"}"#;
    let response: OpResponse = serde_json::from_str(payload).unwrap();
    assert_eq!(response.errors.get(GENERAL_ERROR_KEY).map(String::as_str), Some("Invalid JSON"));
}

#[test]
fn missing_errors_default_to_empty() {
    let payload = r#"{"success": true, "message": "Account successfully created! Redirecting..."}"#;
    let response: OpResponse = serde_json::from_str(payload).unwrap();
    assert!(response.errors.is_empty());
}

#[test]
fn null_errors_default_to_empty() {
    let payload = r#"{"success": true, "errors": null}"#;
    let response: OpResponse = serde_json::from_str(payload).unwrap();
    assert!(response.errors.is_empty());
}

#[test]
fn list_valued_errors_are_joined() {
    let payload = r#"{"success": false, "errors": {"password": ["Too short.", "Needs a digit."]}}"#;
    let response: OpResponse = serde_json::from_str(payload).unwrap();
    assert_eq!(
        response.errors.get("password").map(String::as_str),
        Some("Too short. Needs a digit.")
    );
}

#[test]
fn numeric_errors_payload_is_rejected() {
    let payload = r#"{"success": false, "errors": 42}"#;
    assert!(serde_json::from_str::<OpResponse>(payload).is_err());
}

// =============================================================================
// Preferences asymmetry
// =============================================================================

#[test]
fn preferences_decode_snake_case() {
    let payload = r#"{
        "risk_level": "medium",
        "investment_strategy": "esg_integration",
        "esg_factors": ["carbon_emissions", "board_diversity"],
        "industry_preferences": [],
        "exclusions": ["tobacco"],
        "sentiment_analysis": "yes",
        "transparency_level": "detailed_breakdown"
    }"#;

    let preferences: Preferences = serde_json::from_str(payload).unwrap();
    assert_eq!(preferences.risk_level, "medium");
    assert_eq!(preferences.exclusions, vec!["tobacco".to_owned()]);
}

#[test]
fn preference_updates_serialize_camel_case() {
    let update = PreferencesUpdate {
        risk_level: "high".into(),
        investment_strategy: "impact_investing".into(),
        esg_factors: vec!["water_usage".into()],
        industry_preferences: vec![],
        exclusions: vec![],
        sentiment_analysis: "no".into(),
        transparency_level: "simple_summary".into(),
    };

    let value = serde_json::to_value(&update).unwrap();
    assert_eq!(value["riskLevel"], "high");
    assert_eq!(value["investmentStrategy"], "impact_investing");
    assert_eq!(value["esgFactors"][0], "water_usage");
    assert!(value.get("risk_level").is_none());
}

#[test]
fn update_round_trips_from_stored_preferences() {
    let stored = Preferences {
        risk_level: "low".into(),
        investment_strategy: "ethical_screening".into(),
        esg_factors: vec!["emissions".into()],
        industry_preferences: vec!["renewables".into()],
        exclusions: vec![],
        sentiment_analysis: "yes".into(),
        transparency_level: "simple_summary".into(),
    };

    let update = PreferencesUpdate::from(stored.clone());
    assert_eq!(update.risk_level, stored.risk_level);
    assert_eq!(update.industry_preferences, stored.industry_preferences);
}

// =============================================================================
// Portfolio payloads
// =============================================================================

#[test]
fn portfolio_stock_accepts_quoted_and_bare_decimals() {
    let payload = r#"{
        "stocks": [
            {"id": 1, "symbol": "MSFT", "company_name": "Microsoft", "shares": 3,
             "amount_invested": "1234.50", "price_bought_at": 411.5,
             "added_at": "2025-02-11T09:30:00Z"},
            {"id": 2, "symbol": "ORSTED", "company_name": "Orsted A/S", "shares": 10}
        ]
    }"#;

    let portfolio: PortfolioResponse = serde_json::from_str(payload).unwrap();
    assert_eq!(portfolio.stocks.len(), 2);
    assert_eq!(portfolio.stocks[0].amount_invested, Some(1234.50));
    assert_eq!(portfolio.stocks[0].price_bought_at, Some(411.5));
    assert_eq!(portfolio.stocks[1].amount_invested, None);
    assert_eq!(portfolio.stocks[1].added_at, None);
}

#[test]
fn unparseable_decimal_string_is_a_decode_error() {
    let payload = r#"{"id": 1, "symbol": "X", "company_name": "X", "shares": 1, "amount_invested": "a lot"}"#;
    assert!(serde_json::from_str::<PortfolioStock>(payload).is_err());
}

#[test]
fn add_stock_request_omits_absent_money_fields() {
    let request = AddStockRequest {
        symbol: "VWS".into(),
        company_name: "Vestas Wind Systems".into(),
        shares: 5,
        amount_invested: None,
        price_bought_at: Some(21.4),
    };

    let value = serde_json::to_value(&request).unwrap();
    assert!(value.get("amount_invested").is_none());
    assert_eq!(value["price_bought_at"], 21.4);
}

#[test]
fn quote_accepts_quoted_price() {
    let quote: StockQuote = serde_json::from_str(r#"{"symbol": "MSFT", "price": "415.20"}"#).unwrap();
    assert_eq!(quote.price, 415.20);
    assert_eq!(quote.currency, None);
}

// =============================================================================
// ESG payloads
// =============================================================================

#[test]
fn esg_metrics_ignore_unknown_columns() {
    let payload = r#"{
        "ticker": "MSFT",
        "name": "Microsoft",
        "metrics": [
            {"year": 2023, "fieldid": 17, "hierarchy": "E/Emissions", "pillar": "Environmental",
             "fieldname": "CO2 Emissions Total", "value": "12,110,000", "valuescore": 63.2}
        ]
    }"#;

    let response: CompanyEsgResponse = serde_json::from_str(payload).unwrap();
    assert_eq!(response.metrics[0].year, 2023);
    assert_eq!(response.metrics[0].pillar, "Environmental");
    assert_eq!(response.metrics[0].valuescore, 63.2);
}

#[test]
fn dashboard_decodes_with_optional_average() {
    let payload = r#"{
        "total_value": "15230.00",
        "total_invested": 14000,
        "holdings": [
            {"symbol": "MSFT", "company_name": "Microsoft", "shares": 3, "value": 1245.6, "esg_score": 71.0}
        ]
    }"#;

    let data: DashboardData = serde_json::from_str(payload).unwrap();
    assert_eq!(data.total_value, 15230.0);
    assert_eq!(data.total_invested, 14000.0);
    assert_eq!(data.esg_average, None);
    assert_eq!(data.holdings[0].esg_score, Some(71.0));
}

#[test]
fn insight_rejection_carries_errors() {
    let payload = r#"{"success": false, "errors": {"symbol": "Unknown ticker."}}"#;
    let response: InsightResponse = serde_json::from_str(payload).unwrap();
    assert!(!response.success);
    assert_eq!(response.insight, None);
    assert_eq!(response.errors.get("symbol").map(String::as_str), Some("Unknown ticker."));
}
