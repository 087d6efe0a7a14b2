use super::*;

// =============================================================================
// Path builders
// =============================================================================

#[test]
fn parameterized_paths_keep_trailing_slashes() {
    assert_eq!(remove_stock_path(7), "/api/remove-stock/7/");
    assert_eq!(esg_scores_path("MSFT"), "/api/get-esg-data/MSFT/");
    assert_eq!(peer_scores_path("VWS"), "/api/fetch-esg-peer-scores/VWS/");
}

// =============================================================================
// Status policies
// =============================================================================

#[test]
fn decode_ok_accepts_only_2xx() {
    let body = r#"{"isLoggedIn": false}"#;

    let decoded: AppData = decode_ok(&HttpResponse::new(200, body)).unwrap();
    assert!(!decoded.is_logged_in);

    let forbidden = decode_ok::<AppData>(&HttpResponse::new(403, body));
    assert_eq!(forbidden, Err(Error::Http(403)));

    let broken = decode_ok::<AppData>(&HttpResponse::new(500, "<html>boom</html>"));
    assert_eq!(broken, Err(Error::Http(500)));
}

#[test]
fn decode_flagged_accepts_rejection_bodies_on_400() {
    let rejection = HttpResponse::new(400, r#"{"success": false, "errors": {"login": "Invalid email or password."}}"#);
    let decoded: LoginResponse = decode_flagged(&rejection).unwrap();
    assert!(!decoded.success);
    assert_eq!(decoded.errors.get("login").map(String::as_str), Some("Invalid email or password."));
}

#[test]
fn decode_flagged_still_rejects_server_errors() {
    let broken = HttpResponse::new(500, r#"{"success": false, "errors": {}}"#);
    assert_eq!(decode_flagged::<LoginResponse>(&broken), Err(Error::Http(500)));

    let gateway = HttpResponse::new(502, "Bad Gateway");
    assert_eq!(decode_flagged::<OpResponse>(&gateway), Err(Error::Http(502)));
}

#[test]
fn decode_flagged_surfaces_malformed_400_bodies() {
    let html = HttpResponse::new(400, "<html>Bad Request</html>");
    assert!(matches!(decode_flagged::<OpResponse>(&html), Err(Error::Decode(_))));
}

// =============================================================================
// Native behavior
// =============================================================================

#[test]
fn endpoints_report_the_transport_unavailable_off_the_browser() {
    let http = Http::with_base("http://localhost:8000");

    assert_eq!(futures::executor::block_on(fetch_app_data(&http)), Err(Error::Unavailable));
    assert_eq!(futures::executor::block_on(logout(&http)), Err(Error::Unavailable));
    assert_eq!(
        futures::executor::block_on(check_user_exists(&http, "ada@example.com")),
        Err(Error::Unavailable)
    );
    assert_eq!(futures::executor::block_on(remove_stock(&http, 3)), Err(Error::Unavailable));
    assert_eq!(
        futures::executor::block_on(fetch_esg_news(&http, Some("MSFT"))),
        Err(Error::Unavailable)
    );
}
