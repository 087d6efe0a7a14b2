use super::*;

// =============================================================================
// Cookie parsing
// =============================================================================

#[test]
fn finds_single_cookie() {
    assert_eq!(token_from_cookies("csrftoken=abc123", "csrftoken"), Some("abc123".to_owned()));
}

#[test]
fn finds_cookie_among_many() {
    let cookies = "sessionid=xyz; csrftoken=tok-9; theme=dark";
    assert_eq!(token_from_cookies(cookies, "csrftoken"), Some("tok-9".to_owned()));
}

#[test]
fn tolerates_whitespace_around_pairs() {
    let cookies = "  sessionid=xyz ;   csrftoken=tok  ";
    assert_eq!(token_from_cookies(cookies, "sessionid"), Some("xyz".to_owned()));
    assert_eq!(token_from_cookies(cookies, "csrftoken"), Some("tok".to_owned()));
}

#[test]
fn empty_value_counts_as_absent() {
    assert_eq!(token_from_cookies("csrftoken=; other=1", "csrftoken"), None);
}

#[test]
fn missing_cookie_is_none() {
    assert_eq!(token_from_cookies("sessionid=xyz", "csrftoken"), None);
    assert_eq!(token_from_cookies("", "csrftoken"), None);
}

#[test]
fn value_may_contain_equals() {
    assert_eq!(token_from_cookies("csrftoken=a=b=c", "csrftoken"), Some("a=b=c".to_owned()));
}

#[test]
fn name_must_match_exactly() {
    assert_eq!(token_from_cookies("xcsrftoken=abc", "csrftoken"), None);
    assert_eq!(token_from_cookies("csrftoken2=abc", "csrftoken"), None);
}

// =============================================================================
// Base address handling
// =============================================================================

#[test]
fn trailing_slash_is_dropped_from_base() {
    let http = Http::with_base("http://localhost:8000/");
    assert_eq!(http.url("/api/app-data"), "http://localhost:8000/api/app-data");
}

#[test]
fn bare_base_joins_cleanly() {
    let http = Http::with_base("http://localhost:8000");
    assert_eq!(http.url("/account/login/"), "http://localhost:8000/account/login/");
}

#[test]
fn empty_base_yields_relative_urls() {
    let http = Http::with_base("");
    assert_eq!(http.url("/api/app-data"), "/api/app-data");
}

// =============================================================================
// Response inspection
// =============================================================================

#[test]
fn ok_covers_the_2xx_range() {
    assert!(HttpResponse::new(200, "").ok());
    assert!(HttpResponse::new(204, "").ok());
    assert!(HttpResponse::new(299, "").ok());
    assert!(!HttpResponse::new(199, "").ok());
    assert!(!HttpResponse::new(300, "").ok());
    assert!(!HttpResponse::new(400, "").ok());
    assert!(!HttpResponse::new(500, "").ok());
}

#[test]
fn status_is_preserved() {
    assert_eq!(HttpResponse::new(403, "forbidden").status(), 403);
}

#[test]
fn json_decodes_a_valid_body() {
    #[derive(serde::Deserialize, PartialEq, Debug)]
    struct Probe {
        n: i64,
    }

    let response = HttpResponse::new(200, r#"{"n": 7}"#);
    assert_eq!(response.json::<Probe>(), Ok(Probe { n: 7 }));
}

#[test]
fn json_rejects_a_malformed_body() {
    let response = HttpResponse::new(200, "<html>504</html>");
    let err = response.json::<serde_json::Value>().unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

// =============================================================================
// Error display
// =============================================================================

#[test]
fn errors_render_for_logging() {
    assert_eq!(Error::Network("timeout".into()).to_string(), "network error: timeout");
    assert_eq!(Error::Http(502).to_string(), "unexpected http status 502");
    assert_eq!(Error::Unavailable.to_string(), "transport unavailable outside the browser");
}

// =============================================================================
// Native stubs
// =============================================================================

#[test]
fn transport_is_unavailable_off_the_browser() {
    let http = Http::with_base("http://localhost:8000");
    let body = serde_json::json!({"email": "a@b.c"});

    assert_eq!(futures::executor::block_on(http.get("/api/app-data")), Err(Error::Unavailable));
    assert_eq!(
        futures::executor::block_on(http.get_query("/api/search-company/", &[("q", "eco")])),
        Err(Error::Unavailable)
    );
    assert_eq!(
        futures::executor::block_on(http.post_json("/account/login/", &body)),
        Err(Error::Unavailable)
    );
    assert_eq!(
        futures::executor::block_on(http.post("/account/logout/")),
        Err(Error::Unavailable)
    );
    assert_eq!(
        futures::executor::block_on(http.delete("/api/remove-stock/3/")),
        Err(Error::Unavailable)
    );
}
