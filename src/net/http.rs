//! HTTP transport adapter over `gloo-net`.
//!
//! Every request goes out with the configured base address, cookie
//! credentials included (the dev server runs on a different origin), and —
//! when the `csrftoken` cookie is present — its value echoed in the
//! `X-CSRFToken` header, which the backend requires on state-changing
//! calls. When the cookie is absent the request is sent unmodified.
//!
//! ERROR HANDLING
//! ==============
//! The adapter does no retries, sets no timeout, and translates nothing:
//! network failures surface as [`Error::Network`], and non-2xx statuses are
//! left in the returned [`HttpResponse`] for the caller to interpret.
//! Native (non-`csr`) builds stub the transport with [`Error::Unavailable`]
//! so pure logic stays unit-testable off the browser.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;

use crate::config;

/// Cookie the backend stores its anti-forgery token under.
pub const CSRF_COOKIE: &str = "csrftoken";

/// Header the backend expects the token echoed back in.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Transport-level failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The request never completed (DNS, connection, CORS, abort).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a status the caller does not accept.
    #[error("unexpected http status {0}")]
    Http(u16),
    /// The request body could not be serialized.
    #[error("request encoding failed: {0}")]
    Encode(String),
    /// The response body could not be parsed as the expected shape.
    #[error("malformed response body: {0}")]
    Decode(String),
    /// The transport only exists in browser builds.
    #[error("transport unavailable outside the browser")]
    Unavailable,
}

/// Status and raw body of a completed exchange.
///
/// Decoding is deliberately separate from sending: several endpoints answer
/// validation failures as 400 plus a JSON payload, so the caller decides
/// which statuses carry a decodable body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    status: u16,
    body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// True for any 2xx status.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] when the body is not valid JSON for `T`.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_str(&self.body).map_err(|e| Error::Decode(e.to_string()))
    }
}

/// HTTP client bound to one API base address.
#[derive(Clone, Debug)]
pub struct Http {
    base: String,
}

impl Http {
    /// Client against the build-mode API base from [`config::api_base`].
    pub fn new() -> Self {
        Self::with_base(config::api_base())
    }

    /// Client against an explicit base address. A trailing slash on the
    /// base is dropped; paths are expected to lead with one.
    pub fn with_base(base: impl Into<String>) -> Self {
        let base = base.into();
        Self { base: base.trim_end_matches('/').to_owned() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    /// GET `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Network`] when the request fails in flight and
    /// [`Error::Unavailable`] outside the browser.
    pub async fn get(&self, path: &str) -> Result<HttpResponse, Error> {
        #[cfg(feature = "csr")]
        {
            let builder = decorate(gloo_net::http::Request::get(&self.url(path)));
            read_response(builder.send().await).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
            Err(Error::Unavailable)
        }
    }

    /// GET `path` with query parameters; assembly and escaping are the
    /// transport's job.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Http::get`].
    pub async fn get_query(&self, path: &str, params: &[(&str, &str)]) -> Result<HttpResponse, Error> {
        #[cfg(feature = "csr")]
        {
            let builder =
                decorate(gloo_net::http::Request::get(&self.url(path)).query(params.iter().copied()));
            read_response(builder.send().await).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (path, params);
            Err(Error::Unavailable)
        }
    }

    /// POST `path` with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] when the body fails to serialize, plus the
    /// failure modes of [`Http::get`].
    pub async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<HttpResponse, Error> {
        #[cfg(feature = "csr")]
        {
            let request = decorate(gloo_net::http::Request::post(&self.url(path)))
                .json(body)
                .map_err(|e| Error::Encode(e.to_string()))?;
            read_response(request.send().await).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (path, body);
            Err(Error::Unavailable)
        }
    }

    /// POST `path` with no body.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Http::get`].
    pub async fn post(&self, path: &str) -> Result<HttpResponse, Error> {
        #[cfg(feature = "csr")]
        {
            let builder = decorate(gloo_net::http::Request::post(&self.url(path)));
            read_response(builder.send().await).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
            Err(Error::Unavailable)
        }
    }

    /// DELETE `path`.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Http::get`].
    pub async fn delete(&self, path: &str) -> Result<HttpResponse, Error> {
        #[cfg(feature = "csr")]
        {
            let builder = decorate(gloo_net::http::Request::delete(&self.url(path)));
            read_response(builder.send().await).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
            Err(Error::Unavailable)
        }
    }
}

impl Default for Http {
    fn default() -> Self {
        Self::new()
    }
}

/// Pull `name` out of a `document.cookie` string. Empty values count as
/// absent so the header is omitted rather than sent blank.
pub(crate) fn token_from_cookies(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find_map(|(key, value)| (key == name && !value.is_empty()).then(|| value.to_owned()))
}

#[cfg(feature = "csr")]
fn csrf_token() -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    let cookies = document.dyn_into::<web_sys::HtmlDocument>().ok()?.cookie().ok()?;
    token_from_cookies(&cookies, CSRF_COOKIE)
}

/// Apply the per-request policy: include cookie credentials and echo the
/// CSRF cookie into its header when present.
#[cfg(feature = "csr")]
fn decorate(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    let builder = builder.credentials(web_sys::RequestCredentials::Include);
    match csrf_token() {
        Some(token) => builder.header(CSRF_HEADER, &token),
        None => builder,
    }
}

#[cfg(feature = "csr")]
async fn read_response(
    sent: Result<gloo_net::http::Response, gloo_net::Error>,
) -> Result<HttpResponse, Error> {
    let response = sent.map_err(|e| Error::Network(e.to_string()))?;
    let status = response.status();
    let body = response.text().await.map_err(|e| Error::Network(e.to_string()))?;
    Ok(HttpResponse::new(status, body))
}
