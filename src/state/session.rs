//! Authenticated-session state and the actions that change it.
//!
//! DESIGN
//! ======
//! [`SessionStore`] is a context object: it owns the transport handle, the
//! reactive session record, and a readiness flag, and is provided once at
//! the app root. Actions return typed results instead of mutating on the
//! sly. A rejected login is data (`LoginOutcome::Rejected`), not an error;
//! errors are reserved for the transport. Logging out resets the local
//! record even when the backend call fails, so a dead server cannot pin
//! the UI in a logged-in state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::http::{Error, Http};
use crate::net::types::{AppData, FieldErrors, LoginRequest, LoginResponse, UserProfile};
use crate::routes::RouteName;

/// What the client currently believes about the session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    /// Whether the session cookie was live at the last probe or login.
    pub logged_in: bool,
    /// Profile of the signed-in account, when known.
    pub user: Option<UserProfile>,
}

impl SessionState {
    /// Overwrite the record with a probe answer, verbatim.
    pub(crate) fn apply_app_data(&mut self, data: AppData) {
        self.logged_in = data.is_logged_in;
        self.user = data.user;
    }

    /// Mark the session live after an accepted login.
    pub(crate) fn apply_login(&mut self, user: Option<UserProfile>) {
        self.logged_in = true;
        self.user = user;
    }

    /// Reset to the logged-out state.
    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Answer to a login attempt that reached the backend.
#[derive(Clone, Debug, PartialEq)]
pub enum LoginOutcome {
    /// Credentials accepted; the session record is already updated.
    Accepted {
        /// Path the app should navigate to next.
        redirect: String,
    },
    /// Credentials rejected with field-keyed messages for the form.
    Rejected { errors: FieldErrors },
}

/// Split a decoded login response into the profile to store and the
/// outcome to hand back. An accepted response without a redirect falls
/// back to the dashboard; a rejection without messages gets a generic one
/// so the form always has something to show.
pub(crate) fn login_outcome(response: LoginResponse) -> (Option<UserProfile>, LoginOutcome) {
    if response.success {
        let redirect =
            response.redirect.unwrap_or_else(|| RouteName::Dashboard.path().to_owned());
        (response.user, LoginOutcome::Accepted { redirect })
    } else {
        let mut errors = response.errors;
        if errors.is_empty() {
            errors.insert("login".to_owned(), "Login failed.".to_owned());
        }
        (None, LoginOutcome::Rejected { errors })
    }
}

/// Session context object provided at the app root.
#[derive(Clone)]
pub struct SessionStore {
    http: Http,
    session: RwSignal<SessionState>,
    ready: RwSignal<bool>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            http: Http::new(),
            session: RwSignal::new(SessionState::default()),
            ready: RwSignal::new(false),
        }
    }

    /// Transport handle, shared with the endpoint wrappers pages call
    /// directly.
    pub fn http(&self) -> &Http {
        &self.http
    }

    /// Reactive session record.
    pub fn session(&self) -> RwSignal<SessionState> {
        self.session
    }

    /// Flips to `true` once the initial session probe has settled, success
    /// or not. Guards read it to avoid redirecting before the answer is in.
    pub fn ready(&self) -> RwSignal<bool> {
        self.ready
    }

    /// Probe the backend session and overwrite the local record with the
    /// answer.
    ///
    /// # Errors
    ///
    /// Propagates transport and decode failures. The record is left
    /// untouched on failure, but the ready flag is set either way.
    pub async fn fetch_user(&self) -> Result<(), Error> {
        let result = api::fetch_app_data(&self.http).await;
        self.ready.set(true);
        let data = result?;
        self.session.update(|s| s.apply_app_data(data));
        Ok(())
    }

    /// Submit credentials. On acceptance the session record is updated
    /// before this returns; on rejection the record is untouched and the
    /// outcome carries the form messages.
    ///
    /// # Errors
    ///
    /// Propagates transport and decode failures without touching the
    /// record.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, Error> {
        let request = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        let response = api::login(&self.http, &request).await?;
        let (user, outcome) = login_outcome(response);
        if matches!(outcome, LoginOutcome::Accepted { .. }) {
            self.session.update(|s| s.apply_login(user));
        }
        Ok(outcome)
    }

    /// End the session. The local record is reset whether or not the
    /// backend call succeeds.
    ///
    /// # Errors
    ///
    /// Propagates transport failures after the reset, for logging.
    pub async fn logout(&self) -> Result<(), Error> {
        let result = api::logout(&self.http).await;
        self.session.update(SessionState::clear);
        result
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
