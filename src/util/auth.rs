//! Shared auth guard behavior.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page behind a login applies the identical redirect rule, and none
//! of them redirect before the initial session probe has settled.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes::RouteName;
use crate::state::{SessionState, SessionStore};

/// Whether an unauthenticated visitor should be sent to the login page:
/// only once the session probe has settled, and only when it said no.
pub fn should_redirect_unauth(ready: bool, session: &SessionState) -> bool {
    ready && !session.logged_in
}

/// Redirect to the login page whenever the session settles logged-out.
pub fn install_unauth_redirect<F>(store: &SessionStore, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let session = store.session();
    let ready = store.ready();
    Effect::new(move || {
        if should_redirect_unauth(ready.get(), &session.get()) {
            navigate(RouteName::Login.path(), NavigateOptions::default());
        }
    });
}
