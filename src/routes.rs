//! Static route table mapping URL paths to page views.
//!
//! DESIGN
//! ======
//! All routes are declared once in a process-wide table. Light pages bind
//! their view function eagerly; the heavier pages bind a loader that is
//! resolved on first visit and memoized, so later visits reuse the same
//! view function. Lookup is exact-match on the path; there are no dynamic
//! segments in this app.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::sync::OnceLock;

use leptos::prelude::*;

use crate::pages;

/// Stable identifier for each routable page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteName {
    Home,
    Login,
    Signup,
    Account,
    Preferences,
    Settings,
    Portfolio,
    Dashboard,
}

impl RouteName {
    /// Absolute path the route is mounted at.
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Account => "/account",
            Self::Preferences => "/account/preferences",
            Self::Settings => "/account/settings",
            Self::Portfolio => "/account/portfolio",
            Self::Dashboard => "/dashboard",
        }
    }
}

/// Renders one page. Plain function pointers keep the table free of
/// captured state and cheap to hand around.
pub type ViewFn = fn() -> AnyView;

/// How a route obtains its view function.
enum ViewBinding {
    /// Bound when the table is built.
    Eager(ViewFn),
    /// Resolved by `load` on first use, then memoized in `cell`.
    Deferred { load: fn() -> ViewFn, cell: OnceLock<ViewFn> },
}

/// One row of the route table.
pub struct RouteEntry {
    name: RouteName,
    binding: ViewBinding,
}

impl RouteEntry {
    fn eager(name: RouteName, view: ViewFn) -> Self {
        Self { name, binding: ViewBinding::Eager(view) }
    }

    fn deferred(name: RouteName, load: fn() -> ViewFn) -> Self {
        Self { name, binding: ViewBinding::Deferred { load, cell: OnceLock::new() } }
    }

    pub fn name(&self) -> RouteName {
        self.name
    }

    pub fn path(&self) -> &'static str {
        self.name.path()
    }

    /// Whether the view is resolved on first visit rather than up front.
    pub fn is_deferred(&self) -> bool {
        matches!(self.binding, ViewBinding::Deferred { .. })
    }

    /// View function for this route. A deferred binding runs its loader on
    /// the first call only; every call returns the same function.
    pub fn view_fn(&self) -> ViewFn {
        match &self.binding {
            ViewBinding::Eager(view) => *view,
            ViewBinding::Deferred { load, cell } => *cell.get_or_init(*load),
        }
    }

    /// Render the route's page.
    pub fn view(&self) -> AnyView {
        (self.view_fn())()
    }
}

/// The application's complete path → view table.
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    fn from_entries(entries: Vec<RouteEntry>) -> Self {
        Self { entries }
    }

    fn new() -> Self {
        Self::from_entries(vec![
            RouteEntry::eager(RouteName::Home, || pages::home::HomePage().into_any()),
            RouteEntry::eager(RouteName::Login, || pages::login::LoginPage().into_any()),
            RouteEntry::eager(RouteName::Signup, || pages::signup::SignupPage().into_any()),
            RouteEntry::eager(RouteName::Account, || pages::account::AccountPage().into_any()),
            RouteEntry::deferred(RouteName::Preferences, || {
                || pages::preferences::PreferencesPage().into_any()
            }),
            RouteEntry::deferred(RouteName::Settings, || {
                || pages::settings::SettingsPage().into_any()
            }),
            RouteEntry::deferred(RouteName::Portfolio, || {
                || pages::portfolio::PortfolioPage().into_any()
            }),
            RouteEntry::deferred(RouteName::Dashboard, || {
                || pages::dashboard::DashboardPage().into_any()
            }),
        ])
    }

    /// All routes in declaration order.
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Exact-match lookup by path.
    pub fn resolve(&self, path: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.path() == path)
    }

    /// Lookup by name.
    pub fn entry(&self, name: RouteName) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.name() == name)
    }

    /// Render the named route's page. A name missing from the table would
    /// be a wiring bug; it renders empty rather than panicking.
    pub fn view_of(&self, name: RouteName) -> AnyView {
        self.entry(name).map_or_else(|| ().into_any(), RouteEntry::view)
    }
}

/// Process-wide route table, built on first use.
pub fn table() -> &'static RouteTable {
    static TABLE: OnceLock<RouteTable> = OnceLock::new();
    TABLE.get_or_init(RouteTable::new)
}
