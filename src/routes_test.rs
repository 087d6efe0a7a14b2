use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

// =============================================================================
// Table shape
// =============================================================================

#[test]
fn paths_are_unique_and_absolute() {
    let entries = table().entries();
    let paths: HashSet<&str> = entries.iter().map(RouteEntry::path).collect();

    assert_eq!(paths.len(), entries.len());
    for path in paths {
        assert!(path.starts_with('/'), "route path {path:?} is not absolute");
    }
}

#[test]
fn names_are_unique() {
    let entries = table().entries();
    let names: HashSet<RouteName> = entries.iter().map(RouteEntry::name).collect();
    assert_eq!(names.len(), entries.len());
}

#[test]
fn resolve_matches_exact_paths_only() {
    let table = table();

    for entry in table.entries() {
        let found = table.resolve(entry.path());
        assert_eq!(found.map(RouteEntry::name), Some(entry.name()));
    }

    assert!(table.resolve("/no-such-page").is_none());
    assert!(table.resolve("/dashboard/").is_none());
    assert!(table.resolve("dashboard").is_none());
}

#[test]
fn account_pages_nest_under_account() {
    assert_eq!(RouteName::Account.path(), "/account");
    for name in [RouteName::Preferences, RouteName::Settings, RouteName::Portfolio] {
        assert!(name.path().starts_with("/account/"));
    }
}

#[test]
fn heavy_pages_are_deferred() {
    let table = table();

    let deferred: Vec<RouteName> = table
        .entries()
        .iter()
        .filter(|entry| entry.is_deferred())
        .map(RouteEntry::name)
        .collect();

    assert_eq!(
        deferred,
        vec![RouteName::Preferences, RouteName::Settings, RouteName::Portfolio, RouteName::Dashboard]
    );
}

// =============================================================================
// View binding
// =============================================================================

static LOADS: AtomicUsize = AtomicUsize::new(0);

fn counting_loader() -> ViewFn {
    LOADS.fetch_add(1, Ordering::SeqCst);
    || ().into_any()
}

#[test]
fn deferred_loader_runs_once_across_repeated_lookups() {
    let entry = RouteEntry::deferred(RouteName::Dashboard, counting_loader);
    assert!(entry.is_deferred());
    assert_eq!(LOADS.load(Ordering::SeqCst), 0, "loader must not run before first use");

    entry.view_fn();
    entry.view_fn();
    drop(entry.view());

    assert_eq!(LOADS.load(Ordering::SeqCst), 1);
}

#[test]
fn eager_binding_needs_no_resolution() {
    let entry = RouteEntry::eager(RouteName::Home, || ().into_any());
    assert!(!entry.is_deferred());
    drop(entry.view());
}

#[test]
fn view_of_unknown_name_renders_empty() {
    let table = RouteTable::from_entries(vec![RouteEntry::eager(RouteName::Home, || ().into_any())]);
    drop(table.view_of(RouteName::Dashboard));
}
