//! Route table and history behaviour through the public API.

use std::collections::HashSet;

use hsh_router::routing::{RouteTable, Router, View, WebHistory};

mod common;

#[test]
fn test_paths_and_names_are_unique() {
    let table = RouteTable::build();

    let paths: HashSet<_> = table.iter().map(|r| r.path.clone()).collect();
    let names: HashSet<_> = table.iter().map(|r| r.name.clone()).collect();

    assert_eq!(paths, HashSet::from(["/".to_string(), "/gallery".to_string()]));
    assert_eq!(names, HashSet::from(["home".to_string(), "gallery".to_string()]));
}

#[test]
fn test_lookup_by_name_returns_expected_paths() {
    let table = RouteTable::build();

    assert_eq!(table.lookup_by_name("home").map(|r| r.path.as_str()), Some("/"));
    assert_eq!(
        table.lookup_by_name("gallery").map(|r| r.path.as_str()),
        Some("/gallery")
    );
}

#[test]
fn test_repeated_build_yields_equal_tables() {
    let first = RouteTable::build();
    let second = RouteTable::build();

    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn test_base_path_end_to_end() {
    let router = Router::from_config(&common::config_with_base("/app/"));

    assert_eq!(router.history().create_href("/"), "/app/");
    assert_eq!(router.href_for("home").unwrap(), "/app/");

    let resolved = router.resolve("/app/gallery").unwrap();
    assert_eq!(resolved.route.name, "gallery");
    assert_eq!(resolved.route.view, View::Gallery);
}

#[test]
fn test_url_outside_base_passes_through() {
    let router = Router::new(WebHistory::new("/app/"), RouteTable::build());

    // Outside the base the path is matched as-is.
    assert_eq!(router.resolve("/gallery").unwrap().route.name, "gallery");
    assert!(router.resolve("/app/gallery/extra").is_none());
}
