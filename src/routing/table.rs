//! The application route table.
//!
//! # Responsibilities
//! - Declare the application's routes
//! - Enforce unique paths and unique names
//! - Look up routes by path (table order) and by name
//!
//! # Design Decisions
//! - Immutable after construction (shared without locks)
//! - Literal paths only; matching is a linear scan, first match wins
//! - Matching is case-insensitive and ignores one trailing slash, the web
//!   router's default non-strict behaviour

use std::collections::HashSet;
use std::slice::Iter;

use thiserror::Error;

use crate::routing::route::{Route, View};

/// Errors raised when a table would break its invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    #[error("duplicate route path: {0}")]
    DuplicatePath(String),

    #[error("duplicate route name: {0}")]
    DuplicateName(String),

    #[error("route path must start with '/': {0:?}")]
    InvalidPath(String),
}

/// Ordered, immutable collection of routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Build the application's route table.
    pub fn build() -> Self {
        let routes = vec![
            Route::new("/", "home", View::Home),
            Route::new("/gallery", "gallery", View::Gallery),
        ];
        tracing::debug!(routes = routes.len(), "Route table built");
        Self { routes }
    }

    /// Build a table from arbitrary routes, checking path and name uniqueness.
    pub fn from_routes(routes: Vec<Route>) -> Result<Self, RouteTableError> {
        let mut paths = HashSet::new();
        let mut names = HashSet::new();

        for route in &routes {
            if !route.path.starts_with('/') {
                return Err(RouteTableError::InvalidPath(route.path.clone()));
            }
            if !paths.insert(normalize(&route.path)) {
                return Err(RouteTableError::DuplicatePath(route.path.clone()));
            }
            if !names.insert(route.name.as_str()) {
                return Err(RouteTableError::DuplicateName(route.name.clone()));
            }
        }

        Ok(Self { routes })
    }

    /// Find the route registered under `name`.
    pub fn lookup_by_name(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.name == name)
    }

    /// Find the first route whose path matches `path`.
    pub fn match_path(&self, path: &str) -> Option<&Route> {
        let wanted = normalize(path);
        self.routes.iter().find(|r| normalize(&r.path) == wanted)
    }

    pub fn iter(&self) -> Iter<'_, Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a Route;
    type IntoIter = Iter<'a, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Comparison key: lowercase, at most one trailing slash dropped.
fn normalize(path: &str) -> String {
    let trimmed = path.strip_suffix('/').unwrap_or(path);
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_lowercase()
    }
}
