//! Route resolution.
//!
//! # Responsibilities
//! - Combine the web history and the route table
//! - Resolve an address-bar URL to a route
//! - Build hrefs from route names
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Explicit `None` on no match rather than a silent default route

use thiserror::Error;

use crate::config::AppConfig;
use crate::routing::history::{HistoryLocation, WebHistory};
use crate::routing::route::Route;
use crate::routing::table::RouteTable;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    #[error("no route named {0:?}")]
    UnknownRoute(String),
}

/// Result of resolving a URL against the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute<'a> {
    /// The matched route.
    pub route: &'a Route,
    /// The in-app location the URL mapped to.
    pub location: HistoryLocation,
    /// Canonical href of the matched route.
    pub href: String,
}

/// History-backed router over an immutable route table.
#[derive(Debug, Clone)]
pub struct Router {
    history: WebHistory,
    table: RouteTable,
}

impl Router {
    pub fn new(history: WebHistory, table: RouteTable) -> Self {
        tracing::info!(
            base = %history.base(),
            routes = table.len(),
            "Router initialized"
        );
        Self { history, table }
    }

    /// Build the application router using the configured base URL.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(WebHistory::new(&config.base_url), RouteTable::build())
    }

    /// Resolve an address-bar URL to a route.
    pub fn resolve(&self, url: &str) -> Option<ResolvedRoute<'_>> {
        let location = self.history.location(url);

        match self.table.match_path(&location.path) {
            Some(route) => {
                tracing::debug!(url = %url, route = %route.name, "Route resolved");
                Some(ResolvedRoute {
                    route,
                    href: self.history.create_href(&route.path),
                    location,
                })
            }
            None => {
                tracing::debug!(url = %url, path = %location.path, "No route matched");
                None
            }
        }
    }

    /// Href of the route registered under `name`.
    pub fn href_for(&self, name: &str) -> Result<String, RouterError> {
        self.table
            .lookup_by_name(name)
            .map(|route| self.history.create_href(&route.path))
            .ok_or_else(|| RouterError::UnknownRoute(name.to_string()))
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn history(&self) -> &WebHistory {
        &self.history
    }
}
