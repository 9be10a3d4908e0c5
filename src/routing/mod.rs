//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Address-bar URL (path, query, hash)
//!     → history.rs (strip base prefix)
//!     → table.rs (literal path lookup, first match wins)
//!     → Return: ResolvedRoute or None
//!
//! Table construction (at startup):
//!     literal Route[]
//!     → check unique paths and names
//!     → freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes built once at startup, immutable at runtime
//! - No pattern syntax: paths are literal, matched in table order
//! - Reverse lookup by name so callers never hard-code hrefs
//! - Base path handled only by the history layer; the table never sees it

pub mod history;
pub mod route;
pub mod router;
pub mod table;

pub use history::{HistoryLocation, WebHistory};
pub use route::{Route, View};
pub use router::{ResolvedRoute, Router, RouterError};
pub use table::{RouteTable, RouteTableError};
