//! History-mode route table for the HSH single-page app.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::AppConfig;
pub use http::AppServer;
pub use lifecycle::Shutdown;
pub use routing::{Route, RouteTable, Router, View, WebHistory};
