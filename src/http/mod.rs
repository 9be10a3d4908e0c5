//! HTTP host for the single-page app.
//!
//! # Data Flow
//! ```text
//! GET <base>/...
//!     → server.rs (axum fallback handler)
//!     → routing::Router::resolve
//!     → app shell naming the view, or 404
//! ```

pub mod server;

pub use server::AppServer;
