//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing, config, http
//!     → tracing events (structured fields)
//!     → logging.rs (subscriber: env filter + fmt layer)
//!     → stdout
//! ```

pub mod logging;

pub use logging::init_logging;
