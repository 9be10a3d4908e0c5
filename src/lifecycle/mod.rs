//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     Ctrl+C → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     Trigger → subscribers (HTTP server) stop accepting → drain → exit
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
