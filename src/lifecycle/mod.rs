//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:  load config → validate → init logging/metrics → bind → serve
//! Shutdown: SIGINT/SIGTERM (or test trigger) → broadcast → drain → exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Shutdown is a broadcast so tests can trigger it without signals

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
