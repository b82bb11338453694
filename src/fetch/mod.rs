//! Outbound fetch subsystem.
//!
//! # Data Flow
//! ```text
//! validated URL
//!     → bounded.rs (GET, chunk accumulation, abort at the cap)
//!     → Vec<u8> ≤ max_size, or error.rs FetchError
//! ```

pub mod bounded;
pub mod error;

pub use bounded::BoundedFetcher;
pub use error::FetchError;
