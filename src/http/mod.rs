//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → server.rs (axum setup, middleware)
//!     → request.rs (attach request ID)
//!     → [security::referer policy, fetch::bounded fetch]
//!     → response.rs (terminal state → status + body)
//!     → send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestId, RequestIdLayer, X_REQUEST_ID};
pub use response::RelayError;
pub use server::HttpServer;
