//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, per-request span)
//!     → routes.rs (method + path → pipeline + terminal action)
//!     → response.rs (outcome or error → status + JSON body)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod routes;
pub mod server;

pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use response::ErrorBody;
pub use server::{AppState, HttpServer};
