//! Products API Library
//!
//! A small JSON CRUD service for a single in-memory "products" resource.
//!
//! # Architecture Overview
//!
//! ```text
//!   Client Request
//!   ──────────────▶ http::server (middleware: request id, trace, metrics,
//!                   │               timeout, body limit)
//!                   ▼
//!                 http::routes (method + path)
//!                   │
//!                   ▼
//!                 pipeline (NumericIdCheck → ExistenceLookup)  ── error ──▶ http::response
//!                   │
//!                   ▼
//!                 actions (create/list/get/replace/patch/delete)
//!                   │
//!                   ▼
//!                 store (ProductStore behind a Mutex)
//! ```

pub mod actions;
pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod pipeline;
pub mod store;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use store::{Product, ProductStore};
