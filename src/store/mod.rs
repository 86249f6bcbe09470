//! Product storage subsystem.
//!
//! # Data Flow
//! ```text
//! main.rs builds one ProductStore
//!     → wrapped in SharedStore (Arc<Mutex<..>>)
//!     → injected into AppState
//!     → handlers lock it for one request's read-modify-write
//! ```
//!
//! # Design Decisions
//! - Records kept in creation order; lookup is a linear scan by id
//! - Ids come from a monotonic counter and are never reissued
//! - Nothing is persisted; the store lives and dies with the process

pub mod memory;
pub mod product;

pub use memory::{ProductStore, SharedStore};
pub use product::{Price, Product, ProductId};
