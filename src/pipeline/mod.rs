//! Request handler chain.
//!
//! # Data Flow
//! ```text
//! Received
//!     → NumericIdCheck   (400 InvalidId on failure)
//!     → ExistenceLookup  (404 NotFound on failure)
//!     → terminal action  (actions module)
//!     → Responded
//! ```
//!
//! # Design Decisions
//! - Context is moved through the steps by value, never shared mutably
//! - The first failing step ends the chain; later steps do not run
//! - Steps only read the store; mutation belongs to terminal actions

pub mod context;
pub mod steps;

pub use context::{Located, RequestContext};
pub use steps::{parse_numeric_id, ExistenceLookup, NumericIdCheck, Pipeline, Step};
