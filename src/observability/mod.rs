//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and middleware produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → stdout (pretty or JSON lines)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Structured logging with request ID on every request span
//! - `RUST_LOG` wins over the configured level when set
//! - Metrics recorder is only installed when enabled; without one the
//!   `metrics` macros are no-ops

pub mod logging;
pub mod metrics;
