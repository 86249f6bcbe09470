//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, body limit > 0)
//! - Check the mount path shape and the log level name
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;
use thiserror::Error;
use tracing::Level;

use crate::config::schema::ServiceConfig;
use crate::http::routes::HEALTH_PATH;

/// A single semantic problem found in a config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("api.mount_path '{0}' must start with '/' and must not end with '/'")]
    MountPath(String),

    #[error("api.mount_path '{0}' collides with a built-in route")]
    ReservedMountPath(String),

    #[error("listener.host must not be empty")]
    EmptyHost,

    #[error("limits.request_timeout_secs must be greater than 0")]
    ZeroTimeout,

    #[error("limits.max_body_bytes must be greater than 0")]
    ZeroBodyLimit,

    #[error("observability.log_level '{0}' is not one of trace, debug, info, warn, error")]
    LogLevel(String),

    #[error("observability.metrics_address '{0}' is not a socket address")]
    MetricsAddress(String),
}

/// Check every semantic rule, collecting all failures.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mount = &config.api.mount_path;
    if !mount.starts_with('/') || (mount.len() > 1 && mount.ends_with('/')) {
        errors.push(ValidationError::MountPath(mount.clone()));
    }
    if mount == HEALTH_PATH {
        errors.push(ValidationError::ReservedMountPath(mount.clone()));
    }

    if config.listener.host.trim().is_empty() {
        errors.push(ValidationError::EmptyHost);
    }

    if config.limits.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }
    if config.limits.max_body_bytes == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    let level = &config.observability.log_level;
    if level.parse::<Level>().is_err() {
        errors.push(ValidationError::LogLevel(level.clone()));
    }

    let metrics_address = &config.observability.metrics_address;
    if config.observability.metrics_enabled && metrics_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::MetricsAddress(metrics_address.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
