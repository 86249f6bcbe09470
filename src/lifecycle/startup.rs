//! Startup configuration resolution.
//!
//! Order of precedence, lowest first: built-in defaults, the TOML file,
//! command-line flags. Validation runs after overrides are applied.

use std::path::PathBuf;

use crate::config::{load_config, validate_config, ConfigError, ServiceConfig};

/// Values taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    pub config_path: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Build the final config from defaults, an optional file and overrides.
pub fn resolve_config(options: &StartupOptions) -> Result<ServiceConfig, ConfigError> {
    let mut config = match &options.config_path {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    if let Some(host) = &options.host {
        config.listener.host = host.clone();
    }
    if let Some(port) = options.port {
        config.listener.port = port;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
