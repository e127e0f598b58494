//! Server settings, read from the environment (and `.env` when present).

use std::env;

use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid log filter {filter:?}: {reason}")]
    LogFilter { filter: String, reason: String },
    #[error("logging already initialised: {0}")]
    Logging(String),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `tracing` filter directives, e.g. `info,tower_http=debug`.
    pub log_filter: String,
    /// Cargo.toml holding `[package.metadata.leptos]`; cargo-leptos sets the
    /// equivalent `LEPTOS_*` variables itself when this is unset.
    pub leptos_config_path: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            log_filter: env::var("LOG_FILTER").unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
            leptos_config_path: env::var("LEPTOS_CONFIG_PATH")
                .ok()
                .filter(|path| !path.trim().is_empty()),
        }
    }

    /// Installs the global subscriber. `log` records from the page
    /// components are picked up too.
    pub fn init_tracing(&self) -> Result<(), ServerError> {
        let filter = EnvFilter::try_new(&self.log_filter).map_err(|e| ServerError::LogFilter {
            filter: self.log_filter.clone(),
            reason: e.to_string(),
        })?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init()
            .map_err(|e| ServerError::Logging(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_filter() {
        let config = ServerConfig {
            log_filter: "tower_http=loudest".into(),
            leptos_config_path: None,
        };
        assert!(matches!(
            config.init_tracing(),
            Err(ServerError::LogFilter { .. })
        ));
    }
}
