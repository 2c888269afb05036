//! algoscope API server with graceful shutdown

use algoscope_core::{Classifier, ClassifierConfig, RuleProfile};
use axum::{extract::DefaultBodyLimit, middleware, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;

use crate::error::ApiError;
use crate::metrics::Metrics;
use crate::middleware::{
    body_limit_layer, cors_layer, handle_panic, request_id_middleware, timeout_layer,
    tracing_middleware,
};
use crate::routes::api_router;
use crate::state::AppState;

/// Port used when neither ALGOSCOPE_PORT nor PORT is set
pub const DEFAULT_PORT: u16 = 5004;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server address
    pub addr: SocketAddr,
    /// Request timeout
    pub timeout: Duration,
    /// Max request body size (bytes)
    pub max_body_size: usize,
    /// Enable compression
    pub compression: bool,
    /// Comma-separated CORS allow list; `None` allows any origin
    pub cors_origins: Option<String>,
    /// Classifier settings
    pub classifier: ClassifierConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            timeout: Duration::from_secs(30),
            max_body_size: 1024 * 1024, // 1MB
            compression: true,
            cors_origins: None,
            classifier: ClassifierConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port: u16 = lookup("ALGOSCOPE_PORT")
            .or_else(|| lookup("PORT"))
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let timeout = lookup("ALGOSCOPE_TIMEOUT_SECS")
            .and_then(|t| t.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        let max_body_size = lookup("ALGOSCOPE_MAX_BODY_BYTES")
            .and_then(|b| b.parse().ok())
            .unwrap_or(defaults.max_body_size);

        let compression = lookup("ALGOSCOPE_COMPRESSION")
            .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "0" | "false" | "off"))
            .unwrap_or(defaults.compression);

        let profile = match lookup("ALGOSCOPE_RULE_PROFILE") {
            Some(raw) => raw.parse::<RuleProfile>().unwrap_or_else(|e| {
                tracing::warn!("{}, using standard rules", e);
                RuleProfile::Standard
            }),
            None => RuleProfile::Standard,
        };

        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], port)),
            timeout,
            max_body_size,
            compression,
            cors_origins: lookup("ALGOSCOPE_CORS_ORIGINS"),
            classifier: ClassifierConfig::new().with_profile(profile),
        }
    }
}

/// algoscope API server
pub struct AlgoscopeServer {
    config: ServerConfig,
    app_state: AppState,
}

impl AlgoscopeServer {
    /// Create a new server
    pub fn new(config: ServerConfig) -> Self {
        let app_state = AppState::new(
            Classifier::new(config.classifier),
            Arc::new(Metrics::new()),
        );
        Self { config, app_state }
    }

    /// Get the configured router
    pub fn router(&self) -> Router {
        let mut app = api_router(self.app_state.clone());

        if self.config.compression {
            app = app.layer(CompressionLayer::new());
        }

        // Layers run bottom to top on the way in. axum's own 2 MiB extractor
        // cap is lifted so the configured limit is the only one.
        app.layer(DefaultBodyLimit::disable())
            .layer(body_limit_layer(self.config.max_body_size))
            .layer(timeout_layer(self.config.timeout))
            .layer(cors_layer(self.config.cors_origins.as_deref()))
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(middleware::from_fn(tracing_middleware))
            .layer(middleware::from_fn(request_id_middleware))
    }

    /// Run the server until Ctrl+C or SIGTERM
    pub async fn run(self) -> Result<(), ApiError> {
        let app = self.router();
        let addr = self.config.addr;

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ApiError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

        tracing::info!(
            profile = ?self.config.classifier.profile,
            "algoscope API listening on http://{}",
            addr
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }

    /// Get server metrics
    pub fn metrics(&self) -> Arc<Metrics> {
        self.app_state.metrics()
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}

/// Initialize tracing subscriber
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,algoscope_api=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.addr.port(), 5004);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.classifier.profile, RuleProfile::Standard);
    }

    #[test]
    fn test_config_from_lookup() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("ALGOSCOPE_PORT", "9000"),
            ("ALGOSCOPE_TIMEOUT_SECS", "5"),
            ("ALGOSCOPE_COMPRESSION", "off"),
            ("ALGOSCOPE_RULE_PROFILE", "legacy"),
            ("ALGOSCOPE_CORS_ORIGINS", "http://localhost:3000"),
        ]));
        assert_eq!(config.addr.port(), 9000);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(!config.compression);
        assert_eq!(config.classifier.profile, RuleProfile::Legacy);
        assert_eq!(config.cors_origins.as_deref(), Some("http://localhost:3000"));
    }

    #[test]
    fn test_port_falls_back_to_platform_port() {
        let config = ServerConfig::from_lookup(lookup_from(&[("PORT", "8081")]));
        assert_eq!(config.addr.port(), 8081);

        let config = ServerConfig::from_lookup(lookup_from(&[
            ("PORT", "8081"),
            ("ALGOSCOPE_PORT", "7000"),
        ]));
        assert_eq!(config.addr.port(), 7000);
    }

    #[test]
    fn test_bad_values_use_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("ALGOSCOPE_PORT", "not-a-port"),
            ("ALGOSCOPE_RULE_PROFILE", "strict"),
        ]));
        assert_eq!(config.addr.port(), DEFAULT_PORT);
        assert_eq!(config.classifier.profile, RuleProfile::Standard);
    }
}
