//! Gateway server lifecycle

use crate::{GatewayConfig, Result, ServerError};
use gateway_api::{AppState, create_router};
use gateway_ingest::{IngestionPipeline, MemorySink};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// The gateway server: pipeline, router, and listener lifecycle.
pub struct GatewayServer {
    config: GatewayConfig,
    app: axum::Router,
}

impl GatewayServer {
    /// Wire the pipeline into the HTTP surface.
    ///
    /// The in-memory sink stands in for the downstream processing stage;
    /// durable delivery is owned by whichever sink implementation replaces
    /// it.
    pub fn new(config: GatewayConfig) -> Self {
        let sink = Arc::new(MemorySink::new());
        let pipeline = Arc::new(IngestionPipeline::with_limits(
            sink,
            config.admission_limits(),
        ));
        let app = create_router(AppState::new(pipeline));

        Self { config, app }
    }

    /// Bind and serve until a shutdown signal arrives.
    pub async fn start(self) -> Result<()> {
        let address = self.config.server_address();

        let listener = TcpListener::bind(&address)
            .await
            .map_err(|source| ServerError::Bind { address: address.clone(), source })?;

        info!(%address, "gateway listening");

        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("gateway stopped");
        Ok(())
    }

    /// Get the resolved configuration
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

/// Completes on ctrl-c or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received ctrl-c, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_server_creation_uses_config() {
        let mut config = GatewayConfig::default();
        config.server.port = 9123;

        let server = GatewayServer::new(config);
        assert_eq!(server.config().server_address(), "0.0.0.0:9123");
    }

    #[tokio::test]
    async fn test_bind_failure_is_reported() {
        // Occupy a port so the server's bind attempt collides with it.
        let occupied = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = occupied.local_addr().unwrap().port();

        let mut config = GatewayConfig::default();
        config.server.bind_address = "127.0.0.1".to_string();
        config.server.port = port;

        let server = GatewayServer::new(config);
        let actual = server.start().await;
        assert!(matches!(actual, Err(ServerError::Bind { .. })));
    }
}
