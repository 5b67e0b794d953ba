//! ServerBuilder for fluent API to build the HTTP server

use super::host::ServerHost;
use super::router::build_routes;
use crate::config::FrontendConfig;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the listing server
///
/// # Example
///
/// ```ignore
/// ServerBuilder::new()
///     .with_config(FrontendConfig::from_yaml_file("bookeasy.yaml")?)
///     .serve()
///     .await?;
/// ```
pub struct ServerBuilder {
    config: FrontendConfig,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a builder with the default configuration
    pub fn new() -> Self {
        Self {
            config: FrontendConfig::default(),
            custom_routes: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: FrontendConfig) -> Self {
        self.config = config;
        self
    }

    /// Add routes that are not part of the listings (static files, ...)
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the shared host
    pub fn build_host(&self) -> Result<ServerHost> {
        Ok(ServerHost::new(self.config.clone())?)
    }

    /// Build the final router
    pub fn build(mut self) -> Result<Router> {
        let host = Arc::new(self.build_host()?);
        let mut app = build_routes(host);

        for custom_router in std::mem::take(&mut self.custom_routes) {
            app = app.merge(custom_router);
        }

        Ok(app)
    }

    /// Serve on the configured bind address until SIGTERM or Ctrl+C
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.server.bind.clone();
        let app = self.build()?;
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
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
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
