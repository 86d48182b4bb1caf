//! HTTP listener with graceful shutdown.

use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;

use crate::config::ServerConfig;

/// Serves a router until Ctrl+C or `SIGTERM`.
#[derive(Debug, Clone)]
pub struct Server {
    config: ServerConfig,
}

impl Server {
    /// Creates a server for the given listener configuration.
    #[must_use]
    pub const fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Returns the listener configuration.
    #[must_use]
    pub const fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Binds the listener and serves `router` until a shutdown signal.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the address cannot be bound or the
    /// connection loop fails.
    pub async fn run(self, router: Router) -> std::io::Result<()> {
        let address = self.config.socket_addr();
        let listener = TcpListener::bind(&address).await?;
        tracing::info!(%address, "listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("server shutdown complete");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(%err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
