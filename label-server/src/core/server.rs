//! Server bootstrap
//!
//! Binds the HTTP listener, spawns the scan worker and runs until a
//! shutdown signal arrives.

use std::time::Duration;

use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::clients::{DocumentClient, ProductClient};
use crate::core::{Config, ServerState};
use crate::routes;
use crate::scanning::{ScanWorker, SpoolPrintSink};

/// HTTP server plus the scan worker lifecycle
pub struct Server {
    config: Config,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run until ctrl-c. The scan worker is shut down after the HTTP
    /// listener drains.
    pub async fn run(self) -> anyhow::Result<()> {
        let timeout = Duration::from_millis(self.config.request_timeout_ms);
        let (state, scan_rx) = ServerState::build(self.config.clone());

        let worker = ScanWorker::new(
            DocumentClient::new(&self.config.document_service_url, timeout),
            state.clipboard.clone(),
            ProductClient::new(&self.config.product_service_url, timeout),
            SpoolPrintSink::new(&self.config.printer_addr, &self.config.spool_dir),
        );
        let shutdown = CancellationToken::new();
        let worker_handle = tokio::spawn(worker.run(scan_rx, shutdown.clone()));

        let app = routes::build_app().with_state(state);
        let addr = format!("0.0.0.0:{}", self.config.http_port);
        let listener = TcpListener::bind(&addr).await?;
        info!(addr = %addr, "label server listening");

        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
                info!("shutdown signal received");
            })
            .await?;

        shutdown.cancel();
        let _ = worker_handle.await;
        Ok(())
    }
}
