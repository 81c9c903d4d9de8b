//! Scan intake worker
//!
//! Single consumer of the scan channel: one orchestrator cycle at a time,
//! so two prints are never in flight together even when HTTP submissions
//! race each other.

use serde::Deserialize;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use marka_scan::ScanOrchestrator;

use crate::clients::{DocumentClient, ProductClient};
use crate::scanning::{MemoryClipboard, SpoolPrintSink};

/// One raw scan submission from the station UI
#[derive(Debug, Clone, Deserialize)]
pub struct ScanSubmission {
    pub input: String,
}

/// Duplicate-label print worker
pub struct ScanWorker {
    orchestrator: ScanOrchestrator<DocumentClient, MemoryClipboard, ProductClient, SpoolPrintSink>,
}

impl ScanWorker {
    pub fn new(
        generator: DocumentClient,
        clipboard: MemoryClipboard,
        lookup: ProductClient,
        sink: SpoolPrintSink,
    ) -> Self {
        Self {
            orchestrator: ScanOrchestrator::new(generator, clipboard, lookup, sink),
        }
    }

    /// Run until the channel closes or shutdown is requested.
    pub async fn run(
        mut self,
        mut rx: mpsc::Receiver<ScanSubmission>,
        shutdown: CancellationToken,
    ) {
        tracing::info!("scan worker started");

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    tracing::info!("scan worker received shutdown signal");
                    break;
                }
                submission = rx.recv() => {
                    let Some(submission) = submission else {
                        tracing::info!("scan channel closed, worker stopping");
                        break;
                    };
                    let outcome = self.orchestrator.process(&submission.input).await;
                    tracing::debug!(?outcome, "scan submission processed");
                }
            }
        }
    }
}
