//! Server state

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::clients::RasterizerClient;
use crate::core::Config;
use crate::scanning::{MemoryClipboard, ScanSubmission};
use crate::templates::TemplateStore;

/// Scan intake queue depth
pub const SCAN_QUEUE_DEPTH: usize = 64;

/// Server state - shared handles for all request handlers
///
/// Cheap to clone; everything inside is either a handle or Arc-wrapped.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Preview rasterizer client
    pub rasterizer: RasterizerClient,
    /// In-memory template store (persistence collaborator stand-in)
    pub templates: Arc<TemplateStore>,
    /// Clipboard relay the station UI polls
    pub clipboard: MemoryClipboard,
    /// Scan intake channel into the print worker
    pub scan_tx: mpsc::Sender<ScanSubmission>,
}

impl ServerState {
    /// Build the state plus the receiving end of the scan channel.
    ///
    /// The caller hands the receiver to a [`crate::scanning::ScanWorker`];
    /// nothing else may consume it, which is what keeps scan cycles
    /// serialized.
    pub fn build(config: Config) -> (Self, mpsc::Receiver<ScanSubmission>) {
        let timeout = Duration::from_millis(config.request_timeout_ms);
        let (scan_tx, scan_rx) = mpsc::channel(SCAN_QUEUE_DEPTH);

        let state = Self {
            rasterizer: RasterizerClient::new(&config.rasterizer_url, timeout),
            templates: Arc::new(TemplateStore::new()),
            clipboard: MemoryClipboard::new(),
            scan_tx,
            config,
        };

        (state, scan_rx)
    }
}
