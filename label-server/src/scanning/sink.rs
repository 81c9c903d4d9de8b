//! Spool print sink
//!
//! Materializes a rendered document in the spool directory, lets it settle,
//! then streams it to the raw TCP printer port (label printers accept
//! direct documents on port 9100). The spool file is released by a detached
//! timer that fires whether or not the send completed, so a hung printer
//! cannot pin spool space; the release cannot be cancelled.

use std::path::PathBuf;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use marka_scan::{PrintSink, RenderedDocument, ScanError, ScanResult};

/// Settle delay between spooling a document and sending it
const DOCUMENT_SETTLE_DELAY: Duration = Duration::from_millis(500);
/// Delay before a spooled document is released
const SPOOL_RELEASE_DELAY: Duration = Duration::from_secs(60);
/// Printer connect timeout
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Print sink backed by a spool directory and a raw TCP printer port
#[derive(Debug, Clone)]
pub struct SpoolPrintSink {
    printer_addr: String,
    spool_dir: PathBuf,
}

impl SpoolPrintSink {
    pub fn new(printer_addr: impl Into<String>, spool_dir: impl Into<PathBuf>) -> Self {
        Self {
            printer_addr: printer_addr.into(),
            spool_dir: spool_dir.into(),
        }
    }

    async fn spool(&self, document: &RenderedDocument) -> ScanResult<PathBuf> {
        tokio::fs::create_dir_all(&self.spool_dir)
            .await
            .map_err(|e| ScanError::Print(format!("spool dir unavailable: {e}")))?;

        let path = self.spool_dir.join(format!("{}.pdf", Uuid::new_v4()));
        tokio::fs::write(&path, &document.bytes)
            .await
            .map_err(|e| ScanError::Print(format!("spool write failed: {e}")))?;
        Ok(path)
    }

    async fn send(&self, bytes: &[u8]) -> ScanResult<()> {
        let stream = tokio::time::timeout(CONNECT_TIMEOUT, TcpStream::connect(&self.printer_addr))
            .await
            .map_err(|_| ScanError::Print(format!("printer connect timeout: {}", self.printer_addr)))?
            .map_err(|e| ScanError::Print(format!("{}: {}", self.printer_addr, e)))?;

        let mut stream = stream;
        stream
            .write_all(bytes)
            .await
            .map_err(|e| ScanError::Print(format!("printer write failed: {e}")))?;
        stream
            .flush()
            .await
            .map_err(|e| ScanError::Print(format!("printer flush failed: {e}")))?;
        Ok(())
    }
}

impl PrintSink for SpoolPrintSink {
    #[instrument(skip(self, document), fields(addr = %self.printer_addr, size = document.bytes.len()))]
    async fn present(&self, document: &RenderedDocument) -> ScanResult<()> {
        let path = self.spool(document).await?;
        info!(path = %path.display(), "document spooled");

        tokio::time::sleep(DOCUMENT_SETTLE_DELAY).await;

        // Detached release: fires even if the send below never resolves.
        let release_path = path.clone();
        tokio::spawn(async move {
            tokio::time::sleep(SPOOL_RELEASE_DELAY).await;
            if let Err(e) = tokio::fs::remove_file(&release_path).await {
                warn!(path = %release_path.display(), error = %e, "spool release failed");
            }
        });

        self.send(&document.bytes).await?;
        info!("print job sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;

    fn document() -> RenderedDocument {
        RenderedDocument {
            bytes: b"%PDF-1.4 test".to_vec(),
            content_type: "application/pdf".to_string(),
        }
    }

    #[tokio::test]
    async fn test_present_spools_and_sends() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let receiver = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            stream.read_to_end(&mut received).await.unwrap();
            received
        });

        let spool_dir = tempfile::tempdir().unwrap();
        let sink = SpoolPrintSink::new(addr.to_string(), spool_dir.path());

        sink.present(&document()).await.unwrap();

        let received = receiver.await.unwrap();
        assert_eq!(received, b"%PDF-1.4 test");

        // The spool file stays until the release timer fires.
        let spooled: Vec<_> = std::fs::read_dir(spool_dir.path()).unwrap().collect();
        assert_eq!(spooled.len(), 1);
    }

    #[tokio::test]
    async fn test_present_fails_without_printer() {
        let spool_dir = tempfile::tempdir().unwrap();
        // Nothing listens on this port.
        let sink = SpoolPrintSink::new("127.0.0.1:1", spool_dir.path());

        assert!(sink.present(&document()).await.is_err());
    }
}
