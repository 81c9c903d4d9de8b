//! Clipboard relay
//!
//! The station UI owns the real OS clipboard; the server keeps the last
//! scan's text for it to pick up. Last write wins.

use std::sync::Arc;

use tokio::sync::Mutex;

use marka_scan::{ClipboardWriter, ScanResult};

/// In-memory clipboard relay
#[derive(Clone, Default)]
pub struct MemoryClipboard {
    latest: Arc<Mutex<Option<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text written by the most recent scan cycle, if any
    pub async fn read(&self) -> Option<String> {
        self.latest.lock().await.clone()
    }
}

impl ClipboardWriter for MemoryClipboard {
    async fn write(&self, text: &str) -> ScanResult<()> {
        *self.latest.lock().await = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_last_write_wins() {
        let clipboard = MemoryClipboard::new();
        assert_eq!(clipboard.read().await, None);

        clipboard.write("first").await.unwrap();
        clipboard.write("second\nline").await.unwrap();
        assert_eq!(clipboard.read().await.as_deref(), Some("second\nline"));
    }
}
