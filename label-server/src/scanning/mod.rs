//! Scan intake and host-side capability implementations

pub mod clipboard;
pub mod sink;
pub mod worker;

pub use clipboard::MemoryClipboard;
pub use sink::SpoolPrintSink;
pub use worker::{ScanSubmission, ScanWorker};
