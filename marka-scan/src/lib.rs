//! # marka-scan
//!
//! Scan-driven duplicate-label printing - normalization and orchestration.
//!
//! ## Scope
//!
//! This crate handles HOW a raw scan becomes printed duplicates:
//! - keyboard layout normalization (scanners emit Latin-layout keystrokes
//!   that arrive transposed under a Cyrillic host layout)
//! - EAN-13 classification of the canonical code
//! - the sequential print orchestrator
//!
//! Host integration (clipboard, document generation, product catalog, the
//! physical print) is injected through capability traits; implementations
//! live in application code (label-server).
//!
//! ## Example
//!
//! ```ignore
//! use marka_scan::ScanOrchestrator;
//!
//! let mut orchestrator = ScanOrchestrator::new(generator, clipboard, lookup, sink);
//! let outcome = orchestrator.process("abc0123456789012xxxx").await;
//! ```

mod capability;
mod classify;
mod error;
mod layout;
mod orchestrator;

// Re-exports
pub use capability::{
    ClipboardWriter, DocumentGenerator, PrintSink, ProductInfo, ProductLookup, RenderedDocument,
};
pub use classify::classify;
pub use error::{ScanError, ScanResult};
pub use layout::remap;
pub use orchestrator::{ScanOrchestrator, ScanOutcome};
