//! Duplicate-label print orchestrator
//!
//! One explicit state machine per scan station: keystrokes accumulate in a
//! buffer owned by the machine, Enter starts a processing cycle, and every
//! side effect of the cycle is awaited in sequence (clipboard before either
//! print, primary document before secondary). Failures are terminal for the
//! attempt they belong to; nothing is retried.

use tracing::{info, warn};

use shared::models::{PrintPayload, ScanClassification};

use crate::capability::{ClipboardWriter, DocumentGenerator, PrintSink, ProductLookup};
use crate::classify::classify;
use crate::layout::remap;

/// Outcome of one scan cycle
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    /// Code was too short for duplicate-label purposes; nothing happened
    Ignored { length: usize },
    /// Cycle ran to completion (individual steps may still have failed)
    Completed {
        classification: ScanClassification,
        primary_printed: bool,
        secondary_printed: bool,
    },
}

/// Scan-driven print orchestrator
///
/// `process` takes `&mut self`, so a second cycle cannot start while one
/// is in flight.
pub struct ScanOrchestrator<G, C, L, S> {
    generator: G,
    clipboard: C,
    lookup: L,
    sink: S,
    buffer: String,
}

impl<G, C, L, S> ScanOrchestrator<G, C, L, S>
where
    G: DocumentGenerator,
    C: ClipboardWriter,
    L: ProductLookup,
    S: PrintSink,
{
    pub fn new(generator: G, clipboard: C, lookup: L, sink: S) -> Self {
        Self {
            generator,
            clipboard,
            lookup,
            sink,
            buffer: String::new(),
        }
    }

    /// Feed one scanner keystroke; Enter submits the accumulated buffer.
    pub async fn push_key(&mut self, key: char) -> Option<ScanOutcome> {
        if key == '\n' || key == '\r' {
            return Some(self.submit().await);
        }
        self.buffer.push(key);
        None
    }

    /// Process the accumulated buffer. The buffer is cleared either way.
    pub async fn submit(&mut self) -> ScanOutcome {
        let raw = std::mem::take(&mut self.buffer);
        self.process(&raw).await
    }

    /// Run one full scan cycle over a raw keystroke buffer.
    pub async fn process(&mut self, raw: &str) -> ScanOutcome {
        let canonical = remap(raw.trim());

        let classification = match classify(&canonical) {
            Ok(c) => c,
            Err(e) => {
                warn!(error = %e, "scan discarded");
                return ScanOutcome::Ignored {
                    length: canonical.chars().count(),
                };
            }
        };

        // Clipboard first; both prints start only after this resolves.
        let clip_text = match &classification.ean13_candidate {
            Some(candidate) => format!("{}\n{}", classification.canonical_code, candidate),
            None => classification.canonical_code.clone(),
        };
        if let Err(e) = self.clipboard.write(&clip_text).await {
            warn!(error = %e, "clipboard write failed, continuing with print");
        }

        // Product lookup degrades to empty fields.
        let product = match &classification.ean13_candidate {
            Some(candidate) => match self.lookup.find_by_ean13(candidate).await {
                Ok(found) => found,
                Err(e) => {
                    warn!(error = %e, "product lookup failed, printing without product data");
                    None
                }
            },
            None => None,
        };
        let product_name = product.as_ref().map(|p| p.name.clone());
        let product_size = product.as_ref().and_then(|p| p.size.clone());

        let primary = PrintPayload::primary(
            classification.canonical_code.clone(),
            product_name.clone(),
            product_size,
        );
        let primary_printed = self.print_one(&primary).await;

        let secondary_printed = match &classification.ean13_candidate {
            Some(candidate) => {
                let secondary = PrintPayload::secondary(candidate.clone(), product_name);
                self.print_one(&secondary).await
            }
            None => false,
        };

        info!(
            code = %classification.canonical_code,
            primary_printed,
            secondary_printed,
            "scan cycle finished"
        );

        ScanOutcome::Completed {
            classification,
            primary_printed,
            secondary_printed,
        }
    }

    /// One generate → present attempt. Errors are terminal: logged, never
    /// retried, and the sink is only driven with a generated document.
    async fn print_one(&self, payload: &PrintPayload) -> bool {
        let document = match self.generator.generate(payload).await {
            Ok(d) => d,
            Err(e) => {
                warn!(code = %payload.scanned_data, error = %e, "document generation failed");
                return false;
            }
        };

        match self.sink.present(&document).await {
            Ok(()) => true,
            Err(e) => {
                warn!(code = %payload.scanned_data, error = %e, "print failed");
                false
            }
        }
    }
}
