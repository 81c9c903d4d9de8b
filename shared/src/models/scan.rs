//! Scan classification model

use serde::{Deserialize, Serialize};

/// Result of classifying one normalized scan buffer
///
/// Derived from a single raw keystroke buffer and discarded after the
/// print cycle that consumed it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScanClassification {
    /// The keystroke buffer after keyboard-layout normalization
    pub canonical_code: String,
    /// Embedded EAN-13, when the code carries one
    pub ean13_candidate: Option<String>,
}
