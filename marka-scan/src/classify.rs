//! Scan classification
//!
//! Decides whether a canonical scan code is printable as a duplicate label
//! and extracts the embedded EAN-13 candidate.

use std::sync::LazyLock;

use regex::Regex;

use shared::models::ScanClassification;

use crate::error::{ScanError, ScanResult};

/// Character offset where the embedded EAN-13 begins
const EAN13_OFFSET: usize = 3;
/// EAN-13 length in characters
const EAN13_LEN: usize = 13;

static EAN13_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{13}$").expect("static EAN-13 pattern"));

/// Classify a canonical scan code.
///
/// Codes of 16 characters or fewer are too short for duplicate-label
/// purposes and are rejected. Longer codes yield the 13-character substring
/// at offset 3 as the EAN-13 candidate iff it is exactly 13 decimal digits.
pub fn classify(canonical: &str) -> ScanResult<ScanClassification> {
    let len = canonical.chars().count();
    if len <= EAN13_OFFSET + EAN13_LEN {
        return Err(ScanError::TooShort(len));
    }

    let candidate: String = canonical
        .chars()
        .skip(EAN13_OFFSET)
        .take(EAN13_LEN)
        .collect();
    let ean13_candidate = EAN13_RE.is_match(&candidate).then_some(candidate);

    Ok(ScanClassification {
        canonical_code: canonical.to_string(),
        ean13_candidate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_candidate_from_long_code() {
        let classification = classify("abc0123456789012xyzw").unwrap();
        assert_eq!(classification.canonical_code, "abc0123456789012xyzw");
        assert_eq!(
            classification.ean13_candidate.as_deref(),
            Some("0123456789012")
        );
    }

    #[test]
    fn test_seventeen_chars_is_enough() {
        // 3 prefix chars + 13 digits + 1 trailing char.
        let classification = classify("xx!0123456789012z").unwrap();
        assert_eq!(
            classification.ean13_candidate.as_deref(),
            Some("0123456789012")
        );
    }

    #[test]
    fn test_short_codes_rejected() {
        assert!(matches!(
            classify("012345678901234"),
            Err(ScanError::TooShort(15))
        ));
        // Exactly 16 characters is still too short.
        assert!(matches!(
            classify("0123456789012345"),
            Err(ScanError::TooShort(16))
        ));
    }

    #[test]
    fn test_non_digit_candidate_yields_none() {
        let classification = classify("abcX123456789012xyzw").unwrap();
        assert_eq!(classification.ean13_candidate, None);
    }

    #[test]
    fn test_offset_is_fixed_at_three() {
        // Digits start at offset 2 here, so the window at [3, 16) picks up
        // a trailing letter and the candidate is rejected.
        let classification = classify("ab0123456789012cxyzw").unwrap();
        assert_eq!(classification.ean13_candidate, None);
    }
}
