//! Print payload model

use serde::{Deserialize, Serialize};

/// Barcode rendering options forwarded to the document generator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BarcodeOptions {
    pub scale: u32,
    pub includetext: bool,
}

impl Default for BarcodeOptions {
    fn default() -> Self {
        Self {
            scale: 3,
            includetext: true,
        }
    }
}

/// Document generation payload
///
/// Constructed per scan event, consumed once by the print orchestrator,
/// then discarded. Serialized as the JSON body of a document-generation
/// request; unset optional fields are omitted from the wire format.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PrintPayload {
    pub scanned_data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<BarcodeOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nm_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_matrix_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ean13_count: Option<u32>,
}

impl PrintPayload {
    /// Primary duplicate-label payload: the full scanned code plus whatever
    /// product data the lookup produced.
    pub fn primary(
        scanned_data: impl Into<String>,
        product_name: Option<String>,
        product_size: Option<String>,
    ) -> Self {
        Self {
            scanned_data: scanned_data.into(),
            options: Some(BarcodeOptions::default()),
            product_name,
            product_size,
            ..Self::default()
        }
    }

    /// Secondary payload for the embedded EAN-13 candidate.
    /// Never carries a size.
    pub fn secondary(ean13: impl Into<String>, product_name: Option<String>) -> Self {
        Self {
            scanned_data: ean13.into(),
            options: Some(BarcodeOptions::default()),
            product_name,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_payload_wire_format() {
        let payload = PrintPayload::primary(
            "abc0123456789012xxxx",
            Some("Cup".to_string()),
            Some("0.3l".to_string()),
        );
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["scannedData"], "abc0123456789012xxxx");
        assert_eq!(json["productName"], "Cup");
        assert_eq!(json["productSize"], "0.3l");
        assert_eq!(json["options"]["scale"], 3);
        assert_eq!(json["options"]["includetext"], true);
    }

    #[test]
    fn test_secondary_payload_omits_size() {
        let payload = PrintPayload::secondary("0123456789012", Some("Cup".to_string()));
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["scannedData"], "0123456789012");
        assert!(json.get("productSize").is_none());
        assert!(json.get("title").is_none());
    }
}
