//! Label template model
//!
//! Physical label layout plus content placeholders. A size always carries
//! both its dot and millimetre representations; every updater recomputes
//! the dependent one, so the two can never drift apart.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::units;

/// Default label stock: 58x40mm thermal labels
pub const DEFAULT_WIDTH_MM: f64 = 58.0;
/// Default label stock height
pub const DEFAULT_HEIGHT_MM: f64 = 40.0;
/// Default printer resolution
pub const DEFAULT_DPI: u32 = 203;

/// Physical label size
///
/// Invariant: `width_dots == round(width_mm * dpi / 25.4)` (and the same
/// for height) holds after construction and after every updater.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LabelSize {
    pub width_dots: u32,
    pub height_dots: u32,
    pub width_mm: f64,
    pub height_mm: f64,
    pub dpi: u32,
}

impl LabelSize {
    /// Build a size from millimetres, deriving the dot representation.
    pub fn from_mm(width_mm: f64, height_mm: f64, dpi: u32) -> Self {
        Self {
            width_dots: units::mm_to_dots(width_mm, dpi),
            height_dots: units::mm_to_dots(height_mm, dpi),
            width_mm,
            height_mm,
            dpi,
        }
    }

    /// Replace the millimetre dimensions, recomputing dots.
    pub fn with_mm(&self, width_mm: f64, height_mm: f64) -> Self {
        Self::from_mm(width_mm, height_mm, self.dpi)
    }

    /// Replace the dot dimensions, recomputing millimetres.
    pub fn with_dots(&self, width_dots: u32, height_dots: u32) -> Self {
        Self {
            width_dots,
            height_dots,
            width_mm: units::dots_to_mm(width_dots, self.dpi),
            height_mm: units::dots_to_mm(height_dots, self.dpi),
            dpi: self.dpi,
        }
    }

    /// Change the resolution, keeping millimetres and recomputing dots.
    pub fn with_dpi(&self, dpi: u32) -> Self {
        Self::from_mm(self.width_mm, self.height_mm, dpi)
    }

    /// All five fields strictly positive.
    pub fn is_valid(&self) -> bool {
        self.width_dots > 0
            && self.height_dots > 0
            && self.width_mm > 0.0
            && self.height_mm > 0.0
            && self.dpi > 0
    }
}

impl Default for LabelSize {
    fn default() -> Self {
        Self::from_mm(DEFAULT_WIDTH_MM, DEFAULT_HEIGHT_MM, DEFAULT_DPI)
    }
}

/// Label element kind
///
/// Closed set: the compiler matches on this exhaustively, so a new kind
/// cannot ship without a corresponding command emitter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum LabelElementKind {
    ProductName,
    ProductSize,
    NmId,
    VendorCode,
    DataMatrix,
}

/// Element position in the owning label's dot space
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ElementPosition {
    pub x: f32,
    pub y: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

/// One positioned element of a label template
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LabelElement {
    /// Client-generated UUID
    pub id: String,
    #[serde(rename = "type")]
    pub kind: LabelElementKind,
    pub position: ElementPosition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(default = "default_true")]
    pub visible: bool,
}

fn default_true() -> bool {
    true
}

impl LabelElement {
    pub fn new(kind: LabelElementKind, x: f32, y: f32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            position: ElementPosition {
                x,
                y,
                width: None,
                height: None,
            },
            font_size: None,
            font_weight: None,
            visible: true,
        }
    }
}

/// Label template entity
///
/// Elements are rendered in sequence order; visibility is the only gate.
/// Persistence belongs to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LabelTemplate {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub elements: Vec<LabelElement>,
    pub label_size: LabelSize,
    pub created_at: i64,
    pub updated_at: i64,
}

impl LabelTemplate {
    /// New template with the default element set on the default stock.
    pub fn new(owner_id: impl Into<String>, name: impl Into<String>) -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        Self {
            id: Uuid::new_v4().to_string(),
            owner_id: owner_id.into(),
            name: name.into(),
            description: None,
            elements: default_elements(),
            label_size: LabelSize::default(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// The fixed element set for a new template: one element per kind at
/// preset coordinates on the default 58x40 @ 203dpi label.
pub fn default_elements() -> Vec<LabelElement> {
    let mut product_name = LabelElement::new(LabelElementKind::ProductName, 10.0, 15.0);
    product_name.font_size = Some(20);

    let mut product_size = LabelElement::new(LabelElementKind::ProductSize, 10.0, 50.0);
    product_size.font_size = Some(16);

    let mut nm_id = LabelElement::new(LabelElementKind::NmId, 10.0, 80.0);
    nm_id.font_size = Some(16);

    let vendor_code = LabelElement::new(LabelElementKind::VendorCode, 10.0, 110.0);

    let mut data_matrix = LabelElement::new(LabelElementKind::DataMatrix, 300.0, 150.0);
    data_matrix.position.height = Some(5.0);

    vec![product_name, product_size, nm_id, vendor_code, data_matrix]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_size() {
        let size = LabelSize::default();
        assert_eq!(size.width_mm, 58.0);
        assert_eq!(size.height_mm, 40.0);
        assert_eq!(size.width_dots, 464);
        assert_eq!(size.height_dots, 320);
        assert_eq!(size.dpi, 203);
        assert!(size.is_valid());
    }

    #[test]
    fn test_updaters_keep_representations_in_sync() {
        let size = LabelSize::default().with_mm(100.0, 50.0);
        assert_eq!(size.width_dots, crate::units::mm_to_dots(100.0, size.dpi));
        assert_eq!(size.height_dots, crate::units::mm_to_dots(50.0, size.dpi));

        let size = size.with_dpi(300);
        assert_eq!(size.width_mm, 100.0);
        assert_eq!(size.width_dots, crate::units::mm_to_dots(100.0, 300));

        let size = size.with_dots(600, 300);
        assert_eq!(size.width_mm, crate::units::dots_to_mm(600, 300));
        assert_eq!(size.height_mm, crate::units::dots_to_mm(300, 300));
    }

    #[test]
    fn test_invalid_sizes() {
        let mut size = LabelSize::default();
        size.width_mm = 0.0;
        assert!(!size.is_valid());

        let mut size = LabelSize::default();
        size.dpi = 0;
        assert!(!size.is_valid());
    }

    #[test]
    fn test_default_elements_cover_every_kind() {
        let elements = default_elements();
        assert_eq!(elements.len(), 5);
        for kind in [
            LabelElementKind::ProductName,
            LabelElementKind::ProductSize,
            LabelElementKind::NmId,
            LabelElementKind::VendorCode,
            LabelElementKind::DataMatrix,
        ] {
            assert_eq!(elements.iter().filter(|e| e.kind == kind).count(), 1);
        }
        assert!(elements.iter().all(|e| e.visible));
    }

    #[test]
    fn test_element_kind_wire_names() {
        let kinds = serde_json::to_value([
            LabelElementKind::ProductName,
            LabelElementKind::NmId,
            LabelElementKind::VendorCode,
            LabelElementKind::DataMatrix,
        ])
        .unwrap();
        assert_eq!(
            kinds,
            serde_json::json!(["productName", "nmId", "vendorCode", "dataMatrix"])
        );
    }
}
