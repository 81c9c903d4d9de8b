//! Label template compiler
//!
//! Compiles a [`LabelTemplate`] into a ZPL command stream. Pure and
//! deterministic: structurally equal templates produce byte-identical
//! output.

use tracing::warn;

use crate::error::{ZplError, ZplResult};
use crate::label::{LabelElement, LabelElementKind, LabelTemplate};
use crate::zpl::ZplBuilder;

/// Data Matrix quality level (ECC 200)
const DATA_MATRIX_QUALITY: u32 = 200;
/// Data Matrix module size in dots when the element carries no height
const DATA_MATRIX_MODULE: u32 = 5;
/// Vertical offset between the vendor-code caption and its value
const VENDOR_CODE_STACK_OFFSET: f32 = 35.0;

// Placeholder field data. The compiler never resolves real product data;
// the production print path substitutes values before its own compile,
// previews always show these.
const PRODUCT_NAME_PLACEHOLDER: &str = "Sample product";
const PRODUCT_SIZE_PLACEHOLDER: &str = "Size: M";
const NM_ID_PLACEHOLDER: &str = "12345678";
const VENDOR_CODE_CAPTION: &str = "Art.:";
const VENDOR_CODE_PLACEHOLDER: &str = "ABC-123";
const DATA_MATRIX_PLACEHOLDER: &str = "0104600000000000";

/// Compile a template into its ZPL command stream.
///
/// The only rejected input is a template whose size is invalid. A template
/// with zero visible elements still compiles to a structurally valid empty
/// label.
pub fn compile(template: &LabelTemplate) -> ZplResult<String> {
    let size = template.label_size;
    if !size.is_valid() {
        return Err(ZplError::InvalidSize(format!(
            "{}x{}mm @ {}dpi",
            size.width_mm, size.height_mm, size.dpi
        )));
    }

    let mut zpl = ZplBuilder::new();
    zpl.print_width(size.width_dots)
        .label_length(size.height_dots)
        .utf8();

    let mut emitted = 0usize;
    for element in template.elements.iter().filter(|e| e.visible) {
        emit_element(&mut zpl, element);
        emitted += 1;
    }

    if emitted == 0 {
        warn!(
            template_id = %template.id,
            "template has no visible elements, emitting empty label"
        );
    }

    Ok(zpl.build())
}

fn emit_element(zpl: &mut ZplBuilder, element: &LabelElement) {
    let x = element.position.x.round() as i32;
    let y = element.position.y.round() as i32;

    match element.kind {
        LabelElementKind::ProductName => {
            emit_text(zpl, x, y, element.font_size.unwrap_or(20), PRODUCT_NAME_PLACEHOLDER);
        }
        LabelElementKind::ProductSize => {
            emit_text(zpl, x, y, element.font_size.unwrap_or(16), PRODUCT_SIZE_PLACEHOLDER);
        }
        LabelElementKind::NmId => {
            emit_text(zpl, x, y, element.font_size.unwrap_or(16), NM_ID_PLACEHOLDER);
        }
        LabelElementKind::VendorCode => {
            // Caption and value are stacked as two field blocks.
            let font = element.font_size.unwrap_or(16);
            let value_y = (element.position.y + VENDOR_CODE_STACK_OFFSET).round() as i32;
            emit_text(zpl, x, y, font, VENDOR_CODE_CAPTION);
            emit_text(zpl, x, value_y, font, VENDOR_CODE_PLACEHOLDER);
        }
        LabelElementKind::DataMatrix => {
            let module = element
                .position
                .height
                .map(|h| h.round() as u32)
                .unwrap_or(DATA_MATRIX_MODULE);
            zpl.field_origin(x, y)
                .data_matrix(module, DATA_MATRIX_QUALITY)
                .field_data(DATA_MATRIX_PLACEHOLDER);
        }
    }
}

fn emit_text(zpl: &mut ZplBuilder, x: i32, y: i32, font_size: u32, text: &str) {
    zpl.field_origin(x, y)
        .font(font_size, font_size)
        .field_data(text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::{LabelSize, default_elements};

    fn template_with(elements: Vec<LabelElement>) -> LabelTemplate {
        LabelTemplate {
            id: "tpl-1".to_string(),
            owner_id: "tenant-1".to_string(),
            name: "test".to_string(),
            description: None,
            elements,
            label_size: LabelSize::default(),
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn test_empty_label_exact_output() {
        let zpl = compile(&template_with(vec![])).unwrap();
        assert_eq!(zpl, "^XA^PW464^LL320^CI28^XZ");
    }

    #[test]
    fn test_invisible_elements_compile_to_empty_label() {
        let mut elements = default_elements();
        for e in &mut elements {
            e.visible = false;
        }
        let zpl = compile(&template_with(elements)).unwrap();
        assert_eq!(zpl, "^XA^PW464^LL320^CI28^XZ");
    }

    #[test]
    fn test_deterministic() {
        let template = template_with(default_elements());
        let copy = template.clone();
        assert_eq!(compile(&template).unwrap(), compile(&copy).unwrap());
    }

    #[test]
    fn test_text_element_commands() {
        let mut element = LabelElement::new(LabelElementKind::ProductName, 10.4, 15.6);
        element.font_size = Some(24);
        let zpl = compile(&template_with(vec![element])).unwrap();
        // Coordinates are rounded to the nearest dot.
        assert!(zpl.contains("^FO10,16^A0N,24,24^FDSample product^FS"));
    }

    #[test]
    fn test_default_font_sizes_per_kind() {
        let zpl = compile(&template_with(vec![
            LabelElement::new(LabelElementKind::ProductName, 0.0, 0.0),
            LabelElement::new(LabelElementKind::ProductSize, 0.0, 30.0),
            LabelElement::new(LabelElementKind::NmId, 0.0, 60.0),
        ]))
        .unwrap();
        assert!(zpl.contains("^FO0,0^A0N,20,20^FDSample product^FS"));
        assert!(zpl.contains("^FO0,30^A0N,16,16^FDSize: M^FS"));
        assert!(zpl.contains("^FO0,60^A0N,16,16^FD12345678^FS"));
    }

    #[test]
    fn test_vendor_code_stacks_two_blocks() {
        let element = LabelElement::new(LabelElementKind::VendorCode, 10.0, 110.0);
        let zpl = compile(&template_with(vec![element])).unwrap();
        assert!(zpl.contains("^FO10,110^A0N,16,16^FDArt.:^FS"));
        assert!(zpl.contains("^FO10,145^A0N,16,16^FDABC-123^FS"));
    }

    #[test]
    fn test_data_matrix_module_from_height() {
        let mut element = LabelElement::new(LabelElementKind::DataMatrix, 300.0, 150.0);
        element.position.height = Some(8.0);
        let zpl = compile(&template_with(vec![element])).unwrap();
        assert!(zpl.contains("^FO300,150^BXN,8,200^FD"));

        // Missing height falls back to the default module size.
        let element = LabelElement::new(LabelElementKind::DataMatrix, 300.0, 150.0);
        let zpl = compile(&template_with(vec![element])).unwrap();
        assert!(zpl.contains("^BXN,5,200"));
    }

    #[test]
    fn test_elements_render_in_sequence_order() {
        let zpl = compile(&template_with(vec![
            LabelElement::new(LabelElementKind::NmId, 0.0, 0.0),
            LabelElement::new(LabelElementKind::ProductName, 0.0, 40.0),
        ]))
        .unwrap();
        let nm = zpl.find("^FD12345678^FS").unwrap();
        let name = zpl.find("^FDSample product^FS").unwrap();
        assert!(nm < name);
    }

    #[test]
    fn test_invalid_size_rejected() {
        let mut template = template_with(vec![]);
        template.label_size.height_mm = 0.0;
        assert!(compile(&template).is_err());
    }
}
