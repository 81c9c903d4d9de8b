//! # marka-zpl
//!
//! Label template model and ZPL compilation - low-level label capabilities only.
//!
//! ## Scope
//!
//! This crate handles HOW a label layout becomes printer commands:
//! - mm/dots/inch unit conversion
//! - the label template model (size kept consistent across representations)
//! - ZPL command building
//! - deterministic template compilation
//!
//! Business logic (WHAT ends up on a label) stays in application code:
//! - Preview rendering → label-server
//! - Duplicate-label printing → marka-scan + label-server
//!
//! ## Example
//!
//! ```ignore
//! use marka_zpl::{compile, LabelTemplate};
//!
//! let template = LabelTemplate::new("tenant-1", "58x40 default");
//! let zpl = compile(&template)?;
//! assert!(zpl.starts_with("^XA"));
//! ```

mod compiler;
mod error;
mod label;
mod zpl;

pub mod units;

// Re-exports
pub use compiler::compile;
pub use error::{ZplError, ZplResult};
pub use label::{
    DEFAULT_DPI, DEFAULT_HEIGHT_MM, DEFAULT_WIDTH_MM, ElementPosition, LabelElement,
    LabelElementKind, LabelSize, LabelTemplate, default_elements,
};
pub use zpl::ZplBuilder;
