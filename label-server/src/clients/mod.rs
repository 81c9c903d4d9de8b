//! Outbound HTTP clients for the external collaborators

pub mod documents;
pub mod products;
pub mod rasterizer;

pub use documents::DocumentClient;
pub use products::ProductClient;
pub use rasterizer::{RasterizedImage, RasterizerClient, dpmm_for_dpi};
