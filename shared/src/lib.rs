//! Shared types for the Marka label pipeline
//!
//! Wire types used across multiple crates: scan classifications, print
//! payloads and preview DTOs. Everything here is serialized camelCase to
//! match the station frontend.

pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
