//! Marka Label Server - supplier label pipeline service
//!
//! # Architecture overview
//!
//! The server wires the label pipeline crates to their host environment:
//!
//! - **Preview API** (`api/preview`): raw-ZPL and template-mode preview
//!   rendering through the external rasterizer
//! - **Scan API** (`api/scan`): scan intake feeding the duplicate-label
//!   print worker, plus the clipboard relay
//! - **Clients** (`clients`): rasterizer, document generator and product
//!   catalog HTTP clients
//! - **Scanning** (`scanning`): the scan worker and the host-side
//!   capability implementations (clipboard relay, spool print sink)
//!
//! # Module structure
//!
//! ```text
//! label-server/src/
//! ├── core/          # Config, server bootstrap, state
//! ├── api/           # HTTP routes and handlers
//! ├── clients/       # Outbound HTTP clients
//! ├── scanning/      # Scan worker + capability implementations
//! ├── templates.rs   # In-memory template store
//! ├── routes/        # Router assembly
//! └── utils/         # Errors, logging
//! ```

pub mod api;
pub mod clients;
pub mod core;
pub mod routes;
pub mod scanning;
pub mod templates;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState};
pub use crate::utils::{AppError, AppResult};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};
