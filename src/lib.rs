//! # LexiKV
//!
//! A small word/definition store served over HTTP:
//! - Case-insensitive lookup by word
//! - Insert-only writes with duplicate detection
//! - Whole-file JSON persistence after every insert
//! - A per-process request counter in every response
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      HTTP Server                             │
//! │          GET/POST /api/definitions  (axum, CORS)             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   Request Handler                            │
//! │        (validation, request counter, status mapping)         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!               ┌──────────────┐        ┌─────────────────┐
//!               │  WordStore   │ ─────▶ │ dictionary.json │
//!               │   (RwLock)   │ rewrite│  (pretty JSON)  │
//!               └──────────────┘        └─────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod store;
pub mod protocol;
pub mod handler;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{LexiError, Result};
pub use config::Config;
pub use handler::RequestHandler;
pub use store::WordStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of LexiKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
