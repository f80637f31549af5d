//! Network Module
//!
//! HTTP front end.
//!
//! ## Architecture
//! - Axum router on a Tokio listener
//! - Permissive CORS (any origin) unless disabled
//! - Every request routed through the shared RequestHandler

mod server;

pub use server::{routes, Server, DEFINITIONS_PATH};
