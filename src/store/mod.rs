//! Store Module
//!
//! The word/definition mapping and its on-disk mirror.
//!
//! ## Responsibilities
//! - Load the dictionary file once at startup
//! - Case-insensitive lookup and insert
//! - Rewrite the whole file after every successful insert
//!
//! ## File Format
//! A single flat JSON object, pretty-printed with 2-space indentation:
//! ```text
//! {
//!   "cat": "A small domesticated feline.",
//!   "dog": "A domesticated carnivorous mammal."
//! }
//! ```
//! Keys are normalized words, values are definitions exactly as submitted.

mod word_store;

pub use word_store::{normalize, WordStore};
