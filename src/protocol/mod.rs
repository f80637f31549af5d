//! Protocol Module
//!
//! Defines what clients send and what they get back, independent of HTTP.
//!
//! ## Operations
//! - Lookup: `word` → definition, or a not-found notice
//! - Insert: `{word, definition}` → confirmation with the new entry count
//!
//! ## Response Shapes
//! ```text
//! found:     {requestNumber, word, definition}
//! notice:    {requestNumber, message}
//! recorded:  {requestNumber, totalEntries, message, word, definition}
//! ```
//!
//! ### Status Codes
//! - 200: OK (including lookup misses)
//! - 400: invalid word format / invalid insert input
//! - 409: word already exists
//! - 500: dictionary file could not be written

mod request;
mod response;
mod validation;

pub use request::{InsertPayload, LookupQuery};
pub use response::{
    error_message, Body, DefinitionFound, EntryRecorded, Notice, Response, Status,
    INVALID_FORMAT_MESSAGE, INVALID_INPUT_MESSAGE, RECORDED_MESSAGE, STORAGE_FAILURE_MESSAGE,
};
pub use validation::{is_valid_definition, is_valid_word, validate_insert, validate_lookup};
