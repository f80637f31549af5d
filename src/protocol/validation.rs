//! Input validation
//!
//! A word is valid when, after trimming surrounding whitespace, it is one or
//! more ASCII letters.

use crate::error::{LexiError, Result};

use super::InsertPayload;

/// Check whether `word` is an acceptable dictionary word
pub fn is_valid_word(word: &str) -> bool {
    let trimmed = word.trim();
    !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Check whether `definition` has any non-whitespace content
pub fn is_valid_definition(definition: &str) -> bool {
    !definition.trim().is_empty()
}

/// Accept a lookup word or fail with `InvalidFormat`
///
/// `None` means the parameter was missing or not a single string.
pub fn validate_lookup(word: Option<&str>) -> Result<&str> {
    match word {
        Some(word) if is_valid_word(word) => Ok(word),
        _ => Err(LexiError::InvalidFormat),
    }
}

/// Accept an insert payload or fail with `InvalidInput`
pub fn validate_insert(payload: &InsertPayload) -> Result<(&str, &str)> {
    match (payload.word.as_deref(), payload.definition.as_deref()) {
        (Some(word), Some(definition)) if is_valid_word(word) && is_valid_definition(definition) => {
            Ok((word, definition))
        }
        _ => Err(LexiError::InvalidInput),
    }
}
