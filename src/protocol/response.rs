//! Response definitions
//!
//! Every response carries the request number and serializes to a flat
//! camelCase JSON object.

use serde::Serialize;

use crate::error::LexiError;

pub const INVALID_FORMAT_MESSAGE: &str = "Invalid word format. Please enter a valid English word.";
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. Please provide a valid word and definition.";
pub const RECORDED_MESSAGE: &str = "New entry recorded:";
pub const STORAGE_FAILURE_MESSAGE: &str = "Failed to record the new entry. Please try again later.";

/// Caller-facing message for an error
///
/// Storage and internal failures share one fixed message; their details stay
/// in the log.
pub fn error_message(err: &LexiError) -> String {
    match err {
        LexiError::InvalidFormat => INVALID_FORMAT_MESSAGE.to_string(),
        LexiError::InvalidInput => INVALID_INPUT_MESSAGE.to_string(),
        LexiError::AlreadyExists(word) => {
            format!("Warning! The word '{}' already exists in the dictionary.", word)
        }
        _ => STORAGE_FAILURE_MESSAGE.to_string(),
    }
}

/// Response status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    BadRequest,
    Conflict,
    InternalError,
}

impl Status {
    /// HTTP status code
    pub fn code(self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::BadRequest => 400,
            Status::Conflict => 409,
            Status::InternalError => 500,
        }
    }
}

/// Lookup hit
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionFound {
    pub request_number: u64,
    pub word: String,
    pub definition: String,
}

/// Informational or error message
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub request_number: u64,
    pub message: String,
}

/// Successful insert
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryRecorded {
    pub request_number: u64,
    pub total_entries: usize,
    pub message: String,
    pub word: String,
    pub definition: String,
}

/// Response payload
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Body {
    DefinitionFound(DefinitionFound),
    Notice(Notice),
    EntryRecorded(EntryRecorded),
}

impl Body {
    pub fn request_number(&self) -> u64 {
        match self {
            Body::DefinitionFound(b) => b.request_number,
            Body::Notice(b) => b.request_number,
            Body::EntryRecorded(b) => b.request_number,
        }
    }

    /// The human-readable message, if this body has one
    pub fn message(&self) -> Option<&str> {
        match self {
            Body::DefinitionFound(_) => None,
            Body::Notice(b) => Some(b.message.as_str()),
            Body::EntryRecorded(b) => Some(b.message.as_str()),
        }
    }
}

/// A response to send to the client
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: Status,
    pub body: Body,
}

impl Response {
    /// 200 with the definition of `word`
    pub fn found(request_number: u64, word: &str, definition: String) -> Self {
        Self {
            status: Status::Ok,
            body: Body::DefinitionFound(DefinitionFound {
                request_number,
                word: word.to_string(),
                definition,
            }),
        }
    }

    /// 200 for a lookup miss (not an error)
    pub fn not_found(request_number: u64, word: &str) -> Self {
        Self::notice(
            Status::Ok,
            request_number,
            format!("Word '{}' not found in the dictionary.", word),
        )
    }

    /// 200 after an insert
    pub fn recorded(request_number: u64, total_entries: usize, word: &str, definition: &str) -> Self {
        Self {
            status: Status::Ok,
            body: Body::EntryRecorded(EntryRecorded {
                request_number,
                total_entries,
                message: RECORDED_MESSAGE.to_string(),
                word: word.to_string(),
                definition: definition.to_string(),
            }),
        }
    }

    /// Notice for a failed request, status taken from the error
    pub fn from_error(request_number: u64, err: &LexiError) -> Self {
        Self::notice(err.status(), request_number, error_message(err))
    }

    /// 400 for a malformed lookup word
    pub fn invalid_format(request_number: u64) -> Self {
        Self::from_error(request_number, &LexiError::InvalidFormat)
    }

    /// 400 for a malformed insert payload
    pub fn invalid_input(request_number: u64) -> Self {
        Self::from_error(request_number, &LexiError::InvalidInput)
    }

    /// 409 when the word is already present
    pub fn already_exists(request_number: u64, word: &str) -> Self {
        Self::from_error(request_number, &LexiError::AlreadyExists(word.to_string()))
    }

    /// 500 when the dictionary file could not be rewritten
    pub fn storage_failure(request_number: u64) -> Self {
        Self::notice(
            Status::InternalError,
            request_number,
            STORAGE_FAILURE_MESSAGE.to_string(),
        )
    }

    fn notice(status: Status, request_number: u64, message: String) -> Self {
        Self {
            status,
            body: Body::Notice(Notice {
                request_number,
                message,
            }),
        }
    }
}
