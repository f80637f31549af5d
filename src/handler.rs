//! Handler Module
//!
//! Turns lookup/insert requests into WordStore calls and shapes the replies.
//!
//! ## Responsibilities
//! - Number every handled request, valid or not
//! - Validate input before it reaches the store
//! - Map store results and errors onto response statuses

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::protocol::{validate_insert, validate_lookup, InsertPayload, Response, Status};
use crate::store::WordStore;

/// Request handler shared by all connections
pub struct RequestHandler {
    /// The dictionary
    store: Arc<WordStore>,

    /// Requests handled since startup (not persisted)
    request_count: AtomicU64,
}

impl RequestHandler {
    /// Create a handler over an opened store, counter starting at 0
    pub fn new(store: Arc<WordStore>) -> Self {
        Self {
            store,
            request_count: AtomicU64::new(0),
        }
    }

    /// Look up the definition of `word`
    ///
    /// `None` means the parameter was missing or not a single string.
    pub fn lookup(&self, word: Option<&str>) -> Response {
        let request_number = self.next_request_number();

        let word = match validate_lookup(word) {
            Ok(word) => word,
            Err(e) => return Response::from_error(request_number, &e),
        };

        tracing::debug!("Request #{}: lookup '{}'", request_number, word);

        match self.store.lookup(word) {
            Some(definition) => Response::found(request_number, word, definition),
            None => Response::not_found(request_number, word),
        }
    }

    /// Record a new word and definition
    pub fn insert(&self, payload: &InsertPayload) -> Response {
        let request_number = self.next_request_number();

        let (word, definition) = match validate_insert(payload) {
            Ok(fields) => fields,
            Err(e) => return Response::from_error(request_number, &e),
        };

        tracing::debug!("Request #{}: insert '{}'", request_number, word);

        match self.store.insert(word, definition) {
            Ok(total_entries) => Response::recorded(request_number, total_entries, word, definition),
            Err(e) => {
                if e.status() == Status::InternalError {
                    tracing::error!("Request #{}: insert '{}' failed: {}", request_number, word, e);
                }
                Response::from_error(request_number, &e)
            }
        }
    }

    /// Number of requests handled so far
    pub fn requests_handled(&self) -> u64 {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Get the underlying store
    pub fn store(&self) -> &Arc<WordStore> {
        &self.store
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn next_request_number(&self) -> u64 {
        self.request_count.fetch_add(1, Ordering::SeqCst) + 1
    }
}
