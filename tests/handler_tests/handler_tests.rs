//! Tests for RequestHandler
//!
//! These tests verify:
//! - Request numbering across valid and invalid requests
//! - Lookup and insert status selection
//! - The end-to-end Cat scenario

use std::sync::Arc;

use lexikv::protocol::{Body, InsertPayload, Response, Status};
use lexikv::{RequestHandler, WordStore};
use serde_json::json;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_handler() -> (TempDir, RequestHandler) {
    let temp_dir = TempDir::new().unwrap();
    let store = WordStore::open(&temp_dir.path().join("dictionary.json")).unwrap();
    (temp_dir, RequestHandler::new(Arc::new(store)))
}

fn body_json(response: &Response) -> serde_json::Value {
    serde_json::to_value(&response.body).unwrap()
}

// =============================================================================
// Request Counter Tests
// =============================================================================

#[test]
fn test_counter_starts_at_one() {
    let (_temp, handler) = setup_temp_handler();

    assert_eq!(handler.requests_handled(), 0);
    let response = handler.lookup(Some("cat"));

    assert_eq!(response.body.request_number(), 1);
    assert_eq!(handler.requests_handled(), 1);
}

#[test]
fn test_counter_increments_on_every_request() {
    let (_temp, handler) = setup_temp_handler();

    let responses = vec![
        handler.lookup(Some("cat")),
        handler.lookup(None),
        handler.lookup(Some("123")),
        handler.insert(&InsertPayload::new("cat", "A feline.")),
        handler.insert(&InsertPayload::new("cat", "again")),
        handler.insert(&InsertPayload::default()),
        handler.lookup(Some("CAT")),
    ];

    let numbers: Vec<u64> = responses.iter().map(|r| r.body.request_number()).collect();
    assert_eq!(numbers, (1..=7).collect::<Vec<u64>>());
    assert_eq!(handler.requests_handled(), 7);
}

#[test]
fn test_counter_is_per_handler() {
    let (_temp_a, a) = setup_temp_handler();
    let (_temp_b, b) = setup_temp_handler();

    a.lookup(Some("cat"));
    a.lookup(Some("cat"));

    assert_eq!(b.lookup(Some("cat")).body.request_number(), 1);
}

// =============================================================================
// Lookup Tests
// =============================================================================

#[test]
fn test_lookup_missing_param_is_invalid_format() {
    let (_temp, handler) = setup_temp_handler();

    let response = handler.lookup(None);

    assert_eq!(response.status, Status::BadRequest);
    assert_eq!(
        body_json(&response),
        json!({
            "requestNumber": 1,
            "message": "Invalid word format. Please enter a valid English word."
        })
    );
}

#[test]
fn test_lookup_miss_is_ok() {
    let (_temp, handler) = setup_temp_handler();

    let response = handler.lookup(Some("Unicorn"));

    assert_eq!(response.status, Status::Ok);
    assert_eq!(
        response.body.message(),
        Some("Word 'Unicorn' not found in the dictionary.")
    );
}

#[test]
fn test_lookup_echoes_submitted_word() {
    let (_temp, handler) = setup_temp_handler();
    handler.insert(&InsertPayload::new("dog", "A loyal companion."));

    let response = handler.lookup(Some("DoG"));

    assert_eq!(
        body_json(&response),
        json!({"requestNumber": 2, "word": "DoG", "definition": "A loyal companion."})
    );
}

// =============================================================================
// Insert Tests
// =============================================================================

#[test]
fn test_insert_rejects_bad_payloads() {
    let (_temp, handler) = setup_temp_handler();

    let payloads = vec![
        InsertPayload::default(),
        InsertPayload::new("dog", "   "),
        InsertPayload::new("dog", ""),
        InsertPayload::new("d0g", "A dog."),
        InsertPayload::new("hot dog", "A sausage."),
        InsertPayload {
            word: Some("dog".to_string()),
            definition: None,
        },
        InsertPayload::from_json(&json!({"word": "dog", "definition": 5})),
    ];

    for payload in payloads {
        let response = handler.insert(&payload);
        assert_eq!(response.status, Status::BadRequest, "{:?}", payload);
        assert_eq!(
            response.body.message(),
            Some("Invalid input. Please provide a valid word and definition.")
        );
    }
    assert!(handler.store().is_empty());
}

#[test]
fn test_insert_conflict_keeps_first_definition() {
    let (_temp, handler) = setup_temp_handler();

    handler.insert(&InsertPayload::new("Cat", "first"));
    let response = handler.insert(&InsertPayload::new("cAT", "second"));

    assert_eq!(response.status, Status::Conflict);
    assert_eq!(
        response.body.message(),
        Some("Warning! The word 'cAT' already exists in the dictionary.")
    );
    assert_eq!(handler.store().lookup("cat"), Some("first".to_string()));
}

#[test]
fn test_insert_storage_failure_is_internal_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing").join("dictionary.json");
    let handler = RequestHandler::new(Arc::new(WordStore::open(&path).unwrap()));

    let response = handler.insert(&InsertPayload::new("cat", "A feline."));

    assert_eq!(response.status, Status::InternalError);
    assert_eq!(response.body.request_number(), 1);
    assert_eq!(handler.lookup(Some("cat")).body.message(), Some("Word 'cat' not found in the dictionary."));
}

// =============================================================================
// Scenario
// =============================================================================

#[test]
fn test_cat_scenario() {
    let (_temp, handler) = setup_temp_handler();

    let response = handler.insert(&InsertPayload::new("Cat", "A small domesticated feline."));
    assert_eq!(response.status, Status::Ok);
    match &response.body {
        Body::EntryRecorded(recorded) => {
            assert_eq!(recorded.total_entries, 1);
            assert_eq!(recorded.word, "Cat");
            assert_eq!(recorded.definition, "A small domesticated feline.");
        }
        other => panic!("expected EntryRecorded, got {:?}", other),
    }

    let response = handler.insert(&InsertPayload::new("cat", "x"));
    assert_eq!(response.status, Status::Conflict);
    assert!(response.body.message().unwrap().contains("cat"));

    let response = handler.lookup(Some("CAT"));
    assert_eq!(response.status, Status::Ok);
    assert_eq!(body_json(&response)["definition"], "A small domesticated feline.");

    let response = handler.lookup(Some("123"));
    assert_eq!(response.status, Status::BadRequest);

    let response = handler.insert(&InsertPayload::new("dog", "   "));
    assert_eq!(response.status, Status::BadRequest);
    assert_eq!(response.body.request_number(), 5);
}
