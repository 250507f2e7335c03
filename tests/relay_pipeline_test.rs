//! Pipeline-level tests with a scripted backend, no HTTP involved.

mod common;

use common::{ScriptedBackend, answered};
use historymind_relay::error::RelayError;
use historymind_relay::relay::RelayState;

#[tokio::test]
async fn test_invalid_query_never_reaches_upstream() {
    let backend = ScriptedBackend::new(Ok(answered("should not be seen")));
    let state = RelayState::with_backend(backend.clone());

    let err = state.process_chat("").await.unwrap_err();
    assert_eq!(err, RelayError::InvalidRequest);

    let err = state.process_chat(&"q".repeat(501)).await.unwrap_err();
    assert_eq!(err, RelayError::InvalidRequest);

    assert_eq!(backend.calls(), 0);
}

#[tokio::test]
async fn test_valid_answer_passes_through() {
    let backend = ScriptedBackend::new(Ok(answered("Ngày 2/9/1945.")));
    let state = RelayState::with_backend(backend);

    let resp = state.process_chat("Quốc khánh Việt Nam?").await.unwrap();
    assert_eq!(resp.answer.as_deref(), Some("Ngày 2/9/1945."));
    assert!(!resp.no_data);
}

#[tokio::test]
async fn test_blank_answer_fails_validation() {
    let backend = ScriptedBackend::new(Ok(answered("  ")));
    let state = RelayState::with_backend(backend);

    let err = state.process_chat("any").await.unwrap_err();
    assert_eq!(err, RelayError::AiResponseInvalid);
}

#[tokio::test]
async fn test_hedging_answer_forces_no_data() {
    let backend = ScriptedBackend::new(Ok(answered("Tôi không chắc về điều này.")));
    let state = RelayState::with_backend(backend);

    let resp = state.process_chat("any").await.unwrap();
    assert!(resp.no_data);
}

#[tokio::test]
async fn test_backend_error_passes_through() {
    let backend = ScriptedBackend::new(Err(RelayError::AiTimeout));
    let state = RelayState::with_backend(backend);

    let err = state.process_chat("any").await.unwrap_err();
    assert_eq!(err, RelayError::AiTimeout);
}
