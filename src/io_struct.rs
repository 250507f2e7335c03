use serde::{Deserialize, Serialize};

use crate::error::{RelayError, RelayResult};

/// Longest query accepted from a caller, in characters.
pub const MAX_QUERY_CHARS: usize = 500;

/// Outbound request body, `{"query": ...}`. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub query: String,
}

impl ChatRequest {
    /// Builds the request, rejecting a blank or oversized query before any
    /// upstream call is made.
    pub fn new(query: impl Into<String>) -> RelayResult<Self> {
        let query = query.into();
        if query.trim().is_empty() {
            return Err(RelayError::InvalidRequest);
        }
        if query.chars().count() > MAX_QUERY_CHARS {
            return Err(RelayError::InvalidRequest);
        }
        Ok(Self { query })
    }
}

/// One historical event in the upstream payload. Flat record, no invariants
/// beyond field presence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Event {
    pub id: Option<i64>,
    pub year: Option<i32>,
    pub event: Option<String>,
    pub tone: Option<String>,
    pub story: Option<String>,
}

/// Upstream answer payload, returned to the caller after validation and the
/// hallucination guard. `no_data` marks that the service has no authoritative
/// answer for the query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatResponse {
    pub query: Option<String>,
    pub intent: Option<String>,
    pub answer: Option<String>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub no_data: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_rejected() {
        assert_eq!(ChatRequest::new(""), Err(RelayError::InvalidRequest));
        assert_eq!(ChatRequest::new("   \t\n"), Err(RelayError::InvalidRequest));
    }

    #[test]
    fn test_query_length_boundary() {
        let at_limit = "a".repeat(MAX_QUERY_CHARS);
        assert!(ChatRequest::new(at_limit).is_ok());

        let over_limit = "a".repeat(MAX_QUERY_CHARS + 1);
        assert_eq!(
            ChatRequest::new(over_limit),
            Err(RelayError::InvalidRequest)
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // Multi-byte characters up to the limit are still one character each.
        let query = "ồ".repeat(MAX_QUERY_CHARS);
        assert!(ChatRequest::new(query).is_ok());
    }

    #[test]
    fn test_response_wire_format() {
        let raw = r#"{
            "query": "Chiến thắng Điện Biên Phủ?",
            "intent": "event_lookup",
            "answer": "Ngày 7/5/1954.",
            "events": [{"id": 1, "year": 1954, "event": "Điện Biên Phủ", "tone": "epic", "story": "..."}],
            "no_data": false
        }"#;
        let resp: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.answer.as_deref(), Some("Ngày 7/5/1954."));
        assert_eq!(resp.events.len(), 1);
        assert_eq!(resp.events[0].year, Some(1954));
        assert!(!resp.no_data);

        // The flag keeps its snake_case wire name on the way out.
        let out = serde_json::to_value(&resp).unwrap();
        assert!(out.get("no_data").is_some());
    }

    #[test]
    fn test_response_missing_fields_default() {
        let resp: ChatResponse = serde_json::from_str(r#"{"answer": "x"}"#).unwrap();
        assert!(resp.events.is_empty());
        assert!(!resp.no_data);
        assert!(resp.intent.is_none());
    }
}
