//! Shape checks and the hallucination guard for upstream answers.

use crate::error::{RelayError, RelayResult};
use crate::io_struct::ChatResponse;

/// Longest answer accepted from the upstream, in characters.
pub const MAX_ANSWER_CHARS: usize = 3000;

/// Hedging phrase the upstream model emits when it is guessing
/// ("I'm not sure"). Matched case-insensitively.
pub const HEDGING_PHRASE: &str = "tôi không chắc";

/// Pure shape check, no mutation. A `no_data` response is always valid; an
/// answered response must carry a non-blank answer within the size limit.
pub fn validate(response: &ChatResponse) -> RelayResult<()> {
    if response.no_data {
        return Ok(());
    }
    match response.answer.as_deref() {
        None => Err(RelayError::AiResponseInvalid),
        Some(answer) if answer.trim().is_empty() => Err(RelayError::AiResponseInvalid),
        Some(answer) if answer.chars().count() > MAX_ANSWER_CHARS => {
            Err(RelayError::AiResponseInvalid)
        }
        Some(_) => Ok(()),
    }
}

/// Forces the no-data flag when the answer hedges, so the caller never
/// renders a low-confidence answer as authoritative.
pub fn hallucination_guard(mut response: ChatResponse) -> ChatResponse {
    if !response.no_data
        && let Some(answer) = &response.answer
        && answer.to_lowercase().contains(HEDGING_PHRASE)
    {
        response.no_data = true;
    }
    response
}
