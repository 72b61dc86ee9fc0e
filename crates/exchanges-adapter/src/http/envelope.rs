/*
[INPUT]:  Parsed response bodies or transport failures
[OUTPUT]: Uniform {success, message, results} envelope
[POS]:    HTTP layer - the only shape handed back to facade callers
[UPDATE]: When changing the envelope contract
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message carried by every transport-level failure
pub const COMMUNICATION_ERROR: &str = "Communication error";

/// Uniform result of every exchange operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub success: bool,
    pub message: String,
    pub results: Option<Value>,
}

impl ResponseEnvelope {
    /// Wrap a parsed response body
    pub fn ok(results: Value) -> Self {
        Self {
            success: true,
            message: String::new(),
            results: Some(results),
        }
    }

    /// Envelope for any network, timeout, or decoding failure
    pub fn communication_error() -> Self {
        Self {
            success: false,
            message: COMMUNICATION_ERROR.to_string(),
            results: None,
        }
    }

    /// Borrow the payload if present
    pub fn results(&self) -> Option<&Value> {
        self.results.as_ref()
    }

    /// Take the payload, dropping the envelope
    pub fn into_results(self) -> Option<Value> {
        self.results
    }
}

impl<E> From<std::result::Result<Value, E>> for ResponseEnvelope {
    fn from(outcome: std::result::Result<Value, E>) -> Self {
        match outcome {
            Ok(body) => Self::ok(body),
            Err(_) => Self::communication_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_communication_error_shape() {
        let envelope = ResponseEnvelope::communication_error();
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({"success": false, "message": "Communication error", "results": null})
        );
    }

    #[test]
    fn test_ok_keeps_body_verbatim() {
        let body = json!({"success": false, "message": "INVALID_MARKET", "result": null});
        let envelope = ResponseEnvelope::ok(body.clone());

        assert!(envelope.success);
        assert!(envelope.message.is_empty());
        assert_eq!(envelope.results(), Some(&body));
    }

    #[test]
    fn test_from_result() {
        let failed: std::result::Result<Value, &str> = Err("dns");
        assert_eq!(
            ResponseEnvelope::from(failed),
            ResponseEnvelope::communication_error()
        );

        let passed: std::result::Result<Value, &str> = Ok(json!([1, 2]));
        assert_eq!(ResponseEnvelope::from(passed).into_results(), Some(json!([1, 2])));
    }
}
