//! Uniform response envelope for both endpoints.

use serde::Serialize;

/// Message for the generic recovery boundary. Internal detail is logged,
/// never sent to the caller.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again!";

/// Per-request response body: an HTTP-style status, an optional
/// human-readable error, and the data rows. Constructed fresh per request.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub status: u16,
    pub error: Option<String>,
    pub data: Vec<T>,
}

impl<T> Envelope<T> {
    /// A 200 envelope carrying data.
    pub fn ok(data: Vec<T>) -> Self {
        Self {
            status: 200,
            error: None,
            data,
        }
    }

    /// A rejection with a specific status and message, and no data.
    pub fn rejected(status: u16, message: &str) -> Self {
        Self {
            status,
            error: Some(message.to_string()),
            data: Vec::new(),
        }
    }

    /// The fixed fallback for any failure past validation.
    pub fn fallback() -> Self {
        Self::rejected(400, GENERIC_FAILURE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_envelope_has_no_error() {
        let envelope = Envelope::ok(vec![1, 2, 3]);
        assert_eq!(envelope.status, 200);
        assert!(envelope.error.is_none());
        assert_eq!(envelope.data, vec![1, 2, 3]);
    }

    #[test]
    fn fallback_envelope_serialization() {
        let envelope: Envelope<i64> = Envelope::fallback();
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "status": 400,
                "error": "Something went wrong. Please try again!",
                "data": []
            })
        );
    }

    #[test]
    fn rejection_carries_message_and_empty_data() {
        let envelope: Envelope<i64> = Envelope::rejected(406, "nope");
        assert_eq!(envelope.status, 406);
        assert_eq!(envelope.error.as_deref(), Some("nope"));
        assert!(envelope.data.is_empty());
    }
}
