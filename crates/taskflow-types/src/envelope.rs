//! # Response Envelope
//!
//! Every REST response is wrapped as `{ status, data, message }` where
//! `status` is `"success"`, `"fail"` (client fault), or `"error"` (server
//! fault). `Envelope::into_result` is the single place that unwraps it.

use crate::error::ApiError;
use serde::Deserialize;

/// Envelope discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Fail,
    Error,
}

impl ResponseStatus {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// The `{status, data, message}` wrapper around every API payload.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub status: ResponseStatus,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Unwrap the envelope against the HTTP status it arrived with.
    ///
    /// A success envelope without `data` is a malformed response, not a
    /// silent `None`: callers always expect a payload.
    pub fn into_result(self, http_status: u16) -> Result<T, ApiError> {
        match self.status {
            ResponseStatus::Success => self.data.ok_or_else(|| {
                ApiError::Decode("success envelope missing data".to_string())
            }),
            ResponseStatus::Fail | ResponseStatus::Error => Err(ApiError::Api {
                status: http_status,
                message: self
                    .message
                    .unwrap_or_else(|| "request failed".to_string()),
            }),
        }
    }
}

/// `data` payload for endpoints that acknowledge without content
/// (logout, forgot-password, mark-read). Tolerates any shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Acknowledged {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::UserData;

    #[test]
    fn success_envelope_unwraps_payload() {
        let json = r#"{
            "status": "success",
            "data": {"user": {"id": "u1", "username": "ada", "email": "a@b.c"}}
        }"#;
        let envelope: Envelope<UserData> =
            serde_json::from_str(json).expect("envelope should parse");
        let data = envelope.into_result(200).expect("should unwrap");
        assert_eq!(data.user.username, "ada");
    }

    #[test]
    fn error_envelope_carries_server_message() {
        let json = r#"{"status": "error", "message": "Invalid credentials"}"#;
        let envelope: Envelope<UserData> =
            serde_json::from_str(json).expect("envelope should parse");
        match envelope.into_result(401) {
            Err(ApiError::Api { status, message }) => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid credentials");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn fail_envelope_without_message_gets_fallback() {
        let json = r#"{"status": "fail"}"#;
        let envelope: Envelope<Acknowledged> =
            serde_json::from_str(json).expect("envelope should parse");
        match envelope.into_result(400) {
            Err(ApiError::Api { message, .. }) => assert_eq!(message, "request failed"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn success_without_data_is_malformed() {
        let json = r#"{"status": "success"}"#;
        let envelope: Envelope<UserData> =
            serde_json::from_str(json).expect("envelope should parse");
        assert!(matches!(
            envelope.into_result(200),
            Err(ApiError::Decode(_))
        ));
    }
}
