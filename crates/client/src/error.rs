//! Client error model and backend error-payload extraction.

use thiserror::Error;

/// Failure of a backend call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (DNS, connect, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status. `message` is the
    /// human-readable message extracted from the error payload, passed
    /// through unmodified.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body could not be decoded into the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// The backend rejected the token (401). The session has been cleared.
    #[error("unauthorized")]
    Unauthorized,
}

impl ApiError {
    /// The message to surface to a user, verbatim for backend errors.
    pub fn message(&self) -> String {
        match self {
            ApiError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Extract the human-readable message from an error payload.
///
/// The backend replies with `{"error": <code>, "message": <text>}`; prefer
/// `message`, fall back to `error`, and finally to the raw body so nothing is
/// ever swallowed.
pub(crate) fn extract_error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                if !text.is_empty() {
                    return text.to_string();
                }
            }
        }
    }
    body.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_message_over_error_code() {
        let body = r#"{"error":"validation_error","message":"quantity must be positive"}"#;
        assert_eq!(extract_error_message(body), "quantity must be positive");
    }

    #[test]
    fn falls_back_to_error_field() {
        let body = r#"{"error":"not_found"}"#;
        assert_eq!(extract_error_message(body), "not_found");
    }

    #[test]
    fn falls_back_to_raw_body_for_non_json() {
        assert_eq!(extract_error_message("Bad Gateway"), "Bad Gateway");
    }

    #[test]
    fn api_error_message_is_verbatim() {
        let err = ApiError::Api {
            status: 409,
            message: "insufficient stock".to_string(),
        };
        assert_eq!(err.message(), "insufficient stock");
    }
}
