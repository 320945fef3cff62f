use reqwest::StatusCode;
use serde_json::Value;

use super::ApiBody;

/// Message used when neither the body nor the status carries anything usable.
pub const FALLBACK_ERROR: &str = "Request failed";

/// Failure surface of the API client.
///
/// Backend error bodies are heterogeneous; `Status` collapses them into one
/// message resolved by [`status_error`] so callers never branch on shape.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response; the message already carries the resolved body text.
    #[error("{message}")]
    Status {
        status: StatusCode,
        message: String,
    },

    /// Network-level failure (connect, DNS, timeout, TLS).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// A body that declared itself JSON but did not parse as such.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured base address is not usable.
    #[error("invalid API URL: {0}")]
    InvalidUrl(String),

    /// A 2xx response is missing a field the operation depends on.
    #[error("Error parsing JSON response: no {0} found")]
    MissingField(&'static str),
}

impl ApiError {
    /// Transport status of the failed response, when one was received.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) => err.status(),
            _ => None,
        }
    }
}

fn body_error_message(body: &ApiBody) -> Option<&str> {
    match body {
        ApiBody::Json(value) => value
            .get("error")
            .and_then(Value::as_str)
            .or_else(|| value.get("message").and_then(Value::as_str)),
        ApiBody::Text(_) => None,
    }
}

/// Build the failure for a non-success response.
///
/// Precedence: body `error` field, body `message` field, the status'
/// canonical reason phrase, then [`FALLBACK_ERROR`].
pub(crate) fn status_error(status: StatusCode, body: &ApiBody) -> ApiError {
    let message = body_error_message(body)
        .map(ToString::to_string)
        .or_else(|| status.canonical_reason().map(ToString::to_string))
        .unwrap_or_else(|| FALLBACK_ERROR.to_string());

    ApiError::Status { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_field_wins_over_message() {
        let body = ApiBody::Json(json!({"error": "Invalid subject", "message": "ignored"}));
        let err = status_error(StatusCode::BAD_REQUEST, &body);
        assert_eq!(err.to_string(), "Invalid subject");
    }

    #[test]
    fn message_field_used_when_no_error_field() {
        let body = ApiBody::Json(json!({"message": "Quota exceeded"}));
        let err = status_error(StatusCode::TOO_MANY_REQUESTS, &body);
        assert_eq!(err.to_string(), "Quota exceeded");
    }

    #[test]
    fn status_phrase_used_for_text_bodies() {
        let body = ApiBody::Text("<html>boom</html>".to_string());
        let err = status_error(StatusCode::INTERNAL_SERVER_ERROR, &body);
        assert_eq!(err.to_string(), "Internal Server Error");
    }

    #[test]
    fn status_phrase_used_when_fields_are_not_strings() {
        let body = ApiBody::Json(json!({"error": {"code": 42}}));
        let err = status_error(StatusCode::BAD_GATEWAY, &body);
        assert_eq!(err.to_string(), "Bad Gateway");
    }

    #[test]
    fn fallback_used_for_unknown_status() {
        let body = ApiBody::Text(String::new());
        let status = StatusCode::from_u16(599).expect("valid status code");
        let err = status_error(status, &body);
        assert_eq!(err.to_string(), FALLBACK_ERROR);
    }

    #[test]
    fn status_is_preserved_on_the_error() {
        let body = ApiBody::Json(json!({"error": "nope"}));
        let err = status_error(StatusCode::FORBIDDEN, &body);
        assert_eq!(err.status(), Some(StatusCode::FORBIDDEN));
    }
}
