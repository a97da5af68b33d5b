//! API failure taxonomy and user-facing message derivation.
//!
//! Failures are classified at the HTTP boundary into transport failures,
//! missing resources, validation rejections, and server errors. Screens
//! never see the raw taxonomy; the operations worker derives a single
//! human-readable message per failure via [`ApiError::user_message`].

use thiserror::Error;

/// Fallback message when a failure carries nothing presentable.
const GENERIC_MESSAGE: &str = "An error occurred";

/// A failed API operation.
///
/// Response bodies are retained verbatim on the status-driven variants so
/// the message derivation can inspect them; transport and decode failures
/// have no server-supplied body and derive the generic message instead.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or connectivity failure; the request may never have reached
    /// the server. Automatically converts from `reqwest::Error`.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server reported the resource absent (404).
    #[error("event not found")]
    NotFound,

    /// The server rejected the request (4xx other than 404), typically with
    /// field-level validation messages in the body.
    #[error("request rejected ({status}): {body}")]
    Validation { status: u16, body: String },

    /// The server answered with a non-2xx status outside the 4xx range.
    #[error("server error ({status}): {body}")]
    Server { status: u16, body: String },

    /// A 2xx response whose body could not be decoded as the expected JSON.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Derives the single human-readable message shown in the UI notice.
    ///
    /// For failures carrying a server body the derivation prefers, in order:
    /// a plain-text body, a JSON `message` field, a structured `errors`
    /// collection joined with `", "`. Everything else falls back to a
    /// generic message; the full failure always goes to the diagnostic log.
    ///
    /// # Examples
    ///
    /// ```
    /// use eventdeck::api::ApiError;
    ///
    /// let err = ApiError::Validation {
    ///     status: 400,
    ///     body: r#"{"errors": [{"defaultMessage": "Title is required"}]}"#.to_string(),
    /// };
    /// assert_eq!(err.user_message(), "Title is required");
    /// ```
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound => "Event not found".to_string(),
            Self::Validation { body, .. } | Self::Server { body, .. } => {
                derive_user_message(body).unwrap_or_else(|| GENERIC_MESSAGE.to_string())
            }
            Self::Transport(_) | Self::Decode(_) => GENERIC_MESSAGE.to_string(),
        }
    }
}

/// Extracts a presentable message from a server response body, if any.
///
/// A body that is not JSON is treated as server-supplied plain text and
/// returned as-is. A JSON object yields its `message` field when present;
/// otherwise its `errors` collection is flattened: an array joins each
/// entry's `defaultMessage` (preferred) or `message`, a map joins its string
/// values. Anything unusable yields `None`.
#[must_use]
pub fn derive_user_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) else {
        // Not JSON at all: the server sent plain text.
        return Some(trimmed.to_string());
    };

    match value {
        serde_json::Value::String(text) => Some(text),
        serde_json::Value::Object(fields) => {
            if let Some(serde_json::Value::String(message)) = fields.get("message") {
                return Some(message.clone());
            }
            match fields.get("errors") {
                Some(serde_json::Value::Array(entries)) => {
                    let joined: Vec<String> = entries
                        .iter()
                        .filter_map(|entry| {
                            entry
                                .get("defaultMessage")
                                .or_else(|| entry.get("message"))
                                .and_then(serde_json::Value::as_str)
                                .map(str::to_string)
                        })
                        .collect();
                    if joined.is_empty() {
                        None
                    } else {
                        Some(joined.join(", "))
                    }
                }
                Some(serde_json::Value::Object(per_field)) => {
                    let joined: Vec<String> = per_field
                        .values()
                        .filter_map(serde_json::Value::as_str)
                        .map(str::to_string)
                        .collect();
                    if joined.is_empty() {
                        None
                    } else {
                        Some(joined.join(", "))
                    }
                }
                _ => None,
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_body_wins() {
        assert_eq!(
            derive_user_message("End date must be after start date"),
            Some("End date must be after start date".to_string())
        );
    }

    #[test]
    fn message_field_is_honored() {
        assert_eq!(
            derive_user_message(r#"{"message": "Event not found", "status": 404}"#),
            Some("Event not found".to_string())
        );
    }

    #[test]
    fn validation_errors_join_with_comma() {
        let body = r#"{
            "errors": [
                {"defaultMessage": "title required"},
                {"defaultMessage": "price must be >= 0"}
            ]
        }"#;
        assert_eq!(
            derive_user_message(body),
            Some("title required, price must be >= 0".to_string())
        );
    }

    #[test]
    fn error_entries_fall_back_to_message_field() {
        let body = r#"{"errors": [{"message": "bad field"}, {"code": 7}]}"#;
        assert_eq!(derive_user_message(body), Some("bad field".to_string()));
    }

    #[test]
    fn error_map_joins_values() {
        let body = r#"{"errors": {"title": "Title is required", "price": "Price must be greater than or equal to 0"}}"#;
        let message = derive_user_message(body).unwrap();
        assert!(message.contains("Title is required"));
        assert!(message.contains(", "));
    }

    #[test]
    fn empty_or_unusable_bodies_yield_none() {
        assert_eq!(derive_user_message(""), None);
        assert_eq!(derive_user_message("   "), None);
        assert_eq!(derive_user_message("[1, 2]"), None);
        assert_eq!(derive_user_message(r#"{"status": 500}"#), None);
    }

    #[test]
    fn user_message_falls_back_to_generic() {
        let err = ApiError::Server {
            status: 502,
            body: String::new(),
        };
        assert_eq!(err.user_message(), "An error occurred");
    }

    #[test]
    fn not_found_has_fixed_message() {
        assert_eq!(ApiError::NotFound.user_message(), "Event not found");
    }
}
