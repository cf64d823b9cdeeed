use thiserror::Error;

use crate::utils::constants::MSG_SESSION_EXPIRED;

/// Failure of a backend call, classified by what the caller should do next.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No usable session: none was present, or the backend rejected it.
    #[error("not authenticated")]
    Unauthenticated,
    /// The backend refused a credential supplied for this operation only
    /// (login password, delete confirmation password).
    #[error("operation rejected: {reason}")]
    OperationRejected { reason: String },
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("<empty body>"))]
    Http { status: u16, message: Option<String> },
    #[error("network error: {0}")]
    Network(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("decode error: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, ApiError::Unauthenticated)
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthenticated | ApiError::OperationRejected { .. } => Some(401),
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text to show inline: the server's own message when it sent one.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Unauthenticated => MSG_SESSION_EXPIRED.to_string(),
            ApiError::OperationRejected { reason } => reason.clone(),
            ApiError::Http {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Pulls a human-readable message out of an error body.
///
/// Accepts a bare JSON string, an object with `message` or `error`, or
/// plain text. Blank bodies give `None`.
pub fn server_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::String(text)) => Some(text).filter(|t| !t.trim().is_empty()),
        Ok(serde_json::Value::Object(map)) => ["message", "error"]
            .iter()
            .find_map(|key| map.get(*key).and_then(|v| v.as_str()))
            .map(str::to_string),
        Ok(_) => None,
        Err(_) => Some(body.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_reads_all_body_shapes() {
        assert_eq!(server_message("User not found").as_deref(), Some("User not found"));
        assert_eq!(server_message(r#""Email taken""#).as_deref(), Some("Email taken"));
        assert_eq!(
            server_message(r#"{"message":"Price is required"}"#).as_deref(),
            Some("Price is required")
        );
        assert_eq!(
            server_message(r#"{"error":"Bad token"}"#).as_deref(),
            Some("Bad token")
        );
        assert_eq!(server_message(r#"{"code":7}"#), None);
        assert_eq!(server_message("  "), None);
    }

    #[test]
    fn user_message_prefers_server_text() {
        let err = ApiError::Http {
            status: 400,
            message: Some("Roll number invalid".to_string()),
        };
        assert_eq!(err.user_message("Failed"), "Roll number invalid");

        let err = ApiError::Http {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message("Failed"), "Failed");
        assert_eq!(ApiError::Network("offline".into()).user_message("Failed"), "Failed");
    }

    #[test]
    fn both_auth_kinds_report_401() {
        assert_eq!(ApiError::Unauthenticated.status(), Some(401));
        let rejected = ApiError::OperationRejected {
            reason: "nope".into(),
        };
        assert_eq!(rejected.status(), Some(401));
        assert!(!rejected.is_unauthenticated());
    }
}
