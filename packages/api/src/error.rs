//! # API errors: one tagged type decided at the HTTP boundary
//!
//! The admin API reports failures with loosely-shaped JSON bodies: sometimes
//! `{"message": "..."}`, sometimes `{"message": {"field": "..."}}` or
//! `{"errors": {"field": ["..."]}}`. [`ApiError::from_response`] inspects the
//! status and body exactly once and produces a variant call sites can match on,
//! so nothing downstream re-parses error payloads.
//!
//! | Variant | When |
//! |---------|------|
//! | [`ApiError::Unauthorized`] | HTTP 401 |
//! | [`ApiError::Validation`] | a body carrying a field → message map |
//! | [`ApiError::Server`] | any other non-2xx response |
//! | [`ApiError::Network`] | transport failure, abort or timeout |
//! | [`ApiError::Decode`] | a 2xx body that does not match the expected type |

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

/// Fallback notification text when the server gives no message.
pub const GENERIC_MESSAGE: &str = "Something went wrong, please try again";

const UNAUTHORIZED_MESSAGE: &str = "Your session has expired, please sign in again";
const NETWORK_MESSAGE: &str = "Unable to reach the server";

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("validation failed: {message}")]
    Validation {
        message: String,
        fields: BTreeMap<String, String>,
    },

    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected response: {0}")]
    Decode(String),
}

#[derive(Deserialize, Default)]
struct ErrorBody {
    #[serde(default)]
    message: Option<Value>,
    #[serde(default)]
    error: Option<Value>,
    #[serde(default)]
    errors: Option<Value>,
}

impl ApiError {
    /// Classify a non-2xx response.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();

        let message = [&parsed.message, &parsed.error]
            .into_iter()
            .flatten()
            .find_map(|v| v.as_str().map(str::trim).filter(|s| !s.is_empty()))
            .map(str::to_string);

        let mut fields = BTreeMap::new();
        for candidate in [&parsed.errors, &parsed.message].into_iter().flatten() {
            collect_fields(candidate, &mut fields);
        }

        if status == 401 {
            return ApiError::Unauthorized {
                message: message.unwrap_or_else(|| UNAUTHORIZED_MESSAGE.to_string()),
            };
        }

        if !fields.is_empty() {
            let message = message
                .or_else(|| fields.values().next().cloned())
                .unwrap_or_else(|| GENERIC_MESSAGE.to_string());
            return ApiError::Validation { message, fields };
        }

        ApiError::Server {
            status,
            message: message.unwrap_or_else(|| GENERIC_MESSAGE.to_string()),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// Text suitable for a notification.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Unauthorized { message }
            | ApiError::Validation { message, .. }
            | ApiError::Server { message, .. } => message.clone(),
            ApiError::Network(_) => NETWORK_MESSAGE.to_string(),
            ApiError::Decode(_) => GENERIC_MESSAGE.to_string(),
        }
    }

    /// Field-level messages, empty unless this is a validation error.
    pub fn field_errors(&self) -> BTreeMap<String, String> {
        match self {
            ApiError::Validation { fields, .. } => fields.clone(),
            _ => BTreeMap::new(),
        }
    }
}

fn collect_fields(value: &Value, fields: &mut BTreeMap<String, String>) {
    let Value::Object(map) = value else {
        return;
    };
    for (field, messages) in map {
        let first = match messages {
            Value::String(s) => Some(s.clone()),
            Value::Array(items) => items.iter().find_map(|v| v.as_str().map(str::to_string)),
            _ => None,
        };
        if let Some(message) = first {
            fields.entry(field.clone()).or_insert(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_status() {
        let err = ApiError::from_response(401, r#"{"message":"Token expired"}"#);
        assert_eq!(
            err,
            ApiError::Unauthorized {
                message: "Token expired".to_string()
            }
        );
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_unauthorized_without_body() {
        let err = ApiError::from_response(401, "");
        assert!(err.is_unauthorized());
        assert_eq!(err.user_message(), UNAUTHORIZED_MESSAGE);
    }

    #[test]
    fn test_server_message_string() {
        let err = ApiError::from_response(409, r#"{"message":"Bedroom is full"}"#);
        assert_eq!(
            err,
            ApiError::Server {
                status: 409,
                message: "Bedroom is full".to_string()
            }
        );
        assert_eq!(err.user_message(), "Bedroom is full");
    }

    #[test]
    fn test_error_key_is_used_as_message() {
        let err = ApiError::from_response(500, r#"{"error":"database unavailable"}"#);
        assert_eq!(err.user_message(), "database unavailable");
    }

    #[test]
    fn test_generic_fallback_for_non_json_body() {
        let err = ApiError::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(
            err,
            ApiError::Server {
                status: 502,
                message: GENERIC_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn test_message_object_is_field_validation() {
        let err = ApiError::from_response(
            422,
            r#"{"message":{"email":"Email already used","username":"Too short"}}"#,
        );
        let fields = err.field_errors();
        assert_eq!(fields.get("email").unwrap(), "Email already used");
        assert_eq!(fields.get("username").unwrap(), "Too short");
        // No string message: the first field message is surfaced
        assert_eq!(err.user_message(), "Email already used");
    }

    #[test]
    fn test_errors_array_keeps_first_message() {
        let err = ApiError::from_response(
            400,
            r#"{"message":"Invalid input","errors":{"capacity":["Must be positive","Required"]}}"#,
        );
        assert_eq!(err.user_message(), "Invalid input");
        assert_eq!(err.field_errors().get("capacity").unwrap(), "Must be positive");
    }

    #[test]
    fn test_network_message() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.user_message(), NETWORK_MESSAGE);
        assert!(err.field_errors().is_empty());
    }
}
