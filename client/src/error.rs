//! Client-side error taxonomy for API and authentication failures.
//!
//! ERROR HANDLING
//! ==============
//! Every variant maps to a human-readable message via [`ApiError::user_message`]
//! so pages can surface failures as toasts without matching on transport
//! details. Nothing here is fatal: callers degrade to a notification.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure talking to the FoodTrace backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("request failed with status {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status { status: u16, message: Option<String> },
    /// The response body did not match the expected schema.
    #[error("invalid response: {0}")]
    Decode(String),
    /// The endpoint is browser-only and was invoked during server rendering.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Message shown to the user: the server-supplied text when present,
    /// otherwise the error's display form.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { message: Some(message), .. } if !message.trim().is_empty() => message.clone(),
            other => other.to_string(),
        }
    }

    /// Server-supplied message, if the failure carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message: Some(message), .. } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }
}

/// Failure returned by an [`crate::state::auth::Authenticator`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl AuthError {
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(message) => message.clone(),
            Self::Api(err) => err.user_message(),
        }
    }
}

/// Extract the human-readable message from a JSON error body.
///
/// The backend reports failures as `{ "error": "..." }`; some routes use
/// `message` instead.
pub fn message_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["error", "message"]
        .iter()
        .find_map(|key| value.get(key).and_then(serde_json::Value::as_str))
        .map(str::trim)
        .filter(|msg| !msg.is_empty())
        .map(str::to_owned)
}
