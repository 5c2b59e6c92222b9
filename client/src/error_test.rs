use super::*;

#[test]
fn user_message_prefers_server_text() {
    let err = ApiError::Status { status: 401, message: Some("Invalid credentials".to_owned()) };
    assert_eq!(err.user_message(), "Invalid credentials");
    assert_eq!(err.server_message(), Some("Invalid credentials"));
}

#[test]
fn user_message_falls_back_to_display() {
    let err = ApiError::Status { status: 500, message: None };
    assert_eq!(err.user_message(), "request failed with status 500: no message");
    assert_eq!(err.server_message(), None);
}

#[test]
fn blank_server_message_is_ignored() {
    let err = ApiError::Status { status: 400, message: Some("   ".to_owned()) };
    assert_eq!(err.server_message(), None);
}

#[test]
fn network_error_display() {
    assert_eq!(ApiError::Network("connection refused".to_owned()).user_message(), "network error: connection refused");
}

#[test]
fn auth_error_wraps_api_message() {
    let err = AuthError::from(ApiError::Status { status: 401, message: Some("bad password".to_owned()) });
    assert_eq!(err.user_message(), "bad password");
    assert_eq!(AuthError::Rejected("nope".to_owned()).user_message(), "nope");
}

#[test]
fn message_from_body_reads_error_field() {
    assert_eq!(message_from_body(r#"{"error":"User exists"}"#), Some("User exists".to_owned()));
}

#[test]
fn message_from_body_reads_message_field() {
    assert_eq!(message_from_body(r#"{"message":" Forbidden "}"#), Some("Forbidden".to_owned()));
}

#[test]
fn message_from_body_rejects_non_json_and_empty() {
    assert_eq!(message_from_body("<html>"), None);
    assert_eq!(message_from_body(r#"{"error":""}"#), None);
    assert_eq!(message_from_body(r#"{"ok":true}"#), None);
}
