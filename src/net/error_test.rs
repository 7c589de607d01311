use super::*;

#[test]
fn structured_message_becomes_validation_error() {
    let body = r#"{"message":"Email already in use"}"#;
    let err = AuthError::from_error_body(AuthOperation::SignUp, body);
    assert_eq!(err, AuthError::Validation("Email already in use".into()));
    assert_eq!(err.kind(), AuthErrorKind::Validation);
    assert_eq!(err.to_string(), "Email already in use");
}

#[test]
fn missing_message_falls_back_per_operation() {
    let err = AuthError::from_error_body(AuthOperation::SignIn, r#"{"error":"Bad Gateway"}"#);
    assert_eq!(err, AuthError::Transport(AuthOperation::SignIn));
    assert_eq!(err.kind(), AuthErrorKind::Transport);
    assert_eq!(err.to_string(), "An unknown error occurred during sign-in");
}

#[test]
fn non_string_message_falls_back() {
    let err = AuthError::from_error_body(AuthOperation::SignUp, r#"{"message":["a","b"]}"#);
    assert_eq!(err.to_string(), "An unknown error occurred during sign-up");
}

#[test]
fn non_json_body_falls_back() {
    let err = AuthError::from_error_body(AuthOperation::SignUp, "<html>502</html>");
    assert_eq!(err, AuthError::Transport(AuthOperation::SignUp));
}

#[test]
fn unknown_uses_fixed_message() {
    assert_eq!(AuthError::Unknown.to_string(), "An unknown error occurred");
    assert_eq!(AuthError::Unknown.kind(), AuthErrorKind::Unknown);
}

#[test]
fn operation_paths() {
    assert_eq!(AuthOperation::SignUp.path(), "/signup");
    assert_eq!(AuthOperation::SignIn.path(), "/signin");
}
