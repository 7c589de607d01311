use super::*;

#[test]
fn hidden_password_uses_password_input() {
    assert_eq!(password_input_type(false), "password");
    assert_eq!(visibility_toggle_label(false), "Show");
}

#[test]
fn visible_password_uses_text_input() {
    assert_eq!(password_input_type(true), "text");
    assert_eq!(visibility_toggle_label(true), "Hide");
}

#[test]
fn error_state_adds_modifier_class() {
    assert_eq!(field_class(false), "form-field");
    assert_eq!(field_class(true), "form-field form-field--error");
}
