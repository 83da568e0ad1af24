use super::*;

#[test]
fn validate_reset_input_trims_both_fields() {
    assert_eq!(
        validate_reset_input(" ana@example.com ", " 55551234 "),
        Ok(("ana@example.com".to_owned(), "55551234".to_owned()))
    );
}

#[test]
fn validate_reset_input_requires_valid_email_first() {
    assert_eq!(validate_reset_input("ana", "55551234"), Err(EMAIL_MESSAGE));
    assert_eq!(validate_reset_input("ana", "x"), Err(EMAIL_MESSAGE));
}

#[test]
fn validate_reset_input_requires_eight_digit_phone() {
    assert_eq!(validate_reset_input("ana@example.com", "5555-123"), Err(PHONE_MESSAGE));
    assert_eq!(validate_reset_input("ana@example.com", ""), Err(PHONE_MESSAGE));
}

#[test]
fn user_facing_messages_are_sentences() {
    for message in [LOGIN_SUCCESS_MESSAGE, RESET_SENT_MESSAGE] {
        assert!(message.ends_with('.'));
    }
}
