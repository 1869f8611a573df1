use super::*;

// =============================================================
// token_or_error — a missing token must never reach the network
// =============================================================

#[test]
fn missing_token_is_an_error() {
    assert_eq!(token_or_error(None), Err(INVALID_TOKEN_MESSAGE.to_owned()));
}

#[test]
fn empty_token_is_an_error() {
    assert_eq!(token_or_error(Some(String::new())), Err(INVALID_TOKEN_MESSAGE.to_owned()));
}

#[test]
fn whitespace_token_is_an_error() {
    assert_eq!(token_or_error(Some("   ".to_owned())), Err(INVALID_TOKEN_MESSAGE.to_owned()));
}

#[test]
fn present_token_passes_through_unchanged() {
    assert_eq!(token_or_error(Some("abc123".to_owned())), Ok("abc123".to_owned()));
}

#[test]
fn invalid_token_message_matches_ui_copy() {
    assert_eq!(INVALID_TOKEN_MESSAGE, "Invalid or missing verification token");
}

// =============================================================
// VerifyStatus
// =============================================================

#[test]
fn verify_status_variants_carry_messages() {
    let success = VerifyStatus::Success("Email verified".to_owned());
    let error = VerifyStatus::Error("nope".to_owned());
    assert_ne!(success, error);
    assert_ne!(success, VerifyStatus::Loading);
}
