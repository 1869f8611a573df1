use super::*;
use crate::net::types::User;

#[test]
fn should_prompt_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, token: None, loading: false };
    assert!(should_prompt_sign_in(&state));
}

#[test]
fn should_not_prompt_while_loading() {
    let state = AuthState { user: None, token: None, loading: true };
    assert!(!should_prompt_sign_in(&state));
}

#[test]
fn should_not_prompt_when_user_exists() {
    let state = AuthState {
        user: Some(User {
            id: "u1".to_owned(),
            name: "Alice".to_owned(),
            email: "alice@example.com".to_owned(),
            avatar_url: None,
            email_verified: true,
        }),
        token: Some("tok-1".to_owned()),
        loading: false,
    };
    assert!(!should_prompt_sign_in(&state));
}
