use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_user() -> User {
    User {
        id: "u-1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        avatar_url: None,
        email_verified: true,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn auth_state_default_is_loading() {
    let state = AuthState::default();
    assert!(state.loading);
    assert_eq!(state.user, None);
    assert_eq!(state.token, None);
}

#[test]
fn auth_state_default_is_neither_authenticated_nor_anonymous() {
    let state = AuthState::default();
    assert!(!state.is_authenticated());
    assert!(!state.is_anonymous());
}

// =============================================================
// resolve / clear
// =============================================================

#[test]
fn resolve_with_user_is_authenticated() {
    let mut state = AuthState::default();
    state.resolve(Some(make_user()), Some("tok-1".to_owned()));
    assert!(state.is_authenticated());
    assert!(!state.is_anonymous());
    assert_eq!(state.token.as_deref(), Some("tok-1"));
}

#[test]
fn resolve_without_user_is_anonymous() {
    let mut state = AuthState::default();
    state.resolve(None, None);
    assert!(!state.is_authenticated());
    assert!(state.is_anonymous());
}

#[test]
fn clear_drops_user_and_token_but_not_loading() {
    let mut state = AuthState::default();
    state.resolve(Some(make_user()), Some("tok-1".to_owned()));
    state.clear();
    assert_eq!(state.user, None);
    assert_eq!(state.token, None);
    assert!(state.is_anonymous());
}
