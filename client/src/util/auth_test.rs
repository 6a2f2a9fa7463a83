use super::*;
use crate::state::session::StoredUser;

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = SessionState { user: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = SessionState { user: None, loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = SessionState {
        user: Some(StoredUser { name: "Alice".to_owned(), email: None }),
        loading: false,
    };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_redirect_after_session_cleared() {
    let mut state = SessionState::from_raw(Some(r#"{"name":"Alice"}"#));
    assert!(!should_redirect_unauth(&state));
    crate::state::session::logout(&mut state);
    assert!(should_redirect_unauth(&state));
}
