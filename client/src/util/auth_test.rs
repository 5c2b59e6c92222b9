use super::*;
use crate::state::auth::SignedInUser;

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { user: None, loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState {
        user: Some(SignedInUser { username: "testf".to_owned(), profile: None }),
        loading: false,
    };
    assert!(!should_redirect_unauth(&state));
}
