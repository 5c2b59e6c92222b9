use super::*;

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert_eq!(state.username(), None);
}

#[test]
fn auth_state_default_not_loading() {
    let state = AuthState::default();
    assert!(!state.loading);
}

#[test]
fn restoring_state_is_loading() {
    let state = AuthState::restoring();
    assert!(state.loading);
    assert!(state.user.is_none());
}

#[test]
fn username_reads_signed_in_user() {
    let state = AuthState {
        user: Some(SignedInUser { username: "testp".to_owned(), profile: None }),
        loading: false,
    };
    assert_eq!(state.username(), Some("testp"));
}
