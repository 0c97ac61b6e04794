use super::*;

#[test]
fn default_state_is_loading_and_signed_out() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.signed_in());
    assert_eq!(state.email(), None);
}

#[test]
fn signed_in_reports_the_user_email() {
    let state = AuthState {
        user: Some(User { id: "u-1".to_owned(), email: "me@example.com".to_owned() }),
        loading: false,
    };
    assert!(state.signed_in());
    assert_eq!(state.email(), Some("me@example.com"));
}
