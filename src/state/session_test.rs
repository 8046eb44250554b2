use super::*;

// =============================================================
// SessionState defaults
// =============================================================

#[test]
fn session_state_default_is_anonymous() {
    let state = SessionState::default();
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
    assert_eq!(state.role(), None);
}

#[test]
fn session_state_default_not_loading() {
    let state = SessionState::default();
    assert!(!state.loading);
}

// =============================================================
// Role projection and clearing
// =============================================================

#[test]
fn role_reads_through_to_user() {
    let state = SessionState {
        user: Some(User {
            username: "ada".to_owned(),
            role: Some("doctor".to_owned()),
        }),
        loading: false,
    };
    assert!(state.is_authenticated());
    assert_eq!(state.role(), Some("doctor"));
}

#[test]
fn role_is_none_for_user_without_role() {
    let state = SessionState {
        user: Some(User { username: "ada".to_owned(), role: None }),
        loading: false,
    };
    assert!(state.is_authenticated());
    assert_eq!(state.role(), None);
}

#[test]
fn clear_drops_user_and_loading() {
    let mut state = SessionState {
        user: Some(User {
            username: "ada".to_owned(),
            role: Some("patient".to_owned()),
        }),
        loading: true,
    };
    state.clear();
    assert!(!state.is_authenticated());
    assert!(!state.loading);
}
