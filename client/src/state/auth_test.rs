use super::*;
use crate::util::storage::MemoryTokenStore;

#[test]
fn auth_state_default_has_no_token() {
    let state = AuthState::default();
    assert!(!state.has_token);
    assert!(!state.session_expired());
}

#[test]
fn from_store_reflects_stored_token() {
    assert!(AuthState::from_store(&MemoryTokenStore::with_token("t")).has_token);
    assert!(!AuthState::from_store(&MemoryTokenStore::default()).has_token);
}

#[test]
fn unauthorized_event_drops_token_and_records_status() {
    let mut state = AuthState { has_token: true, unauthorized_status: None };
    state.apply_unauthorized(&UnauthorizedEvent { status: 401 });
    assert!(!state.has_token);
    assert_eq!(state.unauthorized_status, Some(401));
    assert!(state.session_expired());
}

#[test]
fn login_clears_expired_session() {
    let mut state = AuthState::default();
    state.apply_unauthorized(&UnauthorizedEvent { status: 401 });
    state.apply_login();
    assert!(state.has_token);
    assert!(!state.session_expired());
}
