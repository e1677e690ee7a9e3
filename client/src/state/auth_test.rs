use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_is_checking() {
    let state = AuthState::default();
    assert_eq!(state.status, LoginStatus::Checking);
    assert_eq!(state.status.screen(), Screen::Checking);
}

// =============================================================
// LoginStatus
// =============================================================

#[test]
fn liveness_result_selects_status() {
    assert_eq!(LoginStatus::from_liveness(true), LoginStatus::LoggedIn);
    assert_eq!(LoginStatus::from_liveness(false), LoginStatus::LoggedOut);
}

#[test]
fn logged_in_shows_home_and_logged_out_shows_login() {
    assert_eq!(LoginStatus::LoggedIn.screen(), Screen::Home);
    assert_eq!(LoginStatus::LoggedOut.screen(), Screen::Login);
}
