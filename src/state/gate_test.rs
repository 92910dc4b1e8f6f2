use super::*;

fn loading() -> SessionState {
    SessionState::default()
}

fn settled(authenticated: bool) -> SessionState {
    let mut state = SessionState::default();
    state.settle(authenticated);
    state
}

#[test]
fn everything_is_pending_while_loading() {
    assert_eq!(decide(RouteKind::Protected, &loading()), GateDecision::Pending);
    assert_eq!(decide(RouteKind::AuthOnly, &loading()), GateDecision::Pending);

    // A stale authenticated flag must not leak through before settle.
    let mut state = SessionState::default();
    state.authenticate(Some("jwt".to_owned()));
    assert!(state.is_loading);
    assert_eq!(decide(RouteKind::Protected, &state), GateDecision::Pending);
    assert_eq!(decide(RouteKind::AuthOnly, &state), GateDecision::Pending);
}

#[test]
fn protected_allows_authenticated_sessions() {
    assert_eq!(decide(RouteKind::Protected, &settled(true)), GateDecision::Allow);
}

#[test]
fn protected_redirects_to_login_when_logged_out() {
    assert_eq!(
        decide(RouteKind::Protected, &settled(false)),
        GateDecision::Redirect(routes::LOGIN)
    );
}

#[test]
fn auth_only_redirects_home_when_already_logged_in() {
    assert_eq!(
        decide(RouteKind::AuthOnly, &settled(true)),
        GateDecision::Redirect(routes::HOME)
    );
}

#[test]
fn auth_only_allows_logged_out_sessions() {
    assert_eq!(decide(RouteKind::AuthOnly, &settled(false)), GateDecision::Allow);
}

#[test]
fn login_then_logout_flips_the_protected_decision() {
    let mut state = settled(false);
    state.authenticate(None);
    assert_eq!(decide(RouteKind::Protected, &state), GateDecision::Allow);

    state.clear();
    assert_eq!(
        decide(RouteKind::Protected, &state),
        GateDecision::Redirect(routes::LOGIN)
    );
}
