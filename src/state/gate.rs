//! Route gating decisions.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::state::session::SessionState;
use crate::util::routes;

/// What a navigation attempt should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Session check still in flight — render nothing so the wrong screen
    /// never flashes.
    Pending,
    /// Render the requested screen.
    Allow,
    /// Navigate to the fixed alternate destination instead.
    Redirect(&'static str),
}

/// Route categories that need gating.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteKind {
    /// Requires an authenticated session.
    Protected,
    /// Sign-in screen; bounces away when already authenticated.
    AuthOnly,
}

/// Pure gate decision for one navigation attempt.
pub fn decide(kind: RouteKind, session: &SessionState) -> GateDecision {
    if session.is_loading {
        return GateDecision::Pending;
    }
    match kind {
        RouteKind::Protected if session.is_authenticated => GateDecision::Allow,
        RouteKind::Protected => GateDecision::Redirect(routes::LOGIN),
        RouteKind::AuthOnly if session.is_authenticated => GateDecision::Redirect(routes::HOME),
        RouteKind::AuthOnly => GateDecision::Allow,
    }
}
