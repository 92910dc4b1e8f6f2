//! Gate components around the pure `state::gate` decision.
//!
//! Both gates render nothing while the session check is in flight, so the
//! wrong screen never flashes before the server has answered.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::components::session_watchdog::SessionWatchdog;
use crate::state::gate::{self, GateDecision, RouteKind};
use crate::state::session::SessionState;

/// Wrap a screen that requires an authenticated session. Allowed screens
/// also get the expiry watchdog mounted for as long as they are shown.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    move || match gate::decide(RouteKind::Protected, &session.get()) {
        GateDecision::Pending => ().into_any(),
        GateDecision::Allow => view! {
            <SessionWatchdog/>
            {children()}
        }
        .into_any(),
        GateDecision::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
    }
}

/// Wrap the sign-in screen; bounces home when already authenticated.
#[component]
pub fn AuthOnly(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    move || match gate::decide(RouteKind::AuthOnly, &session.get()) {
        GateDecision::Pending => ().into_any(),
        GateDecision::Allow => children().into_any(),
        GateDecision::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
    }
}
