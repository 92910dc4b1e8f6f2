//! Top navigation bar for protected pages.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{self, SessionState};
use crate::util::{routes, storage};

/// Logo navigation plus logout. Logout also drops the locally saved resume
/// draft so the next account on this machine starts clean.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let nav_home = use_navigate();

    let on_logout = move |_| {
        storage::clear_resume_draft();
        session::logout(session);
        navigate(routes::LOGIN, NavigateOptions::default());
    };

    view! {
        <header class="navbar">
            <button
                class="navbar__logo"
                on:click=move |_| nav_home(routes::HOME, NavigateOptions::default())
            >
                <img src="/logo.png" alt="SkillMint logo"/>
            </button>
            <button class="btn btn--primary" on:click=on_logout>
                "Logout"
            </button>
        </header>
    }
}
