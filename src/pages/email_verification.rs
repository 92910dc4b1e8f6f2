//! Post-signup notice: check your inbox.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::util::routes;

#[component]
pub fn EmailVerificationPage() -> impl IntoView {
    let navigate = use_navigate();
    let query = use_query_map();

    let email = move || {
        query.with(|q| q.get("email")).unwrap_or_else(|| "your email address".to_owned())
    };

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--notice">
                <img class="auth-card__logo" src="/logo.png" alt="SkillMint logo"/>
                <h2 class="auth-card__title">"Verify Your Email"</h2>

                <p>"We've sent a verification link to:"</p>
                <p class="auth-card__highlight">{email}</p>
                <p>
                    "Please check your email and click the verification link to activate your account."
                </p>
                <div class="auth-card__note">
                    <strong>"Note:"</strong>
                    " The verification link will expire in 24 hours."
                </div>

                <button
                    class="btn btn--primary"
                    on:click=move |_| navigate(routes::LOGIN, NavigateOptions::default())
                >
                    "Back to Login"
                </button>
            </div>
        </div>
    }
}
