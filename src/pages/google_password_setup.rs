//! Password setup for accounts created through Google sign-in.
//!
//! The backend sends the browser here when a Google account has no local
//! password yet. On success the backend has set the session cookie, so we
//! re-check the session before heading home.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::api;
use crate::state::session::{self, SessionState};
use crate::util::{routes, storage};

#[component]
pub fn GooglePasswordSetupPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let guard_navigate = use_navigate();
    let query = use_query_map();

    let link_email = StoredValue::new(query.with_untracked(|q| q.get("email")).unwrap_or_default());
    let link_name = StoredValue::new(query.with_untracked(|q| q.get("name")).unwrap_or_default());

    // No email means the user landed here without the provider hand-off.
    Effect::new(move || {
        if link_email.get_value().is_empty() {
            guard_navigate(routes::LOGIN, NavigateOptions::default());
        }
    });

    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(String::new());

        if password.get_untracked().is_empty() || confirm_password.get_untracked().is_empty() {
            error.set("Please fill in all fields".to_owned());
            return;
        }
        if let Err(msg) = session::validate_new_password(
            &password.get_untracked(),
            &confirm_password.get_untracked(),
        ) {
            error.set(msg.to_owned());
            return;
        }
        if pending.get_untracked() {
            return;
        }

        pending.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let res = api::set_google_password(
                &link_email.get_value(),
                &password.get_untracked(),
                &confirm_password.get_untracked(),
            )
            .await;
            if res.success {
                storage::write_profile(&link_email.get_value(), &link_name.get_value());
                // The cookie was set during this exchange; adopt it.
                session::refresh(session).await;
                navigate(routes::HOME, NavigateOptions::default());
            } else {
                let _ = error.try_set(
                    res.message
                        .unwrap_or_else(|| "Failed to set password. Please try again.".to_owned()),
                );
            }
            let _ = pending.try_set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <img class="auth-card__logo" src="/logo.png" alt="SkillMint logo"/>
                <h2 class="auth-card__title">"Complete Your Profile"</h2>
                <p class="auth-card__subtitle">
                    {move || format!("Welcome, {}! Please set a password for your account.", link_name.get_value())}
                </p>

                <form class="auth-card__form" on:submit=submit>
                    <Show when=move || !error.get().is_empty()>
                        <div class="banner-error">{move || error.get()}</div>
                    </Show>

                    <label class="field">
                        <span class="field__label">"Email"</span>
                        <input type="email" prop:value=link_email.get_value() disabled/>
                    </label>

                    <label class="field">
                        <span class="field__label">"Password"</span>
                        <input
                            type="password"
                            prop:value=move || password.get()
                            placeholder="Enter your password"
                            required
                            disabled=move || pending.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="field">
                        <span class="field__label">"Confirm Password"</span>
                        <input
                            type="password"
                            prop:value=move || confirm_password.get()
                            placeholder="Confirm your password"
                            required
                            disabled=move || pending.get()
                            on:input=move |ev| confirm_password.set(event_target_value(&ev))
                        />
                    </label>

                    <button type="submit" class="btn btn--primary" disabled=move || pending.get()>
                        {move || if pending.get() { "Setting Password..." } else { "Continue" }}
                    </button>
                </form>

                <p class="auth-card__hint">
                    "This password will be used along with your email to sign in to your account."
                </p>
            </div>
        </div>
    }
}
