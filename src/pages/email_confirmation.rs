//! Account activation from an emailed confirmation link.
//!
//! The link carries `email` and `token` (sometimes wrapped in a
//! `continueUrl`); the user re-enters the signup password to prove the
//! mailbox and the credentials belong together.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::api;
use crate::util::{links, routes};

#[component]
pub fn EmailConfirmationPage() -> impl IntoView {
    let navigate = use_navigate();
    let nav_back = use_navigate();
    let query = use_query_map();

    let (link_email, link_token) = query.with_untracked(|q| {
        links::confirmation_params(
            q.get("continueUrl").as_deref(),
            q.get("email").as_deref(),
            q.get("token").as_deref(),
        )
    });
    let link_email = StoredValue::new(link_email.unwrap_or_default());
    let link_token = StoredValue::new(link_token.unwrap_or_default());

    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(String::new());

        if password.get_untracked().is_empty() {
            error.set("Please enter your password.".to_owned());
            return;
        }
        if link_email.get_value().is_empty() || link_token.get_value().is_empty() {
            error.set("Invalid confirmation link.".to_owned());
            return;
        }
        if pending.get_untracked() {
            return;
        }

        pending.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let res = api::confirm_email(
                &link_email.get_value(),
                &link_token.get_value(),
                &password.get_untracked(),
            )
            .await;
            if res.success {
                navigate(
                    &format!("{}?verified=true", routes::LOGIN),
                    NavigateOptions::default(),
                );
            } else {
                let _ = error.try_set(res.message.unwrap_or_else(|| {
                    "Confirmation failed. Please check your password.".to_owned()
                }));
            }
            let _ = pending.try_set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <img class="auth-card__logo" src="/logo.png" alt="SkillMint logo"/>
                <h2 class="auth-card__title">"Confirm Your Email"</h2>
                <p class="auth-card__subtitle">"Enter your password to activate your account"</p>

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
                        <span class="field__hint">"Enter the password you used during signup"</span>
                    </label>

                    <button type="submit" class="btn btn--primary" disabled=move || pending.get()>
                        {move || {
                            if pending.get() { "Confirming..." } else { "Confirm & Activate Account" }
                        }}
                    </button>
                </form>

                <button
                    class="auth-card__toggle"
                    on:click=move |_| nav_back(routes::LOGIN, NavigateOptions::default())
                >
                    "Back to Login"
                </button>
            </div>
        </div>
    }
}
