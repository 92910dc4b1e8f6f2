//! Login page: sign-in and sign-up on one card.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::session::{self, SessionState};
use crate::util::routes;

/// Sign-in / sign-up card. Toggling modes clears every field so credentials
/// never leak between modes; submit is locked while a request is in flight.
/// A successful sign-in goes home; a successful sign-up goes to the
/// verification notice — the account is unusable until the emailed
/// confirmation completes.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let is_sign_up = RwSignal::new(false);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    // Set by the confirmation page after a successful activation.
    let just_verified =
        move || query.with(|q| q.get("verified").as_deref() == Some("true"));

    let toggle_mode = move |_| {
        is_sign_up.update(|v| *v = !*v);
        error.set(String::new());
        name.set(String::new());
        email.set(String::new());
        password.set(String::new());
        confirm_password.set(String::new());
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        error.set(String::new());

        if is_sign_up.get_untracked() {
            if let Err(msg) = session::validate_new_password(
                &password.get_untracked(),
                &confirm_password.get_untracked(),
            ) {
                error.set(msg.to_owned());
                return;
            }
        }

        pending.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            if is_sign_up.get_untracked() {
                let outcome = session::signup(
                    &name.get_untracked(),
                    &email.get_untracked(),
                    &password.get_untracked(),
                )
                .await;
                if outcome.success {
                    navigate(
                        &format!(
                            "{}?email={}",
                            routes::EMAIL_VERIFICATION,
                            email.get_untracked()
                        ),
                        NavigateOptions::default(),
                    );
                } else {
                    let _ = error.try_set(
                        outcome
                            .message
                            .unwrap_or_else(|| "Signup failed. Please try again.".to_owned()),
                    );
                }
            } else {
                let outcome =
                    session::login(session, &email.get_untracked(), &password.get_untracked())
                        .await;
                if outcome.success {
                    navigate(routes::HOME, NavigateOptions::default());
                } else {
                    let _ = error.try_set(
                        outcome
                            .message
                            .unwrap_or_else(|| "Login failed. Please try again.".to_owned()),
                    );
                }
            }
            let _ = pending.try_set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <img class="auth-card__logo" src="/logo.png" alt="SkillMint logo"/>
                <h2 class="auth-card__title">
                    {move || if is_sign_up.get() { "Sign Up" } else { "Sign In" }}
                </h2>

                <Show when=just_verified>
                    <div class="banner-success">
                        "Your account is verified. You can sign in now."
                    </div>
                </Show>

                <form class="auth-card__form" on:submit=submit>
                    <Show when=move || !error.get().is_empty()>
                        <div class="banner-error">{move || error.get()}</div>
                    </Show>

                    <Show when=move || is_sign_up.get()>
                        <label class="field">
                            <span class="field__label">"Name"</span>
                            <input
                                type="text"
                                prop:value=move || name.get()
                                placeholder="Enter your name"
                                required
                                disabled=move || pending.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </label>
                    </Show>

                    <label class="field">
                        <span class="field__label">"Email"</span>
                        <input
                            type="email"
                            prop:value=move || email.get()
                            placeholder="Enter your email"
                            required
                            disabled=move || pending.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
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

                    <Show when=move || is_sign_up.get()>
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
                    </Show>

                    <button type="submit" class="btn btn--primary" disabled=move || pending.get()>
                        {move || match (pending.get(), is_sign_up.get()) {
                            (true, true) => "Creating account...",
                            (true, false) => "Signing in...",
                            (false, true) => "Sign Up",
                            (false, false) => "Sign In",
                        }}
                    </button>
                </form>

                <a class="btn btn--google" href="/auth/google">
                    "Continue with Google"
                </a>

                <footer class="auth-card__footer">
                    <p>
                        {move || {
                            if is_sign_up.get() {
                                "Already have an account?"
                            } else {
                                "Don't have an account?"
                            }
                        }}
                        <button
                            type="button"
                            class="auth-card__toggle"
                            on:click=toggle_mode
                            disabled=move || pending.get()
                        >
                            {move || if is_sign_up.get() { "Sign In" } else { "Sign Up" }}
                        </button>
                    </p>
                </footer>
            </div>
        </div>
    }
}
