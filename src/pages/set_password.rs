//! Set a password from an emailed verification link.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::net::api;
use crate::state::session;
use crate::util::routes;

#[component]
pub fn SetPasswordPage() -> impl IntoView {
    let query = use_query_map();

    let link_email = StoredValue::new(query.with_untracked(|q| q.get("email")).unwrap_or_default());

    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let done = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(String::new());

        if let Err(msg) = session::validate_new_password(
            &password.get_untracked(),
            &confirm_password.get_untracked(),
        ) {
            error.set(msg.to_owned());
            return;
        }
        if link_email.get_value().is_empty() {
            error.set("Email is missing. Please use the link from your email.".to_owned());
            return;
        }
        if pending.get_untracked() {
            return;
        }

        pending.set(true);
        leptos::task::spawn_local(async move {
            let res = api::set_password(
                &link_email.get_value(),
                &password.get_untracked(),
                &confirm_password.get_untracked(),
            )
            .await;
            if res.success {
                let _ = done.try_set(true);
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
            <Show
                when=move || !done.get()
                fallback=move || {
                    view! {
                        <div class="auth-card auth-card--notice">
                            <h2 class="auth-card__title">"Account Verified!"</h2>
                            <p>"Your password is set and your account is ready."</p>
                            <a class="btn btn--primary" href=routes::LOGIN>
                                "Go to Login"
                            </a>
                        </div>
                    }
                }
            >
                <div class="auth-card">
                    <img class="auth-card__logo" src="/logo.png" alt="SkillMint logo"/>
                    <h2 class="auth-card__title">"Set Your Password"</h2>
                    <p class="auth-card__subtitle">
                        "Complete your registration by setting a password"
                    </p>

                    <Show when=move || link_email.get_value().is_empty()>
                        <div class="banner-error">"Invalid verification link."</div>
                    </Show>

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
                                minlength="6"
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
                                minlength="6"
                                disabled=move || pending.get()
                                on:input=move |ev| confirm_password.set(event_target_value(&ev))
                            />
                        </label>

                        <button
                            type="submit"
                            class="btn btn--primary"
                            disabled=move || pending.get()
                        >
                            {move || {
                                if pending.get() {
                                    "Verifying..."
                                } else {
                                    "Set Password & Activate Account"
                                }
                            }}
                        </button>
                    </form>

                    <a class="auth-card__toggle" href=routes::LOGIN>
                        "Back to Login"
                    </a>
                </div>
            </Show>
        </div>
    }
}
