//! Landing route for the Google sign-in hand-off.
//!
//! The provider flow completes against the backend, which sends the browser
//! here with the profile fields in the query string. They are forwarded to
//! the session manager; where the account still needs a local password, the
//! user continues to the password-setup page instead of straight home.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::types::GoogleProfile;
use crate::state::session::{self, SessionState};
use crate::util::{routes, storage};

#[component]
pub fn GoogleCallbackPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let profile = query.with_untracked(|q| {
            let email = q.get("email")?;
            let google_id = q.get("googleId")?;
            Some(GoogleProfile {
                email,
                name: q.get("name").unwrap_or_default(),
                google_id,
                profile_picture: q.get("profilePicture"),
            })
        });

        let Some(profile) = profile else {
            navigate(routes::LOGIN, NavigateOptions::default());
            return;
        };

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = session::google_login(session, &profile).await;
            if outcome.needs_password {
                navigate(
                    &format!(
                        "{}?email={}&name={}",
                        routes::GOOGLE_SET_PASSWORD,
                        profile.email,
                        profile.name
                    ),
                    NavigateOptions::default(),
                );
            } else if outcome.success {
                storage::write_profile(&profile.email, &profile.name);
                navigate(routes::HOME, NavigateOptions::default());
            } else {
                let _ = error.try_set(Some(
                    outcome
                        .message
                        .unwrap_or_else(|| "Google login failed".to_owned()),
                ));
            }
        });
    });

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--notice">
                <Show
                    when=move || error.get().is_none()
                    fallback=move || {
                        view! {
                            <h2 class="auth-card__title">"Sign-in Failed"</h2>
                            <div class="banner-error">
                                {move || error.get().unwrap_or_default()}
                            </div>
                            <a class="btn btn--primary" href=routes::LOGIN>
                                "Back to Login"
                            </a>
                        }
                    }
                >
                    <h2 class="auth-card__title">"Signing you in..."</h2>
                    <p>"Finishing your Google sign-in."</p>
                </Show>
            </div>
        </div>
    }
}
