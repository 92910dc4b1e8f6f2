//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Redirect, Route, Router, Routes};

use crate::components::route_gate::{AuthOnly, Protected};
use crate::pages::code_editor::CodeEditorPage;
use crate::pages::email_confirmation::EmailConfirmationPage;
use crate::pages::email_verification::EmailVerificationPage;
use crate::pages::google_callback::GoogleCallbackPage;
use crate::pages::google_password_setup::GooglePasswordSetupPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::resume_builder::ResumeBuilderPage;
use crate::pages::resume_preview::ResumePreviewPage;
use crate::pages::set_password::SetPasswordPage;
use crate::pages::track_progress::TrackProgressPage;
use crate::state::resume::ResumeData;
use crate::state::session::{self, SessionState};
use crate::util::routes;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and resume contexts and sets up client-side
/// routing. The one-time session check runs from here, so every gate keeps
/// rendering `Pending` until the server has answered.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let resume = RwSignal::new(ResumeData::default());

    provide_context(session);
    provide_context(resume);

    // Resolve the session once; link-landing routes skip the server check.
    Effect::new(move || {
        let path = routes::current_path();
        leptos::task::spawn_local(async move {
            session::initialize(session, &path).await;
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/skillmint.css"/>
        <Title text="SkillMint"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=routes::LOGIN/> }/>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <AuthOnly><LoginPage/></AuthOnly> }
                />
                <Route
                    path=(StaticSegment("login"), StaticSegment("google-callback"))
                    view=GoogleCallbackPage
                />
                <Route path=StaticSegment("email-verification") view=EmailVerificationPage/>
                <Route path=StaticSegment("email-confirmation") view=EmailConfirmationPage/>
                <Route path=StaticSegment("set-password") view=SetPasswordPage/>
                <Route path=StaticSegment("google-set-password") view=GooglePasswordSetupPage/>
                <Route
                    path=StaticSegment("home")
                    view=|| view! { <Protected><HomePage/></Protected> }
                />
                <Route
                    path=StaticSegment("resume-builder")
                    view=|| view! { <Protected><ResumeBuilderPage/></Protected> }
                />
                <Route
                    path=StaticSegment("resume-preview")
                    view=|| view! { <Protected><ResumePreviewPage/></Protected> }
                />
                <Route
                    path=StaticSegment("code-editor")
                    view=|| view! { <Protected><CodeEditorPage/></Protected> }
                />
                <Route
                    path=StaticSegment("track-progress")
                    view=|| view! { <Protected><TrackProgressPage/></Protected> }
                />
            </Routes>
        </Router>
    }
}
