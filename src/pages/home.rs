//! Home page shown after sign-in.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::util::routes;

/// Feature cards for the landing grid, as `(icon, title, blurb, route)`.
const FEATURES: &[(&str, &str, &str, Option<&str>)] = &[
    (
        "📚",
        "Learn Skills",
        "Access a wide range of courses and tutorials to enhance your skills.",
        None,
    ),
    (
        "🎯",
        "Track Progress",
        "Monitor your learning journey and achieve your goals.",
        Some(routes::TRACK_PROGRESS),
    ),
    (
        "📄",
        "Build Resume",
        "Create a professional resume highlighting your skills and projects.",
        Some(routes::RESUME_BUILDER),
    ),
    (
        "💻",
        "Practice Coding",
        "Sharpen your skills in the code editor with instant feedback.",
        Some(routes::CODE_EDITOR),
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <Navbar/>
            <main class="home">
                <div class="home__hero">
                    <h2>"Welcome to SkillMint! 🎉"</h2>
                    <p>"You have successfully logged in to your account."</p>
                </div>

                <div class="home__grid">
                    {FEATURES
                        .iter()
                        .map(|(icon, title, blurb, route)| {
                            let body = view! {
                                <div class="card__icon">{*icon}</div>
                                <h3>{*title}</h3>
                                <p>{*blurb}</p>
                            };
                            match route {
                                Some(href) => {
                                    view! { <a class="card card--link" href=*href>{body}</a> }
                                        .into_any()
                                }
                                None => view! { <div class="card">{body}</div> }.into_any(),
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </main>
        </div>
    }
}
