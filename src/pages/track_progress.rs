//! Learning roadmap page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::state::progress;

#[component]
pub fn TrackProgressPage() -> impl IntoView {
    let navigate = use_navigate();
    let steps = progress::roadmap();
    let percent = progress::completion_percent(&steps);

    view! {
        <div class="page">
            <Navbar/>
            <main class="progress">
                <header class="progress__header">
                    <h1>"Track Your Progress"</h1>
                    <p>"Follow this roadmap to land your dream IT job"</p>
                    <div class="progress__bar">
                        <div class="progress__fill" style:width=format!("{percent}%")></div>
                    </div>
                    <span class="progress__label">{format!("{percent:.0}% complete")}</span>
                </header>

                <ol class="progress__steps">
                    {steps
                        .into_iter()
                        .map(|step| {
                            let navigate = navigate.clone();
                            view! {
                                <li class={if step.completed {
                                    "progress__step progress__step--done"
                                } else {
                                    "progress__step"
                                }}>
                                    <span class="progress__icon">{step.icon}</span>
                                    <div class="progress__copy">
                                        <h3>{step.title}</h3>
                                        <p>{step.description}</p>
                                    </div>
                                    {step
                                        .action
                                        .map(|action| {
                                            let route = step.route;
                                            view! {
                                                <button
                                                    class="btn"
                                                    disabled=route.is_none()
                                                    title=route.map_or("Coming soon", |_| action)
                                                    on:click=move |_| {
                                                        if let Some(route) = route {
                                                            navigate(route, NavigateOptions::default());
                                                        }
                                                    }
                                                >
                                                    {action}
                                                </button>
                                            }
                                        })}
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ol>
            </main>
        </div>
    }
}
