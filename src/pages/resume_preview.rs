//! Backend-rendered preview of the resume.
//!
//! The backend owns the actual layout: we POST the resume document and
//! render the HTML it returns.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::services;
use crate::state::resume::ResumeData;
use crate::state::session::SessionState;
use crate::util::routes;

#[component]
pub fn ResumePreviewPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let resume = expect_context::<RwSignal<ResumeData>>();
    let navigate = use_navigate();
    let nav_back = use_navigate();

    let html = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let generate = move || {
        if loading.get_untracked() {
            return;
        }
        loading.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            match services::resume_preview(session, &resume.get_untracked()).await {
                Ok(markup) => {
                    let _ = html.try_set(markup);
                }
                Err(err) => {
                    let _ = error.try_set(Some(format!("Failed to generate preview: {err}")));
                }
            }
            let _ = loading.try_set(false);
        });
    };

    // An untouched draft means the user landed here directly; send them back
    // to the builder instead of previewing an empty document.
    Effect::new(move || {
        if resume.get_untracked() == ResumeData::default() {
            navigate(routes::RESUME_BUILDER, NavigateOptions::default());
        } else {
            generate();
        }
    });

    view! {
        <div class="page">
            <header class="preview__toolbar">
                <button
                    class="btn"
                    on:click=move |_| nav_back(routes::RESUME_BUILDER, NavigateOptions::default())
                >
                    "← Back to Editor"
                </button>
                <h1>"Resume Preview"</h1>
                <button class="btn btn--primary" on:click=move |_| generate() disabled=move || loading.get()>
                    {move || if loading.get() { "Generating..." } else { "Regenerate" }}
                </button>
            </header>

            <main class="preview">
                <Show when=move || error.get().is_some()>
                    <div class="banner-error">{move || error.get().unwrap_or_default()}</div>
                </Show>

                <Show
                    when=move || !loading.get() || !html.get().is_empty()
                    fallback=|| view! { <p class="preview__loading">"Generating preview..."</p> }
                >
                    <div class="preview__sheet" inner_html=move || html.get()></div>
                </Show>
            </main>
        </div>
    }
}
