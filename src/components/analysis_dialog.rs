//! Modal dialog for backend AI resume analysis.

use leptos::prelude::*;

use crate::net::services;
use crate::net::types::AnalysisResult;
use crate::state::resume::ResumeData;
use crate::state::session::SessionState;

/// Experience levels offered to the analyzer, as `(key, label)`.
const EXPERIENCE_LEVELS: &[(&str, &str)] = &[
    ("entry", "Entry Level (0-2 years)"),
    ("mid", "Mid Level (2-5 years)"),
    ("senior", "Senior Level (5-10 years)"),
    ("lead", "Lead / Principal (10+ years)"),
];

/// Two-pane dialog: target role on the left, scorecard on the right once
/// the backend has answered.
#[component]
pub fn AnalysisDialog(open: RwSignal<bool>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let resume = expect_context::<RwSignal<ResumeData>>();

    let job_role = RwSignal::new(String::new());
    let experience_level = RwSignal::new(String::new());
    let analyzing = RwSignal::new(false);
    let result = RwSignal::new(None::<AnalysisResult>);
    let error = RwSignal::new(None::<String>);

    let reset = move |_| {
        job_role.set(String::new());
        experience_level.set(String::new());
        result.set(None);
        error.set(None);
    };

    let analyze = move |_| {
        if job_role.get_untracked().trim().is_empty() || experience_level.get_untracked().is_empty()
        {
            error.set(Some("Please fill in all fields".to_owned()));
            return;
        }
        if analyzing.get_untracked() {
            return;
        }
        analyzing.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            let outcome = services::analyze_resume(
                session,
                &resume.get_untracked(),
                &job_role.get_untracked(),
                &experience_level.get_untracked(),
            )
            .await;
            match outcome {
                Ok(analysis) => {
                    let _ = result.try_set(Some(analysis));
                }
                Err(err) => {
                    let _ = error.try_set(Some(err));
                }
            }
            let _ = analyzing.try_set(false);
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| open.set(false)>
                <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                    <header class="dialog__header">
                        <h2>"AI Analysis"</h2>
                        <button class="dialog__close" on:click=move |_| open.set(false)>
                            "×"
                        </button>
                    </header>

                    <Show when=move || error.get().is_some()>
                        <div class="banner-error">{move || error.get().unwrap_or_default()}</div>
                    </Show>

                    <div class="dialog__body">
                        <div class="analysis__form">
                            <label class="field">
                                <span class="field__label">"Target Job Role *"</span>
                                <input
                                    type="text"
                                    prop:value=move || job_role.get()
                                    placeholder="e.g., Senior Software Engineer"
                                    on:input=move |ev| job_role.set(event_target_value(&ev))
                                    disabled=move || analyzing.get() || result.get().is_some()
                                />
                            </label>
                            <label class="field">
                                <span class="field__label">"Experience Level *"</span>
                                <select
                                    prop:value=move || experience_level.get()
                                    on:change=move |ev| experience_level.set(event_target_value(&ev))
                                    disabled=move || analyzing.get() || result.get().is_some()
                                >
                                    <option value="">"Select level"</option>
                                    {EXPERIENCE_LEVELS
                                        .iter()
                                        .map(|(key, label)| view! { <option value=*key>{*label}</option> })
                                        .collect::<Vec<_>>()}
                                </select>
                            </label>
                        </div>

                        {move || {
                            result
                                .get()
                                .map(|analysis| {
                                    view! {
                                        <div class="analysis__result">
                                            <div class="analysis__scores">
                                                <div class="analysis__score">
                                                    <strong>{format!("{:.0}", analysis.score)}</strong>
                                                    <span>"Score"</span>
                                                </div>
                                                <div class="analysis__score">
                                                    <strong>
                                                        {format!("{:.0}%", analysis.match_percentage)}
                                                    </strong>
                                                    <span>"Role match"</span>
                                                </div>
                                            </div>
                                            <AnalysisList title="Strengths" items=analysis.strengths/>
                                            <AnalysisList title="Weaknesses" items=analysis.weaknesses/>
                                            <AnalysisList title="Suggestions" items=analysis.suggestions/>
                                            <p class="analysis__advice">{analysis.advice}</p>
                                        </div>
                                    }
                                })
                        }}
                    </div>

                    <div class="dialog__actions">
                        <button class="btn" on:click=reset>
                            "Reset"
                        </button>
                        <button
                            class="btn btn--primary"
                            on:click=analyze
                            disabled=move || analyzing.get()
                        >
                            {move || if analyzing.get() { "Analyzing..." } else { "Analyze Resume" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// One titled bullet list in the scorecard; hidden when empty.
#[component]
fn AnalysisList(title: &'static str, items: Vec<String>) -> impl IntoView {
    (!items.is_empty()).then(|| {
        view! {
            <div class="analysis__list">
                <h3>{title}</h3>
                <ul>{items.into_iter().map(|item| view! { <li>{item}</li> }).collect::<Vec<_>>()}</ul>
            </div>
        }
    })
}
