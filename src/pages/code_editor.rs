//! Code editor backed by the backend format/lint/diff services.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::net::services;
use crate::state::editor::{EditorState, LANGUAGES, THEMES};
use crate::state::session::SessionState;

#[component]
pub fn CodeEditorPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let editor = RwSignal::new(EditorState::default());
    let formatting = RwSignal::new(false);
    let linting = RwSignal::new(false);
    let status = RwSignal::new(None::<String>);

    let on_format = move |_| {
        let code = editor.with_untracked(|e| e.code.clone());
        if code.trim().is_empty() || formatting.get_untracked() {
            return;
        }
        formatting.set(true);
        status.set(None);
        leptos::task::spawn_local(async move {
            let language = editor.with_untracked(|e| e.language.clone());
            match services::format_code(session, &code, &language).await {
                Ok(formatted) => {
                    let _ = editor.try_update(|e| e.code = formatted);
                }
                Err(err) => {
                    let _ = status.try_set(Some(format!("Failed to format code: {err}")));
                }
            }
            let _ = formatting.try_set(false);
        });
    };

    let on_lint = move |_| {
        let code = editor.with_untracked(|e| e.code.clone());
        if code.trim().is_empty() || linting.get_untracked() {
            return;
        }
        linting.set(true);
        status.set(None);
        leptos::task::spawn_local(async move {
            let language = editor.with_untracked(|e| e.language.clone());
            match services::lint_code(session, &code, &language).await {
                Ok(problems) => {
                    let _ = editor.try_update(|e| e.lint_errors = problems);
                }
                Err(err) => {
                    let _ = status.try_set(Some(format!("Failed to lint code: {err}")));
                }
            }
            let _ = linting.try_set(false);
        });
    };

    let on_save_original = move |_| {
        editor.update(EditorState::save_as_original);
        status.set(Some("Current code saved as original for comparison".to_owned()));
    };

    let on_diff = move |_| {
        if !editor.with_untracked(EditorState::can_diff) {
            status.set(Some(
                "Save the original code first by clicking \"Save as Original\"".to_owned(),
            ));
            return;
        }
        status.set(None);
        leptos::task::spawn_local(async move {
            let (original, modified) =
                editor.with_untracked(|e| (e.original_code.clone(), e.code.clone()));
            match services::diff_code(session, &original, &modified).await {
                Ok(diff) => {
                    let _ = editor.try_update(|e| e.apply_diff(diff));
                }
                Err(err) => {
                    let _ = status.try_set(Some(format!("Failed to check differences: {err}")));
                }
            }
        });
    };

    let on_clear = move |_| {
        editor.update(EditorState::reset);
        status.set(None);
    };

    view! {
        <div class="page">
            <Navbar/>
            <main class="editor">
                <header class="editor__toolbar">
                    <select
                        prop:value=move || editor.with(|e| e.language.clone())
                        on:change=move |ev| {
                            editor.update(|e| e.set_language(&event_target_value(&ev)));
                        }
                    >
                        {LANGUAGES
                            .iter()
                            .map(|(key, label)| view! { <option value=*key>{*label}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <select
                        prop:value=move || editor.with(|e| e.theme.clone())
                        on:change=move |ev| {
                            editor.update(|e| e.theme = event_target_value(&ev));
                        }
                    >
                        {THEMES
                            .iter()
                            .map(|(key, label)| view! { <option value=*key>{*label}</option> })
                            .collect::<Vec<_>>()}
                    </select>

                    <div class="editor__actions">
                        <button class="btn" on:click=on_format disabled=move || formatting.get()>
                            {move || if formatting.get() { "Formatting..." } else { "Format" }}
                        </button>
                        <button class="btn" on:click=on_lint disabled=move || linting.get()>
                            {move || if linting.get() { "Linting..." } else { "Lint" }}
                        </button>
                        <button class="btn" on:click=on_save_original>
                            "Save as Original"
                        </button>
                        <button class="btn" on:click=on_diff>
                            "Check Diff"
                        </button>
                        <button class="btn btn--danger" on:click=on_clear>
                            "Clear"
                        </button>
                    </div>
                </header>

                <Show when=move || status.get().is_some()>
                    <div class="editor__status">{move || status.get().unwrap_or_default()}</div>
                </Show>

                <textarea
                    class=move || format!("editor__buffer editor__buffer--{}", editor.with(|e| e.theme.clone()))
                    spellcheck="false"
                    prop:value=move || editor.with(|e| e.code.clone())
                    on:input=move |ev| editor.update(|e| e.code = event_target_value(&ev))
                ></textarea>

                <Show when=move || editor.with(|e| !e.lint_errors.is_empty())>
                    <section class="editor__lint">
                        <h2>"Lint Results"</h2>
                        <ul>
                            {move || {
                                editor
                                    .with(|e| e.lint_errors.clone())
                                    .into_iter()
                                    .map(|problem| view! { <li>{problem}</li> })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </section>
                </Show>

                <Show when=move || editor.with(|e| e.show_diff)>
                    <section class="editor__diff">
                        <header class="editor__diff-header">
                            <h2>"Differences"</h2>
                            <button
                                class="btn"
                                on:click=move |_| editor.update(|e| e.show_diff = false)
                            >
                                "Hide"
                            </button>
                        </header>
                        {move || {
                            editor
                                .with(|e| e.diff.clone())
                                .map(|diff| {
                                    view! {
                                        <p class="editor__diff-summary">
                                            <span class="editor__diff-add">
                                                {format!("+{}", diff.additions)}
                                            </span>
                                            <span class="editor__diff-del">
                                                {format!("-{}", diff.deletions)}
                                            </span>
                                        </p>
                                        <ul>
                                            {diff
                                                .changes
                                                .into_iter()
                                                .map(|change| view! { <li>{change}</li> })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    }
                                })
                        }}
                    </section>
                </Show>
            </main>
        </div>
    }
}
