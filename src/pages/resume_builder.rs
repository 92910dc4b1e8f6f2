//! Resume builder form.
//!
//! Edits the shared `ResumeData` signal section by section. Entry lists are
//! keyed by client-side ids; inputs write straight back into the signal so
//! preview and analysis always see the current document.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::analysis_dialog::AnalysisDialog;
use crate::components::navbar::Navbar;
use crate::state::resume::{self, ResumeData, Template};
use crate::util::routes;

#[component]
pub fn ResumeBuilderPage() -> impl IntoView {
    let resume = expect_context::<RwSignal<ResumeData>>();
    let template = RwSignal::new(Template::default());
    let show_analysis = RwSignal::new(false);
    let navigate = use_navigate();

    // Restore a saved draft once on mount.
    Effect::new(move || {
        if let Some((draft, saved_template)) = resume::load_draft() {
            resume.set(draft);
            template.set(saved_template);
        }
    });

    let on_save = move |_| resume::save_draft(&resume.get_untracked(), template.get_untracked());
    let on_preview = move |_| {
        resume::save_draft(&resume.get_untracked(), template.get_untracked());
        navigate(routes::RESUME_PREVIEW, NavigateOptions::default());
    };

    view! {
        <div class="page">
            <Navbar/>
            <main class="builder">
                <header class="builder__toolbar">
                    <h1>"Resume Builder"</h1>
                    <div class="builder__actions">
                        <select
                            class="builder__template"
                            prop:value=move || template.get().as_str()
                            on:change=move |ev| {
                                template.set(Template::from_key(&event_target_value(&ev)));
                            }
                        >
                            {Template::ALL
                                .iter()
                                .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                        <button class="btn" on:click=on_save>
                            "Save Draft"
                        </button>
                        <button class="btn" on:click=move |_| show_analysis.set(true)>
                            "AI Analysis"
                        </button>
                        <button class="btn btn--primary" on:click=on_preview>
                            "Preview"
                        </button>
                    </div>
                </header>

                <PersonalInfoSection resume=resume/>
                <SummarySection resume=resume/>
                <ExperienceSection resume=resume/>
                <EducationSection resume=resume/>
                <ProjectsSection resume=resume/>
                <SkillsSection resume=resume/>
                <CertificationsSection resume=resume/>
            </main>
            <AnalysisDialog open=show_analysis/>
        </div>
    }
}

#[component]
fn PersonalInfoSection(resume: RwSignal<ResumeData>) -> impl IntoView {
    view! {
        <section class="builder__section">
            <h2>"Personal Information"</h2>
            <div class="builder__grid">
                <label class="field">
                    <span class="field__label">"Full Name"</span>
                    <input
                        type="text"
                        prop:value=move || resume.with(|r| r.personal_info.name.clone())
                        on:input=move |ev| {
                            resume.update(|r| r.personal_info.name = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Email"</span>
                    <input
                        type="email"
                        prop:value=move || resume.with(|r| r.personal_info.email.clone())
                        on:input=move |ev| {
                            resume.update(|r| r.personal_info.email = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Phone"</span>
                    <input
                        type="tel"
                        prop:value=move || resume.with(|r| r.personal_info.phone.clone())
                        on:input=move |ev| {
                            resume.update(|r| r.personal_info.phone = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Location"</span>
                    <input
                        type="text"
                        prop:value=move || resume.with(|r| r.personal_info.location.clone())
                        on:input=move |ev| {
                            resume.update(|r| r.personal_info.location = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="field">
                    <span class="field__label">"LinkedIn"</span>
                    <input
                        type="url"
                        prop:value=move || resume.with(|r| r.personal_info.linkedin.clone())
                        on:input=move |ev| {
                            resume.update(|r| r.personal_info.linkedin = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Portfolio"</span>
                    <input
                        type="url"
                        prop:value=move || resume.with(|r| r.personal_info.portfolio.clone())
                        on:input=move |ev| {
                            resume.update(|r| r.personal_info.portfolio = event_target_value(&ev));
                        }
                    />
                </label>
            </div>
        </section>
    }
}

#[component]
fn SummarySection(resume: RwSignal<ResumeData>) -> impl IntoView {
    view! {
        <section class="builder__section">
            <h2>"Summary"</h2>
            <textarea
                class="builder__summary"
                placeholder="A short professional summary"
                prop:value=move || resume.with(|r| r.summary.clone())
                on:input=move |ev| resume.update(|r| r.summary = event_target_value(&ev))
            ></textarea>
        </section>
    }
}

#[component]
fn ExperienceSection(resume: RwSignal<ResumeData>) -> impl IntoView {
    view! {
        <section class="builder__section">
            <header class="builder__section-header">
                <h2>"Experience"</h2>
                <button class="btn" on:click=move |_| resume.update(ResumeData::add_experience)>
                    "+ Add"
                </button>
            </header>
            <For
                each=move || resume.get().experience
                key=|entry| entry.id.clone()
                children=move |entry| {
                    let id = StoredValue::new(entry.id.clone());
                    view! {
                        <div class="builder__entry">
                            <input
                                type="text"
                                placeholder="Job title"
                                prop:value=entry.title
                                on:input=move |ev| {
                                    resume
                                        .update(|r| {
                                            if let Some(e) = r.experience.iter_mut().find(|e| e.id == id.get_value())
                                            {
                                                e.title = event_target_value(&ev);
                                            }
                                        });
                                }
                            />
                            <input
                                type="text"
                                placeholder="Company"
                                prop:value=entry.company
                                on:input=move |ev| {
                                    resume
                                        .update(|r| {
                                            if let Some(e) = r.experience.iter_mut().find(|e| e.id == id.get_value())
                                            {
                                                e.company = event_target_value(&ev);
                                            }
                                        });
                                }
                            />
                            <input
                                type="text"
                                placeholder="Duration (e.g. 2021 – 2024)"
                                prop:value=entry.duration
                                on:input=move |ev| {
                                    resume
                                        .update(|r| {
                                            if let Some(e) = r.experience.iter_mut().find(|e| e.id == id.get_value())
                                            {
                                                e.duration = event_target_value(&ev);
                                            }
                                        });
                                }
                            />
                            <textarea
                                placeholder="What did you do there?"
                                prop:value=entry.description
                                on:input=move |ev| {
                                    resume
                                        .update(|r| {
                                            if let Some(e) = r.experience.iter_mut().find(|e| e.id == id.get_value())
                                            {
                                                e.description = event_target_value(&ev);
                                            }
                                        });
                                }
                            ></textarea>
                            <button
                                class="btn btn--danger"
                                on:click=move |_| resume.update(|r| r.remove_experience(&id.get_value()))
                            >
                                "Remove"
                            </button>
                        </div>
                    }
                }
            />
        </section>
    }
}

#[component]
fn EducationSection(resume: RwSignal<ResumeData>) -> impl IntoView {
    view! {
        <section class="builder__section">
            <header class="builder__section-header">
                <h2>"Education"</h2>
                <button class="btn" on:click=move |_| resume.update(ResumeData::add_education)>
                    "+ Add"
                </button>
            </header>
            <For
                each=move || resume.get().education
                key=|entry| entry.id.clone()
                children=move |entry| {
                    let id = StoredValue::new(entry.id.clone());
                    view! {
                        <div class="builder__entry">
                            <input
                                type="text"
                                placeholder="Degree"
                                prop:value=entry.degree
                                on:input=move |ev| {
                                    resume
                                        .update(|r| {
                                            if let Some(e) = r.education.iter_mut().find(|e| e.id == id.get_value())
                                            {
                                                e.degree = event_target_value(&ev);
                                            }
                                        });
                                }
                            />
                            <input
                                type="text"
                                placeholder="Institution"
                                prop:value=entry.institution
                                on:input=move |ev| {
                                    resume
                                        .update(|r| {
                                            if let Some(e) = r.education.iter_mut().find(|e| e.id == id.get_value())
                                            {
                                                e.institution = event_target_value(&ev);
                                            }
                                        });
                                }
                            />
                            <input
                                type="text"
                                placeholder="Year"
                                prop:value=entry.year
                                on:input=move |ev| {
                                    resume
                                        .update(|r| {
                                            if let Some(e) = r.education.iter_mut().find(|e| e.id == id.get_value())
                                            {
                                                e.year = event_target_value(&ev);
                                            }
                                        });
                                }
                            />
                            <input
                                type="text"
                                placeholder="GPA (optional)"
                                prop:value=entry.gpa
                                on:input=move |ev| {
                                    resume
                                        .update(|r| {
                                            if let Some(e) = r.education.iter_mut().find(|e| e.id == id.get_value())
                                            {
                                                e.gpa = event_target_value(&ev);
                                            }
                                        });
                                }
                            />
                            <button
                                class="btn btn--danger"
                                on:click=move |_| resume.update(|r| r.remove_education(&id.get_value()))
                            >
                                "Remove"
                            </button>
                        </div>
                    }
                }
            />
        </section>
    }
}

#[component]
fn ProjectsSection(resume: RwSignal<ResumeData>) -> impl IntoView {
    view! {
        <section class="builder__section">
            <header class="builder__section-header">
                <h2>"Projects"</h2>
                <button class="btn" on:click=move |_| resume.update(ResumeData::add_project)>
                    "+ Add"
                </button>
            </header>
            <For
                each=move || resume.get().projects
                key=|entry| entry.id.clone()
                children=move |entry| {
                    let id = StoredValue::new(entry.id.clone());
                    view! {
                        <div class="builder__entry">
                            <input
                                type="text"
                                placeholder="Project name"
                                prop:value=entry.name
                                on:input=move |ev| {
                                    resume
                                        .update(|r| {
                                            if let Some(e) = r.projects.iter_mut().find(|e| e.id == id.get_value())
                                            {
                                                e.name = event_target_value(&ev);
                                            }
                                        });
                                }
                            />
                            <input
                                type="text"
                                placeholder="Technologies"
                                prop:value=entry.technologies
                                on:input=move |ev| {
                                    resume
                                        .update(|r| {
                                            if let Some(e) = r.projects.iter_mut().find(|e| e.id == id.get_value())
                                            {
                                                e.technologies = event_target_value(&ev);
                                            }
                                        });
                                }
                            />
                            <textarea
                                placeholder="What does it do?"
                                prop:value=entry.description
                                on:input=move |ev| {
                                    resume
                                        .update(|r| {
                                            if let Some(e) = r.projects.iter_mut().find(|e| e.id == id.get_value())
                                            {
                                                e.description = event_target_value(&ev);
                                            }
                                        });
                                }
                            ></textarea>
                            <button
                                class="btn btn--danger"
                                on:click=move |_| resume.update(|r| r.remove_project(&id.get_value()))
                            >
                                "Remove"
                            </button>
                        </div>
                    }
                }
            />
        </section>
    }
}

#[component]
fn SkillsSection(resume: RwSignal<ResumeData>) -> impl IntoView {
    let new_skill = RwSignal::new(String::new());

    let add = move |_| {
        resume.update(|r| r.add_skill(&new_skill.get_untracked()));
        new_skill.set(String::new());
    };

    view! {
        <section class="builder__section">
            <h2>"Skills"</h2>
            <div class="builder__inline-add">
                <input
                    type="text"
                    placeholder="e.g. Rust"
                    prop:value=move || new_skill.get()
                    on:input=move |ev| new_skill.set(event_target_value(&ev))
                />
                <button class="btn" on:click=add>
                    "Add"
                </button>
            </div>
            <div class="builder__chips">
                <For
                    each=move || resume.get().skills
                    key=|skill| skill.clone()
                    children=move |skill| {
                        let for_remove = skill.clone();
                        view! {
                            <span class="chip">
                                {skill}
                                <button
                                    class="chip__remove"
                                    on:click=move |_| {
                                        resume.update(|r| r.remove_skill(&for_remove));
                                    }
                                >
                                    "×"
                                </button>
                            </span>
                        }
                    }
                />
            </div>
        </section>
    }
}

#[component]
fn CertificationsSection(resume: RwSignal<ResumeData>) -> impl IntoView {
    let new_certification = RwSignal::new(String::new());

    let add = move |_| {
        resume.update(|r| r.add_certification(&new_certification.get_untracked()));
        new_certification.set(String::new());
    };

    view! {
        <section class="builder__section">
            <h2>"Certifications"</h2>
            <div class="builder__inline-add">
                <input
                    type="text"
                    placeholder="e.g. AWS Certified Developer"
                    prop:value=move || new_certification.get()
                    on:input=move |ev| new_certification.set(event_target_value(&ev))
                />
                <button class="btn" on:click=add>
                    "Add"
                </button>
            </div>
            <div class="builder__chips">
                <For
                    each=move || resume.get().certifications
                    key=|certification| certification.clone()
                    children=move |certification| {
                        let for_remove = certification.clone();
                        view! {
                            <span class="chip">
                                {certification}
                                <button
                                    class="chip__remove"
                                    on:click=move |_| {
                                        resume.update(|r| r.remove_certification(&for_remove));
                                    }
                                >
                                    "×"
                                </button>
                            </span>
                        }
                    }
                />
            </div>
        </section>
    }
}
