//! Resume document model edited by the builder and relayed to the backend.

#[cfg(test)]
#[path = "resume_test.rs"]
mod resume_test;

use serde::{Deserialize, Serialize};

use crate::util::storage;

/// Full resume document. The serialized shape is what the backend's preview
/// and analysis endpoints expect; entry `id`s are client-only list keys and
/// never hit the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<String>,
    pub projects: Vec<ProjectEntry>,
    pub certifications: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub linkedin: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub portfolio: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(skip)]
    pub id: String,
    pub degree: String,
    pub institution: String,
    pub year: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub gpa: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(skip)]
    pub id: String,
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    #[serde(skip)]
    pub id: String,
    pub name: String,
    pub description: String,
    pub technologies: String,
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

impl EducationEntry {
    pub fn new() -> Self {
        Self {
            id: new_id(),
            ..Self::default()
        }
    }
}

impl ExperienceEntry {
    pub fn new() -> Self {
        Self {
            id: new_id(),
            ..Self::default()
        }
    }
}

impl ProjectEntry {
    pub fn new() -> Self {
        Self {
            id: new_id(),
            ..Self::default()
        }
    }
}

impl ResumeData {
    pub fn add_education(&mut self) {
        self.education.push(EducationEntry::new());
    }

    pub fn remove_education(&mut self, id: &str) {
        self.education.retain(|entry| entry.id != id);
    }

    pub fn add_experience(&mut self) {
        self.experience.push(ExperienceEntry::new());
    }

    pub fn remove_experience(&mut self, id: &str) {
        self.experience.retain(|entry| entry.id != id);
    }

    pub fn add_project(&mut self) {
        self.projects.push(ProjectEntry::new());
    }

    pub fn remove_project(&mut self, id: &str) {
        self.projects.retain(|entry| entry.id != id);
    }

    /// Add a skill, ignoring blanks and duplicates.
    pub fn add_skill(&mut self, skill: &str) {
        let skill = skill.trim();
        if skill.is_empty() || self.skills.iter().any(|s| s == skill) {
            return;
        }
        self.skills.push(skill.to_owned());
    }

    pub fn remove_skill(&mut self, skill: &str) {
        self.skills.retain(|s| s != skill);
    }

    /// Add a certification, ignoring blanks and duplicates.
    pub fn add_certification(&mut self, certification: &str) {
        let certification = certification.trim();
        if certification.is_empty() || self.certifications.iter().any(|c| c == certification) {
            return;
        }
        self.certifications.push(certification.to_owned());
    }

    pub fn remove_certification(&mut self, certification: &str) {
        self.certifications.retain(|c| c != certification);
    }

    /// Give every entry a list key. Entry ids are skipped by serde, so a
    /// draft loaded from storage comes back with empty ones.
    pub fn ensure_ids(&mut self) {
        for entry in &mut self.education {
            if entry.id.is_empty() {
                entry.id = new_id();
            }
        }
        for entry in &mut self.experience {
            if entry.id.is_empty() {
                entry.id = new_id();
            }
        }
        for entry in &mut self.projects {
            if entry.id.is_empty() {
                entry.id = new_id();
            }
        }
    }
}

/// Resume templates offered by the builder. Selection is a client-side
/// preference, persisted next to the draft.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Template {
    #[default]
    Classic,
    Modern,
    Minimal,
}

impl Template {
    pub const ALL: [Template; 3] = [Template::Classic, Template::Modern, Template::Minimal];

    pub fn as_str(self) -> &'static str {
        match self {
            Template::Classic => "classic",
            Template::Modern => "modern",
            Template::Minimal => "minimal",
        }
    }

    pub fn from_key(key: &str) -> Self {
        match key {
            "modern" => Template::Modern,
            "minimal" => Template::Minimal,
            _ => Template::Classic,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Template::Classic => "Classic",
            Template::Modern => "Modern",
            Template::Minimal => "Minimal",
        }
    }
}

/// Persist the draft so a reload (or an accidental navigation) keeps work.
pub fn save_draft(resume: &ResumeData, template: Template) {
    if let Ok(json) = serde_json::to_string(resume) {
        storage::set_item(storage::RESUME_DRAFT_KEY, &json);
    }
    storage::set_item(storage::RESUME_TEMPLATE_KEY, template.as_str());
}

/// Load a previously saved draft, if any.
pub fn load_draft() -> Option<(ResumeData, Template)> {
    let json = storage::get_item(storage::RESUME_DRAFT_KEY)?;
    let mut resume: ResumeData = serde_json::from_str(&json).ok()?;
    resume.ensure_ids();
    let template = storage::get_item(storage::RESUME_TEMPLATE_KEY)
        .map(|key| Template::from_key(&key))
        .unwrap_or_default();
    Some((resume, template))
}
