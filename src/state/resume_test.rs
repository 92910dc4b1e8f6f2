use super::*;

#[test]
fn new_entries_get_distinct_ids() {
    let mut resume = ResumeData::default();
    resume.add_experience();
    resume.add_experience();
    assert_eq!(resume.experience.len(), 2);
    assert_ne!(resume.experience[0].id, resume.experience[1].id);
}

#[test]
fn remove_by_id_only_drops_the_matching_entry() {
    let mut resume = ResumeData::default();
    resume.add_education();
    resume.add_education();
    let keep = resume.education[1].id.clone();
    let drop = resume.education[0].id.clone();

    resume.remove_education(&drop);
    assert_eq!(resume.education.len(), 1);
    assert_eq!(resume.education[0].id, keep);
}

#[test]
fn skills_ignore_blanks_and_duplicates() {
    let mut resume = ResumeData::default();
    resume.add_skill("  Rust  ");
    resume.add_skill("Rust");
    resume.add_skill("   ");
    assert_eq!(resume.skills, vec!["Rust".to_owned()]);

    resume.remove_skill("Rust");
    assert!(resume.skills.is_empty());
}

#[test]
fn entry_ids_stay_off_the_wire() {
    let mut resume = ResumeData::default();
    resume.add_project();
    resume.projects[0].name = "skillmint".to_owned();

    let json = serde_json::to_string(&resume).expect("serialize resume");
    assert!(!json.contains("\"id\""));
    assert!(json.contains("personalInfo"));
}

#[test]
fn draft_roundtrip_restores_entries_with_fresh_ids() {
    let mut resume = ResumeData::default();
    resume.personal_info.name = "Ada".to_owned();
    resume.add_experience();
    resume.experience[0].title = "Engineer".to_owned();

    let json = serde_json::to_string(&resume).expect("serialize resume");
    let mut restored: ResumeData = serde_json::from_str(&json).expect("parse resume");
    restored.ensure_ids();

    assert_eq!(restored.personal_info.name, "Ada");
    assert_eq!(restored.experience[0].title, "Engineer");
    assert!(!restored.experience[0].id.is_empty());
}

#[test]
fn empty_optional_links_are_omitted() {
    let resume = ResumeData::default();
    let json = serde_json::to_string(&resume).expect("serialize resume");
    assert!(!json.contains("linkedin"));
    assert!(!json.contains("portfolio"));
}

#[test]
fn template_keys_roundtrip_with_classic_fallback() {
    for template in Template::ALL {
        assert_eq!(Template::from_key(template.as_str()), template);
    }
    assert_eq!(Template::from_key("unknown"), Template::Classic);
}
