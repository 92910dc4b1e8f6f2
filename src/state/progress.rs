//! Learning roadmap shown on the progress page.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use crate::util::routes;

/// A single roadmap step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoadmapStep {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub completed: bool,
    pub locked: bool,
    pub action: Option<&'static str>,
    pub route: Option<&'static str>,
}

/// The fixed roadmap. Account setup is done by the time a user can reach
/// this page, so step one starts completed.
pub fn roadmap() -> Vec<RoadmapStep> {
    vec![
        RoadmapStep {
            id: 1,
            title: "Account Setup",
            description: "Create your account and login to SkillMint platform",
            icon: "✅",
            completed: true,
            locked: false,
            action: None,
            route: None,
        },
        RoadmapStep {
            id: 2,
            title: "Learn Fundamentals",
            description: "Start with programming basics, data structures, and algorithms",
            icon: "📚",
            completed: false,
            locked: false,
            action: Some("Start Learning"),
            route: None,
        },
        RoadmapStep {
            id: 3,
            title: "Build Resume",
            description: "Create a professional resume highlighting your skills and projects",
            icon: "📄",
            completed: false,
            locked: false,
            action: Some("Create Resume"),
            route: Some(routes::RESUME_BUILDER),
        },
        RoadmapStep {
            id: 4,
            title: "Practice Coding",
            description: "Solve coding problems and improve your programming skills",
            icon: "💻",
            completed: false,
            locked: false,
            action: Some("Start Coding"),
            route: Some(routes::CODE_EDITOR),
        },
        RoadmapStep {
            id: 5,
            title: "Build Projects",
            description: "Create real-world projects to showcase in your portfolio",
            icon: "🚀",
            completed: false,
            locked: false,
            action: Some("View Projects"),
            route: None,
        },
        RoadmapStep {
            id: 6,
            title: "Take Assessments",
            description: "Test your knowledge with coding assessments and quizzes",
            icon: "📝",
            completed: false,
            locked: false,
            action: Some("Start Test"),
            route: None,
        },
        RoadmapStep {
            id: 7,
            title: "Mock Interviews",
            description: "Practice with mock interviews and get feedback",
            icon: "🎤",
            completed: false,
            locked: false,
            action: Some("Practice Interview"),
            route: None,
        },
        RoadmapStep {
            id: 8,
            title: "Apply for Jobs",
            description: "Browse and apply for IT jobs matching your skills",
            icon: "💼",
            completed: false,
            locked: false,
            action: Some("Browse Jobs"),
            route: None,
        },
    ]
}

/// Completed share of the roadmap as a percentage.
pub fn completion_percent(steps: &[RoadmapStep]) -> f64 {
    if steps.is_empty() {
        return 0.0;
    }
    let done = steps.iter().filter(|step| step.completed).count();
    #[allow(clippy::cast_precision_loss)]
    {
        done as f64 / steps.len() as f64 * 100.0
    }
}
