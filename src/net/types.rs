//! Wire types shared by the HTTP helpers and pages.

use serde::{Deserialize, Serialize};

/// Raw JSON envelope returned by the auth endpoints.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthEnvelope {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub needs_password: Option<bool>,
    #[serde(default)]
    pub verification_token: Option<String>,
}

/// Normalized outcome of an auth call, safe to hand to form components.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthResponse {
    pub success: bool,
    pub message: Option<String>,
    pub token: Option<String>,
    pub needs_password: bool,
}

/// Body of `GET /skill-mint/check`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCheck {
    #[serde(default)]
    pub logged_in: bool,
}

/// Federated identity payload forwarded to the backend after the provider
/// popup completes.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleProfile {
    pub email: String,
    pub name: String,
    pub google_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

/// Summary returned by `POST /api/code/diff`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResult {
    pub additions: i64,
    pub deletions: i64,
    #[serde(default)]
    pub changes: Vec<String>,
}

/// Scorecard returned by `POST /api/resume/analyze`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub score: f64,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub advice: String,
    #[serde(default)]
    pub match_percentage: f64,
}
