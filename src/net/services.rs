//! Relay endpoints for the resume and code-editor pages.
//!
//! Thin pass-throughs: the backend owns formatting, linting, diffing,
//! preview rendering, and AI analysis; the client only ships JSON back and
//! forth. Every call goes through `http::authenticated_fetch` so an expired
//! session is handled in one place.

#![allow(clippy::unused_async)]

use leptos::prelude::RwSignal;

use crate::net::types::{AnalysisResult, DiffResult};
use crate::state::resume::ResumeData;
use crate::state::session::SessionState;

pub const FORMAT_CODE: &str = "/api/code/format";
pub const LINT_CODE: &str = "/api/code/lint";
pub const DIFF_CODE: &str = "/api/code/diff";
pub const RESUME_PREVIEW: &str = "/api/resume/preview";
pub const RESUME_ANALYZE: &str = "/api/resume/analyze";

/// Format a code buffer via the backend.
///
/// # Errors
///
/// Returns an error string when the request fails or the reply is not the
/// expected shape.
pub async fn format_code(
    session: RwSignal<SessionState>,
    code: &str,
    language: &str,
) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "code": code, "language": language });
        let resp = crate::net::http::authenticated_fetch(
            session,
            crate::net::http::Method::Post,
            FORMAT_CODE,
            Some(&body),
        )
        .await
        .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("format request failed: {}", resp.status()));
        }
        #[derive(serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct FormatReply {
            formatted_code: String,
        }
        let reply: FormatReply = resp.json().await.map_err(|e| e.to_string())?;
        Ok(reply.formatted_code)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, code, language);
        Err("not available on server".to_owned())
    }
}

/// Lint a code buffer via the backend. Returns the reported problems.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn lint_code(
    session: RwSignal<SessionState>,
    code: &str,
    language: &str,
) -> Result<Vec<String>, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "code": code, "language": language });
        let resp = crate::net::http::authenticated_fetch(
            session,
            crate::net::http::Method::Post,
            LINT_CODE,
            Some(&body),
        )
        .await
        .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("lint request failed: {}", resp.status()));
        }
        #[derive(serde::Deserialize)]
        struct LintReply {
            #[serde(default)]
            errors: Vec<String>,
        }
        let reply: LintReply = resp.json().await.map_err(|e| e.to_string())?;
        Ok(reply.errors)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, code, language);
        Err("not available on server".to_owned())
    }
}

/// Compare the saved original against the current buffer.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn diff_code(
    session: RwSignal<SessionState>,
    original: &str,
    modified: &str,
) -> Result<DiffResult, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "originalCode": original, "modifiedCode": modified });
        let resp = crate::net::http::authenticated_fetch(
            session,
            crate::net::http::Method::Post,
            DIFF_CODE,
            Some(&body),
        )
        .await
        .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("diff request failed: {}", resp.status()));
        }
        resp.json::<DiffResult>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, original, modified);
        Err("not available on server".to_owned())
    }
}

/// Render the resume to preview HTML on the backend.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn resume_preview(
    session: RwSignal<SessionState>,
    resume: &ResumeData,
) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::to_value(resume).map_err(|e| e.to_string())?;
        let resp = crate::net::http::authenticated_fetch(
            session,
            crate::net::http::Method::Post,
            RESUME_PREVIEW,
            Some(&body),
        )
        .await
        .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("preview request failed: {}", resp.status()));
        }
        resp.text().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, resume);
        Err("not available on server".to_owned())
    }
}

/// Ask the backend's AI pipeline to score the resume against a target role.
///
/// # Errors
///
/// Returns an error string when the request fails.
pub async fn analyze_resume(
    session: RwSignal<SessionState>,
    resume: &ResumeData,
    job_role: &str,
    experience_level: &str,
) -> Result<AnalysisResult, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({
            "resumeData": resume,
            "jobRole": job_role,
            "experienceLevel": experience_level,
        });
        let resp = crate::net::http::authenticated_fetch(
            session,
            crate::net::http::Method::Post,
            RESUME_ANALYZE,
            Some(&body),
        )
        .await
        .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("analysis failed: {}", resp.status()));
        }
        resp.json::<AnalysisResult>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, resume, job_role, experience_level);
        Err("not available on server".to_owned())
    }
}
