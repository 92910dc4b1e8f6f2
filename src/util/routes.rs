//! Route paths and the public-route allow-list.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const LOGIN: &str = "/login";
pub const HOME: &str = "/home";
pub const RESUME_BUILDER: &str = "/resume-builder";
pub const RESUME_PREVIEW: &str = "/resume-preview";
pub const CODE_EDITOR: &str = "/code-editor";
pub const TRACK_PROGRESS: &str = "/track-progress";
pub const EMAIL_VERIFICATION: &str = "/email-verification";
pub const EMAIL_CONFIRMATION: &str = "/email-confirmation";
pub const SET_PASSWORD: &str = "/set-password";
pub const GOOGLE_SET_PASSWORD: &str = "/google-set-password";

/// Routes reached from emailed links. The startup session check is skipped on
/// these: they load logged-out by design, and a stray 401 on a fresh
/// verification link would bounce the user before they can act on it.
const PUBLIC_PREFIXES: &[&str] = &[
    "/login/token",
    EMAIL_VERIFICATION,
    SET_PASSWORD,
    GOOGLE_SET_PASSWORD,
];

/// True when `path` belongs to the unauthenticated allow-list.
pub fn is_public(path: &str) -> bool {
    PUBLIC_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}

/// Current location path, `/` outside the browser.
pub fn current_path() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        "/".to_owned()
    }
}
