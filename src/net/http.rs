//! Authenticated request plumbing.
//!
//! Calls that rely on the session cookie go through `authenticated_fetch`,
//! which attaches credentials, the cached bearer token, and watches for a
//! `401` arriving while the client still believes it is authenticated. That
//! combination means the server-side session died out from under the page:
//! local session state is cleared once and the browser is hard-redirected to
//! the sign-in screen. A `401` on an unauthenticated call (a failed login)
//! is left for the caller to surface as a form error.

/// HTTP verbs used by the relay endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Issue a credentialed request and intercept session expiry.
///
/// # Errors
///
/// Returns the transport error when the request never completed; HTTP-level
/// failures come back as a normal `Response` for the caller to inspect.
#[cfg(feature = "hydrate")]
pub async fn authenticated_fetch(
    session: leptos::prelude::RwSignal<crate::state::session::SessionState>,
    method: Method,
    url: &str,
    body: Option<&serde_json::Value>,
) -> Result<gloo_net::http::Response, gloo_net::Error> {
    use leptos::prelude::{GetUntracked, Update};

    let mut req = match method {
        Method::Get => gloo_net::http::Request::get(url),
        Method::Post => gloo_net::http::Request::post(url),
    }
    .credentials(web_sys::RequestCredentials::Include)
    .header("Accept", "application/json");

    if let Some(token) = session.get_untracked().token {
        req = req.header("Authorization", &format!("Bearer {token}"));
    }

    let resp = match body {
        Some(json) => req.json(json)?.send().await?,
        None => req.send().await?,
    };

    if resp.status() == 401 {
        let mut expired = false;
        session.update(|s| expired = s.observe_unauthorized());
        if expired {
            crate::util::storage::clear_evidence();
            crate::util::storage::clear_profile();
            leptos::task::spawn_local(crate::net::api::logout());
            redirect_to_login();
        }
    }

    Ok(resp)
}

/// Hard redirect used when the session dies out from under the page, and by
/// the idle/cross-tab watchdogs.
#[cfg(feature = "hydrate")]
pub fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(crate::util::routes::LOGIN);
    }
}
