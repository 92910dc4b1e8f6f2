//! Session and account endpoints under `/skill-mint`.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, cookies included so
//! the backend's HTTP-only session cookie travels with every request.
//! Server-side (SSR): stubs returning inert defaults since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every function normalizes transport failures and non-OK replies into an
//! `AuthResponse` (or a plain bool) instead of panicking or bubbling an
//! error, so a dead backend degrades to "not authenticated" rather than
//! crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::types::{AuthEnvelope, AuthResponse, GoogleProfile};

#[cfg(feature = "hydrate")]
use crate::net::types::SessionCheck;

pub const CHECK: &str = "/skill-mint/check";
pub const LOGIN: &str = "/skill-mint/login";
pub const GOOGLE_LOGIN: &str = "/skill-mint/google-login";
pub const LOGOUT: &str = "/skill-mint/logout";
pub const CONFIRM_EMAIL: &str = "/skill-mint/confirm-email";
pub const SET_PASSWORD: &str = "/skill-mint/set-password";
pub const SET_GOOGLE_PASSWORD: &str = "/skill-mint/set-google-password";

/// Message shown when the request never reached the backend.
pub const NETWORK_ERROR: &str = "Network error occurred";

/// Normalize an auth endpoint reply.
///
/// Success requires an OK status line and, when the body carries a `status`
/// field, the literal `"success"`. Failures surface the server's `message`
/// verbatim when the body parses, else the per-action `fallback`.
pub fn parse_auth_reply(ok: bool, body: &str, fallback: &str) -> AuthResponse {
    let envelope: AuthEnvelope = serde_json::from_str(body).unwrap_or_default();
    let success = ok && envelope.status.as_deref().is_none_or(|s| s == "success");
    if !success {
        return AuthResponse {
            success: false,
            message: Some(envelope.message.unwrap_or_else(|| fallback.to_owned())),
            token: None,
            needs_password: false,
        };
    }
    AuthResponse {
        success: true,
        message: envelope.message,
        token: envelope.token,
        needs_password: envelope.needs_password.unwrap_or(false),
    }
}

fn network_error() -> AuthResponse {
    AuthResponse {
        success: false,
        message: Some(NETWORK_ERROR.to_owned()),
        token: None,
        needs_password: false,
    }
}

/// Ask the backend whether the session cookie is still valid.
/// Any failure reads as "not logged in".
pub async fn check_session() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let resp = match gloo_net::http::Request::get(CHECK)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(_) => return false,
        };
        if !resp.ok() {
            return false;
        }
        resp.json::<SessionCheck>()
            .await
            .map_or(false, |check| check.logged_in)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// `POST /skill-mint/login` with `newOne: false`.
pub async fn login(email: &str, password: &str) -> AuthResponse {
    let body = serde_json::json!({
        "email": email,
        "password": password,
        "newOne": false,
    });
    post_auth(LOGIN, &body, "Login failed").await
}

/// `POST /skill-mint/login` with `newOne: true` — the signup variant.
pub async fn signup(name: &str, email: &str, password: &str) -> AuthResponse {
    let body = serde_json::json!({
        "name": name,
        "email": email,
        "password": password,
        "newOne": true,
    });
    post_auth(LOGIN, &body, "Signup failed").await
}

/// Forward a completed provider sign-in to the backend.
pub async fn google_login(profile: &GoogleProfile) -> AuthResponse {
    let body = match serde_json::to_value(profile) {
        Ok(body) => body,
        Err(_) => return network_error(),
    };
    post_auth(GOOGLE_LOGIN, &body, "Google login failed").await
}

/// Best-effort server logout; errors are ignored so logout always succeeds
/// client-side.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post(LOGOUT)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await;
    }
}

/// Activate an account from an emailed confirmation link.
pub async fn confirm_email(email: &str, token: &str, password: &str) -> AuthResponse {
    let body = serde_json::json!({
        "email": email,
        "token": token,
        "password": password,
    });
    post_auth(CONFIRM_EMAIL, &body, "Confirmation failed. Please check your password.").await
}

/// Set the password for a verified account.
pub async fn set_password(email: &str, password: &str, confirm_password: &str) -> AuthResponse {
    let body = serde_json::json!({
        "email": email,
        "password": password,
        "confirmPassword": confirm_password,
    });
    post_auth(SET_PASSWORD, &body, "Failed to set password. Please try again.").await
}

/// Set the password for an account created through Google sign-in.
pub async fn set_google_password(
    email: &str,
    password: &str,
    confirm_password: &str,
) -> AuthResponse {
    let body = serde_json::json!({
        "email": email,
        "password": password,
        "confirmPassword": confirm_password,
    });
    post_auth(SET_GOOGLE_PASSWORD, &body, "Failed to set password. Please try again.").await
}

#[cfg(feature = "hydrate")]
async fn post_auth(path: &str, body: &serde_json::Value, fallback: &str) -> AuthResponse {
    let req = match gloo_net::http::Request::post(path)
        .credentials(web_sys::RequestCredentials::Include)
        .header("Accept", "application/json")
        .json(body)
    {
        Ok(req) => req,
        Err(_) => return network_error(),
    };

    match req.send().await {
        Ok(resp) => {
            let ok = resp.ok();
            let text = resp.text().await.unwrap_or_default();
            parse_auth_reply(ok, &text, fallback)
        }
        Err(err) => {
            leptos::logging::warn!("auth request to {path} failed: {err}");
            network_error()
        }
    }
}

#[cfg(not(feature = "hydrate"))]
async fn post_auth(path: &str, body: &serde_json::Value, fallback: &str) -> AuthResponse {
    let _ = (path, body, fallback);
    network_error()
}
