//! Session manager: the single writer of authentication state.
//!
//! DESIGN
//! ======
//! `SessionState` lives in one context signal provided by the app shell.
//! Pages call the async operations below; nothing else mutates the signal.
//! The server-side HTTP-only cookie is authoritative — local state is a
//! belief synchronized by `initialize`, and `localStorage` carries only a
//! cross-tab logout hint, never the gate for protected content.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::api;
use crate::net::types::{AuthResponse, GoogleProfile};
use crate::util::{routes, storage};

/// Client-side belief about whether the current user is authenticated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub is_authenticated: bool,
    /// True until the startup session check settles. Consumers must not
    /// branch on `is_authenticated` while this is set.
    pub is_loading: bool,
    /// Bearer token for endpoints that want an explicit header. The cookie
    /// keeps the session alive; losing the token on reload is fine.
    pub token: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            is_authenticated: false,
            is_loading: true,
            token: None,
        }
    }
}

impl SessionState {
    /// Settle the startup check. The first call wins; a settled session
    /// never re-enters the loading state.
    pub fn settle(&mut self, logged_in: bool) {
        if !self.is_loading {
            return;
        }
        self.is_loading = false;
        self.is_authenticated = logged_in;
    }

    /// Mark the session authenticated, keeping any previously cached token
    /// when the new response carries none.
    pub fn authenticate(&mut self, token: Option<String>) {
        self.is_authenticated = true;
        if token.is_some() {
            self.token = token;
        }
    }

    /// Forget all local session evidence.
    pub fn clear(&mut self) {
        self.is_authenticated = false;
        self.token = None;
    }

    /// Record a 401 from a call made with this session. Returns `true` only
    /// for the observation that ends an authenticated session, so the
    /// caller redirects exactly once; later 401s — and 401s from failed
    /// logins — are inert.
    pub fn observe_unauthorized(&mut self) -> bool {
        if !self.is_authenticated {
            return false;
        }
        self.clear();
        true
    }
}

/// Outcome handed back to forms: a success flag plus an optional
/// user-facing message. `needs_password` is set when Google sign-in
/// requires the password-setup step before a session exists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthOutcome {
    pub success: bool,
    pub message: Option<String>,
    pub needs_password: bool,
}

impl AuthOutcome {
    fn from_response(res: AuthResponse) -> Self {
        Self {
            success: res.success,
            message: res.message,
            needs_password: res.needs_password,
        }
    }
}

/// Client-side checks applied before any password-setting request,
/// mirroring the backend's minimums.
pub fn validate_new_password(password: &str, confirm: &str) -> Result<(), &'static str> {
    if password != confirm {
        return Err("Passwords do not match.");
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters long.");
    }
    Ok(())
}

/// One-time startup check against the server's cookie session.
///
/// Suppressed on the public allow-list (verification and password-set
/// links), where a check is misleading; suppression still settles the
/// loading flag. Failing to confirm a session is indistinguishable from not
/// having one, so every error path settles as "not authenticated" and
/// nothing escapes this function.
pub async fn initialize(session: RwSignal<SessionState>, path: &str) {
    if routes::is_public(path) {
        session.update(|s| s.settle(false));
        return;
    }
    let logged_in = api::check_session().await;
    session.update(|s| s.settle(logged_in));
}

/// Password login. Success authenticates and writes the cross-tab marker;
/// failure leaves state untouched. Navigation is the caller's job.
pub async fn login(
    session: RwSignal<SessionState>,
    email: &str,
    password: &str,
) -> AuthOutcome {
    let res = api::login(email, password).await;
    if res.success {
        session.update(|s| s.authenticate(res.token.clone()));
        storage::write_evidence();
    }
    AuthOutcome::from_response(res)
}

/// Create an account. Accounts stay unverified until the emailed
/// confirmation completes, so a successful signup does not authenticate;
/// the caller routes to the verification notice instead.
pub async fn signup(name: &str, email: &str, password: &str) -> AuthOutcome {
    AuthOutcome::from_response(api::signup(name, email, password).await)
}

/// Google sign-in hand-off. Authenticates unless the backend asks for the
/// password-setup step first.
pub async fn google_login(
    session: RwSignal<SessionState>,
    profile: &GoogleProfile,
) -> AuthOutcome {
    let res = api::google_login(profile).await;
    if res.success && !res.needs_password {
        session.update(|s| s.authenticate(res.token.clone()));
        storage::write_evidence();
    }
    AuthOutcome::from_response(res)
}

/// End the session. Local state and the cross-tab marker are dropped
/// synchronously so logout succeeds even when the server is unreachable;
/// the server logout is fired best-effort in the background.
pub fn logout(session: RwSignal<SessionState>) {
    session.update(SessionState::clear);
    storage::clear_evidence();
    storage::clear_profile();
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(api::logout());
}

/// Re-ask the server whether the cookie session is live and adopt the
/// answer. Used after flows that establish the cookie out of band (Google
/// password setup).
pub async fn refresh(session: RwSignal<SessionState>) {
    let logged_in = api::check_session().await;
    session.update(|s| {
        if logged_in {
            s.authenticate(None);
        } else {
            s.clear();
        }
    });
    if logged_in {
        storage::write_evidence();
    }
}
