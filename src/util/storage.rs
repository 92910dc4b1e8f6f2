//! Session evidence and resume draft keys in `localStorage`.
//!
//! The HTTP-only cookie is what actually authenticates requests; the
//! evidence marker only lets other tabs observe a logout through `storage`
//! events. It is written on login, removed on logout, and never consulted
//! to gate protected content. Requires a browser environment.

/// Marker key other tabs watch for removal.
pub const EVIDENCE_KEY: &str = "skillmint_session";

/// Display fields cached by the Google sign-in flow.
pub const USER_EMAIL_KEY: &str = "userEmail";
pub const USER_NAME_KEY: &str = "userName";

/// Resume draft payload, serialized `ResumeData`.
pub const RESUME_DRAFT_KEY: &str = "resumeData";

/// Selected resume template id.
pub const RESUME_TEMPLATE_KEY: &str = "selectedTemplate";

/// Write the cross-tab session marker.
pub fn write_evidence() {
    set_item(EVIDENCE_KEY, "1");
}

/// Remove the cross-tab session marker.
pub fn clear_evidence() {
    remove_item(EVIDENCE_KEY);
}

/// Cache display fields from a federated sign-in.
pub fn write_profile(email: &str, name: &str) {
    set_item(USER_EMAIL_KEY, email);
    set_item(USER_NAME_KEY, name);
}

/// Drop cached display fields on logout.
pub fn clear_profile() {
    remove_item(USER_EMAIL_KEY);
    remove_item(USER_NAME_KEY);
}

/// Drop any locally persisted resume draft. Called on logout so the next
/// account on this machine does not inherit the previous user's draft.
pub fn clear_resume_draft() {
    remove_item(RESUME_DRAFT_KEY);
    remove_item(RESUME_TEMPLATE_KEY);
}

/// Read a raw string value, `None` outside the browser or when absent.
pub fn get_item(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok()??;
        storage.get_item(key).ok()?
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Store a raw string value. No-op outside the browser.
pub fn set_item(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Remove a key. No-op outside the browser.
pub fn remove_item(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(key);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
