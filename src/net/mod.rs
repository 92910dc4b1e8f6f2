//! HTTP layer for the SkillMint backend.
//!
//! DESIGN
//! ======
//! `api` covers the session/auth endpoints, `services` the resume and
//! code-editor relays. Everything that depends on the session cookie goes
//! through `http::authenticated_fetch` so 401 handling lives in exactly one
//! place instead of a patched global `fetch`.

pub mod api;
pub mod http;
pub mod services;
pub mod types;
