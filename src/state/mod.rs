//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `gate`, `resume`, etc.) so individual
//! components can depend on small focused models. `session` is the only
//! writer of authentication state; everything else reads derived booleans.

pub mod editor;
pub mod gate;
pub mod progress;
pub mod resume;
pub mod session;
pub mod watchdog;
