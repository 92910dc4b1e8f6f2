//! Pure cores for the session expiry watchdogs.
//!
//! The browser glue in `components::session_watchdog` feeds these with
//! `Date::now()` timestamps and storage-event fields; keeping the arithmetic
//! and the decision here lets both be exercised without a browser.

#[cfg(test)]
#[path = "watchdog_test.rs"]
mod watchdog_test;

use crate::util::storage;

/// Default idle window: 30 minutes.
pub const DEFAULT_IDLE_MS: f64 = 30.0 * 60.0 * 1000.0;

/// Resettable idle deadline.
///
/// Any qualifying activity pushes the deadline to `activity + timeout`; the
/// watchdog fires when `now` reaches the deadline with no reset in between.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdleDeadline {
    timeout_ms: f64,
    deadline: f64,
}

impl IdleDeadline {
    pub fn new(timeout_ms: f64, now: f64) -> Self {
        Self {
            timeout_ms,
            deadline: now + timeout_ms,
        }
    }

    /// Re-arm the window from a qualifying activity event.
    pub fn record_activity(&mut self, now: f64) {
        self.deadline = now + self.timeout_ms;
    }

    /// True once the window has elapsed without a reset.
    pub fn expired(&self, now: f64) -> bool {
        now >= self.deadline
    }

    /// Milliseconds left until expiry, clamped at zero.
    pub fn remaining_ms(&self, now: f64) -> f64 {
        (self.deadline - now).max(0.0)
    }
}

/// True when a storage mutation observed from another tab means the session
/// evidence was removed and this tab should return to the sign-in screen.
pub fn storage_signals_logout(key: Option<&str>, new_value: Option<&str>) -> bool {
    key == Some(storage::EVIDENCE_KEY) && new_value.is_none()
}
