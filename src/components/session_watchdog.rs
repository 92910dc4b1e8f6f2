//! Idle and cross-tab session watchdogs.
//!
//! Mounted while a protected screen is shown. Two guards, independent of
//! each other and of server-side session validity:
//!
//! * an idle deadline that redirects to sign-in after 30 minutes without
//!   pointer/keyboard/scroll/touch activity, and
//! * a `storage` listener that notices another tab removing the session
//!   marker and bounces this tab to sign-in.
//!
//! Everything is torn down on unmount: listeners removed, the timer task
//! cancelled through a flag it checks before acting, so nothing leaks
//! across navigations.

use leptos::prelude::*;

/// Invisible component that arms both watchdogs while mounted.
#[component]
pub fn SessionWatchdog() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    mount_watchdogs();
}

#[cfg(feature = "hydrate")]
const ACTIVITY_EVENTS: &[&str] = &["click", "keydown", "mousemove", "scroll", "touchstart"];

#[cfg(feature = "hydrate")]
fn mount_watchdogs() {
    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use crate::net::http::redirect_to_login;
    use crate::state::watchdog::{self, DEFAULT_IDLE_MS, IdleDeadline};

    let Some(window) = web_sys::window() else {
        return;
    };

    let deadline = Rc::new(Cell::new(IdleDeadline::new(DEFAULT_IDLE_MS, js_sys::Date::now())));
    let cancelled = Rc::new(Cell::new(false));

    // Any qualifying activity pushes the deadline out.
    let on_activity = {
        let deadline = Rc::clone(&deadline);
        Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            let mut idle = deadline.get();
            idle.record_activity(js_sys::Date::now());
            deadline.set(idle);
        })
    };
    for event in ACTIVITY_EVENTS {
        let _ = window.add_event_listener_with_callback(event, on_activity.as_ref().unchecked_ref());
    }

    // Another tab removing the marker means the user logged out there.
    let on_storage = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        let Some(event) = event.dyn_ref::<web_sys::StorageEvent>() else {
            return;
        };
        if watchdog::storage_signals_logout(event.key().as_deref(), event.new_value().as_deref()) {
            redirect_to_login();
        }
    });
    let _ = window.add_event_listener_with_callback("storage", on_storage.as_ref().unchecked_ref());

    // Sleep until the current deadline; when activity has moved it, just go
    // back to sleep for the remainder.
    {
        let deadline = Rc::clone(&deadline);
        let cancelled = Rc::clone(&cancelled);
        leptos::task::spawn_local(async move {
            loop {
                let now = js_sys::Date::now();
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let wait_ms = deadline.get().remaining_ms(now) as u64 + 1;
                gloo_timers::future::sleep(std::time::Duration::from_millis(wait_ms)).await;

                if cancelled.get() {
                    return;
                }
                if deadline.get().expired(js_sys::Date::now()) {
                    redirect_to_login();
                    return;
                }
            }
        });
    }

    on_cleanup(move || {
        cancelled.set(true);
        for event in ACTIVITY_EVENTS {
            let _ = window
                .remove_event_listener_with_callback(event, on_activity.as_ref().unchecked_ref());
        }
        let _ = window
            .remove_event_listener_with_callback("storage", on_storage.as_ref().unchecked_ref());
        drop(on_activity);
        drop(on_storage);
    });
}
