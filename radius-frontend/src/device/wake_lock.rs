//! Keeps the screen on while tracking.
//!
//! The Screen Wake Lock API is not covered by the stable `web-sys`
//! bindings so the few members needed are imported here.

use std::{cell::RefCell, rc::Rc};

use js_sys::{Promise, Reflect};
use leptos::{document, spawn_local, window};
use wasm_bindgen::{prelude::*, JsCast};
use wasm_bindgen_futures::JsFuture;
use web_sys::VisibilityState;

const WAKE_LOCK_TYPE: &str = "screen";

const VISIBILITY_CHANGE: &str = "visibilitychange";

#[wasm_bindgen]
extern "C" {
    type WakeLock;

    #[wasm_bindgen(method, catch)]
    fn request(this: &WakeLock, kind: &str) -> Result<Promise, JsValue>;

    type WakeLockSentinel;

    #[wasm_bindgen(method)]
    fn release(this: &WakeLockSentinel) -> Promise;

    #[wasm_bindgen(method, getter)]
    fn released(this: &WakeLockSentinel) -> bool;
}

fn wake_lock() -> Option<WakeLock> {
    let navigator = window().navigator();
    Reflect::get(&navigator, &JsValue::from_str("wakeLock"))
        .ok()
        .filter(|wake_lock| !wake_lock.is_undefined() && !wake_lock.is_null())
        .map(JsCast::unchecked_into)
}

#[derive(Default)]
struct State {
    sentinel: Option<WakeLockSentinel>,
    dropped: bool,
}

/// Best effort screen wake lock.
///
/// Browsers release the lock when the page is hidden. It is requested
/// again as soon as the page becomes visible, but only if it had been
/// granted before. The lock is released on drop.
pub struct ScreenWakeLock {
    state: Rc<RefCell<State>>,
    on_visibility_change: Closure<dyn FnMut()>,
}

impl ScreenWakeLock {
    pub fn acquire() -> Self {
        let state = Rc::new(RefCell::new(State::default()));
        request(Rc::clone(&state));

        let on_visibility_change = {
            let state = Rc::clone(&state);
            Closure::<dyn FnMut()>::new(move || {
                let visible = document().visibility_state() == VisibilityState::Visible;
                if visible && state.borrow().sentinel.is_some() {
                    log::debug!("Page is visible again: request screen wake lock");
                    request(Rc::clone(&state));
                }
            })
        };
        if let Err(err) = document().add_event_listener_with_callback(
            VISIBILITY_CHANGE,
            on_visibility_change.as_ref().unchecked_ref(),
        ) {
            log::warn!("Unable to listen for visibility changes: {err:?}");
        }
        Self {
            state,
            on_visibility_change,
        }
    }
}

fn request(state: Rc<RefCell<State>>) {
    let Some(wake_lock) = wake_lock() else {
        log::info!("Screen wake lock is not supported");
        return;
    };
    let promise = match wake_lock.request(WAKE_LOCK_TYPE) {
        Ok(promise) => promise,
        Err(err) => {
            log::warn!("Unable to request screen wake lock: {err:?}");
            return;
        }
    };
    spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(sentinel) => {
                let sentinel: WakeLockSentinel = sentinel.unchecked_into();
                let mut state = state.borrow_mut();
                if state.dropped {
                    release(&sentinel);
                    return;
                }
                log::debug!("Screen wake lock acquired");
                if let Some(previous) = state.sentinel.replace(sentinel) {
                    if !previous.released() {
                        release(&previous);
                    }
                }
            }
            Err(err) => {
                log::warn!("Screen wake lock has been denied: {err:?}");
            }
        }
    });
}

fn release(sentinel: &WakeLockSentinel) {
    let promise = sentinel.release();
    spawn_local(async move {
        if let Err(err) = JsFuture::from(promise).await {
            log::warn!("Unable to release screen wake lock: {err:?}");
        }
    });
}

impl Drop for ScreenWakeLock {
    fn drop(&mut self) {
        if let Err(err) = document().remove_event_listener_with_callback(
            VISIBILITY_CHANGE,
            self.on_visibility_change.as_ref().unchecked_ref(),
        ) {
            log::warn!("Unable to remove visibility listener: {err:?}");
        }
        let mut state = self.state.borrow_mut();
        state.dropped = true;
        if let Some(sentinel) = state.sentinel.take() {
            log::debug!("Release screen wake lock");
            release(&sentinel);
        }
    }
}
