//! Event binding.
//!
//! Every listener is bound once at startup and lives for the page, so the
//! closures are leaked with `forget()`. Async work inside a handler is
//! spawned via `wasm_bindgen_futures::spawn_local`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

/// Attach a persistent listener.
pub fn on<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if let Err(err) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        gloo_console::warn!(format!("could not bind {event} listener"), err);
    }
    cb.forget();
}

/// Attach a listener the browser drops after its first dispatch.
pub fn once<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnOnce(Event) + 'static,
{
    let cb = Closure::once(handler);
    let opts = AddEventListenerOptions::new();
    opts.set_once(true);
    if let Err(err) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        cb.as_ref().unchecked_ref(),
        &opts,
    ) {
        gloo_console::warn!(format!("could not bind {event} listener"), err);
    }
    cb.forget();
}

/// Run `f` on the next animation frame.
pub fn next_frame<F>(f: F)
where
    F: FnOnce() + 'static,
{
    let cb = Closure::once(move |_ts: f64| f());
    if let Err(err) = crate::dom::window().request_animation_frame(cb.as_ref().unchecked_ref()) {
        gloo_console::warn!("requestAnimationFrame unavailable", err);
    }
    cb.forget();
}
