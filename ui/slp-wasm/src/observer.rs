//! Viewport intersection watching.
//!
//! Shared by the scroll animator, counter animator and scroll spy. One
//! observer per controller; each element is observed once.

use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// Stop observing an element right after its first intersection.
    Once,
    /// Report every entry into the viewport.
    Every,
}

/// Call `on_enter` whenever one of `targets` starts intersecting at
/// `threshold`. Delivery order across elements is whatever the browser picks.
pub fn watch<F>(targets: &[Element], threshold: f64, trigger: Trigger, mut on_enter: F)
where
    F: FnMut(&Element) + 'static,
{
    if targets.is_empty() {
        return;
    }

    let cb = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if !entry.is_intersecting() {
                continue;
            }
            let target = entry.target();
            on_enter(&target);
            if trigger == Trigger::Once {
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));

    let observer = match IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)
    {
        Ok(observer) => observer,
        Err(err) => {
            gloo_console::warn!("IntersectionObserver unavailable", err);
            return;
        }
    };
    cb.forget();

    for target in targets {
        observer.observe(target);
    }
}
