//! Counter animation.
//!
//! Counts `[data-counter]` elements up to their target once they are 35%
//! visible, one step per animation frame. The value is rendered with the
//! browser's locale grouping plus the optional `data-suffix`.

use std::cell::RefCell;
use std::rc::Rc;

use slp_core::counter::{CounterRun, CounterSpec};
use slp_core::{SiteConfig, selectors};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::dom;
use crate::observer::{self, Trigger};

type FrameHolder = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub fn init(cfg: &SiteConfig) {
    let counters = dom::query_all(selectors::COUNTER);
    let cfg = cfg.clone();
    observer::watch(&counters, cfg.counter_threshold, Trigger::Once, move |el| {
        let spec = CounterSpec::from_attrs(
            &el.get_attribute(selectors::COUNTER_ATTR).unwrap_or_default(),
            el.get_attribute(selectors::COUNTER_DURATION_ATTR).as_deref(),
            el.get_attribute(selectors::COUNTER_SUFFIX_ATTR).as_deref(),
            &cfg,
        );
        match spec {
            Some(spec) => animate(el.clone(), &spec, cfg.frame_interval_ms),
            None => gloo_console::warn!("counter target is not an integer", el.clone()),
        }
    });
}

fn animate(el: Element, spec: &CounterSpec, frame_interval_ms: u32) {
    let mut run: CounterRun = spec.run(frame_interval_ms);
    let target = spec.target;
    let suffix = spec.suffix.clone();
    let locale = dom::window()
        .navigator()
        .language()
        .unwrap_or_else(|| "en-US".to_owned());

    let holder: FrameHolder = Rc::new(RefCell::new(None));
    let holder_cb = Rc::clone(&holder);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        let Some(value) = run.next() else {
            holder_cb.borrow_mut().take();
            return;
        };
        let grouped = String::from(js_sys::Number::from(value as f64).to_locale_string(&locale));
        el.set_text_content(Some(&format!("{grouped}{suffix}")));
        if value == target {
            holder_cb.borrow_mut().take();
        } else {
            request_frame(&holder_cb);
        }
    }) as Box<dyn FnMut(f64)>);

    *holder.borrow_mut() = Some(cb);
    request_frame(&holder);
}

fn request_frame(holder: &FrameHolder) {
    let failed = match holder.borrow().as_ref() {
        Some(cb) => dom::window()
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .is_err(),
        None => false,
    };
    if failed {
        holder.borrow_mut().take();
    }
}
