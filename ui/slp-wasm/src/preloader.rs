//! Preloader dismissal.
//!
//! Once the partials have settled the preloader fades out; it is removed on
//! its `transitionend` or after a fallback delay, whichever comes first.

use gloo_timers::callback::Timeout;
use slp_core::{SiteConfig, selectors};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::dom;
use crate::events;

pub fn hide(cfg: &SiteConfig) {
    let Some(preloader) = dom::query(selectors::PRELOADER) else {
        return;
    };
    let fallback_ms = cfg.preloader_fallback_ms;

    events::next_frame(move || {
        dom::add_class(&preloader, selectors::HIDDEN);

        let on_end = preloader.clone();
        events::once(&preloader, "transitionend", move |_| cleanup(&on_end));
        Timeout::new(fallback_ms, move || cleanup(&preloader)).forget();
    });
}

fn cleanup(preloader: &Element) {
    if !preloader.is_connected() {
        return;
    }
    if let Some(html) = preloader.dyn_ref::<HtmlElement>() {
        html.set_hidden(true);
    }
    match dom::closest(preloader, selectors::INCLUDE) {
        Some(wrapper) => wrapper.remove(),
        None => preloader.remove(),
    }
}
