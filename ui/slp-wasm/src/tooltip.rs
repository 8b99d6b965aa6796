//! Hover tooltips.
//!
//! Each hover builds its own `.tooltip` node from `data-tooltip`, anchors it
//! above the element, fades it in, and removes it once the fade-out
//! transition ends.

use gloo_timers::callback::Timeout;
use slp_core::tooltip::{Anchor, Rect, Removal};
use slp_core::{SiteConfig, selectors};
use web_sys::Element;

use crate::dom;
use crate::events;

pub fn init(cfg: &SiteConfig) {
    for el in dom::query_all(selectors::TOOLTIP) {
        let cfg = cfg.clone();
        let host = el.clone();
        events::on(&el, "mouseenter", move |_| show(&host, &cfg));
    }
}

fn show(host: &Element, cfg: &SiteConfig) {
    let Some(tooltip) = dom::create_element("div") else {
        return;
    };
    tooltip.set_class_name(selectors::TOOLTIP_CLASS);
    tooltip.set_text_content(host.get_attribute(selectors::TOOLTIP_ATTR).as_deref());
    if let Err(err) = dom::body().append_child(&tooltip) {
        gloo_console::warn!("could not attach tooltip", err);
        return;
    }

    let rect = host.get_bounding_client_rect();
    let anchor = Anchor::above(
        Rect {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        },
        cfg.tooltip_offset_px,
    );
    dom::set_style(&tooltip, "left", &anchor.css_left());
    dom::set_style(&tooltip, "top", &anchor.css_top());

    let fading_in = tooltip.clone();
    Timeout::new(cfg.tooltip_delay_ms, move || {
        dom::add_class(&fading_in, selectors::VISIBLE);
    })
    .forget();

    let grace_ms = cfg.tooltip_grace_ms;
    events::once(host, "mouseleave", move |_| hide(tooltip, grace_ms));
}

fn hide(tooltip: Element, grace_ms: u32) {
    dom::remove_class(&tooltip, selectors::VISIBLE);

    let (durations, delays) = computed_transition(&tooltip);
    match Removal::from_computed(&durations, &delays, grace_ms) {
        Removal::Now => tooltip.remove(),
        Removal::AfterTransition { fallback_ms } => {
            let on_end = tooltip.clone();
            events::once(&tooltip, "transitionend", move |_| on_end.remove());
            Timeout::new(fallback_ms, move || tooltip.remove()).forget();
        }
    }
}

fn computed_transition(el: &Element) -> (String, String) {
    let Some(style) = dom::window().get_computed_style(el).ok().flatten() else {
        return (String::new(), String::new());
    };
    (
        style.get_property_value("transition-duration").unwrap_or_default(),
        style.get_property_value("transition-delay").unwrap_or_default(),
    )
}
