//! Collapse toggles.
//!
//! One delegated click listener on the document, so toggles inside partials
//! that arrive later work without rebinding.

use slp_core::collapse::{self, Collapse};
use slp_core::selectors;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::dom;
use crate::events;

pub fn init() {
    events::on(&dom::document(), "click", |e| {
        let Some(toggle) = e
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| dom::closest(&el, selectors::COLLAPSE_TOGGLE))
        else {
            return;
        };
        let attr = toggle.get_attribute(selectors::COLLAPSE_TARGET_ATTR);
        let Some(selector) = collapse::target_selector(attr.as_deref()) else {
            return;
        };
        let target = dom::query(selector);
        let current = target
            .as_ref()
            .map(|t| Collapse::from_shown(t.class_list().contains(selectors::SHOW)));
        let (Some(target), Some(next)) = (target, collapse::click(current)) else {
            return;
        };

        e.prevent_default();
        dom::toggle_class(&target, selectors::SHOW, next.is_shown());
        dom::set_attr(&toggle, "aria-expanded", next.aria_expanded());
    });
}
