//! Scroll-triggered animation classes.

use slp_core::{SiteConfig, animate, selectors};

use crate::dom;
use crate::observer::{self, Trigger};

pub fn init(cfg: &SiteConfig) {
    let targets = dom::query_all(selectors::ANIMATE);
    let default = cfg.default_animation.clone();
    observer::watch(&targets, cfg.animate_threshold, Trigger::Once, move |el| {
        let attr = el.get_attribute(selectors::ANIMATE_ATTR);
        dom::add_class(el, animate::animation_class(attr.as_deref(), &default));
    });
}
