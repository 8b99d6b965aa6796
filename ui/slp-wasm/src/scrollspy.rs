//! Scroll spy.
//!
//! Highlights the `[data-scrollspy]` link whose `#fragment` names the
//! `[data-section]` that just crossed half visibility. When several sections
//! intersect together, whichever callback arrives last wins.

use slp_core::{SiteConfig, scrollspy, selectors};

use crate::dom;
use crate::observer::{self, Trigger};

pub fn init(cfg: &SiteConfig) {
    let sections = dom::query_all(selectors::SECTION);
    let links = dom::query_all(selectors::SCROLLSPY);
    if sections.is_empty() || links.is_empty() {
        return;
    }

    observer::watch(&sections, cfg.scrollspy_threshold, Trigger::Every, move |section| {
        let hrefs: Vec<Option<String>> = links.iter().map(|l| l.get_attribute("href")).collect();
        let flags = scrollspy::highlight(hrefs.iter().map(Option::as_deref), &section.id());
        for (link, active) in links.iter().zip(flags) {
            dom::toggle_class(link, selectors::ACTIVE, active);
        }
    });
}
