//! Mobile navigation toggle and current-page highlighting.

use slp_core::nav::{self, MenuState};
use slp_core::selectors;

use crate::dom;
use crate::events;

/// Flip `data-open` on the menu and mirror it into the toggle's
/// `aria-expanded`.
pub fn init_toggle() {
    let (Some(toggle), Some(menu)) = (
        dom::query(selectors::NAV_TOGGLE),
        dom::query(selectors::NAV_MENU),
    ) else {
        return;
    };

    let toggle2 = toggle.clone();
    events::on(&toggle, "click", move |_| {
        let state = MenuState::from_attr(menu.get_attribute(selectors::NAV_OPEN_ATTR).as_deref())
            .toggled();
        dom::set_attr(&menu, selectors::NAV_OPEN_ATTR, state.as_attr());
        dom::set_attr(&toggle2, "aria-expanded", state.as_attr());
    });
}

/// Mark the menu link pointing at the current page.
pub fn activate_current() {
    let Some(menu) = dom::query(selectors::NAV_MENU) else {
        return;
    };
    let pathname = dom::window().location().pathname().unwrap_or_default();
    let page = nav::current_page(&pathname);

    let links = dom::query_all_within(&menu, "a[href]");
    let hrefs: Vec<Option<String>> = links.iter().map(|a| a.get_attribute("href")).collect();
    if let Some(index) = nav::active_link(hrefs.iter().map(Option::as_deref), page) {
        dom::add_class(&links[index], selectors::ACTIVE);
    }
}
