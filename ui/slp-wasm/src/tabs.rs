//! Tabbed panels.

use std::rc::Rc;

use slp_core::{selectors, tabs};

use crate::dom;
use crate::events;

pub fn init() {
    let buttons = Rc::new(dom::query_all(selectors::TAB));
    if buttons.is_empty() {
        return;
    }
    let targets: Rc<Vec<Option<String>>> = Rc::new(
        buttons
            .iter()
            .map(|b| b.get_attribute(selectors::TAB_ATTR))
            .collect(),
    );

    for (index, button) in buttons.iter().enumerate() {
        let buttons = Rc::clone(&buttons);
        let targets = Rc::clone(&targets);
        events::on(button, "click", move |_| {
            let panes = dom::query_all(selectors::TAB_PANE);
            let pane_ids: Vec<String> = panes
                .iter()
                .map(|p| p.get_attribute(selectors::TAB_PANE_ATTR).unwrap_or_default())
                .collect();
            let Some(selection) = tabs::select(&targets, &pane_ids, index) else {
                return;
            };
            for (btn, active) in buttons.iter().zip(&selection.buttons) {
                dom::toggle_class(btn, selectors::ACTIVE, *active);
            }
            for (pane, active) in panes.iter().zip(&selection.panes) {
                dom::toggle_class(pane, selectors::ACTIVE, *active);
            }
        });
    }
}
