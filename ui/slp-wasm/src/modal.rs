//! Modal dialogs.
//!
//! `[data-modal-open="id"]` activates the `.modal` with that id, the modal's
//! own `[data-modal-close]` controls deactivate it, and Escape deactivates
//! every modal.

use std::cell::RefCell;
use std::rc::Rc;

use slp_core::modal::ModalSet;
use slp_core::selectors;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use crate::dom;
use crate::events;

pub fn init() {
    let triggers = dom::query_all(selectors::MODAL_OPEN);
    let modals = Rc::new(dom::query_all(selectors::MODAL));
    if triggers.is_empty() || modals.is_empty() {
        return;
    }

    let ids = modals
        .iter()
        .map(|m| Some(m.id()).filter(|id| !id.is_empty()))
        .collect();
    let set = Rc::new(RefCell::new(ModalSet::new(ids)));

    for trigger in &triggers {
        let target = trigger
            .get_attribute(selectors::MODAL_OPEN_ATTR)
            .unwrap_or_default();
        let set = Rc::clone(&set);
        let modals = Rc::clone(&modals);
        events::on(trigger, "click", move |e| {
            e.prevent_default();
            if let Some(index) = set.borrow_mut().open(&target) {
                dom::add_class(&modals[index], selectors::ACTIVE);
            }
        });
    }

    for (index, modal) in modals.iter().enumerate() {
        for close in dom::query_all_within(modal, selectors::MODAL_CLOSE) {
            let set = Rc::clone(&set);
            let modal = modal.clone();
            events::on(&close, "click", move |_| {
                set.borrow_mut().close(index);
                dom::remove_class(&modal, selectors::ACTIVE);
            });
        }
    }

    events::on(&dom::document(), "keyup", move |e| {
        let Some(key) = e.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        if set.borrow_mut().key_up(&key) {
            for modal in modals.iter() {
                dom::remove_class(modal, selectors::ACTIVE);
            }
        }
    });
}
