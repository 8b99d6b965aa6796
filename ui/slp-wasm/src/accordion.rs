//! FAQ accordion.
//!
//! Each `.faq-question` is followed by its answer panel. Opening one question
//! closes the others; the panel's `max-height` animates between zero and its
//! content height.

use std::cell::RefCell;
use std::rc::Rc;

use slp_core::accordion::{Accordion, PanelHeight};
use slp_core::selectors;
use web_sys::Element;

use crate::dom;
use crate::events;

pub fn init() {
    let questions = Rc::new(dom::query_all(selectors::FAQ_QUESTION));
    if questions.is_empty() {
        return;
    }

    let expanded = questions
        .iter()
        .map(|q| q.get_attribute("aria-expanded").as_deref() == Some("true"))
        .collect();
    let state = Rc::new(RefCell::new(Accordion::new(expanded)));

    for (index, question) in questions.iter().enumerate() {
        let questions = Rc::clone(&questions);
        let state = Rc::clone(&state);
        events::on(question, "click", move |_| {
            let mut state = state.borrow_mut();
            state.click(index);
            for (i, (q, expanded)) in questions.iter().zip(state.expanded()).enumerate() {
                render(q, *expanded, state.height(i));
            }
        });
    }
}

fn render(question: &Element, expanded: bool, height: PanelHeight) {
    dom::set_attr(question, "aria-expanded", if expanded { "true" } else { "false" });
    let Some(answer) = question.next_element_sibling() else {
        return;
    };
    match height {
        PanelHeight::Content => {
            let natural = answer.scroll_height();
            dom::set_style(&answer, "max-height", &format!("{natural}px"));
        }
        PanelHeight::Zero => dom::set_style(&answer, "max-height", "0"),
    }
}
