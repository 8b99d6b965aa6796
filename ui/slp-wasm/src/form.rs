//! Asynchronous form submission.
//!
//! Intercepts `form[data-ajax]` submits and posts the fields to the configured
//! endpoint. The submit control is disabled and relabelled while the single
//! request is in flight, and always restored afterwards.

use std::rc::Rc;

use slp_core::form::{self, FormStatus};
use slp_core::{SiteConfig, selectors};
use wasm_bindgen::JsCast;
use web_sys::{Element, FormData, HtmlFormElement};

use crate::dom;
use crate::events;
use crate::net;

pub fn init(cfg: &SiteConfig) {
    let cfg = Rc::new(cfg.clone());
    for el in dom::query_all(selectors::AJAX_FORM) {
        let Ok(form) = el.dyn_into::<HtmlFormElement>() else {
            continue;
        };
        let cfg = Rc::clone(&cfg);
        let form2 = form.clone();
        events::on(&form, "submit", move |e| {
            e.prevent_default();
            let form = form2.clone();
            let cfg = Rc::clone(&cfg);
            wasm_bindgen_futures::spawn_local(async move {
                submit(&form, &cfg).await;
            });
        });
    }
}

async fn submit(form: &HtmlFormElement, cfg: &SiteConfig) {
    let button = dom::query_within(form, selectors::SUBMIT);
    let status = dom::query_within(form, selectors::FORM_STATUS);

    let data = match FormData::new_with_form(form) {
        Ok(data) => data,
        Err(err) => {
            gloo_console::error!("could not read form fields", err);
            return;
        }
    };

    if let Some(button) = &button {
        set_busy(button, cfg);
    }
    if let Some(status) = &status {
        render_status(status, FormStatus::Idle, cfg);
    }

    let result = net::post_form(&cfg.form_endpoint, data).await;
    if let Err(err) = &result {
        gloo_console::error!(err.to_string());
    }

    let outcome = FormStatus::from_result(&result);
    if let Some(status) = &status {
        render_status(status, outcome, cfg);
    }
    if outcome.resets_fields() {
        form.reset();
    }
    if let Some(button) = &button {
        restore(button, cfg);
    }
}

fn set_busy(button: &Element, cfg: &SiteConfig) {
    dom::set_attr(button, "disabled", "");
    let label = button.text_content().unwrap_or_default();
    dom::set_attr(button, selectors::ORIGINAL_TEXT_ATTR, &label);
    button.set_text_content(Some(&cfg.busy_label));
}

fn restore(button: &Element, cfg: &SiteConfig) {
    let _ = button.remove_attribute("disabled");
    let original = button.get_attribute(selectors::ORIGINAL_TEXT_ATTR);
    button.set_text_content(Some(form::restored_label(original.as_deref(), cfg)));
}

fn render_status(status: &Element, state: FormStatus, cfg: &SiteConfig) {
    status.set_text_content(Some(state.message(cfg)));
    status.set_class_name(state.class_name());
}
