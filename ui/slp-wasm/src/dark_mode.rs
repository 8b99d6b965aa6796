//! Dark mode preference.
//!
//! Stored value first, then the system colour scheme, then light. Every
//! change of the toggle is written straight back to localStorage.

use gloo_storage::{LocalStorage, Storage};
use slp_core::theme::{self, ThemeSource};
use slp_core::{SiteConfig, selectors};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::dom;
use crate::events;

fn system_prefers_dark() -> bool {
    dom::window()
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .is_some_and(|mq| mq.matches())
}

/// `LocalStorage` panics when the browser has storage disabled.
fn storage_available() -> bool {
    matches!(dom::window().local_storage(), Ok(Some(_)))
}

fn stored(key: &str) -> Option<String> {
    if !storage_available() {
        return None;
    }
    LocalStorage::raw().get_item(key).ok().flatten()
}

fn persist(key: &str, dark: bool) {
    if !storage_available() {
        return;
    }
    if let Err(err) = LocalStorage::set(key, dark) {
        gloo_console::warn!(format!("could not persist {key}: {err}"));
    }
}

fn apply(dark: bool) {
    dom::toggle_class(&dom::body(), selectors::DARK_MODE, dark);
}

pub fn init(cfg: &SiteConfig) {
    let choice = theme::resolve(stored(&cfg.dark_mode_key).as_deref(), system_prefers_dark());
    apply(choice.dark);
    let source = match choice.source {
        ThemeSource::Stored => "saved preference",
        ThemeSource::System => "system colour scheme",
    };
    gloo_console::log!(format!(
        "{} theme from {source}",
        if choice.dark { "dark" } else { "light" }
    ));

    let Some(toggle) = dom::query(selectors::DARK_TOGGLE)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        return;
    };
    toggle.set_checked(choice.dark);

    let key = cfg.dark_mode_key.clone();
    let toggle2 = toggle.clone();
    events::on(&toggle, "change", move |_| {
        let dark = toggle2.checked();
        apply(dark);
        persist(&key, dark);
    });
}
