//! Startup Landing Page WASM frontend.
//!
//! Pure Rust + WASM enhancement layer for the static marketing pages. Each
//! controller lives in its own module and activates only when the markup it
//! looks for is present.

pub mod accordion;
pub mod animate;
pub mod collapse;
pub mod config;
pub mod counter;
pub mod dark_mode;
pub mod dom;
pub mod events;
pub mod footer;
pub mod form;
pub mod modal;
pub mod nav;
pub mod net;
pub mod observer;
pub mod partials;
pub mod preloader;
pub mod scrollspy;
pub mod tabs;
pub mod tooltip;

use wasm_bindgen::prelude::*;

/// WASM entry point, called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    dom_ready().await;
    init().await
}

/// Resolves once the document has been parsed.
async fn dom_ready() {
    let doc = dom::document();
    if doc.ready_state() != "loading" {
        return;
    }
    let (tx, rx) = futures::channel::oneshot::channel::<()>();
    events::once(&doc, "DOMContentLoaded", move |_| {
        let _ = tx.send(());
    });
    let _ = rx.await;
}

/// Main initialisation sequence.
async fn init() -> Result<(), JsValue> {
    let cfg = config::load();

    // Controllers that do not depend on included fragments
    collapse::init();
    counter::init(&cfg);
    tabs::init();
    scrollspy::init(&cfg);
    tooltip::init(&cfg);
    form::init(&cfg);

    // Header/footer markup arrives with the partials; everything below needs it
    partials::load_partials().await;

    nav::init_toggle();
    dark_mode::init(&cfg);
    nav::activate_current();
    modal::init();
    accordion::init();
    footer::update_year();
    preloader::hide(&cfg);
    animate::init(&cfg);

    Ok(())
}
