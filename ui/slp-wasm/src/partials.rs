//! Partial HTML includes.
//!
//! Fetches every `[data-include]` concurrently and waits for all of them to
//! settle. Failures are absorbed here: the placeholder gets an inline alert
//! and the error goes to the console.

use futures::future::join_all;
use slp_core::partials::Include;
use slp_core::selectors;
use web_sys::Element;

use crate::dom;
use crate::net;

pub async fn load_partials() {
    let targets = dom::query_all(selectors::INCLUDE);
    if targets.is_empty() {
        return;
    }
    gloo_console::log!(format!("loading {} partial(s)", targets.len()));
    join_all(targets.iter().map(load_one)).await;
}

async fn load_one(el: &Element) {
    let Some(src) = el
        .get_attribute(selectors::INCLUDE_ATTR)
        .filter(|src| !src.is_empty())
    else {
        return;
    };

    let result = net::fetch_text(&src).await;
    if let Err(err) = &result {
        gloo_console::error!(err.to_string());
    }
    el.set_inner_html(&Include::from_result(result).markup(&src));
}
