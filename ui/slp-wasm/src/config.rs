//! Page-level configuration lookup.

use slp_core::{SiteConfig, selectors};

/// Read `<script type="application/json" data-site-config>` if the page has
/// one. A malformed block is reported and ignored.
pub fn load() -> SiteConfig {
    let Some(block) = crate::dom::query(selectors::SITE_CONFIG) else {
        return SiteConfig::default();
    };
    let raw = block.text_content().unwrap_or_default();
    SiteConfig::from_json(&raw).unwrap_or_else(|err| {
        gloo_console::warn!(err.to_string());
        SiteConfig::default()
    })
}
