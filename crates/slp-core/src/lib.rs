//! Platform-free behaviour of the landing-page enhancement layer.
//!
//! Every controller in `slp-wasm` keeps its state as a small model from this
//! crate and writes the result back to the DOM. Nothing here touches the
//! browser, so the rules can be exercised with plain unit tests.

pub mod accordion;
pub mod animate;
pub mod collapse;
pub mod config;
pub mod counter;
pub mod error;
pub mod form;
pub mod modal;
pub mod nav;
pub mod partials;
pub mod scrollspy;
pub mod selectors;
pub mod tabs;
pub mod theme;
pub mod tooltip;

pub use config::SiteConfig;
pub use error::SiteError;
