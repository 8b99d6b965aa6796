//! Site configuration.
//!
//! Defaults reproduce the template's stock behaviour. A page can override any
//! subset with an inline JSON block; unknown keys are rejected so typos show up
//! in the console instead of being silently ignored.

use serde::{Deserialize, Serialize};

use crate::error::SiteError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SiteConfig {
    /// POST target for every `form[data-ajax]`.
    pub form_endpoint: String,
    /// localStorage key holding `"true"` / `"false"`.
    pub dark_mode_key: String,

    pub busy_label: String,
    pub fallback_submit_label: String,
    pub success_message: String,
    pub failure_message: String,

    pub default_animation: String,
    pub animate_threshold: f64,
    pub counter_threshold: f64,
    pub scrollspy_threshold: f64,

    pub counter_duration_ms: u32,
    pub frame_interval_ms: u32,

    pub preloader_fallback_ms: u32,
    pub tooltip_delay_ms: u32,
    pub tooltip_offset_px: f64,
    /// Slack added to the tooltip's computed fade before forcing removal.
    pub tooltip_grace_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            form_endpoint: "https://example.com/api/forms".to_owned(),
            dark_mode_key: "slp:dark-mode".to_owned(),
            busy_label: "Sending...".to_owned(),
            fallback_submit_label: "Submit".to_owned(),
            success_message: "Thanks! We will be in touch soon.".to_owned(),
            failure_message: "Something went wrong. Please try again.".to_owned(),
            default_animation: "fade-up".to_owned(),
            animate_threshold: 0.1,
            counter_threshold: 0.35,
            scrollspy_threshold: 0.5,
            counter_duration_ms: 1200,
            frame_interval_ms: 16,
            preloader_fallback_ms: 450,
            tooltip_delay_ms: 10,
            tooltip_offset_px: 10.0,
            tooltip_grace_ms: 50,
        }
    }
}

impl SiteConfig {
    /// Parse an override block. Blank input yields the defaults.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw).map_err(|err| SiteError::Config(err.to_string()))
    }
}
