//! Asynchronous form submission lifecycle.

use crate::config::SiteConfig;
use crate::error::SiteError;

pub const STATUS_CLASS: &str = "form-status";

/// Outcome of one POST. Any 2xx is success.
pub fn classify(url: &str, status: u16) -> Result<(), SiteError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SiteError::Fetch {
            url: url.to_owned(),
            status,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Success,
    Failure,
}

impl FormStatus {
    pub fn from_result(result: &Result<(), SiteError>) -> Self {
        if result.is_ok() {
            Self::Success
        } else {
            Self::Failure
        }
    }

    /// Full `class` attribute for the status element.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Idle => STATUS_CLASS,
            Self::Success => "form-status is-success",
            Self::Failure => "form-status is-error",
        }
    }

    pub fn message(self, cfg: &SiteConfig) -> &str {
        match self {
            Self::Idle => "",
            Self::Success => &cfg.success_message,
            Self::Failure => &cfg.failure_message,
        }
    }

    /// Only a successful submission clears the fields.
    pub fn resets_fields(self) -> bool {
        self == Self::Success
    }
}

/// Label to restore on the submit control once the request settles.
pub fn restored_label<'a>(original: Option<&'a str>, cfg: &'a SiteConfig) -> &'a str {
    match original {
        Some(label) if !label.is_empty() => label,
        _ => &cfg.fallback_submit_label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_hundreds_are_success() {
        assert!(classify("/f", 200).is_ok());
        assert!(classify("/f", 204).is_ok());
        assert!(classify("/f", 299).is_ok());
    }

    #[test]
    fn server_error_is_failure_without_reset() {
        let cfg = SiteConfig::default();
        let result = classify("https://example.com/api/forms", 500);
        assert_eq!(
            result,
            Err(SiteError::Fetch {
                url: "https://example.com/api/forms".to_owned(),
                status: 500,
            })
        );
        let status = FormStatus::from_result(&result);
        assert_eq!(status, FormStatus::Failure);
        assert_eq!(status.message(&cfg), "Something went wrong. Please try again.");
        assert_eq!(status.class_name(), "form-status is-error");
        assert!(!status.resets_fields());
    }

    #[test]
    fn redirects_and_client_errors_fail() {
        assert!(classify("/f", 302).is_err());
        assert!(classify("/f", 404).is_err());
    }

    #[test]
    fn network_failure_maps_to_failure_status() {
        let result = Err(SiteError::Network {
            url: "/f".to_owned(),
            message: "offline".to_owned(),
        });
        assert_eq!(FormStatus::from_result(&result), FormStatus::Failure);
    }

    #[test]
    fn success_resets_and_thanks() {
        let cfg = SiteConfig::default();
        let status = FormStatus::from_result(&Ok(()));
        assert!(status.resets_fields());
        assert_eq!(status.message(&cfg), "Thanks! We will be in touch soon.");
    }

    #[test]
    fn label_falls_back_when_original_missing() {
        let cfg = SiteConfig::default();
        assert_eq!(restored_label(Some("Subscribe"), &cfg), "Subscribe");
        assert_eq!(restored_label(Some(""), &cfg), "Submit");
        assert_eq!(restored_label(None, &cfg), "Submit");
        assert_eq!(FormStatus::Idle.message(&cfg), "");
    }
}
