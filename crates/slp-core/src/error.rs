use thiserror::Error;

/// Failures a controller can observe. None of them is fatal to the page.
///
/// A selector that resolves to nothing is not an error value: the controller
/// simply returns early and the feature stays absent.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SiteError {
    #[error("request to {url} failed with status {status}")]
    Fetch { url: String, status: u16 },

    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },

    #[error("invalid site config: {0}")]
    Config(String),
}
