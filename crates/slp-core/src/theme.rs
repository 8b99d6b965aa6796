//! Light/dark preference resolution.

/// Where the resolved theme came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    Stored,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeChoice {
    pub dark: bool,
    pub source: ThemeSource,
}

/// Resolve the initial theme.
///
/// An explicit stored value wins; only the literal `"true"` means dark. A
/// missing or empty value defers to the system colour scheme, which itself
/// defaults to light when the browser cannot answer.
pub fn resolve(stored: Option<&str>, system_prefers_dark: bool) -> ThemeChoice {
    match stored {
        Some(value) if !value.is_empty() => ThemeChoice {
            dark: value == "true",
            source: ThemeSource::Stored,
        },
        _ => ThemeChoice {
            dark: system_prefers_dark,
            source: ThemeSource::System,
        },
    }
}

/// Storage encoding of the preference.
pub fn encode(dark: bool) -> &'static str {
    if dark { "true" } else { "false" }
}
