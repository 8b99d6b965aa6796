//! Partial include results.
//!
//! Every placeholder ends in exactly one of two states once loading settles:
//! the fetched markup, or a visible inline error naming the source.

use crate::error::SiteError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Include {
    Loaded(String),
    Failed(SiteError),
}

impl Include {
    pub fn from_result(result: Result<String, SiteError>) -> Self {
        match result {
            Ok(html) => Self::Loaded(html),
            Err(err) => Self::Failed(err),
        }
    }

    /// Markup to place inside the placeholder.
    pub fn markup(&self, src: &str) -> String {
        match self {
            Self::Loaded(html) => html.clone(),
            Self::Failed(_) => error_markup(src),
        }
    }
}

/// Inline message shown in place of a fragment that could not be loaded.
pub fn error_markup(src: &str) -> String {
    format!(
        r#"<div class="alert">Could not load include: {}</div>"#,
        escape_text(src)
    )
}

fn escape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loaded_markup_is_inserted_verbatim() {
        let inc = Include::from_result(Ok("<nav><a href=\"/\">Home</a></nav>".to_owned()));
        assert_eq!(inc.markup("/partials/header.html"), "<nav><a href=\"/\">Home</a></nav>");
    }

    #[test]
    fn failures_show_an_alert_never_the_placeholder() {
        for err in [
            SiteError::Fetch {
                url: "/partials/footer.html".to_owned(),
                status: 404,
            },
            SiteError::Network {
                url: "/partials/footer.html".to_owned(),
                message: "TypeError: Failed to fetch".to_owned(),
            },
        ] {
            let html = Include::from_result(Err(err)).markup("/partials/footer.html");
            assert_eq!(
                html,
                r#"<div class="alert">Could not load include: /partials/footer.html</div>"#
            );
        }
    }

    #[test]
    fn source_is_escaped_in_the_alert() {
        assert_eq!(
            error_markup("<x>&"),
            r#"<div class="alert">Could not load include: &lt;x&gt;&amp;</div>"#
        );
    }
}
