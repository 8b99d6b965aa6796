//! Mobile menu state and current-page link matching.

/// Open/closed state of the collapsible menu, serialised as `data-open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    Open,
    #[default]
    Closed,
}

impl MenuState {
    pub fn from_attr(value: Option<&str>) -> Self {
        if value == Some("true") {
            Self::Open
        } else {
            Self::Closed
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    /// Value written to both `data-open` and `aria-expanded`.
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Open => "true",
            Self::Closed => "false",
        }
    }
}

/// File name of the current page; the site root maps to `index.html`.
pub fn current_page(pathname: &str) -> &str {
    match pathname.rsplit('/').next() {
        Some(last) if !last.is_empty() => last,
        _ => "index.html",
    }
}

/// Index of the first link whose href ends with `page`.
pub fn active_link<'a, I>(hrefs: I, page: &str) -> Option<usize>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    hrefs
        .into_iter()
        .position(|href| href.is_some_and(|h| h.ends_with(page)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_serialises() {
        let state = MenuState::from_attr(None);
        assert_eq!(state, MenuState::Closed);
        assert_eq!(state.toggled().as_attr(), "true");
        assert_eq!(MenuState::from_attr(Some("true")).toggled(), MenuState::Closed);
    }

    #[test]
    fn current_page_takes_last_segment() {
        assert_eq!(current_page("/pages/about.html"), "about.html");
        assert_eq!(current_page("/"), "index.html");
        assert_eq!(current_page(""), "index.html");
        assert_eq!(current_page("/blog/"), "index.html");
    }

    #[test]
    fn first_suffix_match_wins() {
        let hrefs = [
            Some("index.html"),
            None,
            Some("/pages/pricing.html"),
            Some("pricing.html"),
        ];
        assert_eq!(active_link(hrefs, "pricing.html"), Some(2));
    }

    #[test]
    fn no_match_marks_nothing() {
        assert_eq!(active_link([Some("index.html")], "contact.html"), None);
    }
}
