//! Collapse toggles (`data-bs-toggle="collapse"`).
//!
//! A toggle names its panel with a selector in `data-bs-target`. The panel's
//! `show` class is the serialised state; the toggle mirrors it into
//! `aria-expanded`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collapse {
    Shown,
    Hidden,
}

impl Collapse {
    pub fn from_shown(shown: bool) -> Self {
        if shown { Self::Shown } else { Self::Hidden }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Shown => Self::Hidden,
            Self::Hidden => Self::Shown,
        }
    }

    pub fn is_shown(self) -> bool {
        self == Self::Shown
    }

    pub fn aria_expanded(self) -> &'static str {
        if self.is_shown() { "true" } else { "false" }
    }
}

/// Selector named by `data-bs-target`; blank means the toggle is inert.
pub fn target_selector(attr: Option<&str>) -> Option<&str> {
    attr.map(str::trim).filter(|s| !s.is_empty())
}

/// State after a click. `current` is `None` when the selector matched
/// nothing; the click is then left alone, default action included.
pub fn click(current: Option<Collapse>) -> Option<Collapse> {
    current.map(Collapse::toggled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_flips_hidden_and_shown() {
        let opened = click(Some(Collapse::from_shown(false))).unwrap();
        assert_eq!(opened, Collapse::Shown);
        assert_eq!(opened.aria_expanded(), "true");
        let closed = click(Some(opened)).unwrap();
        assert_eq!(closed, Collapse::Hidden);
        assert_eq!(closed.aria_expanded(), "false");
    }

    #[test]
    fn missing_target_changes_nothing() {
        assert_eq!(click(None), None);
    }

    #[test]
    fn blank_target_attribute_is_inert() {
        assert_eq!(target_selector(None), None);
        assert_eq!(target_selector(Some("  ")), None);
        assert_eq!(target_selector(Some(" #mainNav ")), Some("#mainNav"));
    }
}
