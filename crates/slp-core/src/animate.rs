/// Class applied when a `[data-animate]` element first scrolls into view.
/// An empty attribute means the configured default.
pub fn animation_class<'a>(attr: Option<&'a str>, default: &'a str) -> &'a str {
    match attr.map(str::trim) {
        Some(class) if !class.is_empty() => class,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_class_wins() {
        assert_eq!(animation_class(Some("zoom-in"), "fade-up"), "zoom-in");
    }

    #[test]
    fn bare_attribute_uses_default() {
        assert_eq!(animation_class(Some(""), "fade-up"), "fade-up");
        assert_eq!(animation_class(None, "fade-up"), "fade-up");
    }
}
