//! Scroll-spy link highlighting.
//!
//! Each intersecting section recomputes the whole link set, so when several
//! sections intersect at once the last callback delivered wins.

/// Highlight flags for `hrefs` given the section that just came into view.
pub fn highlight<'a, I>(hrefs: I, section_id: &str) -> Vec<bool>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    hrefs
        .into_iter()
        .map(|href| href.and_then(|h| h.strip_prefix('#')) == Some(section_id))
        .collect()
}
