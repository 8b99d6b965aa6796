//! Tooltip placement.

/// Viewport rectangle of the hovered element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Anchor point for the tooltip: horizontally centred on the element and
/// `offset` pixels above its top edge. The stylesheet translates the tooltip
/// so this point is its bottom centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub left: f64,
    pub top: f64,
}

impl Anchor {
    pub fn above(rect: Rect, offset: f64) -> Self {
        Self {
            left: rect.left + rect.width / 2.0,
            top: rect.top - offset,
        }
    }

    pub fn css_left(&self) -> String {
        format!("{}px", self.left)
    }

    pub fn css_top(&self) -> String {
        format!("{}px", self.top)
    }
}

/// How a fading tooltip leaves the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// No transition is declared, so no `transitionend` will ever fire.
    Now,
    /// Wait for `transitionend`; force removal after `fallback_ms` if it
    /// never arrives (e.g. the element is hidden mid-fade).
    AfterTransition { fallback_ms: u32 },
}

impl Removal {
    /// Decide from the computed `transition-duration` and
    /// `transition-delay` lists.
    pub fn from_computed(durations: &str, delays: &str, grace_ms: u32) -> Self {
        match transition_ms(durations, delays) {
            0 => Self::Now,
            total => Self::AfterTransition {
                fallback_ms: total.saturating_add(grace_ms),
            },
        }
    }
}

/// Longest duration + delay across a computed transition list. Shorter
/// lists repeat, as CSS does when pairing them.
pub fn transition_ms(durations: &str, delays: &str) -> u32 {
    let durations: Vec<u32> = durations.split(',').map(css_time_ms).collect();
    let delays: Vec<u32> = delays.split(',').map(css_time_ms).collect();
    let n = durations.len().max(delays.len());
    (0..n)
        .map(|i| durations[i % durations.len()].saturating_add(delays[i % delays.len()]))
        .max()
        .unwrap_or(0)
}

/// `"0.5s"` / `"250ms"` to whole milliseconds. Negative or unreadable
/// values count as zero.
fn css_time_ms(raw: &str) -> u32 {
    let raw = raw.trim();
    let (number, scale) = if let Some(ms) = raw.strip_suffix("ms") {
        (ms, 1.0)
    } else if let Some(s) = raw.strip_suffix('s') {
        (s, 1000.0)
    } else {
        return 0;
    };
    match number.trim().parse::<f64>() {
        Ok(v) if v > 0.0 => (v * scale).round() as u32,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centred_above_the_element() {
        let rect = Rect {
            left: 100.0,
            top: 240.0,
            width: 80.0,
            height: 24.0,
        };
        let anchor = Anchor::above(rect, 10.0);
        assert_eq!(anchor, Anchor { left: 140.0, top: 230.0 });
        assert_eq!(anchor.css_left(), "140px");
        assert_eq!(anchor.css_top(), "230px");
    }

    #[test]
    fn fractional_positions_are_kept() {
        let rect = Rect {
            left: 10.25,
            top: 5.0,
            width: 3.0,
            height: 1.0,
        };
        assert_eq!(Anchor::above(rect, 10.0).css_left(), "11.75px");
        assert_eq!(Anchor::above(rect, 10.0).css_top(), "-5px");
    }

    #[test]
    fn no_transition_removes_immediately() {
        assert_eq!(Removal::from_computed("0s", "0s", 50), Removal::Now);
        assert_eq!(Removal::from_computed("", "", 50), Removal::Now);
    }

    #[test]
    fn long_fade_is_not_cut_short() {
        // opacity .5s: the node must outlive the 500 ms fade
        assert_eq!(
            Removal::from_computed("0.5s", "0s", 50),
            Removal::AfterTransition { fallback_ms: 550 }
        );
        assert_eq!(
            Removal::from_computed("2s", "0s", 0),
            Removal::AfterTransition { fallback_ms: 2000 }
        );
    }

    #[test]
    fn longest_entry_with_delay_wins() {
        assert_eq!(transition_ms("0.2s, 300ms", "0s, 0.1s"), 400);
        // delay list shorter than duration list repeats
        assert_eq!(transition_ms("100ms, 250ms, 50ms", "20ms"), 270);
        assert_eq!(transition_ms("-1s, junk", "0s"), 0);
    }
}
