//! Counter animation stepping.
//!
//! A run advances by a fixed increment each frame and clamps to the target,
//! so the last rendered value is always the target and nothing overshoots.

use crate::config::SiteConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterSpec {
    pub target: i64,
    pub duration_ms: u32,
    pub suffix: String,
}

impl CounterSpec {
    /// Build from the raw `data-counter` / `data-duration` / `data-suffix`
    /// attributes. Returns `None` when the target is not an integer; an
    /// unparsable duration falls back to the configured default.
    pub fn from_attrs(
        target: &str,
        duration: Option<&str>,
        suffix: Option<&str>,
        cfg: &SiteConfig,
    ) -> Option<Self> {
        let target = parse_leading_int(target)?;
        let duration_ms = duration
            .and_then(parse_leading_int)
            .and_then(|d| u32::try_from(d).ok())
            .unwrap_or(cfg.counter_duration_ms);
        Some(Self {
            target,
            duration_ms,
            suffix: suffix.unwrap_or_default().to_owned(),
        })
    }

    /// Per-frame increment: `ceil(target / (duration / frame))`.
    pub fn step(&self, frame_interval_ms: u32) -> i64 {
        let frames = f64::from(self.duration_ms) / f64::from(frame_interval_ms.max(1));
        if frames < 1.0 {
            return self.target;
        }
        (self.target as f64 / frames).ceil() as i64
    }

    pub fn run(&self, frame_interval_ms: u32) -> CounterRun {
        CounterRun {
            current: 0,
            target: self.target,
            step: self.step(frame_interval_ms),
            done: false,
        }
    }
}

/// Values rendered frame by frame, ending exactly at the target.
#[derive(Debug, Clone)]
pub struct CounterRun {
    current: i64,
    target: i64,
    step: i64,
    done: bool,
}

impl Iterator for CounterRun {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.done {
            return None;
        }
        if self.step <= 0 || self.target <= 0 {
            // Nothing to count up through; land on the target in one frame.
            self.current = self.target;
        } else {
            self.current = self.current.saturating_add(self.step).min(self.target);
        }
        self.done = self.current >= self.target;
        Some(self.current)
    }
}

/// Integer prefix parse in the manner of `parseInt(.., 10)`: leading
/// whitespace and sign allowed, trailing junk ignored.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|v| v * sign)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(target: i64, duration_ms: u32) -> CounterSpec {
        CounterSpec {
            target,
            duration_ms,
            suffix: String::new(),
        }
    }

    #[test]
    fn step_matches_ceiling_formula() {
        // 1200 / 16 = 75 frames
        assert_eq!(spec(1500, 1200).step(16), 20);
        assert_eq!(spec(100, 1200).step(16), 2);
        assert_eq!(spec(7, 1200).step(16), 1);
    }

    #[test]
    fn final_value_is_exact_and_never_overshoots() {
        for target in [1, 7, 99, 100, 1234, 98_765, 1_000_000] {
            for duration in [0, 1, 16, 500, 1200, 3000] {
                let values: Vec<i64> = spec(target, duration).run(16).collect();
                assert_eq!(values.last().copied(), Some(target), "{target}/{duration}");
                assert!(values.iter().all(|v| *v <= target));
                assert!(values.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }

    #[test]
    fn non_positive_target_renders_once() {
        assert_eq!(spec(0, 1200).run(16).collect::<Vec<_>>(), vec![0]);
        assert_eq!(spec(-40, 1200).run(16).collect::<Vec<_>>(), vec![-40]);
    }

    #[test]
    fn attrs_parse_like_parse_int() {
        let cfg = SiteConfig::default();
        let parsed = CounterSpec::from_attrs(" 250px", Some("800ms"), Some("+"), &cfg).unwrap();
        assert_eq!(parsed, CounterSpec {
            target: 250,
            duration_ms: 800,
            suffix: "+".to_owned(),
        });
        assert!(CounterSpec::from_attrs("abc", None, None, &cfg).is_none());
    }

    #[test]
    fn bad_duration_uses_default() {
        let cfg = SiteConfig::default();
        let parsed = CounterSpec::from_attrs("10", Some("soon"), None, &cfg).unwrap();
        assert_eq!(parsed.duration_ms, 1200);
        assert_eq!(parsed.suffix, "");
    }
}
