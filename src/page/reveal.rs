//! One-shot fade/slide-in for cards as they first scroll into view.

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};
use tracing::trace;

/// Fraction of an element that must be inside the root box to reveal it.
pub const REVEAL_THRESHOLD: f32 = 0.1;
/// Bottom root margin; negative shrinks the root so reveals fire a bit late.
pub const REVEAL_ROOT_MARGIN_BOTTOM: f32 = -50.0;
pub const REVEAL_DELAY: Duration = Duration::from_millis(100);
pub const REVEAL_DURATION: Duration = Duration::from_millis(600);
pub const REVEAL_OFFSET: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub opacity: f32,
    pub offset_y: f32,
}

impl RevealStyle {
    pub const SETTLED: RevealStyle = RevealStyle {
        opacity: 1.0,
        offset_y: 0.0,
    };
    pub const HIDDEN: RevealStyle = RevealStyle {
        opacity: 0.0,
        offset_y: REVEAL_OFFSET,
    };
}

/// Vertical extent of an observed element.
#[derive(Debug, Clone, Copy)]
pub struct RevealRect<'a> {
    pub key: &'a str,
    pub top: f32,
    pub height: f32,
}

/// Share of `[top, top + height)` that lies inside `[root_top, root_bottom)`.
pub fn visible_ratio(top: f32, height: f32, root_top: f32, root_bottom: f32) -> f32 {
    if height <= 0.0 {
        return if top >= root_top && top <= root_bottom { 1.0 } else { 0.0 };
    }
    let overlap = (top + height).min(root_bottom) - top.max(root_top);
    (overlap / height).clamp(0.0, 1.0)
}

fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[derive(Debug, Default)]
pub struct RevealAnimator {
    observed: HashSet<String>,
    revealed: HashMap<String, Instant>,
}

impl RevealAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for key in keys {
            let key = key.into();
            if !self.revealed.contains_key(&key) {
                self.observed.insert(key);
            }
        }
    }

    #[cfg(test)]
    pub fn is_observing(&self, key: &str) -> bool {
        self.observed.contains(key)
    }

    #[cfg(test)]
    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains_key(key)
    }

    /// Reveal every observed element now visible enough inside the root box
    /// starting at `scroll_y`. Revealed elements stop being observed.
    pub fn update<'a>(
        &mut self,
        now: Instant,
        scroll_y: f32,
        viewport_height: f32,
        elements: impl IntoIterator<Item = RevealRect<'a>>,
    ) -> usize {
        if self.observed.is_empty() {
            return 0;
        }
        let root_bottom = scroll_y + viewport_height + REVEAL_ROOT_MARGIN_BOTTOM;
        let mut newly = 0;
        for element in elements {
            if !self.observed.contains(element.key) {
                continue;
            }
            let ratio = visible_ratio(element.top, element.height, scroll_y, root_bottom);
            if ratio > 0.0 && ratio >= REVEAL_THRESHOLD {
                self.observed.remove(element.key);
                self.revealed.insert(element.key.to_string(), now);
                trace!(key = element.key, ratio, "Revealing element");
                newly += 1;
            }
        }
        newly
    }

    pub fn style(&self, key: &str, now: Instant) -> RevealStyle {
        let Some(started) = self.revealed.get(key) else {
            return RevealStyle::SETTLED;
        };
        let elapsed = now.saturating_duration_since(*started);
        if elapsed < REVEAL_DELAY {
            return RevealStyle::HIDDEN;
        }
        let t = (elapsed - REVEAL_DELAY).as_secs_f32() / REVEAL_DURATION.as_secs_f32();
        let progress = ease_out_cubic(t);
        RevealStyle {
            opacity: progress,
            offset_y: REVEAL_OFFSET * (1.0 - progress),
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.revealed
            .values()
            .any(|started| now.saturating_duration_since(*started) < REVEAL_DELAY + REVEAL_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(key: &str, top: f32, height: f32) -> RevealRect<'_> {
        RevealRect { key, top, height }
    }

    #[test]
    fn ratio_accounts_for_partial_overlap() {
        assert_eq!(visible_ratio(0.0, 100.0, 0.0, 500.0), 1.0);
        assert_eq!(visible_ratio(450.0, 100.0, 0.0, 500.0), 0.5);
        assert_eq!(visible_ratio(600.0, 100.0, 0.0, 500.0), 0.0);
        assert_eq!(visible_ratio(-80.0, 100.0, 0.0, 500.0), 0.2);
    }

    #[test]
    fn reveals_once_threshold_is_crossed_with_bottom_margin() {
        let now = Instant::now();
        let mut animator = RevealAnimator::new();
        animator.observe(["card"]);

        // Root is [0, 750); card at 745 shows 5 of 100 px.
        assert_eq!(animator.update(now, 0.0, 800.0, [rect("card", 745.0, 100.0)]), 0);
        // 15 of 100 px now inside.
        assert_eq!(animator.update(now, 10.0, 800.0, [rect("card", 745.0, 100.0)]), 1);
        assert!(animator.is_revealed("card"));
        assert!(!animator.is_observing("card"));
    }

    #[test]
    fn reveal_fires_at_most_once() {
        let start = Instant::now();
        let mut animator = RevealAnimator::new();
        animator.observe(["card"]);
        let element = [rect("card", 1000.0, 200.0)];

        let mut total = 0;
        for (step, scroll_y) in [0.0, 600.0, 0.0, 700.0, 0.0, 900.0].into_iter().enumerate() {
            total += animator.update(
                start + Duration::from_millis(step as u64 * 50),
                scroll_y,
                800.0,
                element,
            );
        }
        assert_eq!(total, 1);

        // Re-observing a revealed element is ignored.
        animator.observe(["card"]);
        assert!(!animator.is_observing("card"));
    }

    #[test]
    fn style_runs_delay_then_transition() {
        let start = Instant::now();
        let mut animator = RevealAnimator::new();
        assert_eq!(animator.style("card", start), RevealStyle::SETTLED);

        animator.observe(["card"]);
        animator.update(start, 0.0, 800.0, [rect("card", 100.0, 100.0)]);

        assert_eq!(animator.style("card", start), RevealStyle::HIDDEN);
        assert_eq!(animator.style("card", start + Duration::from_millis(99)), RevealStyle::HIDDEN);

        let mid = animator.style("card", start + Duration::from_millis(400));
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
        assert!(mid.offset_y > 0.0 && mid.offset_y < REVEAL_OFFSET);
        assert!(animator.is_animating(start + Duration::from_millis(400)));

        let done = animator.style("card", start + Duration::from_millis(700));
        assert!((done.opacity - 1.0).abs() < 1e-6);
        assert!(done.offset_y.abs() < 1e-4);
        assert!(!animator.is_animating(start + Duration::from_millis(700)));
    }
}
