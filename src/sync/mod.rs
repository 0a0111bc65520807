//! Scroll and resize driven UI state synchronization.
//!
//! [`Synchronizer`] owns every piece of scroll-derived state: the debounced
//! navbar/highlight pass and the resize position preserver. It never reads
//! the clock itself; callers pass `now` into each handler and call
//! [`Synchronizer::poll`] whenever time advances.

mod debounce;
mod locator;
mod navbar;
mod resize;
mod sampler;

pub use debounce::Debouncer;
pub use locator::Section;
pub use navbar::NavbarState;
pub use resize::ResizePreserver;
pub use sampler::{LayoutSource, Viewport, sample};

use std::time::{Duration, Instant};

/// Quiet period for the combined scroll handler.
pub const SCROLL_DEBOUNCE: Duration = Duration::from_millis(10);

/// Work the synchronizer asks its host to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncEffect {
    /// Navbar flags changed and should be re-rendered.
    NavbarChanged,
    /// Jump, without animation, to this scroll offset.
    JumpTo(f32),
}

#[derive(Debug)]
pub struct Synchronizer {
    scroll: Debouncer<()>,
    navbar: NavbarState,
    resize: ResizePreserver,
}

impl Default for Synchronizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Synchronizer {
    pub fn new() -> Self {
        Self {
            scroll: Debouncer::new(SCROLL_DEBOUNCE),
            navbar: NavbarState::default(),
            resize: ResizePreserver::new(),
        }
    }

    pub fn navbar(&self) -> &NavbarState {
        &self.navbar
    }

    #[cfg(test)]
    pub fn resize_phase(&self) -> resize::BurstPhase {
        self.resize.phase()
    }

    /// Initial pass on page ready: thresholds only, no section highlight.
    pub fn prime(&mut self, layout: &impl LayoutSource) {
        self.navbar.apply_thresholds(layout.scroll_y());
    }

    pub fn on_scroll(&mut self, now: Instant) {
        self.scroll.call(now, ());
    }

    /// `layout` must still reflect the geometry from before this resize.
    pub fn on_resize(&mut self, now: Instant, layout: &impl LayoutSource) {
        self.resize.on_resize(now, layout);
    }

    /// Run every settlement that is due at `now`.
    pub fn poll(&mut self, now: Instant, layout: &impl LayoutSource) -> Vec<SyncEffect> {
        let mut effects = Vec::new();
        if self.scroll.poll(now).is_some() && self.refresh(layout) {
            effects.push(SyncEffect::NavbarChanged);
        }
        if let Some(target) = self.resize.poll(now, layout) {
            effects.push(SyncEffect::JumpTo(target));
        }
        effects
    }

    /// Recompute all scroll-derived flags immediately.
    pub fn refresh(&mut self, layout: &impl LayoutSource) -> bool {
        let sample = sample(layout);
        let sections = layout.sections();
        self.navbar.apply(&sample, &sections)
    }

    /// Earliest pending settlement, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.scroll.deadline(), self.resize.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn is_settled(&self) -> bool {
        self.next_deadline().is_none()
    }
}


#[cfg(test)]
mod tests {
    use super::resize::BurstPhase;
    use super::testing::FakeLayout;
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn scroll_burst_recomputes_once_after_quiet_period() {
        let start = Instant::now();
        let mut layout = FakeLayout::three_sections();
        let mut sync = Synchronizer::new();

        for step in 0..8u64 {
            layout.scroll_y = 30.0 * step as f32;
            sync.on_scroll(start + ms(step * 3));
            assert!(sync.poll(start + ms(step * 3), &layout).is_empty());
        }
        assert_eq!(sync.navbar(), &NavbarState::default());

        let effects = sync.poll(start + ms(21 + 10), &layout);
        assert_eq!(effects, vec![SyncEffect::NavbarChanged]);
        // Last sample was 210 → effective 390 → intro.
        assert_eq!(sync.navbar().active_section.as_deref(), Some("intro"));
        assert!(sync.navbar().compact);
        assert!(sync.is_settled());
    }

    #[test]
    fn end_to_end_highlight_scenario() {
        let start = Instant::now();
        let mut layout = FakeLayout::three_sections();
        let mut sync = Synchronizer::new();

        let mut settle_at = |scroll_y: f32, at: u64, sync: &mut Synchronizer| {
            layout.scroll_y = scroll_y;
            sync.on_scroll(start + ms(at));
            sync.poll(start + ms(at + 10), &layout);
        };

        settle_at(250.0, 0, &mut sync);
        assert_eq!(sync.navbar().active_section.as_deref(), Some("about"));
        settle_at(50.0, 100, &mut sync);
        assert_eq!(sync.navbar().active_section.as_deref(), Some("intro"));
        settle_at(1250.0, 200, &mut sync);
        assert_eq!(sync.navbar().active_section.as_deref(), Some("intro"));
        assert!(sync.navbar().scroll_top_visible);
    }

    #[test]
    fn prime_sets_thresholds_without_highlight() {
        let mut layout = FakeLayout::three_sections();
        layout.scroll_y = 500.0;
        let mut sync = Synchronizer::new();
        sync.prime(&layout);
        assert!(sync.navbar().compact);
        assert!(sync.navbar().scroll_top_visible);
        assert!(sync.navbar().active_section.is_none());
    }

    #[test]
    fn resize_scenario_jumps_to_reflowed_anchor() {
        let start = Instant::now();
        let mut layout = FakeLayout::three_sections();
        layout.scroll_y = 320.0;
        let mut sync = Synchronizer::new();

        sync.on_resize(start, &layout);
        layout.move_section("about", 520.0);
        sync.on_resize(start + ms(40), &layout);
        sync.on_resize(start + ms(90), &layout);
        assert_eq!(sync.resize_phase(), BurstPhase::Bursting);
        assert_eq!(sync.next_deadline(), Some(start + ms(240)));

        assert!(sync.poll(start + ms(200), &layout).is_empty());
        let effects = sync.poll(start + ms(240), &layout);
        assert_eq!(effects, vec![SyncEffect::JumpTo(440.0)]);
        assert_eq!(sync.resize_phase(), BurstPhase::Idle);
    }

    #[test]
    fn deadline_reports_earliest_pending_timer() {
        let start = Instant::now();
        let layout = FakeLayout::three_sections();
        let mut sync = Synchronizer::new();
        assert!(sync.is_settled());

        sync.on_resize(start, &layout);
        sync.on_scroll(start + ms(5));
        assert_eq!(sync.next_deadline(), Some(start + ms(15)));
    }
}
