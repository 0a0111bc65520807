//! Keeps the reader anchored to the same section across a resize burst.
//!
//! The first resize signal of a burst snapshots the section under the
//! (pre-reflow) effective scroll position. Later signals in the same burst
//! only push the settlement deadline out. On settlement the snapshot's id is
//! looked up again in the reflowed layout and the page jumps, without
//! animation, so that section sits just below the navbar.

use super::debounce::Debouncer;
use super::locator::{Section, locate};
use super::sampler::{LayoutSource, sample};
use std::time::{Duration, Instant};
use tracing::debug;

/// Lookahead used when capturing the anchor section.
pub const RESIZE_BIAS: f32 = 50.0;
/// Quiet period after the last resize signal before the burst settles.
pub const RESIZE_SETTLE: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurstPhase {
    Idle,
    Bursting,
}

#[derive(Debug)]
pub struct ResizePreserver {
    settle: Debouncer<()>,
    captured: Option<Section>,
}

impl Default for ResizePreserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ResizePreserver {
    pub fn new() -> Self {
        Self {
            settle: Debouncer::new(RESIZE_SETTLE),
            captured: None,
        }
    }

    pub fn phase(&self) -> BurstPhase {
        if self.settle.is_pending() {
            BurstPhase::Bursting
        } else {
            BurstPhase::Idle
        }
    }

    #[cfg(test)]
    pub fn captured(&self) -> Option<&Section> {
        self.captured.as_ref()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.settle.deadline()
    }

    /// Record a resize signal. `layout` must still describe the geometry
    /// from before this signal's reflow.
    pub fn on_resize(&mut self, now: Instant, layout: &impl LayoutSource) {
        if self.phase() == BurstPhase::Idle {
            let sample = sample(layout);
            let sections = layout.sections();
            self.captured = locate(sample.effective_position(RESIZE_BIAS), &sections).cloned();
            debug!(
                scroll_y = sample.scroll_y,
                captured = self.captured.as_ref().map(|s| s.id.as_str()).unwrap_or("-"),
                "Resize burst started"
            );
        }
        self.settle.call(now, ());
    }

    /// Settle the burst if its quiet period has elapsed.
    ///
    /// Returns the scroll offset to jump to, if the captured section still
    /// exists in the reflowed layout.
    pub fn poll(&mut self, now: Instant, layout: &impl LayoutSource) -> Option<f32> {
        self.settle.poll(now)?;
        let captured = self.captured.take()?;
        let Some(section) = layout.section(&captured.id) else {
            debug!(id = %captured.id, "Captured section vanished; skipping correction");
            return None;
        };
        let target = section.top - layout.nav_height();
        debug!(
            id = %section.id,
            old_top = captured.top,
            new_top = section.top,
            target,
            "Resize burst settled"
        );
        Some(target)
    }
}
