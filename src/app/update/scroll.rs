use super::super::state::App;
use super::Effect;
use crate::page::{PageEvent, PageEvents};
use crate::sync::Viewport;
use std::time::Instant;
use tracing::debug;

impl App {
    pub(super) fn handle_scrolled(&mut self, now: Instant, offset_y: f32) -> Vec<Effect> {
        let offset_y = if offset_y.is_finite() {
            offset_y.max(0.0)
        } else {
            0.0
        };
        if (offset_y - self.page.scroll_y()).abs() < f32::EPSILON {
            return Vec::new();
        }
        self.page.dispatch(now, PageEvent::Scroll(offset_y))
    }

    pub(super) fn handle_window_resized(
        &mut self,
        now: Instant,
        width: f32,
        height: f32,
    ) -> Vec<Effect> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            debug!(width, height, "Ignoring degenerate window size");
            return Vec::new();
        }
        self.page
            .dispatch(now, PageEvent::Resize(Viewport::new(width, height)))
    }
}
