use super::super::state::App;
use super::Effect;
use crate::page::{ClickTarget, PageEvent, PageEvents};
use std::time::Instant;
use tracing::debug;

impl App {
    pub(super) fn handle_click(&mut self, now: Instant, target: ClickTarget) -> Vec<Effect> {
        if matches!(target, ClickTarget::Elsewhere) && !self.page.is_menu_open() {
            return Vec::new();
        }
        debug!(?target, "Click");
        self.page.dispatch(now, PageEvent::Click(target))
    }
}
