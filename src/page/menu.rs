use tracing::debug;

/// Open/closed state of the mobile navigation menu.
///
/// While open the page scroll position is pinned at the offset it had when
/// the menu opened, or at the offset the page itself last moved to.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MobileMenu {
    locked_scroll: Option<f32>,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.locked_scroll.is_some()
    }

    pub fn locked_scroll(&self) -> Option<f32> {
        self.locked_scroll
    }

    pub fn toggle(&mut self, scroll_y: f32) {
        self.locked_scroll = match self.locked_scroll {
            Some(_) => None,
            None => Some(scroll_y),
        };
        debug!(open = self.is_open(), "Mobile menu toggled");
    }

    /// Move the pinned offset to `scroll_y` if the menu is open.
    pub fn repin(&mut self, scroll_y: f32) {
        if let Some(locked) = self.locked_scroll.as_mut() {
            *locked = scroll_y;
        }
    }

    /// Returns whether the menu was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.locked_scroll.take().is_some();
        if was_open {
            debug!("Mobile menu closed");
        }
        was_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_pins_scroll_offset_while_open() {
        let mut menu = MobileMenu::default();
        menu.toggle(420.0);
        assert!(menu.is_open());
        assert_eq!(menu.locked_scroll(), Some(420.0));
        menu.toggle(999.0);
        assert!(!menu.is_open());
        assert_eq!(menu.locked_scroll(), None);
    }

    #[test]
    fn repin_only_moves_an_open_lock() {
        let mut menu = MobileMenu::default();
        menu.repin(300.0);
        assert_eq!(menu.locked_scroll(), None);

        menu.toggle(120.0);
        menu.repin(300.0);
        assert_eq!(menu.locked_scroll(), Some(300.0));
    }

    #[test]
    fn close_is_idempotent() {
        let mut menu = MobileMenu::default();
        assert!(!menu.close());
        menu.toggle(0.0);
        assert!(menu.close());
        assert!(!menu.close());
    }
}
