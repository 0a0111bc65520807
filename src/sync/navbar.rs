use super::locator::{Section, locate};
use super::sampler::ScrollSample;
use tracing::debug;

/// Scroll offset past which the navbar switches to its compact style.
pub const COMPACT_THRESHOLD: f32 = 50.0;
/// Scroll offset past which the scroll-to-top button is shown.
pub const SCROLL_TOP_THRESHOLD: f32 = 300.0;
/// Lookahead so a section becomes active slightly before reaching the top.
pub const HIGHLIGHT_BIAS: f32 = 100.0;

pub fn is_compact(scroll_y: f32) -> bool {
    scroll_y > COMPACT_THRESHOLD
}

pub fn shows_scroll_top(scroll_y: f32) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD
}

/// Scroll-derived UI flags, recomputed on every settled scroll.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavbarState {
    pub compact: bool,
    pub scroll_top_visible: bool,
    pub active_section: Option<String>,
}

impl NavbarState {
    /// Recompute every flag from one sample. Returns whether anything changed.
    ///
    /// When no section contains the effective position the previous active
    /// section is kept, so overscrolling past either end does not clear the
    /// highlighted link.
    pub fn apply(&mut self, sample: &ScrollSample, sections: &[Section]) -> bool {
        let before = self.clone();

        self.apply_thresholds(sample.scroll_y);
        let effective = sample.effective_position(HIGHLIGHT_BIAS);
        if let Some(section) = locate(effective, sections) {
            if self.active_section.as_deref() != Some(section.id.as_str()) {
                self.active_section = Some(section.id.clone());
            }
        }

        let changed = *self != before;
        if changed {
            debug!(
                scroll_y = sample.scroll_y,
                effective,
                compact = self.compact,
                scroll_top_visible = self.scroll_top_visible,
                active = self.active_section.as_deref().unwrap_or("-"),
                "Navbar state updated"
            );
        }
        changed
    }

    /// Threshold flags only; used for the initial pass on page ready.
    pub fn apply_thresholds(&mut self, scroll_y: f32) {
        self.compact = is_compact(scroll_y);
        self.scroll_top_visible = shows_scroll_top(scroll_y);
    }

    /// Whether a navigation link targeting `href` should render as active.
    pub fn is_link_active(&self, href: &str) -> bool {
        match (href.strip_prefix('#'), self.active_section.as_deref()) {
            (Some(target), Some(active)) => target == active,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sync::sampler::Viewport;

    fn sections() -> Vec<Section> {
        vec![
            Section::new("intro", 0.0, 400.0),
            Section::new("about", 400.0, 500.0),
            Section::new("contact", 900.0, 400.0),
        ]
    }

    fn sample_at(scroll_y: f32) -> ScrollSample {
        ScrollSample {
            scroll_y,
            nav_height: 80.0,
            viewport: Viewport::new(1280.0, 800.0),
        }
    }

    #[test]
    fn thresholds_are_strict() {
        assert!(!is_compact(50.0));
        assert!(is_compact(50.5));
        assert!(!shows_scroll_top(300.0));
        assert!(shows_scroll_top(301.0));
        assert!(!is_compact(0.0));
        assert!(!shows_scroll_top(-20.0));
    }

    #[test]
    fn active_section_follows_biased_position() {
        let sections = sections();
        let mut state = NavbarState::default();

        assert!(state.apply(&sample_at(250.0), &sections));
        assert_eq!(state.active_section.as_deref(), Some("about"));
        assert!(state.compact);
        assert!(!state.scroll_top_visible);

        state.apply(&sample_at(50.0), &sections);
        assert_eq!(state.active_section.as_deref(), Some("intro"));
        assert!(!state.compact);
    }

    #[test]
    fn no_match_keeps_previous_active_section() {
        let sections = sections();
        let mut state = NavbarState::default();
        state.apply(&sample_at(250.0), &sections);

        state.apply(&sample_at(1250.0), &sections);
        assert_eq!(state.active_section.as_deref(), Some("about"));
        assert!(state.compact);
        assert!(state.scroll_top_visible);
    }

    #[test]
    fn reapplying_same_sample_reports_no_change() {
        let sections = sections();
        let mut state = NavbarState::default();
        assert!(state.apply(&sample_at(700.0), &sections));
        assert!(!state.apply(&sample_at(700.0), &sections));
    }

    #[test]
    fn link_activity_matches_fragment() {
        let state = NavbarState {
            active_section: Some("about".to_string()),
            ..NavbarState::default()
        };
        assert!(state.is_link_active("#about"));
        assert!(!state.is_link_active("#contact"));
        assert!(!state.is_link_active("about"));
        assert!(!NavbarState::default().is_link_active("#about"));
    }
}
