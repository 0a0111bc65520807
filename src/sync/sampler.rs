use super::locator::Section;

/// Visible area of the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Live layout oracle: answers are expected to reflect the current geometry
/// at the moment of the call and must not be cached by callers.
pub trait LayoutSource {
    fn scroll_y(&self) -> f32;
    fn nav_height(&self) -> f32;
    fn viewport(&self) -> Viewport;
    fn sections(&self) -> Vec<Section>;

    fn section(&self, id: &str) -> Option<Section> {
        self.sections().into_iter().find(|section| section.id == id)
    }
}

/// One consistent reading of the scroll-related metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    pub scroll_y: f32,
    pub nav_height: f32,
    pub viewport: Viewport,
}

impl ScrollSample {
    /// Scroll offset shifted past the fixed navbar plus a lookahead bias.
    pub fn effective_position(&self, bias: f32) -> f32 {
        self.scroll_y + self.nav_height + bias
    }
}

pub fn sample(source: &impl LayoutSource) -> ScrollSample {
    ScrollSample {
        scroll_y: source.scroll_y(),
        nav_height: source.nav_height(),
        viewport: source.viewport(),
    }
}
