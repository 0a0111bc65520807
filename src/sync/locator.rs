/// A named page section and its vertical extent, measured from document top.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f32,
    pub height: f32,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f32, height: f32) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Half-open containment: `[top, top + height)`.
    pub fn contains(&self, position: f32) -> bool {
        position >= self.top && position < self.bottom()
    }
}

/// Find the section whose range contains `position`.
///
/// Sections are expected not to overlap; if they do, the first match in
/// iteration order wins. Positions in gaps (above the first section, below
/// the last) or non-finite positions yield `None`.
pub fn locate(position: f32, sections: &[Section]) -> Option<&Section> {
    sections.iter().find(|section| section.contains(position))
}
