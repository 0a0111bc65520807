//! Responsive geometry for the landing page.
//!
//! The view renders every block at exactly the heights computed here, so
//! this model doubles as the layout oracle for scroll synchronization.

use super::content::{SECTIONS, SectionContent, SectionKind};
use crate::sync::{Section, Viewport};

pub const MOBILE_BREAKPOINT: f32 = 768.0;
pub const WIDE_BREAKPOINT: f32 = 1024.0;
pub const NAV_HEIGHT: f32 = 80.0;
pub const NAV_HEIGHT_MOBILE: f32 = 64.0;
pub const MAX_CONTENT_WIDTH: f32 = 1200.0;
pub const CARD_GAP: f32 = 24.0;
pub const CARD_PADDING: f32 = 24.0;
pub const CARD_TITLE_HEIGHT: f32 = 32.0;
pub const BODY_LINE_HEIGHT: f32 = 24.0;
pub const HEADER_HEIGHT: f32 = 120.0;
pub const CONTACT_FORM_HEIGHT: f32 = 420.0;
pub const FOOTER_HEIGHT: f32 = 120.0;
pub const HERO_MIN_HEIGHT: f32 = 520.0;
const BODY_CHAR_WIDTH: f32 = 8.0;

pub fn is_mobile(width: f32) -> bool {
    width <= MOBILE_BREAKPOINT
}

pub fn nav_height(width: f32) -> f32 {
    if is_mobile(width) {
        NAV_HEIGHT_MOBILE
    } else {
        NAV_HEIGHT
    }
}

pub fn gutter(width: f32) -> f32 {
    if is_mobile(width) { 16.0 } else { 24.0 }
}

pub fn section_padding(width: f32) -> f32 {
    if is_mobile(width) { 64.0 } else { 96.0 }
}

pub fn columns(width: f32, cards: usize) -> usize {
    let preferred = if width > WIDE_BREAKPOINT {
        3
    } else if width > MOBILE_BREAKPOINT {
        2
    } else {
        1
    };
    preferred.min(cards).max(1)
}

pub fn content_width(width: f32) -> f32 {
    (width - 2.0 * gutter(width)).clamp(1.0, MAX_CONTENT_WIDTH)
}

/// Estimated wrapped line count for `text` in a box `width` pixels wide.
fn wrapped_lines(text: &str, width: f32) -> usize {
    let per_line = ((width / BODY_CHAR_WIDTH).floor() as usize).max(1);
    let mut lines = 1;
    let mut used = 0usize;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        let needed = if used == 0 { len } else { used + 1 + len };
        if needed > per_line && used > 0 {
            lines += 1;
            used = len.min(per_line);
        } else {
            used = needed.min(per_line);
        }
    }
    lines
}

fn card_height(body: &str, card_width: f32) -> f32 {
    let text_width = (card_width - 2.0 * CARD_PADDING).max(1.0);
    2.0 * CARD_PADDING + CARD_TITLE_HEIGHT + wrapped_lines(body, text_width) as f32 * BODY_LINE_HEIGHT
}

/// Absolute geometry of one revealable card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardBox {
    pub key: String,
    pub index: usize,
    pub top: f32,
    pub height: f32,
}

#[derive(Debug, Clone)]
pub struct SectionBox {
    pub content: &'static SectionContent,
    pub top: f32,
    pub height: f32,
    pub columns: usize,
    pub row_heights: Vec<f32>,
    pub cards: Vec<CardBox>,
}

impl SectionBox {
    pub fn id(&self) -> &'static str {
        self.content.id
    }
}

#[derive(Debug, Clone)]
pub struct PageLayout {
    pub viewport: Viewport,
    pub nav_height: f32,
    pub sections: Vec<SectionBox>,
    pub total_height: f32,
}

impl PageLayout {
    pub fn compute(viewport: Viewport) -> Self {
        let width = viewport.width.max(1.0);
        let padding = section_padding(width);
        let inner = content_width(width);
        let mut cursor = 0.0f32;
        let mut sections = Vec::with_capacity(SECTIONS.len());

        for content in SECTIONS.iter() {
            let top = cursor;
            let (height, columns, row_heights, cards) = match content.kind {
                SectionKind::Hero => (viewport.height.max(HERO_MIN_HEIGHT), 1, Vec::new(), Vec::new()),
                SectionKind::Contact => (
                    2.0 * padding + HEADER_HEIGHT + CONTACT_FORM_HEIGHT,
                    1,
                    Vec::new(),
                    Vec::new(),
                ),
                SectionKind::Cards { class, cards } => {
                    let columns = columns(width, cards.len());
                    let card_width = (inner - CARD_GAP * (columns - 1) as f32) / columns as f32;
                    let row_heights: Vec<f32> = cards
                        .chunks(columns)
                        .map(|row| {
                            row.iter()
                                .map(|card| card_height(card.body, card_width))
                                .fold(0.0, f32::max)
                        })
                        .collect();

                    let mut boxes = Vec::with_capacity(cards.len());
                    let mut row_top = top + padding + HEADER_HEIGHT;
                    for (row_idx, row_height) in row_heights.iter().enumerate() {
                        for col in 0..columns {
                            let index = row_idx * columns + col;
                            if index >= cards.len() {
                                break;
                            }
                            boxes.push(CardBox {
                                key: format!("{}-{index}", class.key_prefix()),
                                index,
                                top: row_top,
                                height: *row_height,
                            });
                        }
                        row_top += row_height + CARD_GAP;
                    }

                    let rows_total: f32 = row_heights.iter().sum::<f32>()
                        + CARD_GAP * row_heights.len().saturating_sub(1) as f32;
                    (
                        2.0 * padding + HEADER_HEIGHT + rows_total,
                        columns,
                        row_heights,
                        boxes,
                    )
                }
            };
            sections.push(SectionBox {
                content,
                top,
                height,
                columns,
                row_heights,
                cards,
            });
            cursor += height;
        }

        PageLayout {
            viewport,
            nav_height: nav_height(width),
            sections,
            total_height: cursor + FOOTER_HEIGHT,
        }
    }

    pub fn max_scroll(&self) -> f32 {
        (self.total_height - self.viewport.height).max(0.0)
    }

    pub fn section(&self, id: &str) -> Option<&SectionBox> {
        self.sections.iter().find(|section| section.id() == id)
    }

    pub fn hero(&self) -> Option<&SectionBox> {
        self.sections
            .iter()
            .find(|section| matches!(section.content.kind, SectionKind::Hero))
    }

    /// Sections as seen by the synchronizer.
    pub fn section_ranges(&self) -> Vec<Section> {
        self.sections
            .iter()
            .map(|section| Section::new(section.id(), section.top, section.height))
            .collect()
    }

    pub fn cards(&self) -> impl Iterator<Item = &CardBox> {
        self.sections.iter().flat_map(|section| section.cards.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_tile_without_gaps() {
        let layout = PageLayout::compute(Viewport::new(1280.0, 800.0));
        let mut expected_top = 0.0;
        for section in &layout.sections {
            assert!((section.top - expected_top).abs() < 1e-3, "{}", section.id());
            assert!(section.height > 0.0);
            expected_top = section.top + section.height;
        }
        assert!((layout.total_height - expected_top - FOOTER_HEIGHT).abs() < 1e-3);
    }

    #[test]
    fn narrowing_the_viewport_pushes_sections_down() {
        let wide = PageLayout::compute(Viewport::new(1440.0, 900.0));
        let narrow = PageLayout::compute(Viewport::new(600.0, 900.0));
        let wide_contact = wide.section("contact").map(|s| s.top).unwrap_or_default();
        let narrow_contact = narrow.section("contact").map(|s| s.top).unwrap_or_default();
        assert!(narrow_contact > wide_contact);
        assert_eq!(narrow.nav_height, NAV_HEIGHT_MOBILE);
        assert_eq!(wide.nav_height, NAV_HEIGHT);
    }

    #[test]
    fn column_count_follows_breakpoints() {
        assert_eq!(columns(1280.0, 4), 3);
        assert_eq!(columns(1024.0, 4), 2);
        assert_eq!(columns(769.0, 4), 2);
        assert_eq!(columns(768.0, 4), 1);
        assert_eq!(columns(1280.0, 2), 2);
        assert_eq!(columns(1280.0, 0), 1);
    }

    #[test]
    fn cards_stay_inside_their_section() {
        let layout = PageLayout::compute(Viewport::new(900.0, 700.0));
        for section in &layout.sections {
            for card in &section.cards {
                assert!(card.top >= section.top);
                assert!(card.top + card.height <= section.top + section.height + 1e-3);
            }
        }
        assert_eq!(layout.cards().count(), 17);
    }

    #[test]
    fn hero_fills_the_viewport() {
        let tall = PageLayout::compute(Viewport::new(1280.0, 1000.0));
        let short = PageLayout::compute(Viewport::new(1280.0, 300.0));
        assert_eq!(tall.hero().map(|s| s.height), Some(1000.0));
        assert_eq!(short.hero().map(|s| s.height), Some(HERO_MIN_HEIGHT));
    }

    #[test]
    fn wrapping_estimate_grows_with_narrower_boxes() {
        let text = "one two three four five six seven eight nine ten eleven twelve";
        assert!(wrapped_lines(text, 80.0) > wrapped_lines(text, 400.0));
        assert_eq!(wrapped_lines("", 100.0), 1);
    }
}
