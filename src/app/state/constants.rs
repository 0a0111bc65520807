use iced::Color;
use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;

pub(crate) static PAGE_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("page-scroll"));

pub(crate) const PARTICLE_COLOR: Color = Color {
    r: 220.0 / 255.0,
    g: 234.0 / 255.0,
    b: 247.0 / 255.0,
    // 0.8 fill under a 0.3 layer opacity.
    a: 0.8 * 0.3,
};
pub(crate) const NAV_LINK_SIZE: f32 = 16.0;
pub(crate) const HERO_TITLE_SIZE: f32 = 48.0;
pub(crate) const HERO_TITLE_SIZE_MOBILE: f32 = 32.0;
pub(crate) const SECTION_TITLE_SIZE: f32 = 36.0;
pub(crate) const CARD_TITLE_SIZE: f32 = 20.0;
pub(crate) const CARD_BODY_SIZE: f32 = 15.0;
pub(crate) const SCROLL_TOP_MARGIN: f32 = 24.0;
