//! Headless page controller.
//!
//! [`Page`] owns the live layout and every behavior attached to it: the
//! scroll/resize [`Synchronizer`], the mobile menu, reveal animations,
//! animated navigation and the particle field. Hosts feed it events through
//! [`PageEvents`] and carry out the returned [`Effect`]s.

mod content;
mod form;
mod layout;
mod menu;
mod reveal;
mod smooth;

pub use content::{BRAND, Card, SECTIONS, SectionContent, SectionKind};
pub use form::{ContactField, ContactFields, SUCCESS_MESSAGE, validate};
pub use layout::{
    CARD_GAP, CARD_PADDING, CARD_TITLE_HEIGHT, CONTACT_FORM_HEIGHT, FOOTER_HEIGHT, HEADER_HEIGHT,
    PageLayout, SectionBox, content_width, is_mobile, section_padding,
};
pub use reveal::RevealStyle;

use crate::particles::{PARTICLE_COUNT, ParticleField};
use crate::sync::{LayoutSource, NavbarState, Section, SyncEffect, Synchronizer, Viewport};
use menu::MobileMenu;
use reveal::{RevealAnimator, RevealRect};
use smooth::SmoothScroll;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Outbound work for the host environment.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Set the scroll offset immediately.
    ScrollTo(f32),
    /// Show a blocking message to the user.
    Alert(String),
    /// Clear all contact form inputs.
    ResetForm,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    MenuToggle,
    /// An anchor with the given `href`.
    Link(String),
    ScrollTop,
    /// Inside the open menu but not on one of its links.
    InsideMenu,
    /// Anywhere outside the menu and its toggle.
    Elsewhere,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Ready,
    Scroll(f32),
    Resize(Viewport),
    Click(ClickTarget),
    Submit(ContactFields),
    Frame,
}

/// Inbound event surface of the page.
pub trait PageEvents {
    fn on_ready(&mut self, now: Instant) -> Vec<Effect>;
    fn on_scroll(&mut self, now: Instant, scroll_y: f32) -> Vec<Effect>;
    fn on_resize(&mut self, now: Instant, viewport: Viewport) -> Vec<Effect>;
    fn on_click(&mut self, now: Instant, target: ClickTarget) -> Vec<Effect>;
    fn on_submit(&mut self, now: Instant, fields: ContactFields) -> Vec<Effect>;
    fn on_frame(&mut self, now: Instant) -> Vec<Effect>;

    fn dispatch(&mut self, now: Instant, event: PageEvent) -> Vec<Effect> {
        match event {
            PageEvent::Ready => self.on_ready(now),
            PageEvent::Scroll(scroll_y) => self.on_scroll(now, scroll_y),
            PageEvent::Resize(viewport) => self.on_resize(now, viewport),
            PageEvent::Click(target) => self.on_click(now, target),
            PageEvent::Submit(fields) => self.on_submit(now, fields),
            PageEvent::Frame => self.on_frame(now),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageOptions {
    pub particles: bool,
    pub reveal_animations: bool,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            particles: true,
            reveal_animations: true,
        }
    }
}

/// Live geometry: the current layout plus the scroll offset within it.
#[derive(Debug, Clone)]
struct Document {
    layout: PageLayout,
    scroll_y: f32,
}

impl Document {
    fn clamp_scroll(&self, y: f32) -> f32 {
        if y.is_finite() {
            y.clamp(0.0, self.layout.max_scroll())
        } else {
            0.0
        }
    }
}

impl LayoutSource for Document {
    fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    fn nav_height(&self) -> f32 {
        self.layout.nav_height
    }

    fn viewport(&self) -> Viewport {
        self.layout.viewport
    }

    fn sections(&self) -> Vec<Section> {
        self.layout.section_ranges()
    }
}

pub struct Page {
    options: PageOptions,
    doc: Document,
    now: Option<Instant>,
    sync: Synchronizer,
    menu: MobileMenu,
    reveal: RevealAnimator,
    smooth: Option<SmoothScroll>,
    particles: Option<ParticleField>,
}

impl Page {
    pub fn new(viewport: Viewport, options: PageOptions) -> Self {
        Self {
            options,
            doc: Document {
                layout: PageLayout::compute(viewport),
                scroll_y: 0.0,
            },
            now: None,
            sync: Synchronizer::new(),
            menu: MobileMenu::default(),
            reveal: RevealAnimator::new(),
            smooth: None,
            particles: None,
        }
    }

    pub fn layout(&self) -> &PageLayout {
        &self.doc.layout
    }

    pub fn scroll_y(&self) -> f32 {
        self.doc.scroll_y
    }

    pub fn navbar(&self) -> &NavbarState {
        self.sync.navbar()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn particles(&self) -> Option<&ParticleField> {
        self.particles.as_ref()
    }

    #[cfg(test)]
    pub fn is_navigating(&self) -> bool {
        self.smooth.is_some()
    }

    pub fn reveal_style(&self, key: &str) -> RevealStyle {
        match self.now {
            Some(now) if self.options.reveal_animations => self.reveal.style(key, now),
            _ => RevealStyle::SETTLED,
        }
    }

    /// Whether the host should keep delivering animation frames.
    pub fn needs_frames(&self) -> bool {
        let revealing = self
            .now
            .is_some_and(|now| self.options.reveal_animations && self.reveal.is_animating(now));
        !self.sync.is_settled() || self.smooth.is_some() || self.particles.is_some() || revealing
    }

    /// Move to `y` as the host would, notifying scroll listeners.
    fn set_scroll(&mut self, now: Instant, y: f32, effects: &mut Vec<Effect>) {
        let y = self.doc.clamp_scroll(y);
        self.doc.scroll_y = y;
        self.menu.repin(y);
        effects.push(Effect::ScrollTo(y));
        self.sync.on_scroll(now);
        self.update_reveal(now);
    }

    fn update_reveal(&mut self, now: Instant) {
        if !self.options.reveal_animations {
            return;
        }
        let layout = &self.doc.layout;
        let elements = layout.cards().map(|card| RevealRect {
            key: &card.key,
            top: card.top,
            height: card.height,
        });
        self.reveal
            .update(now, self.doc.scroll_y, layout.viewport.height, elements);
    }

    fn hero_size(&self) -> (f32, f32) {
        let layout = &self.doc.layout;
        let height = layout.hero().map(|hero| hero.height).unwrap_or(0.0);
        (layout.viewport.width, height)
    }

    fn navigate(&mut self, now: Instant, href: &str) {
        let Some(target_id) = href.strip_prefix('#').filter(|id| !id.is_empty()) else {
            return;
        };
        let Some(section) = self.doc.layout.section(target_id) else {
            debug!(href, "Ignoring link to unknown section");
            return;
        };
        let target = self
            .doc
            .clamp_scroll(section.top - self.doc.layout.nav_height);
        info!(section = target_id, target, "Navigating to section");
        self.smooth = Some(SmoothScroll::new(self.doc.scroll_y, target, now));
        self.menu.close();
    }
}

impl PageEvents for Page {
    fn on_ready(&mut self, now: Instant) -> Vec<Effect> {
        self.now = Some(now);
        self.sync.prime(&self.doc);
        if self.options.reveal_animations {
            let keys = self.doc.layout.cards().map(|card| card.key.clone());
            self.reveal.observe(keys);
            self.update_reveal(now);
        }
        if self.options.particles && ParticleField::should_spawn(self.doc.layout.viewport.width) {
            let (width, height) = self.hero_size();
            self.particles = Some(ParticleField::new(
                &mut rand::thread_rng(),
                PARTICLE_COUNT,
                width,
                height,
            ));
        }
        info!(
            width = self.doc.layout.viewport.width,
            height = self.doc.layout.viewport.height,
            particles = self.particles.is_some(),
            "Page ready"
        );
        Vec::new()
    }

    fn on_scroll(&mut self, now: Instant, scroll_y: f32) -> Vec<Effect> {
        self.now = Some(now);
        if let Some(locked) = self.menu.locked_scroll() {
            if (scroll_y - locked).abs() > 0.5 {
                return vec![Effect::ScrollTo(locked)];
            }
        }
        self.doc.scroll_y = if scroll_y.is_finite() { scroll_y.max(0.0) } else { 0.0 };
        self.sync.on_scroll(now);
        self.update_reveal(now);
        Vec::new()
    }

    fn on_resize(&mut self, now: Instant, viewport: Viewport) -> Vec<Effect> {
        self.now = Some(now);
        if !viewport.width.is_finite() || !viewport.height.is_finite() {
            return Vec::new();
        }
        if viewport == self.doc.layout.viewport {
            return Vec::new();
        }
        // Capture against the layout as it was before this reflow.
        self.sync.on_resize(now, &self.doc);

        self.doc.layout = PageLayout::compute(viewport);
        self.doc.scroll_y = self.doc.clamp_scroll(self.doc.scroll_y);
        if is_mobile(viewport.width) {
            self.menu.repin(self.doc.scroll_y);
        } else {
            // The desktop navbar has no toggle to close the menu with.
            self.menu.close();
        }
        let (width, height) = self.hero_size();
        if let Some(particles) = self.particles.as_mut() {
            particles.resize(width, height);
        }
        self.update_reveal(now);
        debug!(width = viewport.width, height = viewport.height, "Viewport resized");
        Vec::new()
    }

    fn on_click(&mut self, now: Instant, target: ClickTarget) -> Vec<Effect> {
        self.now = Some(now);
        match target {
            ClickTarget::MenuToggle => self.menu.toggle(self.doc.scroll_y),
            ClickTarget::Link(href) => self.navigate(now, &href),
            ClickTarget::ScrollTop => {
                self.smooth = Some(SmoothScroll::new(self.doc.scroll_y, 0.0, now));
            }
            ClickTarget::InsideMenu => {}
            ClickTarget::Elsewhere => {
                self.menu.close();
            }
        }
        Vec::new()
    }

    fn on_submit(&mut self, now: Instant, fields: ContactFields) -> Vec<Effect> {
        self.now = Some(now);
        match validate(&fields) {
            Ok(()) => {
                info!(
                    name = %fields.name,
                    email = %fields.email,
                    company = %fields.company,
                    message_len = fields.message.len(),
                    "Contact form submitted"
                );
                vec![Effect::Alert(SUCCESS_MESSAGE.to_string()), Effect::ResetForm]
            }
            Err(err) => {
                warn!(error = ?err, "Contact form rejected");
                vec![Effect::Alert(err.to_string())]
            }
        }
    }

    fn on_frame(&mut self, now: Instant) -> Vec<Effect> {
        self.now = Some(now);
        let mut effects = Vec::new();

        for effect in self.sync.poll(now, &self.doc) {
            if let SyncEffect::JumpTo(y) = effect {
                // Resize correction wins over any running navigation.
                self.smooth = None;
                self.set_scroll(now, y, &mut effects);
            }
        }

        if let Some(anim) = self.smooth.clone() {
            self.set_scroll(now, anim.position(now), &mut effects);
            if anim.is_finished(now) {
                self.smooth = None;
            }
        } else {
            self.update_reveal(now);
        }

        if let Some(particles) = self.particles.as_mut() {
            particles.step();
        }
        effects
    }
}
