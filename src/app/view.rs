use super::messages::Message;
use super::particles::ParticleLayer;
use super::state::{
    App, CARD_BODY_SIZE, CARD_TITLE_SIZE, HERO_TITLE_SIZE, HERO_TITLE_SIZE_MOBILE, NAV_LINK_SIZE,
    PAGE_SCROLL_ID, SCROLL_TOP_MARGIN, SECTION_TITLE_SIZE,
};
use crate::page::{
    BRAND, CARD_GAP, CARD_PADDING, CARD_TITLE_HEIGHT, CONTACT_FORM_HEIGHT, Card, ContactField,
    FOOTER_HEIGHT, HEADER_HEIGHT, SECTIONS, SectionBox, SectionContent, SectionKind,
    content_width, is_mobile, section_padding,
};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    Column, Row, Space, Stack, button, canvas, center, column, container, horizontal_space,
    mouse_area, opaque, row, scrollable, text, text_input,
};
use iced::{Background, Border, Color, Element, Length, Padding, Shadow, Theme, Vector};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let layout = self.page.layout();
        let mobile = is_mobile(layout.viewport.width);

        let mut page = Column::new().width(Length::Fill);
        for section in &layout.sections {
            page = page.push(self.section_view(section));
        }
        page = page.push(footer_view());

        let scroller = scrollable(page)
            .id(PAGE_SCROLL_ID.clone())
            .on_scroll(|viewport| Message::Scrolled {
                offset_y: viewport.absolute_offset().y,
            })
            .width(Length::Fill)
            .height(Length::Fill);

        let mut layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(scroller);
        if mobile && self.page.is_menu_open() {
            layers = layers.push(self.menu_overlay());
        }
        layers = layers.push(self.navbar_view(mobile));
        if self.page.navbar().scroll_top_visible {
            layers = layers.push(scroll_top_view());
        }
        if let Some(message) = &self.alert {
            layers = layers.push(alert_view(message));
        }
        layers.into()
    }

    fn navbar_view(&self, mobile: bool) -> Element<'_, Message> {
        let layout = self.page.layout();
        let compact = self.page.navbar().compact;

        let brand = button(text(BRAND).size(24))
            .style(button::text)
            .on_press(Message::LinkClicked("#home".to_string()));

        let links: Element<'_, Message> = if mobile {
            let icon = if self.page.is_menu_open() { "✕" } else { "☰" };
            button(text(icon).size(22))
                .style(button::text)
                .on_press(Message::ToggleMenu)
                .into()
        } else {
            SECTIONS
                .iter()
                .fold(Row::new().spacing(4), |links, content| {
                    links.push(self.nav_link(content))
                })
                .align_y(Vertical::Center)
                .into()
        };

        let bar = row![brand, horizontal_space(), links]
            .align_y(Vertical::Center)
            .width(Length::Fill);

        container(bar)
            .width(Length::Fill)
            .height(Length::Fixed(layout.nav_height))
            .padding(Padding {
                top: 0.0,
                right: 24.0,
                bottom: 0.0,
                left: 24.0,
            })
            .align_y(Vertical::Center)
            .style(move |theme: &Theme| {
                if compact {
                    let palette = theme.extended_palette();
                    container::Style {
                        background: Some(palette.background.base.color.scale_alpha(0.95).into()),
                        shadow: Shadow {
                            color: Color::BLACK.scale_alpha(0.3),
                            offset: Vector::new(0.0, 2.0),
                            blur_radius: 12.0,
                        },
                        ..container::Style::default()
                    }
                } else {
                    container::Style::default()
                }
            })
            .into()
    }

    fn nav_link(&self, content: &'static SectionContent) -> Element<'_, Message> {
        let href = content.href();
        let active = self.page.navbar().is_link_active(&href);
        button(text(content.nav_label).size(NAV_LINK_SIZE))
            .style(if active { button::primary } else { button::text })
            .on_press(Message::LinkClicked(href))
            .into()
    }

    fn menu_overlay(&self) -> Element<'_, Message> {
        let nav_height = self.page.layout().nav_height;
        let links = SECTIONS
            .iter()
            .fold(Column::new().spacing(8).padding(16), |links, content| {
                links.push(self.nav_link(content))
            })
            .width(Length::Fill);

        let panel = container(links)
            .width(Length::Fill)
            .style(container::rounded_box);

        let outside = |height: Length| {
            mouse_area(Space::new(Length::Fill, height)).on_press(Message::DismissMenu)
        };

        container(column![
            outside(Length::Fixed(nav_height)),
            mouse_area(panel).on_press(Message::MenuPanelPressed),
            outside(Length::Fill),
        ])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(Color::BLACK.scale_alpha(0.4))),
            ..container::Style::default()
        })
        .into()
    }

    fn section_view(&self, section: &SectionBox) -> Element<'_, Message> {
        match section.content.kind {
            SectionKind::Hero => self.hero_view(section),
            SectionKind::Cards { cards, .. } => self.cards_view(section, cards),
            SectionKind::Contact => self.contact_view(section),
        }
    }

    fn hero_view(&self, section: &SectionBox) -> Element<'_, Message> {
        let width = self.page.layout().viewport.width;
        let title_size = if is_mobile(width) {
            HERO_TITLE_SIZE_MOBILE
        } else {
            HERO_TITLE_SIZE
        };

        let actions = row![
            button("Get Started").on_press(Message::LinkClicked("#contact".to_string())),
            button("Learn More")
                .style(button::secondary)
                .on_press(Message::LinkClicked("#about".to_string())),
        ]
        .spacing(16);

        let copy = column![
            text(section.content.title).size(title_size),
            text(section.content.subtitle).size(20),
            actions,
        ]
        .spacing(24)
        .align_x(Horizontal::Center)
        .max_width(content_width(width));

        let mut layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fixed(section.height));
        if let Some(field) = self.page.particles() {
            layers = layers.push(
                canvas(ParticleLayer { field })
                    .width(Length::Fill)
                    .height(Length::Fill),
            );
        }
        layers.push(center(copy)).into()
    }

    fn cards_view(&self, section: &SectionBox, cards: &'static [Card]) -> Element<'_, Message> {
        let width = self.page.layout().viewport.width;

        let mut rows = Column::new().spacing(CARD_GAP);
        for (row_idx, row_height) in section.row_heights.iter().enumerate() {
            let mut cells = Row::new()
                .spacing(CARD_GAP)
                .height(Length::Fixed(*row_height));
            for col in 0..section.columns {
                let index = row_idx * section.columns + col;
                cells = match (cards.get(index), section.cards.get(index)) {
                    (Some(card), Some(card_box)) => {
                        cells.push(self.card_view(card, &card_box.key))
                    }
                    _ => cells.push(horizontal_space().width(Length::FillPortion(1))),
                };
            }
            rows = rows.push(cells);
        }

        self.framed_section(section, width, rows.into())
    }

    fn card_view(&self, card: &'static Card, key: &str) -> Element<'_, Message> {
        let style = self.page.reveal_style(key);
        let opacity = style.opacity;

        let body = column![
            text(card.title)
                .size(CARD_TITLE_SIZE)
                .height(Length::Fixed(CARD_TITLE_HEIGHT))
                .style(move |theme: &Theme| faded_text(theme, opacity)),
            text(card.body)
                .size(CARD_BODY_SIZE)
                .style(move |theme: &Theme| faded_text(theme, opacity)),
        ];

        container(body)
            .width(Length::FillPortion(1))
            .height(Length::Fill)
            .padding(Padding {
                top: CARD_PADDING + style.offset_y,
                right: CARD_PADDING,
                bottom: (CARD_PADDING - style.offset_y).max(0.0),
                left: CARD_PADDING,
            })
            .style(move |theme: &Theme| {
                let palette = theme.extended_palette();
                container::Style {
                    background: Some(palette.background.weak.color.scale_alpha(opacity).into()),
                    border: Border {
                        radius: 12.0.into(),
                        ..Border::default()
                    },
                    ..container::Style::default()
                }
            })
            .into()
    }

    fn contact_view(&self, section: &SectionBox) -> Element<'_, Message> {
        let width = self.page.layout().viewport.width;

        let field = |placeholder: &'static str, which: ContactField| {
            text_input(placeholder, self.form.get(which))
                .on_input(move |value| Message::FormFieldChanged(which, value))
                .on_submit(Message::SubmitForm)
                .padding(12)
        };

        let form = column![
            field("Name *", ContactField::Name),
            field("Email *", ContactField::Email),
            field("Company", ContactField::Company),
            field("Message *", ContactField::Message),
            button("Send Message").on_press(Message::SubmitForm),
        ]
        .spacing(16)
        .height(Length::Fixed(CONTACT_FORM_HEIGHT));

        self.framed_section(section, width, form.into())
    }

    /// Title block plus `body`, padded to the section's computed height.
    fn framed_section<'a>(
        &'a self,
        section: &SectionBox,
        width: f32,
        body: Element<'a, Message>,
    ) -> Element<'a, Message> {
        let padding = section_padding(width);
        let header = column![
            text(section.content.title).size(SECTION_TITLE_SIZE),
            text(section.content.subtitle),
        ]
        .spacing(12)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT));

        let inner = column![header, body].width(Length::Fixed(content_width(width)));

        container(inner)
            .center_x(Length::Fill)
            .height(Length::Fixed(section.height))
            .padding(Padding {
                top: padding,
                right: 0.0,
                bottom: padding,
                left: 0.0,
            })
            .into()
    }
}

fn faded_text(theme: &Theme, opacity: f32) -> text::Style {
    text::Style {
        color: Some(theme.palette().text.scale_alpha(opacity)),
    }
}

fn footer_view<'a>() -> Element<'a, Message> {
    container(text(format!("© {BRAND}. All rights reserved.")).size(14))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(FOOTER_HEIGHT))
        .style(container::dark)
        .into()
}

fn scroll_top_view<'a>() -> Element<'a, Message> {
    let to_top = button(text("↑").size(20)).on_press(Message::ScrollToTop);
    container(to_top)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom)
        .padding(SCROLL_TOP_MARGIN)
        .into()
}

fn alert_view(message: &str) -> Element<'_, Message> {
    let dialog = container(
        column![
            text(message),
            button("OK").on_press(Message::DismissAlert)
        ]
        .spacing(16)
        .align_x(Horizontal::Center),
    )
    .padding(24)
    .max_width(420.0)
    .style(container::rounded_box);

    opaque(center(dialog).style(|_theme: &Theme| container::Style {
        background: Some(Background::Color(Color::BLACK.scale_alpha(0.5))),
        ..container::Style::default()
    }))
}
