use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use crate::page::{ClickTarget, PageEvent, PageEvents};
use std::time::Instant;

impl App {
    pub(super) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let now = Instant::now();

        match message {
            Message::Scrolled { offset_y } => self.handle_scrolled(now, offset_y),
            Message::WindowResized { width, height } => {
                self.handle_window_resized(now, width, height)
            }
            Message::Frame(at) => self.page.dispatch(at, PageEvent::Frame),
            Message::ToggleMenu => self.handle_click(now, ClickTarget::MenuToggle),
            Message::LinkClicked(href) => self.handle_click(now, ClickTarget::Link(href)),
            Message::ScrollToTop => self.handle_click(now, ClickTarget::ScrollTop),
            Message::DismissMenu => self.handle_click(now, ClickTarget::Elsewhere),
            Message::MenuPanelPressed => self.handle_click(now, ClickTarget::InsideMenu),
            Message::FormFieldChanged(field, value) => {
                self.form.set(field, value);
                Vec::new()
            }
            Message::SubmitForm => self.page.dispatch(now, PageEvent::Submit(self.form.clone())),
            Message::DismissAlert => {
                self.alert = None;
                Vec::new()
            }
        }
    }
}
