use super::super::super::messages::Message;
use super::super::super::state::{App, PAGE_SCROLL_ID};
use super::super::Effect;
use iced::Event;
use iced::Task;
use iced::event;
use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::window;
use tracing::debug;

impl App {
    pub(crate) fn run_effects(&mut self, effects: Vec<Effect>) -> Task<Message> {
        if effects.is_empty() {
            Task::none()
        } else {
            Task::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
        }
    }

    fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::ScrollTo(y) => {
                scrollable::scroll_to(PAGE_SCROLL_ID.clone(), AbsoluteOffset { x: 0.0, y })
            }
            Effect::Alert(message) => {
                debug!(%message, "Showing alert");
                self.alert = Some(message);
                Task::none()
            }
            Effect::ResetForm => {
                self.form = Default::default();
                Task::none()
            }
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        _ => None,
    }
}
