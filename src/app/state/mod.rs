mod constants;

use crate::config::AppConfig;
use crate::page::{ContactFields, Page, PageEvent, PageEvents, PageOptions};
use crate::sync::Viewport;
use iced::Task;
use std::time::Instant;

use super::messages::Message;

pub(crate) use constants::*;

/// Core application state: the headless page plus view-only inputs.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) page: Page,
    pub(super) form: ContactFields,
    pub(super) alert: Option<String>,
}

impl App {
    pub fn bootstrap(config: AppConfig) -> (Self, Task<Message>) {
        let viewport = Viewport::new(config.window_width, config.window_height);
        let options = PageOptions {
            particles: config.particles,
            reveal_animations: config.reveal_animations,
        };
        let mut app = App {
            page: Page::new(viewport, options),
            config,
            form: ContactFields::default(),
            alert: None,
        };
        let effects = app.page.dispatch(Instant::now(), PageEvent::Ready);
        let task = app.run_effects(effects);
        (app, task)
    }
}
