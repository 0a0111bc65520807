use crate::page::ContactField;
use std::time::Instant;

/// Messages emitted by the UI and the runtime.
#[derive(Debug, Clone)]
pub enum Message {
    Scrolled {
        offset_y: f32,
    },
    WindowResized {
        width: f32,
        height: f32,
    },
    Frame(Instant),
    ToggleMenu,
    /// Click on an anchor link with this `href`.
    LinkClicked(String),
    ScrollToTop,
    /// Click outside the open mobile menu.
    DismissMenu,
    /// Click on the menu panel that no link inside it handled.
    MenuPanelPressed,
    FormFieldChanged(ContactField, String),
    SubmitForm,
    DismissAlert,
}
