//! Stream toggling and close guard handlers.

use std::sync::PoisonError;

use iced::Task;

use vcut_core::selection::{CloseOutcome, WarningResponse};

use crate::app::{App, Message};

impl App {
    /// Write a checkbox change into the caller's map.
    pub fn toggle_stream(&mut self, index: usize, checked: bool) {
        let mut map = self.inclusion();
        self.selector.set_config(&mut map, index, checked);
    }

    /// Close now, or raise the warning if the selection mutes a kind.
    pub fn request_close(&mut self) -> Task<Message> {
        // Borrow only the field; the selector is borrowed mutably below.
        let outcome = {
            let map = self.inclusion.lock().unwrap_or_else(PoisonError::into_inner);
            self.selector.request_close(&map)
        };

        match outcome {
            CloseOutcome::Close => iced::exit(),
            CloseOutcome::Prompt(_) => Task::none(),
        }
    }

    pub fn answer_warning(&mut self, response: WarningResponse) -> Task<Message> {
        if self.selector.respond(response).closes() {
            iced::exit()
        } else {
            Task::none()
        }
    }
}
