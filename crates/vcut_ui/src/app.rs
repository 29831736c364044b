//! Main application module for the media streams dialog.
//!
//! Holds the dialog state and wires the iced application together:
//! messages, update, view, window subscription.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use iced::widget::stack;
use iced::{window, Element, Size, Subscription, Task, Theme};

use vcut_core::models::InclusionMap;
use vcut_core::selection::{StreamSelector, WarningResponse};

use crate::theme::ThemeKind;
use crate::windows::{stream_selector, warning};

/// Initial window size.
const WINDOW_SIZE: Size = Size::new(460.0, 560.0);

/// The dialog never grows past this size.
const WINDOW_MAX_SIZE: Size = Size::new(500.0, 600.0);

const WINDOW_MIN_WIDTH: f32 = 360.0;

/// Initialization data for the App.
#[derive(Debug, Clone)]
pub struct AppInit {
    pub selector: StreamSelector,
    /// Caller-owned keep/drop map; the dialog writes straight into it.
    pub inclusion: Arc<Mutex<InclusionMap>>,
    pub theme: ThemeKind,
}

/// All possible messages the application can receive.
#[derive(Debug, Clone)]
pub enum Message {
    // Stream rows
    StreamToggled { index: usize, checked: bool },

    // Close handling
    OkPressed,
    CloseRequested(window::Id),
    WarningAnswered(WarningResponse),
}

/// Main application state.
pub struct App {
    pub selector: StreamSelector,
    pub inclusion: Arc<Mutex<InclusionMap>>,
    pub theme: ThemeKind,
}

impl App {
    pub fn new(init: AppInit) -> (Self, Task<Message>) {
        tracing::debug!(
            "Opening stream dialog with {} streams",
            init.selector.streams().len()
        );

        let app = Self {
            selector: init.selector,
            inclusion: init.inclusion,
            theme: init.theme,
        };

        (app, Task::none())
    }

    pub fn title(&self) -> String {
        self.selector.title()
    }

    pub fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    /// The window close button goes through the same guard as OK.
    pub fn subscription(&self) -> Subscription<Message> {
        window::close_requests().map(Message::CloseRequested)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::StreamToggled { index, checked } => {
                self.toggle_stream(index, checked);
                Task::none()
            }
            Message::OkPressed => self.request_close(),
            Message::CloseRequested(id) => {
                tracing::debug!("Close requested for window {:?}", id);
                self.request_close()
            }
            Message::WarningAnswered(response) => self.answer_warning(response),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let dialog = stream_selector::view(self);

        match self.selector.pending_warning() {
            Some(pending) => stack![dialog, warning::view(pending, self.theme)].into(),
            None => dialog,
        }
    }

    /// Lock the inclusion map, recovering it if a previous holder panicked.
    pub fn inclusion(&self) -> MutexGuard<'_, InclusionMap> {
        self.inclusion.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Run the dialog until it is closed.
///
/// Returns once the window has closed; the caller's map then holds the
/// final decisions.
pub fn run(init: AppInit) -> iced::Result {
    let min_size = window_min_size(&init.selector);

    let window_settings = window::Settings {
        size: Size::new(WINDOW_SIZE.width, WINDOW_SIZE.height.max(min_size.height)),
        min_size: Some(min_size),
        max_size: Some(WINDOW_MAX_SIZE),
        resizable: true,
        decorations: true,
        exit_on_close_request: false,
        ..Default::default()
    };

    iced::application(move || App::new(init.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .window(window_settings)
        .run()
}

/// Minimum window size, capped at the maximum.
fn window_min_size(selector: &StreamSelector) -> Size {
    let height = stream_selector::min_content_height(selector).min(WINDOW_MAX_SIZE.height);
    Size::new(WINDOW_MIN_WIDTH, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vcut_core::models::{AudioStream, StreamSet, SubtitleStream};

    fn selector(audio_count: usize, subtitle_count: usize) -> StreamSelector {
        let streams = StreamSet {
            video: None,
            audio: (0..audio_count)
                .map(|index| AudioStream {
                    index,
                    codec: "AAC".into(),
                    channels: Some(2),
                    sample_rate: Some(48000),
                    language: None,
                })
                .collect(),
            subtitle: (audio_count..audio_count + subtitle_count)
                .map(|index| SubtitleStream {
                    index,
                    codec: "ASS".into(),
                    language: None,
                })
                .collect(),
        };
        let map = InclusionMap::all_included(&streams);
        StreamSelector::new(streams, &map).unwrap()
    }

    #[test]
    fn min_size_never_exceeds_max() {
        let min = window_min_size(&selector(10, 10));
        assert!(min.height <= WINDOW_MAX_SIZE.height);
        assert!(min.width <= WINDOW_MAX_SIZE.width);
    }

    #[test]
    fn min_size_leaves_room_for_scrolling_list() {
        let min = window_min_size(&selector(3, 0));
        assert!(min.height >= 165.0);
    }
}
