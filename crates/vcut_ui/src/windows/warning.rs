//! Modal configuration warning shown over the dialog.

use iced::widget::{button, center, column, container, opaque, row, space, text};
use iced::{Background, Border, Element, Length, Theme};

use vcut_core::selection::{MutedWarning, WarningResponse, WARNING_QUESTION, WARNING_TITLE};

use crate::app::Message;
use crate::theme::{colors, font, size, spacing, ThemeKind};

/// Build the warning overlay. It blocks input to the dialog beneath.
pub fn view<'a>(warning: MutedWarning, theme: ThemeKind) -> Element<'a, Message> {
    let buttons = row![
        space::horizontal(),
        button(text("Yes").size(font::NORMAL))
            .on_press(Message::WarningAnswered(WarningResponse::Yes))
            .style(button::secondary)
            .padding([spacing::SM, spacing::LG]),
        // "No" is the default answer
        button(text("No").size(font::NORMAL))
            .on_press(Message::WarningAnswered(WarningResponse::No))
            .style(button::primary)
            .padding([spacing::SM, spacing::LG]),
    ]
    .spacing(u32::from(spacing::SM));

    let card_background = theme.card();
    let card_border = theme.border();

    let card = container(
        column![
            text(WARNING_TITLE)
                .size(font::HEADER)
                .color(theme.warning_header()),
            text(warning.message()).size(font::NORMAL),
            text(WARNING_QUESTION).size(font::NORMAL),
            buttons,
        ]
        .spacing(u32::from(spacing::MD)),
    )
    .padding(spacing::LG)
    .width(Length::Fixed(size::WARNING_WIDTH))
    .style(move |_theme: &Theme| container::Style {
        background: Some(Background::Color(card_background)),
        border: Border {
            color: card_border,
            width: 1.0,
            radius: 6.0.into(),
        },
        ..Default::default()
    });

    opaque(center(card).style(|_theme: &Theme| container::Style {
        background: Some(Background::Color(colors::BACKDROP)),
        ..Default::default()
    }))
}
