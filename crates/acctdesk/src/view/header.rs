//! Header and error banner.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::message::Message;
use crate::style;
use crate::style::palette;

/// Render the page header with the add button.
pub fn view_header<'a>(account_count: usize, persistent: bool) -> Element<'a, Message> {
    let p = palette::current();

    let title = text("Accounts").size(28).color(p.text_primary);

    let mut subtitle = format!(
        "{account_count} account{}. Separate labels with \";\".",
        if account_count == 1 { "" } else { "s" }
    );
    if !persistent {
        subtitle.push_str(" Changes are kept for this session only.");
    }

    let add = button(text("Add account").size(14))
        .on_press(Message::AddAccount)
        .padding([10, 20])
        .style(style::primary_button_style);

    row![
        column![title, text(subtitle).size(14).color(p.text_secondary)].spacing(4),
        Space::new().width(Length::Fill),
        add,
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Render the error banner, or nothing when there is no error.
pub fn view_error_banner(error: Option<&str>) -> Element<'_, Message> {
    error.map_or_else(
        || Space::new().height(0).into(),
        |error| {
            container(
                row![
                    text(error).size(14),
                    Space::new().width(Length::Fill),
                    button(text("Dismiss").size(13))
                        .on_press(Message::DismissError)
                        .padding([6, 12])
                        .style(style::danger_button_style),
                ]
                .spacing(12)
                .align_y(Alignment::Center),
            )
            .padding(12)
            .width(Length::Fill)
            .style(style::banner_style)
            .into()
        },
    )
}
