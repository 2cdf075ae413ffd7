//! Navigation bar and the log-out confirmation layer.

use iced::widget::{button, center, column, container, mouse_area, opaque, row, stack, text};
use iced::{Element, Length};
use resumind_core::Route;
use resumind_core::session::{CancelReason, NavAffordances};

use super::{bold, secondary_text};
use crate::message::Message;
use crate::style::widgets::palette::ThemeMode;
use crate::style::widgets::{
    danger_button_style, dialog_style, link_button_style, navbar_style, outline_button_style,
    primary_button_style, scrim_style,
};

/// Renders the top navigation bar.
pub fn view_navbar(affordances: NavAffordances, theme_mode: ThemeMode) -> Element<'static, Message> {
    let brand = button(text("Resumind").size(24).font(bold()))
        .padding(0)
        .style(link_button_style)
        .on_press(Message::Navigate(Route::Home));

    let mut actions = row![
        button(text(theme_mode.toggle_label()).size(13))
            .padding([8, 14])
            .style(outline_button_style)
            .on_press(Message::ToggleTheme)
    ]
    .spacing(10)
    .align_y(iced::Alignment::Center);

    if affordances.upload {
        actions = actions.push(
            button(text("Upload Resume").size(14))
                .padding([8, 16])
                .style(primary_button_style)
                .on_press(Message::Navigate(Route::Upload)),
        );
    }
    if affordances.logout {
        actions = actions.push(
            button(text("Log out").size(14))
                .padding([8, 14])
                .style(outline_button_style)
                .on_press(Message::RequestLogout),
        );
    }

    container(
        row![brand, iced::widget::Space::new().width(Length::Fill), actions]
            .align_y(iced::Alignment::Center),
    )
    .padding([14, 24])
    .width(Length::Fill)
    .style(navbar_style)
    .into()
}

/// Places the confirmation dialog on a layer above `base`.
///
/// The scrim covers the whole viewport and swallows pointer input; a press
/// on it cancels. The dialog itself is opaque so its presses never reach
/// the scrim.
pub fn view_logout_modal<'a>(base: Element<'a, Message>) -> Element<'a, Message> {
    let dialog = container(
        column![
            text("Log out?").size(20).font(bold()),
            text("Are you sure you want to log out?")
                .size(14)
                .style(secondary_text),
            row![
                button(text("Cancel"))
                    .padding([8, 16])
                    .style(outline_button_style)
                    .on_press(Message::CancelLogout(CancelReason::Button)),
                button(text("Log out").font(bold()))
                    .padding([8, 16])
                    .style(danger_button_style)
                    .on_press(Message::ConfirmLogout),
            ]
            .spacing(12),
        ]
        .spacing(12),
    )
    .padding(24)
    .max_width(420.0)
    .style(dialog_style);

    let layer = mouse_area(center(opaque(dialog)).style(scrim_style))
        .on_press(Message::CancelLogout(CancelReason::Overlay));

    stack![base, opaque(layer)].into()
}
