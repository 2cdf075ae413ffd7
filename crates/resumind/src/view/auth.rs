//! Sign-in page.

use iced::widget::{Column, button, container, text};
use iced::{Element, Length};
use resumind_core::route::{AuthPage, AuthStatus};

use super::{bold, secondary_text};
use crate::message::Message;
use crate::style::widgets::{card_style, primary_button_style, rejection_style};

/// Renders the sign-in page.
pub fn view_auth(page: &AuthPage, status: AuthStatus) -> Element<'_, Message> {
    let mut content = Column::new()
        .spacing(16)
        .align_x(iced::Alignment::Center)
        .push(text("Welcome").size(32).font(bold()))
        .push(text("Log in to continue your job journey").style(secondary_text));

    if let Some(notice) = page.notice() {
        content = content.push(
            container(text(notice).size(14))
                .padding(12)
                .style(rejection_style),
        );
    }

    content = content.push(text(status.message()).size(16));

    if let Some(label) = status.action_label() {
        let action = if status == AuthStatus::SignedIn {
            Message::AuthPageSignOut
        } else {
            Message::SignIn
        };
        content = content.push(
            button(text(label).font(bold()))
                .padding([10, 28])
                .style(primary_button_style)
                .on_press(action),
        );
    }

    container(container(content).padding(40).max_width(480.0).style(card_style))
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([48, 24])
        .into()
}
