//! View components for the application.

mod auth;
mod navbar;
mod resumes;
mod upload;

use iced::widget::{column, container, text};
use iced::{Element, Length};

pub use auth::view_auth;
pub use navbar::{view_logout_modal, view_navbar};
pub use resumes::{view_resume_detail, view_resume_list};
pub use upload::view_upload;

use crate::message::Message;
use crate::style::widgets::palette;

pub(crate) const fn bold() -> iced::Font {
    iced::Font {
        weight: iced::font::Weight::Bold,
        ..iced::Font::DEFAULT
    }
}

pub(crate) fn secondary_text(_theme: &iced::Theme) -> text::Style {
    text::Style {
        color: Some(palette::current().text_secondary),
    }
}

/// Page for unknown locations.
pub fn view_not_found(location: &str) -> Element<'_, Message> {
    container(
        column![
            text("Page not found").size(28).font(bold()),
            text(location).style(secondary_text),
        ]
        .spacing(8)
        .align_x(iced::Alignment::Center),
    )
    .width(Length::Fill)
    .center_x(Length::Fill)
    .padding(48)
    .into()
}
