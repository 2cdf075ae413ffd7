//! Upload page with the single-file drop surface.

use iced::widget::{Column, button, column, container, mouse_area, row, text, text_input};
use iced::{Element, Length};
use resumind_core::intake::DragState;
use resumind_core::{DroppedFile, UploadIntake};

use super::{bold, secondary_text};
use crate::message::Message;
use crate::model::StagedUpload;
use crate::style::widgets::{
    clear_button_style, dropzone_style, outline_button_style, palette, path_input_style,
    primary_button_style, rejection_style,
};

/// Renders the upload page.
pub fn view_upload<'a>(
    intake: &'a UploadIntake<StagedUpload>,
    picker_path: &'a str,
) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(16)
        .max_width(640.0)
        .push(text("Smart feedback for your dream job").size(32).font(bold()))
        .push(
            text("Drop your resume for an ATS score and improvement tips")
                .size(16)
                .style(secondary_text),
        )
        .push(view_surface(intake));

    if let Some(message) = intake.rejection_message() {
        content = content.push(
            container(text(message).size(15))
                .padding(14)
                .width(Length::Fill)
                .style(rejection_style),
        );
    }

    if intake.is_picker_open() {
        content = content.push(view_picker(picker_path));
    }

    container(content)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([32, 24])
        .into()
}

fn view_surface(intake: &UploadIntake<StagedUpload>) -> Element<'_, Message> {
    let active = intake.drag_state() == DragState::Active;

    let inner: Element<'_, Message> = match intake.selection() {
        Some(file) => view_selected(file),
        None => view_prompt(active, &intake.policy().hint()),
    };

    mouse_area(
        container(inner)
            .padding(16)
            .width(Length::Fill)
            .style(dropzone_style(active)),
    )
    .on_press(Message::SurfaceClicked)
    .into()
}

fn view_selected(file: &DroppedFile) -> Element<'_, Message> {
    row![
        text("\u{1F4C4}").size(28),
        column![
            text(&file.name).size(17).font(bold()),
            text(file.display_size()).size(13).style(secondary_text),
        ]
        .spacing(2)
        .width(Length::Fill),
        button(text("\u{2715}").size(16))
            .padding([6, 10])
            .style(clear_button_style)
            .on_press(Message::ClearClicked),
    ]
    .spacing(12)
    .align_y(iced::Alignment::Center)
    .into()
}

fn view_prompt(active: bool, hint: &str) -> Element<'static, Message> {
    let headline: Element<'static, Message> = if active {
        text("Drop your PDF here")
            .size(19)
            .font(bold())
            .style(|_theme| text::Style {
                color: Some(palette::current().primary),
            })
            .into()
    } else {
        row![
            text("Click to upload").size(19).font(bold()),
            text(" or drag & drop").size(19).style(secondary_text),
        ]
        .into()
    };

    row![
        text("\u{2B06}").size(32),
        column![headline, text(hint.to_string()).size(15).style(secondary_text)].spacing(4),
    ]
    .spacing(16)
    .align_y(iced::Alignment::Center)
    .into()
}

fn view_picker(picker_path: &str) -> Element<'_, Message> {
    row![
        text_input("Path to a PDF file", picker_path)
            .padding([10, 12])
            .style(path_input_style)
            .on_input(Message::PickerPathChanged)
            .on_submit(Message::PickerSubmit),
        button(text("Select"))
            .padding([10, 16])
            .style(primary_button_style)
            .on_press(Message::PickerSubmit),
        button(text("Cancel"))
            .padding([10, 16])
            .style(outline_button_style)
            .on_press(Message::PickerCancel),
    ]
    .spacing(8)
    .into()
}
