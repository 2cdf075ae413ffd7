//! Text input styles.

use iced::widget::text_input;
use iced::{Background, Border};

use super::palette;
use super::shadows::radius;

/// Path entry of the file picker.
pub fn path_input_style(_theme: &iced::Theme, status: text_input::Status) -> text_input::Style {
    let p = palette::current();

    let base = text_input::Style {
        background: Background::Color(p.surface_elevated),
        border: Border {
            color: p.border_strong,
            width: 1.0,
            radius: radius::SMALL.into(),
        },
        icon: p.text_muted,
        placeholder: p.text_muted,
        value: p.text_primary,
        selection: p.drop_target,
    };

    match status {
        text_input::Status::Focused { .. } => text_input::Style {
            border: Border {
                color: p.primary,
                width: 2.0,
                radius: radius::SMALL.into(),
            },
            ..base
        },
        _ => base,
    }
}
