//! Container style functions.

use iced::widget::container;
use iced::{Background, Border, Color};

use super::palette;
use super::shadows;
use super::shadows::radius;

/// Window background.
pub fn page_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.background)),
        text_color: Some(p.text_primary),
        ..Default::default()
    }
}

/// Top navigation bar.
pub fn navbar_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::CARD.into(),
        },
        shadow: shadows::card(p.shadow),
        ..Default::default()
    }
}

/// Resume card.
pub fn card_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface)),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::CARD.into(),
        },
        shadow: shadows::card(p.shadow),
        ..Default::default()
    }
}

/// Preview area while loading or when no image is available.
pub fn preview_placeholder_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface_elevated)),
        text_color: Some(p.text_muted),
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::LARGE.into(),
        },
        ..Default::default()
    }
}

/// Full-viewport backdrop behind the confirmation dialog.
pub fn scrim_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.scrim)),
        ..Default::default()
    }
}

/// Confirmation dialog surface.
pub fn dialog_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(p.surface_elevated)),
        text_color: Some(p.text_primary),
        border: Border {
            color: p.border_strong,
            width: 1.0,
            radius: radius::LARGE.into(),
        },
        shadow: shadows::floating(p.shadow),
        ..Default::default()
    }
}

/// Upload drop zone; highlighted while files hover over the window.
pub fn dropzone_style(active: bool) -> impl Fn(&iced::Theme) -> container::Style {
    move |_theme| {
        let p = palette::current();

        container::Style {
            background: Some(Background::Color(if active {
                p.drop_target
            } else {
                p.surface
            })),
            border: Border {
                color: if active { p.primary } else { p.border_strong },
                width: if active { 2.0 } else { 1.0 },
                radius: radius::MEDIUM.into(),
            },
            ..Default::default()
        }
    }
}

/// Banner carrying the first rejection message.
pub fn rejection_style(_theme: &iced::Theme) -> container::Style {
    let p = palette::current();

    container::Style {
        background: Some(Background::Color(Color { a: 0.15, ..p.danger })),
        text_color: Some(p.danger_light),
        border: Border {
            color: Color { a: 0.35, ..p.danger },
            width: 1.0,
            radius: radius::SMALL.into(),
        },
        ..Default::default()
    }
}

/// Score badge in the card header.
pub fn score_badge_style(score: u8) -> impl Fn(&iced::Theme) -> container::Style {
    move |_theme| {
        let p = palette::current();
        let color = p.score(score);

        container::Style {
            text_color: Some(color),
            border: Border {
                color,
                width: 3.0,
                radius: radius::CARD.into(),
            },
            ..Default::default()
        }
    }
}
