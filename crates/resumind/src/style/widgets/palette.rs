//! Light and dark color palettes.
//!
//! Style functions read the active palette through [`current`]; the shell
//! switches it with [`set_theme`] when settings load or the user toggles.

use std::sync::{LazyLock, RwLock};

use iced::Color;

/// Light or dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light surfaces.
    Light,
    /// Dark surfaces (default).
    #[default]
    Dark,
}

impl ThemeMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Label for the toggle button.
    #[must_use]
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Dark mode",
            Self::Dark => "Light mode",
        }
    }
}

/// Colors used by the style functions.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub primary: Color,
    pub primary_light: Color,
    pub primary_dark: Color,

    pub background: Color,
    pub surface: Color,
    pub surface_elevated: Color,

    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_on_primary: Color,

    pub score_good: Color,
    pub score_fair: Color,
    pub danger: Color,
    pub danger_light: Color,

    pub hover: Color,
    pub drop_target: Color,
    pub border_subtle: Color,
    pub border_strong: Color,

    /// Backdrop behind modal surfaces.
    pub scrim: Color,
    pub shadow: Color,
}

impl Palette {
    /// Light palette.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::from_rgb(0.23, 0.38, 0.95),
            primary_light: Color::from_rgb(0.40, 0.53, 1.0),
            primary_dark: Color::from_rgb(0.16, 0.28, 0.80),

            background: Color::from_rgb(0.96, 0.97, 0.99),
            surface: Color::WHITE,
            surface_elevated: Color::from_rgb(0.99, 0.99, 1.0),

            text_primary: Color::from_rgb(0.07, 0.09, 0.13),
            text_secondary: Color::from_rgb(0.38, 0.42, 0.50),
            text_muted: Color::from_rgb(0.58, 0.62, 0.68),
            text_on_primary: Color::WHITE,

            score_good: Color::from_rgb(0.13, 0.70, 0.40),
            score_fair: Color::from_rgb(0.93, 0.66, 0.05),
            danger: Color::from_rgb(0.86, 0.15, 0.15),
            danger_light: Color::from_rgb(0.95, 0.30, 0.30),

            hover: Color::from_rgb(0.94, 0.95, 0.98),
            drop_target: Color::from_rgb(0.90, 0.93, 1.0),
            border_subtle: Color::from_rgb(0.89, 0.91, 0.94),
            border_strong: Color::from_rgb(0.74, 0.78, 0.84),

            scrim: Color::from_rgba(0.0, 0.0, 0.0, 0.45),
            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
        }
    }

    /// Dark palette.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::from_rgb(0.45, 0.58, 1.0),
            primary_light: Color::from_rgb(0.60, 0.70, 1.0),
            primary_dark: Color::from_rgb(0.33, 0.45, 0.88),

            background: Color::from_rgb(0.06, 0.07, 0.10),
            surface: Color::from_rgb(0.11, 0.12, 0.16),
            surface_elevated: Color::from_rgb(0.15, 0.16, 0.21),

            text_primary: Color::from_rgb(0.93, 0.94, 0.97),
            text_secondary: Color::from_rgb(0.66, 0.69, 0.75),
            text_muted: Color::from_rgb(0.48, 0.51, 0.58),
            text_on_primary: Color::from_rgb(0.05, 0.06, 0.09),

            score_good: Color::from_rgb(0.25, 0.85, 0.52),
            score_fair: Color::from_rgb(1.0, 0.78, 0.25),
            danger: Color::from_rgb(0.90, 0.22, 0.22),
            danger_light: Color::from_rgb(1.0, 0.38, 0.38),

            hover: Color::from_rgb(0.17, 0.18, 0.23),
            drop_target: Color::from_rgb(0.14, 0.18, 0.30),
            border_subtle: Color::from_rgb(0.20, 0.21, 0.26),
            border_strong: Color::from_rgb(0.34, 0.36, 0.42),

            scrim: Color::from_rgba(0.0, 0.0, 0.0, 0.60),
            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.30),
        }
    }

    /// Palette for a mode.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Color of a score badge.
    #[must_use]
    pub const fn score(&self, score: u8) -> Color {
        match score {
            70.. => self.score_good,
            50..=69 => self.score_fair,
            _ => self.danger,
        }
    }
}

static CURRENT: LazyLock<RwLock<Palette>> = LazyLock::new(|| RwLock::new(Palette::dark()));

/// Switches the active palette.
pub fn set_theme(mode: ThemeMode) {
    if let Ok(mut palette) = CURRENT.write() {
        *palette = Palette::for_mode(mode);
    }
}

/// Copy of the active palette.
#[must_use]
pub fn current() -> Palette {
    CURRENT.read().map_or_else(|_| Palette::dark(), |p| *p)
}
