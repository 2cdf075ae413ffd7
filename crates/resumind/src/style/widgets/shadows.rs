//! Shadow presets and corner radii.

use iced::{Color, Shadow, Vector};

/// Corner radii.
pub mod radius {
    pub const SMALL: f32 = 6.0;
    pub const MEDIUM: f32 = 10.0;
    pub const LARGE: f32 = 16.0;
    pub const CARD: f32 = 24.0;
}

pub fn none() -> Shadow {
    Shadow::default()
}

pub const fn card(color: Color) -> Shadow {
    Shadow {
        color,
        offset: Vector::new(0.0, 4.0),
        blur_radius: 16.0,
    }
}

/// Deep shadow for surfaces floating above a scrim.
pub const fn floating(color: Color) -> Shadow {
    Shadow {
        color,
        offset: Vector::new(0.0, 12.0),
        blur_radius: 32.0,
    }
}

/// Colored halo for the primary and danger buttons.
pub const fn glow(color: Color) -> Shadow {
    Shadow {
        color: Color::from_rgba(color.r, color.g, color.b, 0.25),
        offset: Vector::new(0.0, 2.0),
        blur_radius: 10.0,
    }
}
