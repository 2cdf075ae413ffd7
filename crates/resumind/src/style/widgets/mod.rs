//! Widget style functions reading the active palette.

mod buttons;
mod containers;
mod inputs;
pub mod palette;
mod shadows;

pub use buttons::{
    clear_button_style, danger_button_style, link_button_style, outline_button_style,
    primary_button_style,
};
pub use containers::{
    card_style, dialog_style, dropzone_style, navbar_style, page_style, preview_placeholder_style,
    rejection_style, score_badge_style, scrim_style,
};
pub use inputs::path_input_style;
