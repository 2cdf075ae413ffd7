//! Styling for the desktop shell.

pub mod widgets;
