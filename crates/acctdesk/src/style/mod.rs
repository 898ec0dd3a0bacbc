//! Styling for the application.

pub mod palette;
mod widgets;

pub use widgets::{
    banner_style, card_style, danger_button_style, field_input_style, page_style,
    primary_button_style,
};
