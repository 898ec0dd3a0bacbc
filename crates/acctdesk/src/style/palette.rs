//! Color palette.
//!
//! Dark, low-contrast surfaces with a teal accent.

use iced::Color;

/// Colors used across the form.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    // Primary brand colors
    pub primary: Color,
    pub primary_light: Color,
    pub primary_dark: Color,

    // Surface colors
    pub surface: Color,
    pub surface_elevated: Color,
    pub background: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_on_primary: Color,

    // Accent colors
    pub accent_red: Color,
    pub accent_red_light: Color,

    // Border colors
    pub border_subtle: Color,
    pub border_medium: Color,

    // State colors
    pub selected: Color,
}

impl Palette {
    /// The application palette.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            // Primary - bright teal
            primary: Color::from_rgb(0.0, 1.0, 0.8),
            primary_light: Color::from_rgb(0.2, 1.0, 0.85),
            primary_dark: Color::from_rgb(0.0, 0.8, 0.65),

            // Surfaces
            surface: Color::from_rgb(0.12, 0.13, 0.15),
            surface_elevated: Color::from_rgb(0.15, 0.16, 0.18),
            background: Color::from_rgb(0.08, 0.09, 0.11),

            // Text - high contrast for readability
            text_primary: Color::from_rgb(0.92, 0.93, 0.95),
            text_secondary: Color::from_rgb(0.65, 0.68, 0.72),
            text_muted: Color::from_rgb(0.50, 0.53, 0.58),
            text_on_primary: Color::from_rgb(0.08, 0.09, 0.11),

            // Accents
            accent_red: Color::from_rgb(1.0, 0.35, 0.4),
            accent_red_light: Color::from_rgb(1.0, 0.5, 0.55),

            // Borders
            border_subtle: Color::from_rgb(0.20, 0.21, 0.24),
            border_medium: Color::from_rgb(0.28, 0.29, 0.32),

            // States
            selected: Color::from_rgb(0.10, 0.18, 0.20),
        }
    }
}

/// Gets the active palette.
#[must_use]
pub const fn current() -> Palette {
    Palette::dark()
}
