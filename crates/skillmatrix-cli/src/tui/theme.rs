//! Color palette for the skill matrix screen

use ratatui::style::Color;

/// Colors used across the UI
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg_color: Color,
    pub border_color: Color,
    pub title_color: Color,
    /// Buttons and table header (green-600)
    pub accent_color: Color,
    /// Text drawn on top of the accent color
    pub accent_text_color: Color,
    pub text_color: Color,
    pub dim_color: Color,
    pub error_color: Color,
    pub success_color: Color,
    /// Even table rows (green-50)
    pub row_even_bg_color: Color,
    /// Odd table rows (green-100)
    pub row_odd_bg_color: Color,
    pub row_text_color: Color,
    pub input_bg_color: Color,
    pub input_border_color: Color,
    pub input_placeholder_color: Color,
    pub focus_color: Color,
    pub status_bar_bg_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg_color: Color::Rgb(20, 28, 24),
            border_color: Color::Rgb(74, 98, 84),
            title_color: Color::Rgb(220, 252, 231),
            accent_color: Color::Rgb(22, 163, 74),
            accent_text_color: Color::Rgb(255, 255, 255),
            text_color: Color::Rgb(226, 232, 240),
            dim_color: Color::Rgb(148, 163, 184),
            error_color: Color::Rgb(239, 68, 68),
            success_color: Color::Rgb(74, 222, 128),
            row_even_bg_color: Color::Rgb(240, 253, 244),
            row_odd_bg_color: Color::Rgb(220, 252, 231),
            row_text_color: Color::Rgb(20, 40, 28),
            input_bg_color: Color::Rgb(30, 41, 35),
            input_border_color: Color::Rgb(74, 98, 84),
            input_placeholder_color: Color::Rgb(100, 116, 139),
            focus_color: Color::Rgb(134, 239, 172),
            status_bar_bg_color: Color::Rgb(28, 38, 32),
        }
    }
}

impl Theme {
    /// Background for a table row, alternating by index
    pub fn row_bg(&self, index: usize) -> Color {
        if index % 2 == 0 {
            self.row_even_bg_color
        } else {
            self.row_odd_bg_color
        }
    }
}
