//! Shared popup layout and chrome

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::tui::theme::Theme;

/// Standard popup sizes (width, height)
#[derive(Debug, Clone, Copy)]
pub enum PopupSize {
    Small,
    Medium,
}

impl PopupSize {
    pub fn dimensions(self) -> (u16, u16) {
        match self {
            PopupSize::Small => (52, 17),
            PopupSize::Medium => (64, 22),
        }
    }
}

/// Rectangle of at most `width` x `height` centered in `area`
pub fn center_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Clear what is underneath and paint the popup background
pub fn render_popup_background(f: &mut Frame, area: Rect, theme: &Theme) {
    f.render_widget(Clear, area);
    f.render_widget(
        Block::default().style(Style::default().bg(theme.bg_color)),
        area,
    );
}

/// Rounded bordered block used by every popup
pub fn popup_block(theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent_color))
        .style(Style::default().bg(theme.bg_color))
}

/// Bold title followed by a blank spacer line
pub fn popup_title(title: &str, theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(theme.title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ]
}

/// "key: action" pairs for a popup footer
pub fn footer_hints(hints: &[(&str, &str)], theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(theme.accent_color)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(": {}", action),
            Style::default().fg(theme.text_color),
        ));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = center_rect(52, 17, area);
        assert_eq!(rect, area);

        let rect = center_rect(20, 4, area);
        assert_eq!(rect, Rect::new(10, 3, 20, 4));
    }
}
