//! Help popup with tabbed key bindings

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::common::{center_rect, footer_hints, popup_block, render_popup_background, PopupSize};
use crate::tui::theme::Theme;

const TABS: [&str; 2] = ["Table", "Add Record"];

/// Help popup state
#[derive(Debug, Default)]
pub struct HelpPopup {
    pub tab_index: usize,
}

impl HelpPopup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_tab(&mut self) {
        self.tab_index = (self.tab_index + 1) % TABS.len();
    }

    pub fn render(&self, f: &mut Frame, theme: &Theme) {
        let (w, h) = PopupSize::Medium.dimensions();
        let area = center_rect(w, h, f.area());
        render_popup_background(f, area, theme);

        let block = popup_block(theme);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let tab_spans: Vec<Span> = TABS
            .iter()
            .enumerate()
            .flat_map(|(i, tab)| {
                let mut spans = Vec::new();
                if i > 0 {
                    spans.push(Span::styled(" | ", Style::default().fg(theme.text_color)));
                }
                let style = if i == self.tab_index {
                    Style::default()
                        .fg(theme.accent_color)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                } else {
                    Style::default().fg(theme.text_color)
                };
                spans.push(Span::styled(tab.to_string(), style));
                spans
            })
            .collect();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Tabs
                Constraint::Min(5),    // Content
                Constraint::Length(2), // Footer
            ])
            .split(inner);

        f.render_widget(
            Paragraph::new(Line::from(tab_spans)).alignment(Alignment::Center),
            chunks[0],
        );

        let content = Paragraph::new(self.bindings_content(theme))
            .style(Style::default().bg(theme.bg_color));
        f.render_widget(content, chunks[1]);

        let footer = footer_hints(&[("Tab", "switch tabs"), ("Esc", "close")], theme);
        f.render_widget(Paragraph::new(footer).alignment(Alignment::Center), chunks[2]);
    }

    /// Key binding rows for the active tab
    pub fn bindings(&self) -> &'static [(&'static str, &'static str)] {
        match self.tab_index {
            0 => &[
                ("Type", "Edit search term"),
                ("Enter", "Search by name or skill"),
                ("Ctrl+U", "Clear search"),
                ("↑/↓ / PgUp/PgDn", "Scroll records"),
                ("Ctrl+Home/End", "First / last record"),
                ("Ctrl+N / F2", "Add record"),
                ("F1", "Show this help"),
                ("Esc / Ctrl+Q", "Quit"),
            ],
            _ => &[
                ("Tab / ↓", "Next field"),
                ("Shift+Tab / ↑", "Previous field"),
                ("←/→ / Space", "Choose skill set or level"),
                ("Enter", "Add record"),
                ("Esc", "Close without saving"),
            ],
        }
    }

    fn bindings_content(&self, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from("")];
        for (key, desc) in self.bindings() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<16}", key),
                    Style::default().fg(theme.accent_color),
                ),
                Span::styled(desc.to_string(), Style::default().fg(theme.text_color)),
            ]));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_wrap() {
        let mut help = HelpPopup::new();
        assert!(help.bindings().iter().any(|(_, d)| d.contains("search")));
        help.next_tab();
        assert!(help.bindings().iter().any(|(k, _)| *k == "Esc"));
        help.next_tab();
        assert_eq!(help.tab_index, 0);
    }
}
