//! Main screen rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use skillmatrix_core::constants::ui;
use skillmatrix_core::Choice;

use crate::tui::app::{App, Popup};
use crate::tui::utils::truncate_ellipsis;

const COLUMNS: [&str; 3] = ["Employee Name", "Skill Set", "Level"];

impl App {
    /// Draw the whole screen
    pub fn ui(&mut self, f: &mut Frame) {
        let area = f.area();
        f.render_widget(
            Block::default().style(Style::default().bg(self.theme.bg_color)),
            area,
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(3), // Search
                Constraint::Min(4),    // Table
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        self.render_header(f, chunks[0]);
        self.render_search(f, chunks[1]);
        self.render_table(f, chunks[2]);
        self.render_status_bar(f, chunks[3]);

        match self.popup {
            Popup::AddRecord => self.popups.add_record.render(
                f,
                &self.theme,
                self.state.form(),
                self.state.validation_message(),
            ),
            Popup::Help => self.popups.help.render(f, &self.theme),
            Popup::None => {}
        }
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.border_color));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(24)])
            .split(inner);

        let title = Paragraph::new(Span::styled(
            ui::APP_TITLE,
            Style::default()
                .fg(theme.title_color)
                .add_modifier(Modifier::BOLD),
        ));
        f.render_widget(title, cols[0]);

        let button = Paragraph::new(Span::styled(
            " + Add Record (Ctrl+N) ",
            Style::default()
                .fg(theme.accent_text_color)
                .bg(theme.accent_color)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right);
        f.render_widget(button, cols[1]);
    }

    fn render_search(&self, f: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(12)])
            .split(area);

        let border = if self.popup == Popup::None {
            theme.focus_color
        } else {
            theme.input_border_color
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(theme.input_bg_color));
        let inner = block.inner(cols[0]);
        let (shown, column) = self.search_input.view(inner.width);

        let text = if self.search_input.is_empty() {
            Span::styled(
                ui::SEARCH_PLACEHOLDER,
                Style::default().fg(theme.input_placeholder_color),
            )
        } else {
            Span::styled(shown.to_string(), Style::default().fg(theme.text_color))
        };
        f.render_widget(Paragraph::new(Line::from(text)).block(block), cols[0]);

        let button = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                " Search ",
                Style::default()
                    .fg(theme.accent_text_color)
                    .bg(theme.accent_color)
                    .add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center);
        f.render_widget(button, cols[1]);

        if self.popup == Popup::None {
            f.set_cursor_position((inner.x + column, inner.y));
        }
    }

    fn render_table(&mut self, f: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.border_color));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let records = self.state.visible();

        let header = Row::new(COLUMNS.iter().map(|c| Cell::from(*c))).style(
            Style::default()
                .fg(theme.accent_text_color)
                .bg(theme.accent_color)
                .add_modifier(Modifier::BOLD),
        );

        let rows = records.iter().enumerate().map(|(i, record)| {
            Row::new(vec![
                Cell::from(record.name().to_string()),
                Cell::from(record.skill_set().label()),
                Cell::from(record.level().label()),
            ])
            .style(
                Style::default()
                    .fg(theme.row_text_color)
                    .bg(theme.row_bg(i)),
            )
        });

        let widths = [
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        // Offset follows the selection, so a selected row is always drawn
        f.render_stateful_widget(table, inner, &mut self.table_state);

        if records.is_empty() && inner.height > 2 {
            let message = Paragraph::new(Span::styled(
                ui::NO_RECORDS,
                Style::default()
                    .fg(theme.dim_color)
                    .add_modifier(Modifier::ITALIC),
            ))
            .alignment(Alignment::Center);
            let line = Rect {
                y: inner.y + 2,
                height: 1,
                ..inner
            };
            f.render_widget(message, line);
        }
    }

    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let shown = self.state.visible().len();
        let total = self.state.store().len();

        let mut spans = vec![Span::styled(
            format!(" showing {} of {} records", shown, total),
            Style::default().fg(theme.text_color),
        )];
        if let Some(filter) = self.state.filter() {
            spans.push(Span::styled(
                format!("  filter: \"{}\"", truncate_ellipsis(filter, 24)),
                Style::default().fg(theme.accent_color),
            ));
        }
        if let Some(status) = &self.status {
            spans.push(Span::styled(
                format!("  {}", truncate_ellipsis(status, 40)),
                Style::default().fg(theme.success_color),
            ));
        }

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(10)])
            .split(area);
        let bar_style = Style::default().bg(theme.status_bar_bg_color);
        f.render_widget(Paragraph::new(Line::from(spans)).style(bar_style), cols[0]);
        f.render_widget(
            Paragraph::new(Span::styled("F1 help ", Style::default().fg(theme.dim_color)))
                .alignment(Alignment::Right)
                .style(bar_style),
            cols[1],
        );
    }
}
