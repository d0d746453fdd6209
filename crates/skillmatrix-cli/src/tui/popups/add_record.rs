//! Add-record popup
//!
//! Modal form with the employee name input and the skill set / level
//! selectors. Field values live in the core `RecordForm`; this popup only
//! tracks focus and the name cursor.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use skillmatrix_core::constants::ui;
use skillmatrix_core::{Choice, RecordForm};

use super::common::{
    center_rect, footer_hints, popup_block, popup_title, render_popup_background, PopupSize,
};
use crate::tui::input::TextInput;
use crate::tui::theme::Theme;

/// Focusable form fields, in tab order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Name,
    SkillSet,
    Level,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::SkillSet,
            FormField::SkillSet => FormField::Level,
            FormField::Level => FormField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Level,
            FormField::SkillSet => FormField::Name,
            FormField::Level => FormField::SkillSet,
        }
    }
}

/// Add-record popup state
#[derive(Debug, Default)]
pub struct AddRecordPopup {
    pub focus: FormField,
    pub name_input: TextInput,
}

impl AddRecordPopup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start over with an empty form focused on the name
    pub fn reset(&mut self) {
        self.focus = FormField::Name;
        self.name_input.clear();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn render(
        &self,
        f: &mut Frame,
        theme: &Theme,
        form: &RecordForm,
        validation_message: Option<&str>,
    ) {
        let (w, h) = PopupSize::Small.dimensions();
        let area = center_rect(w, h, f.area());
        render_popup_background(f, area, theme);

        let block = popup_block(theme);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Title
                Constraint::Length(3), // Name
                Constraint::Length(3), // Skill set
                Constraint::Length(3), // Level
                Constraint::Length(1), // Validation message
                Constraint::Min(0),
                Constraint::Length(2), // Button + hints
            ])
            .split(inner);

        let title =
            Paragraph::new(popup_title("Add New Record", theme)).alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        self.render_name(f, chunks[1], theme);
        render_selector(
            f,
            chunks[2],
            theme,
            form.skill_set.map(Choice::label),
            ui::SKILL_SET_PLACEHOLDER,
            self.focus == FormField::SkillSet,
        );
        render_selector(
            f,
            chunks[3],
            theme,
            form.level.map(Choice::label),
            ui::LEVEL_PLACEHOLDER,
            self.focus == FormField::Level,
        );

        if let Some(message) = validation_message {
            let line = Line::from(Span::styled(
                format!(" {}", message),
                Style::default().fg(theme.error_color),
            ));
            f.render_widget(Paragraph::new(line), chunks[4]);
        }

        let footer = vec![
            Line::from(Span::styled(
                " Add Record ",
                Style::default()
                    .fg(theme.accent_text_color)
                    .bg(theme.accent_color)
                    .add_modifier(Modifier::BOLD),
            )),
            footer_hints(
                &[("Tab", "next"), ("←/→", "choose"), ("Enter", "add"), ("Esc", "close")],
                theme,
            ),
        ];
        f.render_widget(Paragraph::new(footer).alignment(Alignment::Center), chunks[6]);
    }

    fn render_name(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let focused = self.focus == FormField::Name;
        // Empty name is outlined as an error until filled
        let border = if focused {
            theme.focus_color
        } else if self.name_input.is_empty() {
            theme.error_color
        } else {
            theme.input_border_color
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(theme.input_bg_color));
        let inner = block.inner(area);
        let (shown, column) = self.name_input.view(inner.width);

        let text = if self.name_input.is_empty() {
            Span::styled(
                ui::NAME_PLACEHOLDER,
                Style::default().fg(theme.input_placeholder_color),
            )
        } else {
            Span::styled(shown.to_string(), Style::default().fg(theme.text_color))
        };
        f.render_widget(Paragraph::new(Line::from(text)).block(block), area);

        if focused {
            f.set_cursor_position((inner.x + column, inner.y));
        }
    }
}

fn render_selector(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    selected: Option<&'static str>,
    placeholder: &'static str,
    focused: bool,
) {
    let border = if focused {
        theme.focus_color
    } else {
        theme.input_border_color
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(theme.input_bg_color));

    let value = match selected {
        Some(label) => Span::styled(label, Style::default().fg(theme.text_color)),
        None => Span::styled(
            placeholder,
            Style::default().fg(theme.input_placeholder_color),
        ),
    };
    let arrow_style = if focused {
        Style::default().fg(theme.focus_color)
    } else {
        Style::default().fg(theme.dim_color)
    };
    let line = Line::from(vec![
        Span::styled("‹ ", arrow_style),
        value,
        Span::styled(" ›", arrow_style),
    ]);
    f.render_widget(Paragraph::new(line).block(block), area);
}
