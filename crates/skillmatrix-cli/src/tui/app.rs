//! Application shell
//!
//! Owns the component state, the UI-only widget state, and the terminal
//! event loop. Key presses become `MatrixEvent`s; the widgets are re-synced
//! from the core state after every dispatch.

use std::io::{self, Stdout};

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, widgets::TableState, Terminal};
use skillmatrix_core::{Config, MatrixEvent, MatrixState, Transition};

use crate::tui::input::TextInput;
use crate::tui::state::PopupState;
use crate::tui::theme::Theme;

/// Which popup is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    None,
    AddRecord,
    Help,
}

pub struct App {
    pub state: MatrixState,
    pub popup: Popup,
    pub popups: PopupState,
    pub search_input: TextInput,
    /// Selected row and scroll offset of the records table
    pub table_state: TableState,
    pub theme: Theme,
    /// One-line notice shown in the status bar
    pub status: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            state: MatrixState::with_feedback(config.ui.validation),
            popup: Popup::None,
            popups: PopupState::new(),
            search_input: TextInput::default(),
            table_state: TableState::default(),
            theme: Theme::default(),
            status: None,
            should_quit: false,
        }
    }

    /// Apply an event to the component state and re-sync the widgets
    pub fn dispatch(&mut self, event: MatrixEvent) -> Transition {
        let transition = self.state.dispatch(event);

        match &transition {
            Transition::FormOpened => {
                self.popups.add_record.reset();
                self.popup = Popup::AddRecord;
            }
            Transition::FormDismissed => self.popup = Popup::None,
            Transition::RecordAdded { index } => {
                self.popup = Popup::None;
                // Filter is cleared on add, so store index == table row
                self.table_state.select(Some(*index));
                if let Some(record) = self.state.store().records().get(*index) {
                    self.status = Some(format!("Added {}", record.name()));
                }
            }
            Transition::FilterApplied { matches } => {
                self.table_state = TableState::default();
                self.status = Some(format!("{} matching records", matches));
            }
            Transition::FilterCleared => {
                self.table_state = TableState::default();
                self.status = None;
            }
            Transition::Rejected(err) => tracing::debug!("Submit rejected: {}", err),
            Transition::Unchanged | Transition::FormEdited => {}
        }

        self.search_input.set(self.state.search_term());
        if self.state.is_form_open() {
            let name = self.state.form().name.clone();
            self.popups.add_record.name_input.set(&name);
        }

        transition
    }

    /// Move the table selection by `delta` rows, clamped to the visible rows
    pub fn scroll_table(&mut self, delta: isize) {
        let len = self.state.visible().len();
        if len == 0 {
            self.table_state.select(None);
            return;
        }
        let next = match self.table_state.selected() {
            Some(row) => row.saturating_add_signed(delta),
            None => 0,
        };
        self.table_state.select(Some(next.min(len - 1)));
    }

    /// Select the first or last visible row
    pub fn select_table_edge(&mut self, last: bool) {
        let len = self.state.visible().len();
        let row = if last { len.checked_sub(1) } else { (len > 0).then_some(0) };
        self.table_state.select(row);
    }

    /// Run the TUI until the user quits
    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<()> {
        let mut events = EventStream::new();

        while !self.should_quit {
            terminal.draw(|f| self.ui(f)).context("Failed to draw frame")?;

            match events.next().await {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    self.handle_key(key.code, key.modifiers);
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e).context("Failed to read terminal event"),
                None => break,
            }
        }

        tracing::info!(records = self.state.store().len(), "Exiting");
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillmatrix_core::{Level, SkillSet};

    #[test]
    fn test_dispatch_syncs_popup_and_widgets() {
        let mut app = App::new(&Config::default());
        app.dispatch(MatrixEvent::SearchChanged("net".to_string()));
        app.dispatch(MatrixEvent::SearchSubmitted);
        assert_eq!(app.search_input.value(), "net");
        assert_eq!(app.status.as_deref(), Some("3 matching records"));

        app.dispatch(MatrixEvent::OpenForm);
        assert_eq!(app.popup, Popup::AddRecord);

        app.dispatch(MatrixEvent::NameChanged("Ada Lovelace".to_string()));
        app.dispatch(MatrixEvent::SkillSetChanged(Some(SkillSet::SqlServer)));
        app.dispatch(MatrixEvent::LevelChanged(Some(Level::Expert)));
        assert_eq!(app.popups.add_record.name_input.value(), "Ada Lovelace");

        let transition = app.dispatch(MatrixEvent::FormSubmitted);
        assert_eq!(transition, Transition::RecordAdded { index: 7 });
        assert_eq!(app.popup, Popup::None);
        assert!(app.search_input.is_empty());
        assert_eq!(app.status.as_deref(), Some("Added Ada Lovelace"));
        assert_eq!(app.table_state.selected(), Some(7));
    }

    #[test]
    fn test_scroll_table_clamps_to_visible_rows() {
        let mut app = App::new(&Config::default());
        app.scroll_table(1);
        assert_eq!(app.table_state.selected(), Some(0));
        app.scroll_table(100);
        assert_eq!(app.table_state.selected(), Some(6));
        app.scroll_table(-3);
        assert_eq!(app.table_state.selected(), Some(3));
        app.select_table_edge(false);
        assert_eq!(app.table_state.selected(), Some(0));

        // A new filter starts again from the top
        app.select_table_edge(true);
        app.dispatch(MatrixEvent::SearchChanged("salesforce".to_string()));
        app.dispatch(MatrixEvent::SearchSubmitted);
        assert_eq!(app.table_state.selected(), None);
        app.select_table_edge(true);
        assert_eq!(app.table_state.selected(), Some(1));

        app.dispatch(MatrixEvent::SearchChanged("cobol".to_string()));
        app.dispatch(MatrixEvent::SearchSubmitted);
        app.scroll_table(1);
        assert_eq!(app.table_state.selected(), None);
    }
}
