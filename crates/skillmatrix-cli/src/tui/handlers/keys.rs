//! Main view keyboard handling

use crossterm::event::{KeyCode, KeyModifiers};
use skillmatrix_core::MatrixEvent;

use crate::tui::app::{App, Popup};

/// Rows moved by PageUp / PageDown
const PAGE_ROWS: isize = 10;

impl App {
    /// Route a key press to the open popup or the main view
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        let ctrl = modifiers.contains(KeyModifiers::CONTROL);

        // Global quit, even with a popup open
        if ctrl && matches!(code, KeyCode::Char('c') | KeyCode::Char('q')) {
            self.should_quit = true;
            return;
        }

        if self.popup != Popup::None {
            self.handle_popup_key(code, modifiers);
            return;
        }

        match code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::F(1) => {
                self.popup = Popup::Help;
            }
            KeyCode::F(2) => {
                self.dispatch(MatrixEvent::OpenForm);
            }
            KeyCode::Char('n') if ctrl => {
                self.dispatch(MatrixEvent::OpenForm);
            }
            KeyCode::Char('u') if ctrl => {
                self.dispatch(MatrixEvent::SearchChanged(String::new()));
            }
            KeyCode::Enter => {
                self.dispatch(MatrixEvent::SearchSubmitted);
            }
            KeyCode::Up => self.scroll_table(-1),
            KeyCode::Down => self.scroll_table(1),
            KeyCode::PageUp => self.scroll_table(-PAGE_ROWS),
            KeyCode::PageDown => self.scroll_table(PAGE_ROWS),
            // Plain Home/End move the search cursor
            KeyCode::Home if ctrl => self.select_table_edge(false),
            KeyCode::End if ctrl => self.select_table_edge(true),
            _ => {
                if self.search_input.handle_key(code, modifiers) {
                    let term = self.search_input.value().to_string();
                    self.dispatch(MatrixEvent::SearchChanged(term));
                }
            }
        }
    }
}
