//! Popup keyboard event handlers
//!
//! Handles keyboard input for the add-record form and the help popup.

use crossterm::event::{KeyCode, KeyModifiers};
use skillmatrix_core::{Choice, MatrixEvent};

use crate::tui::app::{App, Popup};
use crate::tui::popups::add_record::FormField;

impl App {
    /// Handle keyboard events when a popup is open
    pub fn handle_popup_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match self.popup {
            Popup::Help => match code {
                KeyCode::Esc | KeyCode::F(1) => self.popup = Popup::None,
                KeyCode::Tab => self.popups.help.next_tab(),
                _ => {}
            },
            Popup::AddRecord => self.handle_add_record_key(code, modifiers),
            Popup::None => {}
        }
    }

    fn handle_add_record_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Esc => {
                self.dispatch(MatrixEvent::DismissForm);
            }
            KeyCode::Enter => {
                self.dispatch(MatrixEvent::FormSubmitted);
            }
            KeyCode::Tab | KeyCode::Down => self.popups.add_record.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.popups.add_record.focus_prev(),
            _ => match self.popups.add_record.focus {
                FormField::Name => {
                    if self.popups.add_record.name_input.handle_key(code, modifiers) {
                        let name = self.popups.add_record.name_input.value().to_string();
                        self.dispatch(MatrixEvent::NameChanged(name));
                    }
                }
                FormField::SkillSet => {
                    let current = self.state.form().skill_set;
                    if let Some(next) = cycle(code, current) {
                        self.dispatch(MatrixEvent::SkillSetChanged(next));
                    }
                }
                FormField::Level => {
                    let current = self.state.form().level;
                    if let Some(next) = cycle(code, current) {
                        self.dispatch(MatrixEvent::LevelChanged(next));
                    }
                }
            },
        }
    }
}

/// New selector value for an arrow/space key, or None if the key does not
/// move the selector
fn cycle<T: Choice>(code: KeyCode, current: Option<T>) -> Option<Option<T>> {
    match code {
        KeyCode::Right | KeyCode::Char(' ') => Some(T::cycle_next(current)),
        KeyCode::Left => Some(T::cycle_prev(current)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillmatrix_core::config::UiConfig;
    use skillmatrix_core::{Config, Level, Modal, RecordForm, SkillSet, ValidationFeedback};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(code, KeyModifiers::NONE);
    }

    fn open_form(app: &mut App) {
        press(app, KeyCode::F(2));
        assert_eq!(app.popup, Popup::AddRecord);
    }

    #[test]
    fn test_add_record_via_keys() {
        let mut app = App::new(&Config::default());
        for ch in "net".chars() {
            press(&mut app, KeyCode::Char(ch));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state.visible().len(), 3);

        open_form(&mut app);
        for ch in "Ada Lovelace".chars() {
            press(&mut app, KeyCode::Char(ch));
        }
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right); // .NET
        press(&mut app, KeyCode::Right); // SQL Server
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Left); // Expert
        assert_eq!(app.state.form().skill_set, Some(SkillSet::SqlServer));
        assert_eq!(app.state.form().level, Some(Level::Expert));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.popup, Popup::None);
        assert_eq!(app.state.store().len(), 8);
        let last = app.state.store().last().unwrap();
        assert_eq!(last.name(), "Ada Lovelace");
        assert_eq!(app.state.search_term(), "");
        assert_eq!(app.state.visible().len(), 8);
    }

    #[test]
    fn test_blank_name_keeps_modal_open() {
        let mut app = App::new(&Config::default());
        open_form(&mut app);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.popup, Popup::AddRecord);
        assert_eq!(app.state.modal(), Modal::Open);
        assert_eq!(app.state.store().len(), 7);
        assert_eq!(
            app.state.validation_message(),
            Some("Please fill in all fields")
        );
    }

    #[test]
    fn test_silent_policy_shows_no_message() {
        let config = Config {
            ui: UiConfig {
                validation: ValidationFeedback::Silent,
            },
            ..Config::default()
        };
        let mut app = App::new(&config);
        open_form(&mut app);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.popup, Popup::AddRecord);
        assert_eq!(app.state.validation_message(), None);
    }

    #[test]
    fn test_escape_discards_form() {
        let mut app = App::new(&Config::default());
        open_form(&mut app);
        press(&mut app, KeyCode::Char('X'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.popup, Popup::None);
        assert_eq!(app.state.form(), &RecordForm::default());

        open_form(&mut app);
        assert!(app.popups.add_record.name_input.is_empty());
    }

    #[test]
    fn test_selector_returns_to_placeholder() {
        let mut app = App::new(&Config::default());
        open_form(&mut app);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.state.form().skill_set, Some(SkillSet::Salesforce));
        press(&mut app, KeyCode::Right);
        assert_eq!(app.state.form().skill_set, None);
        // Letters do nothing on a selector
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.state.form().skill_set, None);
        assert_eq!(app.state.form().name, "");
    }
}
