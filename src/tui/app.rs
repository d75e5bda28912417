//! TUI application - event handling
//!
//! The App struct owns the AppState and handles all keyboard events. It
//! does not do any rendering (views) or I/O (runner); key handlers either
//! mutate state directly or queue a PendingAction for the runner.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{AppState, Focus, InteractionMode, PendingAction};
use crate::catalog::Catalog;

/// TUI application
pub struct App {
    /// Application state
    state: AppState,
}

impl App {
    /// Create a new application instance over the built-in catalog
    pub fn new(catalog: Catalog) -> Self {
        Self {
            state: AppState::new(catalog),
        }
    }

    /// Get reference to state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get mutable reference to state
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Handle a key event
    ///
    /// Returns true if the application should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match self.state.interaction_mode {
            InteractionMode::Normal => self.handle_normal_key(key),
            InteractionMode::FieldInput => self.handle_field_input_key(key),
            InteractionMode::Help => self.handle_help_key(key),
        }
    }

    /// Handle key in normal mode
    fn handle_normal_key(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            // === Quit ===
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                return true; // Force quit
            }
            (KeyCode::Char('q'), _) => {
                self.state.should_quit = true;
            }
            (KeyCode::Esc, _) => {
                self.handle_escape();
            }

            // === Help ===
            (KeyCode::Char('?'), _) | (KeyCode::F(1), _) => {
                self.state.interaction_mode = InteractionMode::Help;
            }

            // === Focus cycling ===
            (KeyCode::Tab, _) | (KeyCode::Right, _) => {
                self.state.focus = self.state.focus.next();
            }
            (KeyCode::BackTab, _) | (KeyCode::Left, _) => {
                self.state.focus = self.state.focus.prev();
            }

            // === Navigation within the focused pane ===
            (KeyCode::Up, _) | (KeyCode::Char('k'), _) => {
                self.navigate(-1);
            }
            (KeyCode::Down, _) | (KeyCode::Char('j'), _) => {
                self.navigate(1);
            }
            (KeyCode::Char('g'), _) => {
                self.navigate_first();
            }
            (KeyCode::Char('G'), _) => {
                self.navigate_last();
            }

            // === Confirm / drill in ===
            (KeyCode::Enter, _) => {
                self.handle_enter();
            }

            // === Actions ===
            (KeyCode::Char('s'), _) => {
                self.queue_submit();
            }
            (KeyCode::Char('e'), _) => {
                if self.state.result.is_some() {
                    self.state.pending_action = Some(PendingAction::ExportMarkdown);
                }
            }
            (KeyCode::Char('E'), _) => {
                if self.state.result.is_some() {
                    self.state.pending_action = Some(PendingAction::ExportJson);
                }
            }
            (KeyCode::Char('y'), _) => {
                if self.state.result.is_some() {
                    self.state.pending_action = Some(PendingAction::Copy);
                }
            }
            (KeyCode::Char('x'), _) | (KeyCode::Delete, _) => {
                self.state.clear_result();
            }

            _ => {}
        }

        false
    }

    /// Move the selection (or scroll) in the focused pane
    fn navigate(&mut self, delta: i32) {
        match self.state.focus {
            Focus::Methodologies => {
                let max = self.state.catalog.len();
                if delta < 0 {
                    self.state.methodology_selection.select_prev();
                } else {
                    self.state.methodology_selection.select_next(max);
                }
            }
            Focus::Variants => {
                let max = self.state.methodology().map(|m| m.prompts.len()).unwrap_or(0);
                if delta < 0 {
                    self.state.variant_selection.select_prev();
                } else {
                    self.state.variant_selection.select_next(max);
                }
            }
            Focus::Form => {
                let max = self.state.fields.len();
                if max == 0 {
                    return;
                }
                if delta < 0 {
                    self.state.active_field = self.state.active_field.saturating_sub(1);
                } else if self.state.active_field + 1 < max {
                    self.state.active_field += 1;
                }
            }
            Focus::Result => {
                if delta < 0 {
                    self.state.result_scroll = self.state.result_scroll.saturating_sub(1);
                } else {
                    self.state.result_scroll = self.state.result_scroll.saturating_add(1);
                }
            }
        }
    }

    fn navigate_first(&mut self) {
        match self.state.focus {
            Focus::Methodologies => self.state.methodology_selection.select_first(),
            Focus::Variants => self.state.variant_selection.select_first(),
            Focus::Form => self.state.active_field = 0,
            Focus::Result => self.state.result_scroll = 0,
        }
    }

    fn navigate_last(&mut self) {
        match self.state.focus {
            Focus::Methodologies => self.state.methodology_selection.select_last(self.state.catalog.len()),
            Focus::Variants => {
                let max = self.state.methodology().map(|m| m.prompts.len()).unwrap_or(0);
                self.state.variant_selection.select_last(max);
            }
            Focus::Form => {
                if !self.state.fields.is_empty() {
                    self.state.active_field = self.state.fields.len() - 1;
                }
            }
            Focus::Result => {}
        }
    }

    /// Enter confirms the highlighted item or starts editing a field
    fn handle_enter(&mut self) {
        match self.state.focus {
            Focus::Methodologies => {
                let index = self.state.methodology_selection.selected_index;
                self.state.select_methodology(index);
                if let Some(multi) = self.state.methodology().map(|m| m.multi_prompt) {
                    self.state.focus = if multi { Focus::Variants } else { Focus::Form };
                }
            }
            Focus::Variants => {
                let index = self.state.variant_selection.selected_index;
                self.state.select_variant(index);
                if self.state.selected_variant.is_some() {
                    self.state.focus = Focus::Form;
                }
            }
            Focus::Form => {
                if !self.state.fields.is_empty() {
                    self.state.interaction_mode = InteractionMode::FieldInput;
                }
            }
            Focus::Result => {}
        }
    }

    /// Queue a submission if the form is ready; errors surface in place
    fn queue_submit(&mut self) {
        match self.state.submit_request() {
            Ok(_) => {
                self.state.pending_action = Some(PendingAction::Submit);
            }
            Err(msg) => {
                self.state.set_error(msg);
            }
        }
    }

    /// Escape clears transient feedback first, then backs focus out
    fn handle_escape(&mut self) {
        if self.state.error_message.is_some() {
            self.state.clear_error();
            return;
        }
        if self.state.notice.is_some() {
            self.state.notice = None;
            return;
        }
        if self.state.focus != Focus::Methodologies {
            self.state.focus = Focus::Methodologies;
            return;
        }
        self.state.should_quit = true;
    }

    /// Handle key while typing into the active form field
    fn handle_field_input_key(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                return true;
            }
            (KeyCode::Esc, _) => {
                self.state.interaction_mode = InteractionMode::Normal;
            }
            (KeyCode::Enter, _) | (KeyCode::Tab, _) => {
                // advance to the next field; after the last one, drop back
                // to normal mode so `s` can submit
                if self.state.active_field + 1 < self.state.fields.len() {
                    self.state.active_field += 1;
                } else {
                    self.state.interaction_mode = InteractionMode::Normal;
                }
            }
            (KeyCode::Backspace, _) => {
                let index = self.state.active_field;
                if let Some(field) = self.state.fields.get_mut(index) {
                    field.value.pop();
                }
            }
            (KeyCode::Char(c), _) => {
                let index = self.state.active_field;
                if let Some(field) = self.state.fields.get_mut(index) {
                    field.value.push(c);
                }
            }
            _ => {}
        }

        false
    }

    /// Handle key in help mode
    fn handle_help_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                self.state.interaction_mode = InteractionMode::Normal;
            }
            _ => {}
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(Catalog::builtin())
    }

    fn select_single_variant(app: &mut App) {
        let index = app.state.catalog.all().iter().position(|m| m.id == "m2").unwrap();
        app.state.methodology_selection.selected_index = index;
        app.handle_key(key(KeyCode::Enter));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert!(app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));

        let mut app = self::app();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.state().should_quit);
    }

    #[test]
    fn test_enter_selects_methodology_and_moves_focus() {
        let mut app = app();
        select_single_variant(&mut app);

        assert!(app.state().methodology().is_some());
        // single-variant methodology skips the variant pane
        assert_eq!(app.state().focus, Focus::Form);
        assert!(!app.state().fields.is_empty());
    }

    #[test]
    fn test_multi_variant_methodology_focuses_variant_pane() {
        let mut app = app();
        let index = app.state.catalog.all().iter().position(|m| m.id == "mReels").unwrap();
        app.state.methodology_selection.selected_index = index;
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.state().focus, Focus::Variants);

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state().focus, Focus::Form);
        assert!(!app.state().fields.is_empty());
    }

    #[test]
    fn test_field_typing_roundtrip() {
        let mut app = app();
        select_single_variant(&mut app);

        app.handle_key(key(KeyCode::Enter)); // start editing
        assert_eq!(app.state().interaction_mode, InteractionMode::FieldInput);

        for c in "moda".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.state().fields[0].value, "mod");

        // Enter past the last field drops back to normal mode
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.state().interaction_mode, InteractionMode::Normal);
    }

    #[test]
    fn test_submit_with_empty_fields_sets_error() {
        let mut app = app();
        select_single_variant(&mut app);

        app.handle_key(key(KeyCode::Char('s')));
        assert!(app.state().error_message.is_some());
        assert!(app.state().pending_action.is_none());
    }

    #[test]
    fn test_submit_queues_pending_action() {
        let mut app = app();
        select_single_variant(&mut app);
        app.state_mut().fields[0].value = "moda".to_string();

        app.handle_key(key(KeyCode::Char('s')));
        assert_eq!(app.state().pending_action, Some(PendingAction::Submit));
    }

    #[test]
    fn test_export_and_copy_require_result() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('e')));
        app.handle_key(key(KeyCode::Char('y')));
        assert!(app.state().pending_action.is_none());

        app.state_mut().finish_generation("texto".to_string());
        app.handle_key(key(KeyCode::Char('y')));
        assert_eq!(app.state().pending_action, Some(PendingAction::Copy));
    }

    #[test]
    fn test_clear_result() {
        let mut app = app();
        app.state_mut().finish_generation("texto".to_string());
        app.handle_key(key(KeyCode::Char('x')));
        assert!(app.state().result.is_none());
        assert!(app.state().blocks.is_empty());
    }

    #[test]
    fn test_help_toggle() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('?')));
        assert_eq!(app.state().interaction_mode, InteractionMode::Help);
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.state().interaction_mode, InteractionMode::Normal);
    }

    #[test]
    fn test_escape_clears_error_before_refocusing() {
        let mut app = app();
        app.state_mut().focus = Focus::Result;
        app.state_mut().set_error("erro");

        app.handle_key(key(KeyCode::Esc));
        assert!(app.state().error_message.is_none());
        assert_eq!(app.state().focus, Focus::Result);

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.state().focus, Focus::Methodologies);
    }
}
