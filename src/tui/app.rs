use crate::list::models::Item;
use crate::tui::controller::{Controller, EditError};
use crate::tui::handlers::{HelpModeAction, KeyHandler, NormalModeAction};
use anyhow::Result;
use crossterm::event::{KeyEvent, KeyEventKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Alert(String),
}

#[derive(Debug)]
pub struct App {
    pub controller: Controller,
    pub source_label: String,
    pub should_quit: bool,
    pub help_mode: bool,
    pub status: Option<Status>,
    bell_pending: bool,
}

impl App {
    pub fn new(baseline: Vec<Item>, start_empty: bool, source_label: String) -> Self {
        Self {
            controller: Controller::new(baseline, start_empty),
            source_label,
            should_quit: false,
            help_mode: false,
            status: None,
            bell_pending: false,
        }
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        // crossterm reports releases on some platforms
        if key_event.kind == KeyEventKind::Release {
            return Ok(());
        }

        if self.help_mode {
            self.handle_help_mode_key(key_event);
        } else {
            self.handle_normal_mode_key(key_event);
        }
        Ok(())
    }

    /// True once per failed edit, so the main loop can ring the bell.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell_pending)
    }

    fn handle_normal_mode_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_normal_mode_key(key_event) {
            NormalModeAction::None => {}
            NormalModeAction::Quit => self.should_quit = true,
            NormalModeAction::DeleteCurrent => self.delete_current(),
            NormalModeAction::DeletePrevious => self.delete_previous(),
            NormalModeAction::ReloadAll => self.reload_all(),
            NormalModeAction::Undo => self.undo(),
            NormalModeAction::MoveSelectionUp => self.controller.store_mut().move_up(),
            NormalModeAction::MoveSelectionDown => self.controller.store_mut().move_down(),
            NormalModeAction::MoveSelectionHome => self.controller.store_mut().move_home(),
            NormalModeAction::MoveSelectionEnd => self.controller.store_mut().move_end(),
            NormalModeAction::PageUp => self.controller.store_mut().page_up(),
            NormalModeAction::PageDown => self.controller.store_mut().page_down(),
            NormalModeAction::ToggleHelpMode => self.help_mode = true,
        }
    }

    fn handle_help_mode_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_help_mode_key(key_event) {
            HelpModeAction::ExitHelpMode => self.help_mode = false,
            HelpModeAction::None => {}
        }
    }

    fn delete_current(&mut self) {
        let target = self.controller.store().current_item().cloned();
        let result = self.controller.delete_current();
        self.report("delete", result, || {
            format!("Deleted '{}'", target.unwrap_or_default())
        });
    }

    fn delete_previous(&mut self) {
        let index = self.controller.store().current_index();
        let target = index
            .checked_sub(1)
            .and_then(|i| self.controller.store().get(i))
            .cloned();
        let result = self.controller.delete_previous();
        self.report("delete previous", result, || {
            format!("Deleted '{}'", target.unwrap_or_default())
        });
    }

    fn reload_all(&mut self) {
        let result = self.controller.reload_all();
        let count = self.controller.baseline().len();
        self.report("reload", result, || format!("Reloaded {} items", count));
    }

    fn undo(&mut self) {
        let restored = self.controller.undo_log().peek().map(|r| r.item.clone());
        let result = self.controller.undo();
        let remaining = self.controller.undo_log().len();
        self.report("undo", result, || {
            format!(
                "Restored '{}' ({} more to undo)",
                restored.unwrap_or_default(),
                remaining
            )
        });
    }

    fn report(
        &mut self,
        operation: &str,
        result: Result<usize, EditError>,
        message: impl FnOnce() -> String,
    ) {
        match result {
            Ok(index) => {
                let message = message();
                log::info!("{}: {} (cursor at {})", operation, message, index);
                self.status = Some(Status::Info(message));
            }
            Err(e) => {
                log::debug!("{} rejected: {}", operation, e);
                self.status = Some(Status::Alert(format!("Cannot {}: {}", operation, e)));
                self.bell_pending = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn names(list: &[&str]) -> Vec<Item> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap();
    }

    fn contents(app: &App) -> Vec<&str> {
        app.controller
            .store()
            .contents()
            .iter()
            .map(String::as_str)
            .collect()
    }

    #[test]
    fn test_delete_and_undo_through_keys() {
        let mut app = App::new(names(&["alice", "bob", "carol"]), false, "test".to_string());

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(contents(&app), vec!["alice", "carol"]);
        assert_eq!(app.status, Some(Status::Info("Deleted 'bob'".to_string())));
        assert!(!app.take_bell());

        press(&mut app, KeyCode::Char('u'));
        assert_eq!(contents(&app), vec!["alice", "bob", "carol"]);
        assert_eq!(app.controller.store().current_index(), 1);
        assert_eq!(
            app.status,
            Some(Status::Info("Restored 'bob' (0 more to undo)".to_string()))
        );
    }

    #[test]
    fn test_delete_previous_at_top_rings_bell() {
        let mut app = App::new(names(&["alice", "bob"]), false, "test".to_string());

        press(&mut app, KeyCode::Char('D'));
        assert_eq!(contents(&app), vec!["alice", "bob"]);
        assert!(matches!(app.status, Some(Status::Alert(_))));
        assert!(app.take_bell());
        assert!(!app.take_bell());
    }

    #[test]
    fn test_delete_previous_reports_removed_item() {
        let mut app = App::new(names(&["alice", "bob"]), false, "test".to_string());

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(contents(&app), vec!["bob"]);
        assert_eq!(app.status, Some(Status::Info("Deleted 'alice'".to_string())));
    }

    #[test]
    fn test_undo_with_empty_log_alerts() {
        let mut app = App::new(names(&["alice"]), false, "test".to_string());

        press(&mut app, KeyCode::Char('u'));
        assert_eq!(
            app.status,
            Some(Status::Alert("Cannot undo: nothing to undo".to_string()))
        );
        assert!(app.take_bell());
    }

    #[test]
    fn test_reload_after_start_empty() {
        let mut app = App::new(names(&["alice", "bob"]), true, "test".to_string());
        assert!(app.controller.store().is_empty());

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(contents(&app), vec!["alice", "bob"]);
    }

    #[test]
    fn test_help_mode_swallows_edit_keys() {
        let mut app = App::new(names(&["alice"]), false, "test".to_string());

        press(&mut app, KeyCode::Char('?'));
        assert!(app.help_mode);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(contents(&app), vec!["alice"]);

        press(&mut app, KeyCode::Esc);
        assert!(!app.help_mode);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(names(&["alice"]), false, "test".to_string());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
