use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyHandler;

impl KeyHandler {
    pub fn handle_normal_mode_key(key_event: KeyEvent) -> NormalModeAction {
        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

        match key_event.code {
            KeyCode::Char('c') if ctrl => NormalModeAction::Quit,
            KeyCode::Char('r') if ctrl => NormalModeAction::ReloadAll,
            KeyCode::Char('z') if ctrl => NormalModeAction::Undo,
            KeyCode::Char('q') | KeyCode::Esc => NormalModeAction::Quit,
            KeyCode::Char('d') | KeyCode::Delete => NormalModeAction::DeleteCurrent,
            KeyCode::Char('D') | KeyCode::Backspace => NormalModeAction::DeletePrevious,
            KeyCode::Char('r') => NormalModeAction::ReloadAll,
            KeyCode::Char('u') => NormalModeAction::Undo,
            KeyCode::Up | KeyCode::Char('k') => NormalModeAction::MoveSelectionUp,
            KeyCode::Down | KeyCode::Char('j') => NormalModeAction::MoveSelectionDown,
            KeyCode::Home | KeyCode::Char('g') => NormalModeAction::MoveSelectionHome,
            KeyCode::End | KeyCode::Char('G') => NormalModeAction::MoveSelectionEnd,
            KeyCode::PageUp => NormalModeAction::PageUp,
            KeyCode::PageDown => NormalModeAction::PageDown,
            KeyCode::Char('?') => NormalModeAction::ToggleHelpMode,
            _ => NormalModeAction::None,
        }
    }

    pub fn handle_help_mode_key(key_event: KeyEvent) -> HelpModeAction {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') => {
                HelpModeAction::ExitHelpMode
            }
            _ => HelpModeAction::None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalModeAction {
    None,
    Quit,
    DeleteCurrent,
    DeletePrevious,
    ReloadAll,
    Undo,
    MoveSelectionUp,
    MoveSelectionDown,
    MoveSelectionHome,
    MoveSelectionEnd,
    PageUp,
    PageDown,
    ToggleHelpMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpModeAction {
    None,
    ExitHelpMode,
}
