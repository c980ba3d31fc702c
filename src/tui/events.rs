use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

/// User actions from terminal events
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    Dismiss,
    MoveUp,
    MoveDown,
    Confirm,
    UpdateSearch(char),
    DeleteChar,
    FocusLost,
    FocusGained,
    None,
}

/// Poll for terminal events and convert to actions
pub fn poll_event(timeout: Duration) -> anyhow::Result<Action> {
    if event::poll(timeout)? {
        return Ok(match event::read()? {
            Event::Key(key) => key_to_action(key),
            Event::FocusLost => Action::FocusLost,
            Event::FocusGained => Action::FocusGained,
            _ => Action::None,
        });
    }
    Ok(Action::None)
}

fn key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::Dismiss,

        // Navigation (Vim/Emacs style)
        (KeyCode::Char('p'), KeyModifiers::CONTROL) => Action::MoveUp,
        (KeyCode::Char('n'), KeyModifiers::CONTROL) => Action::MoveDown,
        (KeyCode::Up, _) => Action::MoveUp,
        (KeyCode::Down, _) => Action::MoveDown,

        (KeyCode::Enter, _) => Action::Confirm,

        // Search input
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Action::UpdateSearch(c)
        }
        (KeyCode::Backspace, _) => Action::DeleteChar,

        _ => Action::None,
    }
}
