use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{Action, AppMode};

/// Map key events to actions based on current mode
pub fn handle_key(key: KeyEvent, mode: AppMode) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match mode {
        AppMode::Connecting | AppMode::Deleting => handle_key_busy(key),
        AppMode::ApiDown => handle_key_api_down(key),
        AppMode::Browsing => handle_key_browsing(key),
        AppMode::Help => handle_key_help(key),
        AppMode::Instructions => handle_key_instructions(key),
        AppMode::ConfirmDelete => handle_key_confirm(key),
        AppMode::Upload => handle_key_upload(key),
        AppMode::Uploading => Action::Tick,
        AppMode::Notice => handle_key_notice(key),
    }
}

fn handle_key_busy(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        _ => Action::Tick,
    }
}

fn handle_key_api_down(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('r') | KeyCode::Enter => Action::RetryHealth,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::Tick,
    }
}

fn handle_key_help(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Action::HideHelp,
        _ => Action::Tick,
    }
}

fn handle_key_instructions(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char(' ') => Action::ToggleDontShow,
        KeyCode::Enter | KeyCode::Esc => Action::DismissInstructions,
        _ => Action::Tick,
    }
}

fn handle_key_confirm(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Action::ConfirmDelete,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Action::CancelDelete,
        _ => Action::Tick,
    }
}

fn handle_key_notice(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Action::DismissNotice,
        _ => Action::Tick,
    }
}

fn handle_key_upload(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Action::SubmitUpload
        }
        KeyCode::Char(c) => Action::UploadInput(c),
        KeyCode::Backspace => Action::UploadBackspace,
        KeyCode::Enter => Action::UploadEnter,
        KeyCode::Right | KeyCode::Down | KeyCode::Tab => Action::AlbumNext,
        KeyCode::Left | KeyCode::Up | KeyCode::BackTab => Action::AlbumPrev,
        KeyCode::Esc => Action::CancelUpload,
        _ => Action::Tick,
    }
}

fn handle_key_browsing(key: KeyEvent) -> Action {
    match key.code {
        // Quit
        KeyCode::Char('q') => Action::Quit,

        // Navigation
        KeyCode::Up | KeyCode::Char('k') => Action::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => Action::MoveDown,
        KeyCode::Left | KeyCode::Char('h') => Action::MoveLeft,
        KeyCode::Right | KeyCode::Char('l') => Action::MoveRight,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::Home | KeyCode::Char('g') => Action::GoToFirst,
        KeyCode::End | KeyCode::Char('G') => Action::GoToLast,

        // Selection
        KeyCode::Char(' ') => Action::ToggleSelect,
        KeyCode::Esc => Action::ClearSelection,

        // Paging
        KeyCode::Char('m') => Action::LoadMore,
        KeyCode::Char(']') | KeyCode::Char('+') => Action::PageSizeUp,
        KeyCode::Char('[') | KeyCode::Char('-') => Action::PageSizeDown,
        KeyCode::Char('r') => Action::Refresh,

        // Actions
        KeyCode::Char('d') | KeyCode::Delete => Action::Delete,
        KeyCode::Char('u') => Action::OpenUpload,

        // Help
        KeyCode::Char('?') => Action::ShowHelp,

        _ => Action::Tick,
    }
}
