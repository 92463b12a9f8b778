mod add;
mod detail;
mod list;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, View};

/// Handle a key event for the current screen
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    match app.view {
        View::List => list::handle_list(app, key),
        View::Detail(_) => detail::handle_detail(app, key),
        View::Add => add::handle_add(app, key),
    }
}

#[cfg(test)]
pub(crate) fn press(app: &mut App, code: KeyCode) {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    handle_key(
        app,
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        },
    );
}
