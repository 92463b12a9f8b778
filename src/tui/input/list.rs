use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

pub(super) fn handle_list(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            let max = app.store.len().saturating_sub(1);
            if app.list.cursor < max {
                app.list.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.list.cursor = app.list.cursor.saturating_sub(1);
        }
        KeyCode::Char('g') => {
            app.list.cursor = 0;
        }
        KeyCode::Char('G') => {
            app.list.cursor = app.store.len().saturating_sub(1);
        }
        // Enter expands a collapsed row; on the expanded row it is
        // "Ver mais" and opens the detail screen
        KeyCode::Enter => {
            let cursor_id = app.cursor_task_id();
            if cursor_id.is_some() && app.list.expanded == cursor_id {
                if let Some(id) = cursor_id {
                    app.open_detail(id);
                }
            } else {
                app.toggle_expanded();
            }
        }
        KeyCode::Char(' ') => {
            app.toggle_expanded();
        }
        // "Ver mais": only reachable from the expanded row
        KeyCode::Char('v') => {
            let cursor_id = app.cursor_task_id();
            if cursor_id.is_some() && app.list.expanded == cursor_id {
                if let Some(id) = cursor_id {
                    app.open_detail(id);
                }
            }
        }
        // "Excluir"
        KeyCode::Char('x') => {
            app.delete_at_cursor();
        }
        KeyCode::Char('a') => {
            app.open_add();
        }
        _ => {}
    }
}
