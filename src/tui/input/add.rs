use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, DraftField};
use crate::util::unicode;

pub(super) fn handle_add(app: &mut App, key: KeyEvent) {
    match key.code {
        // "Salvar" — empty titles are silently discarded by the store
        KeyCode::Enter => {
            app.save_draft();
            return;
        }
        // "Cancelar"
        KeyCode::Esc => {
            app.cancel_draft();
            return;
        }
        _ => {}
    }

    let Some(add) = app.add.as_mut() else {
        return;
    };

    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            add.field = match add.field {
                DraftField::Title => DraftField::Description,
                DraftField::Description => DraftField::Title,
            };
            add.cursor = add.focused_text().len();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let at = add.cursor;
            add.focused_text_mut().insert(at, c);
            add.cursor += c.len_utf8();
        }
        KeyCode::Backspace => {
            if let Some(prev) = unicode::prev_grapheme_boundary(add.focused_text(), add.cursor) {
                let at = add.cursor;
                add.focused_text_mut().replace_range(prev..at, "");
                add.cursor = prev;
            }
        }
        KeyCode::Delete => {
            if let Some(next) = unicode::next_grapheme_boundary(add.focused_text(), add.cursor) {
                let at = add.cursor;
                add.focused_text_mut().replace_range(at..next, "");
            }
        }
        KeyCode::Left => {
            if let Some(prev) = unicode::prev_grapheme_boundary(add.focused_text(), add.cursor) {
                add.cursor = prev;
            }
        }
        KeyCode::Right => {
            if let Some(next) = unicode::next_grapheme_boundary(add.focused_text(), add.cursor) {
                add.cursor = next;
            }
        }
        KeyCode::Home => {
            add.cursor = 0;
        }
        KeyCode::End => {
            add.cursor = add.focused_text().len();
        }
        _ => {}
    }
}
