use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, DraftField};
use crate::util::unicode;

/// Line offsets within the content area
const TITLE_INPUT_ROW: u16 = 2;
const DESC_INPUT_ROW: u16 = 5;

/// Render the add-task form: two labeled text inputs bound to the draft
pub fn render_add_view(frame: &mut Frame, app: &App, area: Rect) {
    let Some(add) = app.add.as_ref() else {
        return;
    };

    let bg = app.theme.background;
    let label_active = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let label_idle = Style::default().fg(app.theme.dim).bg(bg);
    let input_style = Style::default().fg(app.theme.text_bright).bg(bg);

    let field_label = |name: &str, focused: bool| {
        let indicator = if focused { "\u{258C} " } else { "  " };
        Line::from(vec![
            Span::styled(
                indicator.to_string(),
                Style::default().fg(app.theme.highlight).bg(bg),
            ),
            Span::styled(
                name.to_string(),
                if focused { label_active } else { label_idle },
            ),
        ])
    };

    let title_focused = add.field == DraftField::Title;
    let lines = vec![
        Line::from(""),
        field_label("Título", title_focused),
        Line::from(Span::styled(format!("  {}", add.draft.title), input_style)),
        Line::from(""),
        field_label("Descrição", !title_focused),
        Line::from(Span::styled(
            format!("  {}", add.draft.description),
            input_style,
        )),
    ];

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);

    // Terminal cursor on the focused input
    let row = if title_focused {
        TITLE_INPUT_ROW
    } else {
        DESC_INPUT_ROW
    };
    let text = add.focused_text();
    let col = 2 + unicode::display_width(&text[..add.cursor.min(text.len())]) as u16;
    if area.height > row && area.width > col {
        frame.set_cursor_position(Position::new(area.x + col, area.y + row));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn shows_both_labels_and_draft_text() {
        let mut app = empty_app();
        app.open_add();
        {
            let add = app.add.as_mut().unwrap();
            add.draft.title = "Nova tarefa".into();
            add.draft.description = "Uma descrição".into();
        }

        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_add_view(frame, &app, area);
        });
        assert!(output.contains("Título"));
        assert!(output.contains("Descrição"));
        assert!(output.contains("Nova tarefa"));
        assert!(output.contains("Uma descrição"));
    }

    #[test]
    fn focus_indicator_follows_the_focused_field() {
        let mut app = empty_app();
        app.open_add();

        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_add_view(frame, &app, area);
        });
        let title_line = output.lines().nth(1).unwrap();
        assert!(title_line.contains('\u{258C}'));

        app.add.as_mut().unwrap().field = DraftField::Description;
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_add_view(frame, &app, area);
        });
        let desc_line = output.lines().nth(4).unwrap();
        assert!(desc_line.contains('\u{258C}'));
    }
}
