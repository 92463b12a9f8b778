use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, View};
use crate::tui::wrap;

/// Render the detail view for a single task
pub fn render_detail_view(frame: &mut Frame, app: &App, area: Rect) {
    let View::Detail(task_id) = app.view else {
        return;
    };

    let bg = app.theme.background;

    // A deleted or unknown id degrades to a placeholder, not an error
    let Some(task) = app.store.find(task_id) else {
        let empty = Paragraph::new(" Tarefa não encontrada")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    };

    let width = area.width as usize;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  {}", task.title),
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    let text_style = Style::default().fg(app.theme.text).bg(bg);
    for wrapped in wrap::wrap_text(&task.description, width.saturating_sub(4)) {
        lines.push(Line::from(Span::styled(
            format!("  {}", wrapped),
            text_style,
        )));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn shows_title_and_description() {
        let mut app = sample_app();
        let id = app.store.tasks()[0].id;
        app.open_detail(id);

        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_detail_view(frame, &app, area);
        });
        assert!(output.contains("Tarefa 1"));
        assert!(output.contains("Descrição da Tarefa 1"));
    }

    #[test]
    fn unknown_id_degrades_to_placeholder() {
        let mut app = sample_app();
        let id = app.store.tasks()[0].id;
        app.open_detail(id);
        app.store.remove(id);

        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_detail_view(frame, &app, area);
        });
        assert!(output.contains("Tarefa não encontrada"));
    }
}
