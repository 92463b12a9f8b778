use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Task;
use crate::tui::app::App;
use crate::tui::wrap;
use crate::util::unicode;

/// Left margin for row content and description text
const INDENT: &str = "   ";

/// Render the list view content area
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.store.is_empty() {
        let empty = Paragraph::new(" Nenhuma tarefa")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let width = area.width as usize;
    let visible_height = area.height as usize;

    // Row heights (expanded rows carry description + action lines)
    let heights: Vec<usize> = app
        .store
        .tasks()
        .iter()
        .map(|t| row_height(app, t, width))
        .collect();

    // Clamp cursor, then scroll so the cursor row is fully visible
    let cursor = app.list.cursor.min(heights.len() - 1);
    app.list.cursor = cursor;
    let mut scroll = app.list.scroll_offset.min(cursor);
    while scroll < cursor
        && heights[scroll..=cursor].iter().sum::<usize>() > visible_height
    {
        scroll += 1;
    }
    app.list.scroll_offset = scroll;

    let mut lines: Vec<Line> = Vec::with_capacity(visible_height);
    for (i, task) in app.store.tasks().iter().enumerate().skip(scroll) {
        if lines.len() >= visible_height {
            break;
        }
        let is_cursor = i == cursor;
        let is_expanded = app.list.expanded == Some(task.id);

        lines.push(title_row(app, task, width, is_cursor, is_expanded));

        if is_expanded {
            let desc_width = width.saturating_sub(INDENT.len() + 1);
            let desc_style = Style::default().fg(app.theme.dim).bg(bg);
            for wrapped in wrap::wrap_text(&task.description, desc_width) {
                lines.push(Line::from(Span::styled(
                    format!("{}{}", INDENT, wrapped),
                    desc_style,
                )));
            }
            lines.push(action_row(app));
        }
    }
    lines.truncate(visible_height);

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn row_height(app: &App, task: &Task, width: usize) -> usize {
    if app.list.expanded == Some(task.id) {
        let desc_width = width.saturating_sub(INDENT.len() + 1);
        // title + wrapped description + action row
        1 + wrap::wrap_text(&task.description, desc_width).len() + 1
    } else {
        1
    }
}

fn title_row<'a>(
    app: &App,
    task: &Task,
    width: usize,
    is_cursor: bool,
    is_expanded: bool,
) -> Line<'a> {
    let bg = if is_cursor {
        app.theme.selection_bg
    } else {
        app.theme.background
    };
    let chevron = if is_expanded { "\u{25BE}" } else { "\u{25B8}" };
    let chevron_style = Style::default()
        .fg(if is_cursor {
            app.theme.highlight
        } else {
            app.theme.dim
        })
        .bg(bg);
    let title_style = if is_cursor {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text).bg(bg)
    };

    let title = unicode::truncate_to_width(&task.title, width.saturating_sub(4));
    let mut spans = vec![
        Span::styled(" ".to_string(), Style::default().bg(bg)),
        Span::styled(chevron.to_string(), chevron_style),
        Span::styled(" ".to_string(), Style::default().bg(bg)),
        Span::styled(title, title_style),
    ];

    // Pad the cursor row so the selection background spans the full width
    if is_cursor {
        let used: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
        if used < width {
            spans.push(Span::styled(
                " ".repeat(width - used),
                Style::default().bg(bg),
            ));
        }
    }

    Line::from(spans)
}

/// The expanded row's action affordances ("Ver mais" / "Excluir")
fn action_row<'a>(app: &App) -> Line<'a> {
    let bg = app.theme.background;
    Line::from(vec![
        Span::styled(INDENT.to_string(), Style::default().bg(bg)),
        Span::styled(
            "[ Ver mais ]".to_string(),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.highlight),
        ),
        Span::styled("  ".to_string(), Style::default().bg(bg)),
        Span::styled(
            "[ Excluir ]".to_string(),
            Style::default().fg(app.theme.red).bg(bg),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn shows_all_task_titles() {
        let mut app = sample_app();
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        assert!(output.contains("Tarefa 1"));
        assert!(output.contains("Tarefa 2"));
        assert!(output.contains("Tarefa 3"));
        // No description visible while collapsed
        assert!(!output.contains("Descrição da Tarefa 1"));
        assert!(!output.contains("Ver mais"));
    }

    #[test]
    fn empty_store_shows_placeholder() {
        let mut app = empty_app();
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        assert!(output.contains("Nenhuma tarefa"));
    }

    #[test]
    fn expanded_row_shows_description_and_actions() {
        let mut app = sample_app();
        app.toggle_expanded();
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        assert!(output.contains("Descrição da Tarefa 1"));
        assert!(output.contains("[ Ver mais ]"));
        assert!(output.contains("[ Excluir ]"));
        // Only the expanded row's description is visible
        assert!(!output.contains("Descrição da Tarefa 2"));
    }

    #[test]
    fn long_description_wraps() {
        let desc = "palavra ".repeat(20);
        let mut app = app_with_tasks(&[("T", desc.as_str())]);
        app.toggle_expanded();
        let output = render_to_string(40, TERM_H, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        assert!(output.lines().filter(|l| l.contains("palavra")).count() > 1);
    }

    #[test]
    fn scroll_follows_cursor_below_window() {
        let pairs: Vec<(String, String)> =
            (1..=30).map(|i| (format!("Item {}", i), String::new())).collect();
        let refs: Vec<(&str, &str)> = pairs
            .iter()
            .map(|(a, b)| (a.as_str(), b.as_str()))
            .collect();
        let mut app = app_with_tasks(&refs);
        app.list.cursor = 29;

        let output = render_to_string(TERM_W, 10, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        assert!(output.contains("Item 30"));
        assert!(!output.contains("Item 1\n"));
        assert!(app.list.scroll_offset >= 20);
    }
}
