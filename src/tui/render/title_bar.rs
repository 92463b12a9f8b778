use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, View};

/// Render the title bar: screen title on the brand color, spacer row below
pub fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let title = match app.view {
        View::List => "Lista de Tarefas",
        View::Detail(_) => "Detalhes da Tarefa",
        View::Add => "Adicionar Tarefa",
    };

    let width = area.width as usize;
    let bar_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(app.theme.highlight)
        .add_modifier(Modifier::BOLD);

    let text = format!(" {}", title);
    let padding = width.saturating_sub(text.chars().count());
    let bar = Line::from(vec![
        Span::styled(text, bar_style),
        Span::styled(" ".repeat(padding), bar_style),
    ]);
    let spacer = Line::from(Span::styled(
        " ".repeat(width),
        Style::default().bg(app.theme.background),
    ));

    let paragraph = Paragraph::new(vec![bar, spacer]);
    frame.render_widget(paragraph, area);
}
