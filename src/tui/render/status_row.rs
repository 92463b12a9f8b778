use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, View};

/// Render the status row (bottom of screen): context-sensitive key hints
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match app.view {
        View::List => {
            let on_expanded =
                app.list.expanded.is_some() && app.list.expanded == app.cursor_task_id();
            if on_expanded {
                " Enter ver mais  Espaço recolher  x excluir  a adicionar  q sair"
            } else {
                " j/k mover  Enter expandir  x excluir  a adicionar  q sair"
            }
        }
        View::Detail(_) => " Esc voltar",
        View::Add => " Tab campo  Enter salvar  Esc cancelar",
    };

    let line = Line::from(Span::styled(
        hints,
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    ));
    let paragraph = Paragraph::new(line).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}
