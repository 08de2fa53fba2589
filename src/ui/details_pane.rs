use crate::app::AppState;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the details pane for the selected record
pub fn render_details_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let palette = app.palette();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style())
        .title(Span::styled(" Details ", palette.title_style()))
        .style(palette.default_style());

    let Some(todo) = app.selected_todo() else {
        f.render_widget(Paragraph::new("No task selected").block(block), area);
        return;
    };

    let status_style = if todo.completed {
        palette.completed_style()
    } else {
        palette.pending_style()
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Title:   ", palette.title_style()),
            Span::raw(todo.title.as_str()),
        ]),
        Line::from(vec![
            Span::styled("Status:  ", palette.title_style()),
            Span::styled(todo.status_label(), status_style),
        ]),
        Line::from(vec![
            Span::styled("Due:     ", palette.title_style()),
            Span::raw(todo.due_formatted()),
        ]),
        Line::from(vec![
            Span::styled("Created: ", palette.title_style()),
            Span::raw(created_formatted(&todo.created_at)),
        ]),
        Line::raw(""),
    ];

    if todo.description.is_empty() {
        lines.push(Line::from(Span::styled(
            "Description: (empty)",
            palette.hint_style(),
        )));
    } else {
        lines.push(Line::from(Span::styled("Description:", palette.title_style())));
        for text in todo.description.lines() {
            lines.push(Line::raw(format!("  {}", text)));
        }
    }

    if let Some(dragging) = app.drag.dragging() {
        if let Some(dragged) = app.store.get(dragging) {
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(
                format!("Dragging \"{}\" (v to drop here)", dragged.title),
                palette.dragging_style(),
            )));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

/// Show a stored ISO timestamp in local time, or as stored if it doesn't parse
fn created_formatted(created_at: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(created_at)
        .map(|ts| {
            ts.with_timezone(&chrono::Local)
                .format("%b %-d, %Y %H:%M")
                .to_string()
        })
        .unwrap_or_else(|_| created_at.to_string())
}
