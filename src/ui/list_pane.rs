use crate::app::AppState;
use crate::domain::TodoRecord;
use crate::ui::styles::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// "1 item" / "3 items"
pub fn item_count_label(count: usize) -> String {
    format!("{} item{}", count, if count == 1 { "" } else { "s" })
}

/// Render the "Your tasks" list pane
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let palette = app.palette();
    let visible = app.visible();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style())
        .title(Span::styled(" Your tasks ", palette.title_style()))
        .title(
            ratatui::widgets::block::Title::from(Span::styled(
                format!(" {} ", item_count_label(visible.len())),
                palette.hint_style(),
            ))
            .alignment(Alignment::Right),
        )
        .style(palette.default_style());

    if visible.is_empty() {
        let empty = Paragraph::new(vec![
            Line::raw(""),
            Line::from(Span::styled("No todos yet", palette.title_style())),
            Line::from(Span::styled(
                "Add your first task to get started.",
                palette.hint_style(),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let dragging = app.drag.dragging();
    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(idx, todo)| {
            let is_dragged = dragging == Some(todo.id.as_str());
            let line = create_todo_line(todo, &palette, is_dragged);
            let style = if idx == app.selected_index {
                palette.selected_style()
            } else {
                palette.default_style()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

/// Create a single row for a record
/// Format: [x] Buy milk  Completed  · due May 1, 2024
fn create_todo_line(todo: &TodoRecord, palette: &Palette, is_dragged: bool) -> Line<'static> {
    let mut spans = Vec::new();

    if is_dragged {
        spans.push(Span::styled("⇅ ".to_string(), palette.dragging_style()));
    }

    let checkbox = if todo.completed { "[x] " } else { "[ ] " };
    spans.push(Span::raw(checkbox.to_string()));

    let title_style = if todo.completed {
        palette.done_title_style()
    } else {
        ratatui::style::Style::default()
    };
    spans.push(Span::styled(todo.title.clone(), title_style));
    spans.push(Span::raw("  ".to_string()));

    let badge_style = if todo.completed {
        palette.completed_style()
    } else {
        palette.pending_style()
    };
    spans.push(Span::styled(todo.status_label().to_string(), badge_style));

    spans.push(Span::raw(format!("  · due {}", todo.due_formatted())));

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(completed: bool) -> TodoRecord {
        let mut todo = TodoRecord::new(
            "id".to_string(),
            "Buy milk".to_string(),
            String::new(),
            Some("2024-05-01".to_string()),
        );
        todo.completed = completed;
        todo
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_item_count_label() {
        assert_eq!(item_count_label(0), "0 items");
        assert_eq!(item_count_label(1), "1 item");
        assert_eq!(item_count_label(2), "2 items");
    }

    #[test]
    fn test_pending_line() {
        let line = create_todo_line(&record(false), &Palette::light(), false);
        let text = line_text(&line);
        assert!(text.starts_with("[ ] Buy milk"));
        assert!(text.contains("Pending"));
        assert!(text.contains("due May 1, 2024"));
    }

    #[test]
    fn test_completed_line() {
        let line = create_todo_line(&record(true), &Palette::dark(), false);
        let text = line_text(&line);
        assert!(text.starts_with("[x] "));
        assert!(text.contains("Completed"));
    }

    #[test]
    fn test_dragged_line_is_marked() {
        let line = create_todo_line(&record(false), &Palette::light(), true);
        assert!(line_text(&line).starts_with("⇅ "));
    }
}
