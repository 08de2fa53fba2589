use crate::app::AppState;
use crate::domain::Filter;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the header: app title, theme toggle label and the filter bar
pub fn render_header(f: &mut Frame, app: &AppState, area: Rect) {
    let palette = app.palette();
    let current = app.store.filter();

    let title_line = Line::from(vec![
        Span::styled("STAY ORGANIZED  ", palette.title_style()),
        Span::styled("Todo List", palette.default_style()),
        Span::raw("   "),
        Span::styled(
            format!("[t] {}", app.theme.current().toggle_label()),
            palette.hint_style(),
        ),
    ]);

    let mut chips = Vec::new();
    for (i, filter) in Filter::all().iter().enumerate() {
        let style = if *filter == current {
            palette.active_chip_style()
        } else {
            palette.chip_style()
        };
        chips.push(Span::styled(format!(" {} {} ", i + 1, filter.label()), style));
        chips.push(Span::raw(" "));
    }

    let paragraph = Paragraph::new(vec![title_line, Line::from(chips)])
        .style(palette.default_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border_style()),
        );

    f.render_widget(paragraph, area);
}
