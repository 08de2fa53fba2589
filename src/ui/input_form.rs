use crate::app::{AppState, FormState};
use crate::domain::FormField;
use crate::ui::{layout::create_modal_area, styles::Palette};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the add/edit form over the main panes
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(form) = &app.form else {
        return;
    };
    let palette = app.palette();
    let modal_area = create_modal_area(area);

    f.render_widget(Clear, modal_area);

    let title_text = if form.editing_id.is_some() {
        " Edit task "
    } else {
        " Add a task "
    };

    let mut lines = vec![Line::raw("")];
    lines.extend(field_lines(form, FormField::Title, "Title", &palette));
    lines.extend(field_lines(form, FormField::Description, "Description (optional)", &palette));
    lines.extend(field_lines(form, FormField::DueDate, "Due date (optional, YYYY-MM-DD)", &palette));
    lines.push(Line::raw("Tab to switch fields  ·  Enter to save  ·  Esc to cancel"));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title_text, palette.title_style()))
                .style(palette.modal_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

fn field_lines<'a>(form: &'a FormState, field: FormField, label: &'a str, palette: &Palette) -> Vec<Line<'a>> {
    let value = match field {
        FormField::Title => &form.title,
        FormField::Description => &form.description,
        FormField::DueDate => &form.due_date,
    };
    let active = form.field == field;

    let label_line = if active {
        Line::from(Span::styled(label, palette.title_style()))
    } else {
        Line::raw(label)
    };

    let mut value_spans = vec![Span::raw("> "), Span::raw(value.as_str())];
    if active {
        value_spans.push(Span::styled("█", palette.title_style()));
    }
    if field == FormField::Title && form.editing_id.is_some() && form.title.trim().is_empty() {
        value_spans.push(Span::styled("  title is required", palette.error_style()));
    }

    vec![label_line, Line::from(value_spans), Line::raw("")]
}
