use crate::ui::styles::Palette;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, area: Rect, palette: &Palette) {
    let hints = Line::from(vec![
        Span::raw(" ↑/↓ select   "),
        Span::raw("Shift+↑/↓ move   "),
        Span::raw("g grab   "),
        Span::raw("v drop   "),
        Span::raw("Space done   "),
        Span::raw("a add   "),
        Span::raw("e edit   "),
        Span::raw("x delete   "),
        Span::raw("f/1-3 filter   "),
        Span::raw("t theme   "),
        Span::raw("q quit"),
    ]);

    let paragraph = Paragraph::new(hints).style(palette.hint_style());
    f.render_widget(paragraph, area);
}
