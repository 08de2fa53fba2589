use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub header_area: Rect,
    pub list_area: Rect,
    pub details_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Header: title, theme toggle, filter bar (4 rows)
/// - Main area: List (65%) | Details (35%)
pub fn create_layout(area: Rect) -> MainLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Length(4), // Header
            Constraint::Min(0),    // Main content
        ])
        .split(area);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65), // List pane
            Constraint::Percentage(35), // Details pane
        ])
        .split(main_chunks[2]);

    MainLayout {
        keybindings_area: main_chunks[0],
        header_area: main_chunks[1],
        list_area: content[0],
        details_area: content[1],
    }
}

/// Create centered modal area (for the add/edit form)
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(14),
            Constraint::Percentage(25),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}
