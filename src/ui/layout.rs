use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub header_area: Rect,
    pub filter_area: Rect,
    pub list_area: Rect,
    pub details_area: Rect,
    pub timer_area: Rect,
    pub keybindings_area: Rect,
}

/// Create the main layout
/// - Header (1 row) and filter bar (3 rows)
/// - Main area: List (60%) | Details (40%)
/// - Pomodoro pane (7 rows), keybindings bar (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Search / filter / sort
            Constraint::Min(0),    // Tasks
            Constraint::Length(7), // Pomodoro
            Constraint::Length(1), // Keybindings bar
        ])
        .split(area);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // List pane
            Constraint::Percentage(40), // Details pane
        ])
        .split(rows[2]);

    MainLayout {
        header_area: rows[0],
        filter_area: rows[1],
        list_area: main[0],
        details_area: main[1],
        timer_area: rows[3],
        keybindings_area: rows[4],
    }
}

/// Create centered modal area of the given height
pub fn create_modal_area(area: Rect, height: u16) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Length(height),
            Constraint::Min(0),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 100, 50);
        let layout = create_layout(area);

        assert_eq!(layout.header_area.height, 1);
        assert_eq!(layout.filter_area.height, 3);
        assert_eq!(layout.timer_area.height, 7);
        assert_eq!(layout.keybindings_area.height, 1);
        assert!(layout.list_area.height > 0);
        assert_eq!(layout.list_area.height, layout.details_area.height);
        assert!(layout.list_area.width > layout.details_area.width);
    }

    #[test]
    fn test_create_modal_area() {
        let area = Rect::new(0, 0, 100, 50);
        let modal = create_modal_area(area, 16);

        assert!(modal.width < area.width);
        assert_eq!(modal.height, 16);
    }
}
