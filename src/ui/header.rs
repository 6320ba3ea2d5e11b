use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::styles::{border_style, celebration_style, default_style, palette, title_style};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Instant;

/// Render the title row with theme indicator and celebration banner
pub fn render_header(f: &mut Frame, app: &AppState, area: Rect) {
    let p = palette(app.dark_mode);

    let theme = if app.dark_mode { "🌙 dark" } else { "☀ light" };
    let form = if app.show_form { "[a] Close" } else { "[a] Add Task" };

    let mut spans = vec![
        Span::styled(" Let's do Todo ", title_style(p)),
        Span::raw(format!("  {}  ", form)),
        Span::raw(format!("[t] {}", theme)),
    ];

    if app.is_celebrating(Instant::now()) {
        spans.push(Span::styled("   🎉 Task added! 🎉", celebration_style()));
    }
    if app.is_listening() {
        spans.push(Span::raw("   🎤 listening…"));
    }

    f.render_widget(Paragraph::new(Line::from(spans)).style(default_style(p)), area);
}

/// Render search box, status filter and sort selector
pub fn render_filter_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let p = palette(app.dark_mode);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Search
            Constraint::Percentage(25), // Filter
            Constraint::Percentage(25), // Sort
        ])
        .split(area);

    let searching = app.ui_mode == UiMode::Searching;
    let search_text = if app.view.search.is_empty() && !searching {
        "Search tasks".to_string()
    } else if searching {
        format!("{}█", app.view.search)
    } else {
        app.view.search.clone()
    };

    let boxes = [
        (" [/] Search ", search_text),
        (" [f] Filter ", app.view.status.label().to_string()),
        (" [o] Sort ", app.view.sort.label().to_string()),
    ];

    for (area, (label, value)) in columns.iter().zip(boxes) {
        let widget = Paragraph::new(value).style(default_style(p)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(p))
                .title(Span::styled(label, title_style(p))),
        );
        f.render_widget(widget, *area);
    }
}
