use crate::app::AppState;
use crate::ui::styles::{
    border_style, default_style, gauge_style, palette, running_style, title_style,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

/// Render the Pomodoro / tea break pane
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let p = palette(app.dark_mode);
    let timer = &app.timer;

    let state = if timer.is_running() { "▶ running" } else { "⏸ paused" };
    let title = format!(" {} · {} ", timer.title(), state);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(p))
        .style(default_style(p))
        .title(Span::styled(title, title_style(p)));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Clock
            Constraint::Length(1), // Gauge
            Constraint::Min(0),    // Advisory message
        ])
        .split(inner);

    let clock_style = if timer.is_running() {
        running_style()
    } else {
        default_style(p)
    };
    let clock = Paragraph::new(Line::from(Span::styled(timer.format_remaining(), clock_style)))
        .alignment(Alignment::Center);
    f.render_widget(clock, rows[0]);

    let gauge = Gauge::default()
        .gauge_style(gauge_style(timer.is_break_mode()))
        .ratio(timer.progress_ratio())
        .label("");
    f.render_widget(gauge, rows[1]);

    let break_label = if timer.is_break_mode() { "End Break" } else { "Tea Break" };
    let advisory = Paragraph::new(vec![
        Line::raw(timer.advisory()),
        Line::raw(format!("[b] {}", break_label)),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    f.render_widget(advisory, rows[2]);
}
