use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style, palette},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render a one-off notice (e.g. missing voice input)
pub fn render_notice_modal(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(message) = &app.notice else {
        return;
    };

    let modal_area = create_modal_area(area, 7);
    f.render_widget(Clear, modal_area);

    let lines = vec![
        Line::raw(""),
        Line::raw(format!("  {}", message)),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  [Enter]", modal_title_style()),
            Span::raw(" OK"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Notice ", modal_title_style()))
                .style(modal_bg_style(palette(app.dark_mode))),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

/// Render the prompt for a new subtask title
pub fn render_subtask_prompt(f: &mut Frame, app: &AppState, area: Rect) {
    if app.ui_mode != UiMode::AddingSubtask {
        return;
    }

    let parent = app
        .selected_task()
        .map(|t| t.title.clone())
        .unwrap_or_default();

    let modal_area = create_modal_area(area, 7);
    f.render_widget(Clear, modal_area);

    let lines = vec![
        Line::raw(""),
        Line::raw(format!("  Subtask for: {}", parent)),
        Line::from(vec![
            Span::raw("  > "),
            Span::styled(app.subtask_input.clone(), modal_title_style()),
            Span::styled("█", modal_title_style()),
        ]),
        Line::raw(""),
        Line::raw("  Enter to add  ·  Esc to cancel"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Add Subtask ", modal_title_style()))
                .style(modal_bg_style(palette(app.dark_mode))),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
