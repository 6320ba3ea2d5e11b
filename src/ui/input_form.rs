use crate::app::{
    AppState, FIELD_CATEGORY, FIELD_DESCRIPTION, FIELD_DUE_DATE, FIELD_PRIORITY, FIELD_TITLE,
};
use crate::domain::task::parse_due_date;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style, palette, priority_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Push label + value lines for one form field
fn push_field(lines: &mut Vec<Line<'static>>, label: &str, value: Span<'static>, active: bool) {
    let label = if active {
        format!("{}: (editing)", label)
    } else {
        format!("{}:", label)
    };
    lines.push(Line::raw(label));
    lines.push(Line::from(vec![
        Span::raw("> "),
        value,
        if active {
            Span::styled("█", modal_title_style()) // Cursor
        } else {
            Span::raw("")
        },
    ]));
}

/// Render the task form for adding or editing a task
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    if !app.show_form {
        return;
    }

    let p = palette(app.dark_mode);
    let modal_area = create_modal_area(area, 20);
    f.render_widget(Clear, modal_area);

    let draft = &app.draft;
    let mut lines = Vec::new();
    lines.push(Line::raw(""));

    push_field(
        &mut lines,
        "Title",
        Span::styled(draft.title.clone(), modal_title_style()),
        app.form_field == FIELD_TITLE,
    );
    push_field(
        &mut lines,
        "Description",
        Span::styled(draft.description.clone(), modal_title_style()),
        app.form_field == FIELD_DESCRIPTION,
    );

    let due_hint = if !draft.due_date.is_empty() && parse_due_date(&draft.due_date).is_none() {
        " (YYYY-MM-DD)"
    } else {
        ""
    };
    push_field(
        &mut lines,
        "Due Date",
        Span::styled(format!("{}{}", draft.due_date, due_hint), modal_title_style()),
        app.form_field == FIELD_DUE_DATE,
    );
    push_field(
        &mut lines,
        "Priority (←/→)",
        Span::styled(draft.priority.label(), priority_style(draft.priority)),
        app.form_field == FIELD_PRIORITY,
    );
    push_field(
        &mut lines,
        "Category",
        Span::styled(draft.category.clone(), modal_title_style()),
        app.form_field == FIELD_CATEGORY,
    );

    lines.push(Line::raw(""));
    lines.push(Line::raw("Tab switch field  ·  F2 voice title  ·  Enter submit  ·  Esc hide"));

    let title_text = if app.editing_id.is_some() {
        " Update Task "
    } else {
        " Add Task "
    };

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title_text, modal_title_style()))
                .style(modal_bg_style(p)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
