use crate::app::AppState;
use crate::domain::{checkbox, tree_connector, Focus};
use crate::ui::styles::{
    border_style, category_style, default_style, done_style, palette, priority_style,
    selected_style, title_style, tree_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the details pane for the selected task
pub fn render_details_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let p = palette(app.dark_mode);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(p))
        .style(default_style(p))
        .title(Span::styled(" Details ", title_style(p)));

    let Some(task) = app.selected_task() else {
        let empty = Paragraph::new("No task selected").block(block);
        f.render_widget(empty, area);
        return;
    };

    let mut lines = Vec::new();

    lines.push(Line::from(vec![
        Span::styled("Title: ", title_style(p)),
        Span::raw(task.title.clone()),
    ]));
    lines.push(Line::raw(""));

    if !task.description.trim().is_empty() {
        for desc_line in task.description.lines() {
            lines.push(Line::raw(format!("  {}", desc_line)));
        }
        lines.push(Line::raw(""));
    }

    let due = if task.due_date.is_empty() {
        "-".to_string()
    } else {
        task.due_date.clone()
    };
    lines.push(Line::from(vec![
        Span::styled("Due:      ", title_style(p)),
        Span::raw(due),
    ]));

    lines.push(Line::from(vec![
        Span::styled("Priority: ", title_style(p)),
        Span::styled(task.priority.label(), priority_style(task.priority)),
    ]));

    if !task.category.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Category: ", title_style(p)),
            Span::styled(task.category.clone(), category_style()),
        ]));
    }

    lines.push(Line::from(vec![
        Span::styled("Status:   ", title_style(p)),
        Span::raw(task.status.label()),
    ]));
    lines.push(Line::raw(""));

    // Subtasks
    lines.push(Line::from(Span::styled("Subtasks:", title_style(p))));
    if task.subtasks.is_empty() {
        lines.push(Line::raw("  (none, press A to add)"));
    }
    let count = task.subtasks.len();
    for (idx, subtask) in task.subtasks.iter().enumerate() {
        let selected = app.focus == Focus::Subtasks && idx == app.subtask_index;
        let text_style = if selected {
            selected_style(p)
        } else if subtask.completed {
            done_style()
        } else {
            default_style(p)
        };

        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", tree_connector(idx + 1 == count)), tree_style(p)),
            Span::styled(
                format!("{} {}", checkbox(subtask.completed), subtask.title),
                text_style,
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}
