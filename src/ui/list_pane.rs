use crate::app::AppState;
use crate::domain::{status_badge, Focus, Task};
use crate::ui::styles::{
    border_style, category_style, default_style, done_style, hint_style, palette, priority_style,
    selected_style, title_style, Palette,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Render the task list (visible tasks only, in display order)
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let p = palette(app.dark_mode);
    let visible = app.visible();

    let mut items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let line = create_task_line(task, p);
            let style = if idx == app.selected_index && app.focus == Focus::Tasks {
                selected_style(p)
            } else {
                default_style(p)
            };
            ListItem::new(line).style(style)
        })
        .collect();

    if app.repo.is_empty() {
        items.push(ListItem::new("No tasks yet. Press [a] to add one.").style(hint_style(p)));
    } else if visible.is_empty() {
        items.push(ListItem::new("No tasks match the current filter.").style(hint_style(p)));
    }

    let title = format!(" Tasks ({} of {}) ", visible.len(), app.repo.len());

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(p))
            .style(default_style(p))
            .title(Span::styled(title, title_style(p))),
    );

    let mut state = ListState::default();
    if !visible.is_empty() {
        state.select(Some(app.selected_index));
    }
    f.render_stateful_widget(list, area, &mut state);
}

/// Create a single line for a task
/// Format: ○ PENDING  Write report  [high] due 2024-02-01 #work (1/3)
fn create_task_line(task: &Task, p: Palette) -> Line<'static> {
    let mut spans = Vec::new();

    spans.push(Span::raw(format!("{}  ", status_badge(task))));

    let title_style = if task.is_completed() {
        done_style()
    } else {
        default_style(p)
    };
    spans.push(Span::styled(task.title.clone(), title_style));
    spans.push(Span::raw("  ".to_string()));

    spans.push(Span::styled(
        format!("[{}]", task.priority.label()),
        priority_style(task.priority),
    ));

    if !task.due_date.is_empty() {
        spans.push(Span::raw(format!(" due {}", task.due_date)));
    }

    if !task.category.is_empty() {
        spans.push(Span::styled(format!(" #{}", task.category), category_style()));
    }

    let (done, total) = task.subtask_progress();
    if total > 0 {
        spans.push(Span::raw(format!(" ({}/{})", done, total)));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::task::Subtask;
    use crate::domain::{Priority, TaskDraft};

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_create_task_line() {
        let task = Task::from_draft(
            "1".to_string(),
            &TaskDraft::new("Write report")
                .with_priority(Priority::Low)
                .with_due_date("2024-02-01")
                .with_category("work"),
        );
        let text = line_text(&create_task_line(&task, palette(false)));

        assert!(text.contains("Write report"));
        assert!(text.contains("[low]"));
        assert!(text.contains("due 2024-02-01"));
        assert!(text.contains("#work"));
        assert!(!text.contains("/"));
    }

    #[test]
    fn test_create_task_line_with_subtasks() {
        let mut task = Task::from_draft("1".to_string(), &TaskDraft::new("Parent"));
        task.subtasks.push(Subtask::new("a".to_string(), "A".to_string()));
        task.subtasks.push(Subtask::new("b".to_string(), "B".to_string()));
        task.subtasks[0].toggle();

        let text = line_text(&create_task_line(&task, palette(true)));
        assert!(text.contains("(1/2)"));
        assert!(!text.contains("due"));
    }
}
