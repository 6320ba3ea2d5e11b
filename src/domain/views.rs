use super::enums::{SortKey, StatusFilter};
use super::task::Task;
use std::cmp::Ordering;

/// Ephemeral list controls: status filter, sort key and search text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewFilter {
    pub status: StatusFilter,
    pub sort: SortKey,
    pub search: String,
}

impl ViewFilter {
    pub fn new(status: StatusFilter, sort: SortKey, search: impl Into<String>) -> Self {
        Self {
            status,
            sort,
            search: search.into(),
        }
    }
}

/// Derive the ordered subset of tasks to display.
/// Filters by status, then by search text, then sorts. The input is untouched.
pub fn visible_tasks<'a>(tasks: &'a [Task], filter: &ViewFilter) -> Vec<&'a Task> {
    let mut visible: Vec<&Task> = tasks
        .iter()
        .filter(|task| filter.status.matches(task.status))
        .filter(|task| task.matches_search(&filter.search))
        .collect();

    // sort_by is stable, so ties keep insertion order
    match filter.sort {
        SortKey::DueDate => visible.sort_by(|a, b| compare_due_dates(a, b)),
        SortKey::Priority => visible.sort_by(|a, b| b.priority.rank().cmp(&a.priority.rank())),
    }

    visible
}

/// Ascending by due date; unset or unparseable dates sort after every valid one
fn compare_due_dates(a: &Task, b: &Task) -> Ordering {
    match (a.due(), b.due()) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Get status badge text
pub fn status_badge(task: &Task) -> &'static str {
    if task.is_completed() {
        "✓ DONE"
    } else {
        "○ PENDING"
    }
}

/// Checkbox glyph for a subtask
pub fn checkbox(completed: bool) -> &'static str {
    if completed {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Get tree connector for subtasks
pub fn tree_connector(is_last: bool) -> &'static str {
    if is_last {
        "└─"
    } else {
        "├─"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::enums::{Priority, TaskStatus};
    use crate::domain::task::TaskDraft;
    use pretty_assertions::assert_eq;

    fn create_test_task(id: &str, title: &str, priority: Priority, due: &str) -> Task {
        Task::from_draft(
            id.to_string(),
            &TaskDraft::new(title).with_priority(priority).with_due_date(due),
        )
    }

    fn titles(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.title.clone()).collect()
    }

    fn sample() -> Vec<Task> {
        let mut done = create_test_task("3", "Pay rent", Priority::Medium, "2024-01-15");
        done.status = TaskStatus::Completed;
        vec![
            create_test_task("1", "Buy milk", Priority::High, "2024-01-01"),
            create_test_task("2", "Write report", Priority::Low, "2024-02-01"),
            done,
            create_test_task("4", "Someday", Priority::Low, ""),
        ]
    }

    #[test]
    fn test_all_keeps_everything() {
        let tasks = sample();
        let visible = visible_tasks(&tasks, &ViewFilter::default());
        assert_eq!(visible.len(), tasks.len());
        assert_eq!(
            titles(&visible),
            vec!["Buy milk", "Pay rent", "Write report", "Someday"]
        );
    }

    #[test]
    fn test_status_filter() {
        let tasks = sample();
        let completed = visible_tasks(
            &tasks,
            &ViewFilter::new(StatusFilter::Completed, SortKey::DueDate, ""),
        );
        assert_eq!(titles(&completed), vec!["Pay rent"]);

        let pending = visible_tasks(
            &tasks,
            &ViewFilter::new(StatusFilter::Pending, SortKey::DueDate, ""),
        );
        assert_eq!(pending.len(), 3);
        assert!(pending.iter().all(|t| t.status == TaskStatus::Pending));
    }

    #[test]
    fn test_search_title_or_description() {
        let mut tasks = sample();
        tasks[3].description = "Learn the REPORT format".to_string();
        let visible = visible_tasks(
            &tasks,
            &ViewFilter::new(StatusFilter::All, SortKey::DueDate, "Report"),
        );
        assert_eq!(titles(&visible), vec!["Write report", "Someday"]);
    }

    #[test]
    fn test_priority_sort_non_increasing() {
        let tasks = sample();
        let visible = visible_tasks(
            &tasks,
            &ViewFilter::new(StatusFilter::All, SortKey::Priority, ""),
        );
        let ranks: Vec<u8> = visible.iter().map(|t| t.priority.rank()).collect();
        assert!(ranks.windows(2).all(|w| w[0] >= w[1]));
        // Stable among equal ranks
        assert_eq!(
            titles(&visible),
            vec!["Buy milk", "Pay rent", "Write report", "Someday"]
        );
    }

    #[test]
    fn test_invalid_dates_sort_last_in_insertion_order() {
        let tasks = vec![
            create_test_task("a", "No date", Priority::Medium, ""),
            create_test_task("b", "Garbage", Priority::Medium, "soon"),
            create_test_task("c", "Late", Priority::Medium, "2030-05-05"),
            create_test_task("d", "Early", Priority::Medium, "2020-05-05"),
        ];
        let visible = visible_tasks(&tasks, &ViewFilter::default());
        assert_eq!(titles(&visible), vec!["Early", "Late", "No date", "Garbage"]);
    }

    #[test]
    fn test_input_untouched() {
        let tasks = sample();
        let before = tasks.clone();
        let _ = visible_tasks(
            &tasks,
            &ViewFilter::new(StatusFilter::Pending, SortKey::Priority, "milk"),
        );
        assert_eq!(tasks, before);
    }

    #[test]
    fn test_tree_connector() {
        assert_eq!(tree_connector(false), "├─");
        assert_eq!(tree_connector(true), "└─");
    }

    #[test]
    fn test_checkbox_and_badge() {
        let mut task = create_test_task("x", "X", Priority::Low, "");
        assert_eq!(status_badge(&task), "○ PENDING");
        task.status = TaskStatus::Completed;
        assert_eq!(status_badge(&task), "✓ DONE");
        assert_eq!(checkbox(true), "[x]");
        assert_eq!(checkbox(false), "[ ]");
    }
}
