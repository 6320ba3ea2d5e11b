use super::enums::{Priority, TaskStatus};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Supplies opaque unique identifiers for tasks and subtasks
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Default generator backed by random UUIDs
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// A checklist item nested under a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtask {
    pub id: String,
    #[serde(default, deserialize_with = "lenient")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient")]
    pub completed: bool,
}

impl Subtask {
    pub fn new(id: String, title: String) -> Self {
        Self {
            id,
            title,
            completed: false,
        }
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// A tracked unit of work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    #[serde(default, deserialize_with = "lenient")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient")]
    pub description: String,
    /// Raw date as entered (YYYY-MM-DD), empty when unset
    #[serde(default, deserialize_with = "lenient")]
    pub due_date: String,
    #[serde(default, deserialize_with = "lenient")]
    pub priority: Priority,
    #[serde(default, deserialize_with = "lenient")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient")]
    pub status: TaskStatus,
    #[serde(default, deserialize_with = "lenient_subtasks")]
    pub subtasks: Vec<Subtask>,
}

/// Read a field, taking its default when the stored value is null or of
/// an unexpected shape (e.g. an unknown priority)
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Read subtasks one by one, dropping entries that are not subtasks
fn lenient_subtasks<'de, D>(deserializer: D) -> Result<Vec<Subtask>, D::Error>
where
    D: Deserializer<'de>,
{
    let records: Vec<serde_json::Value> = lenient(deserializer)?;
    Ok(records
        .into_iter()
        .filter_map(|record| serde_json::from_value(record).ok())
        .collect())
}

impl Task {
    /// Build a task from a draft, assigning the given id
    pub fn from_draft(id: String, draft: &TaskDraft) -> Self {
        Self {
            id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            due_date: draft.due_date.clone(),
            priority: draft.priority,
            category: draft.category.clone(),
            status: draft.status,
            subtasks: draft.subtasks.clone().unwrap_or_default(),
        }
    }

    /// Parsed due date, None when unset or unparseable
    pub fn due(&self) -> Option<NaiveDate> {
        parse_due_date(&self.due_date)
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    pub fn toggle_status(&mut self) {
        self.status = self.status.toggled();
    }

    /// Count of (completed, total) subtasks
    pub fn subtask_progress(&self) -> (usize, usize) {
        let done = self.subtasks.iter().filter(|st| st.completed).count();
        (done, self.subtasks.len())
    }

    /// Case-insensitive substring match on title or description
    pub fn matches_search(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}

/// Parse a due date in the form the task form produces
pub fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Staging copy of task fields used while composing or editing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub priority: Priority,
    pub category: String,
    pub status: TaskStatus,
    /// Replacement subtasks; None keeps the existing ones on update
    pub subtasks: Option<Vec<Subtask>>,
}

impl TaskDraft {
    /// Load an existing task into a draft for editing.
    /// Subtasks are left out so later subtask changes survive the update.
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            due_date: task.due_date.clone(),
            priority: task.priority,
            category: task.category.clone(),
            status: task.status,
            subtasks: None,
        }
    }

    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

#[cfg(test)]
impl TaskDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = due_date.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_uuid_generator_unique() {
        let mut gen = UuidGenerator;
        let a = gen.next_id();
        let b = gen.next_id();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn test_from_draft_defaults() {
        let draft = TaskDraft::new("Buy milk");
        let task = Task::from_draft("id-1".to_string(), &draft);

        assert_eq!(task.id, "id-1");
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.status, TaskStatus::Pending);
        assert!(task.subtasks.is_empty());
        assert!(task.due().is_none());
    }

    #[test]
    fn test_parse_due_date() {
        assert_eq!(
            parse_due_date("2024-01-01"),
            NaiveDate::from_ymd_opt(2024, 1, 1)
        );
        assert_eq!(parse_due_date(""), None);
        assert_eq!(parse_due_date("tomorrow"), None);
        assert_eq!(parse_due_date("2024-13-40"), None);
    }

    #[test]
    fn test_matches_search_case_insensitive() {
        let task = Task::from_draft(
            "x".to_string(),
            &TaskDraft::new("Write Report").with_description("quarterly NUMBERS"),
        );
        assert!(task.matches_search("report"));
        assert!(task.matches_search("numbers"));
        assert!(task.matches_search(""));
        assert!(!task.matches_search("milk"));
    }

    #[test]
    fn test_serialized_field_names() {
        let mut task = Task::from_draft(
            "t1".to_string(),
            &TaskDraft::new("Title").with_due_date("2024-02-01"),
        );
        task.subtasks.push(Subtask::new("s1".to_string(), "Step".to_string()));

        let value = serde_json::to_value(&task).unwrap();
        let object = value.as_object().unwrap();
        for key in [
            "id",
            "title",
            "description",
            "dueDate",
            "priority",
            "category",
            "status",
            "subtasks",
        ] {
            assert!(object.contains_key(key), "missing field {}", key);
        }
        assert_eq!(value["subtasks"][0]["completed"], serde_json::json!(false));
    }

    #[test]
    fn test_deserialize_sparse_task() {
        let json = r#"{"id":"a","title":"Only title"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.description, "");
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.status, TaskStatus::Pending);
        assert!(task.subtasks.is_empty());
    }

    #[test]
    fn test_deserialize_tolerates_bad_fields() {
        let json = r#"{"id":"a","title":"Call plumber","dueDate":null,"priority":"urgent",
            "status":7,"subtasks":[{"id":"s1","title":"Find number"},"junk",{"title":"no id"}]}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.title, "Call plumber");
        assert_eq!(task.due_date, "");
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.subtasks.len(), 1);
        assert_eq!(task.subtasks[0].id, "s1");
    }

    #[test]
    fn test_deserialize_requires_id() {
        assert!(serde_json::from_str::<Task>(r#"{"title":"No id"}"#).is_err());
    }

    #[test]
    fn test_draft_from_task_omits_subtasks() {
        let mut task = Task::from_draft("t".to_string(), &TaskDraft::new("T"));
        task.subtasks.push(Subtask::new("s".to_string(), "S".to_string()));
        let draft = TaskDraft::from_task(&task);
        assert_eq!(draft.title, "T");
        assert!(draft.subtasks.is_none());
    }

    #[test]
    fn test_subtask_progress() {
        let mut task = Task::from_draft("t".to_string(), &TaskDraft::new("T"));
        task.subtasks.push(Subtask::new("a".to_string(), "A".to_string()));
        task.subtasks.push(Subtask::new("b".to_string(), "B".to_string()));
        task.subtasks[1].toggle();
        assert_eq!(task.subtask_progress(), (1, 2));
    }
}
