use super::task::{IdGenerator, Subtask, Task, TaskDraft, UuidGenerator};

/// The in-memory task collection and its mutations.
///
/// Every mutation returns `true` when the collection changed. Lookup misses
/// and rejected drafts are silent no-ops that return `false`.
pub struct TaskRepository {
    tasks: Vec<Task>,
    ids: Box<dyn IdGenerator>,
}

impl TaskRepository {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self::with_generator(tasks, Box::new(UuidGenerator))
    }

    pub fn with_generator(tasks: Vec<Task>, ids: Box<dyn IdGenerator>) -> Self {
        Self { tasks, ids }
    }

    /// All tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Append a new task built from the draft. Returns the new id, or None
    /// when the draft has a blank title.
    pub fn create(&mut self, draft: &TaskDraft) -> Option<String> {
        if !draft.has_title() {
            return None;
        }

        let id = self.ids.next_id();
        let mut task = Task::from_draft(id.clone(), draft);
        task.subtasks = Vec::new();
        tracing::debug!(task_id = %id, title = %task.title, "task created");
        self.tasks.push(task);
        Some(id)
    }

    /// Replace the matching task with the draft, keeping its id and (unless
    /// the draft supplies them) its subtasks
    pub fn update(&mut self, id: &str, draft: &TaskDraft) -> bool {
        if !draft.has_title() {
            return false;
        }

        let Some(task) = self.get_mut(id) else {
            return false;
        };

        let subtasks = match &draft.subtasks {
            Some(replacement) => replacement.clone(),
            None => std::mem::take(&mut task.subtasks),
        };
        *task = Task::from_draft(task.id.clone(), draft);
        task.subtasks = subtasks;
        tracing::debug!(task_id = %id, "task updated");
        true
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() != before;
        if removed {
            tracing::debug!(task_id = %id, "task deleted");
        }
        removed
    }

    /// Flip pending <-> completed
    pub fn toggle_status(&mut self, id: &str) -> bool {
        match self.get_mut(id) {
            Some(task) => {
                task.toggle_status();
                tracing::debug!(task_id = %id, status = task.status.label(), "task status toggled");
                true
            }
            None => false,
        }
    }

    /// Append a subtask. Empty titles are accepted.
    pub fn add_subtask(&mut self, task_id: &str, title: &str) -> Option<String> {
        if self.get(task_id).is_none() {
            return None;
        }
        let subtask_id = self.ids.next_id();
        let task = self.get_mut(task_id)?;
        task.subtasks
            .push(Subtask::new(subtask_id.clone(), title.to_string()));
        tracing::debug!(task_id = %task_id, subtask_id = %subtask_id, "subtask added");
        Some(subtask_id)
    }

    pub fn toggle_subtask(&mut self, task_id: &str, subtask_id: &str) -> bool {
        let Some(task) = self.get_mut(task_id) else {
            return false;
        };
        match task.subtasks.iter_mut().find(|st| st.id == subtask_id) {
            Some(subtask) => {
                subtask.toggle();
                true
            }
            None => false,
        }
    }
}
