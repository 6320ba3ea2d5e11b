use crate::domain::{
    visible_tasks, Focus, PomodoroTimer, SortKey, StatusFilter, Task, TaskDraft, TaskRepository,
    UiMode, ViewFilter,
};
use crate::notifications;
use crate::persistence::{self, KeyValueStore, Snapshot};
use crate::speech::{SpeechOutcome, SpeechRecognizer, UNAVAILABLE_NOTICE};
use crate::ticker;
use std::time::{Duration, Instant};
use tokio::sync::oneshot;

/// How long the header celebrates a newly added task
const CELEBRATION: Duration = Duration::from_secs(3);

/// Number of fields in the task form
pub const FORM_FIELDS: usize = 5;

/// Task form field indices
pub const FIELD_TITLE: usize = 0;
pub const FIELD_DESCRIPTION: usize = 1;
pub const FIELD_DUE_DATE: usize = 2;
pub const FIELD_PRIORITY: usize = 3;
pub const FIELD_CATEGORY: usize = 4;

/// Every user intent the shell can trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show or hide the task form (the draft is kept either way)
    ToggleTaskForm,
    /// Create from the draft, or update the task being edited
    SubmitDraft,
    EditTask(String),
    DeleteTask(String),
    ToggleTaskStatus(String),
    AddSubtask { task_id: String, title: String },
    ToggleSubtask { task_id: String, subtask_id: String },
    SetStatusFilter(StatusFilter),
    SetSortKey(SortKey),
    SetSearch(String),
    ToggleTheme,
    TimerStartPause,
    TimerStop,
    TimerReset,
    TimerToggleBreak,
    /// Start one speech recognition attempt for the draft title
    VoiceInput,
    DismissNotice,
}

/// Main application state
pub struct AppState {
    pub repo: TaskRepository,
    store: Box<dyn KeyValueStore>,
    speech: Box<dyn SpeechRecognizer>,
    pending_speech: Option<oneshot::Receiver<SpeechOutcome>>,

    pub dark_mode: bool,
    pub view: ViewFilter,
    pub timer: PomodoroTimer,

    // Task form
    pub draft: TaskDraft,
    pub editing_id: Option<String>,
    pub show_form: bool,
    pub form_field: usize,

    // Navigation
    pub ui_mode: UiMode,
    pub focus: Focus,
    pub selected_index: usize,
    pub subtask_index: usize,
    pub subtask_input: String,

    pub notice: Option<String>,
    pub celebrate_until: Option<Instant>,
}

impl AppState {
    pub fn new(
        snapshot: Snapshot,
        store: Box<dyn KeyValueStore>,
        speech: Box<dyn SpeechRecognizer>,
    ) -> Self {
        Self::with_repository(
            TaskRepository::new(snapshot.tasks),
            snapshot.dark_mode,
            store,
            speech,
        )
    }

    pub fn with_repository(
        repo: TaskRepository,
        dark_mode: bool,
        store: Box<dyn KeyValueStore>,
        speech: Box<dyn SpeechRecognizer>,
    ) -> Self {
        Self {
            repo,
            store,
            speech,
            pending_speech: None,
            dark_mode,
            view: ViewFilter::default(),
            timer: PomodoroTimer::new(),
            draft: TaskDraft::default(),
            editing_id: None,
            show_form: false,
            form_field: FIELD_TITLE,
            ui_mode: UiMode::Normal,
            focus: Focus::Tasks,
            selected_index: 0,
            subtask_index: 0,
            subtask_input: String::new(),
            notice: None,
            celebrate_until: None,
        }
    }

    /// Read tasks and theme from the store and build the state around it
    pub fn load(store: Box<dyn KeyValueStore>, speech: Box<dyn SpeechRecognizer>) -> Self {
        let snapshot = persistence::load(store.as_ref());
        tracing::info!(
            tasks = snapshot.tasks.len(),
            dark_mode = snapshot.dark_mode,
            "state loaded"
        );
        Self::new(snapshot, store, speech)
    }

    /// Tasks currently shown, in display order
    pub fn visible(&self) -> Vec<&Task> {
        visible_tasks(self.repo.tasks(), &self.view)
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.visible().get(self.selected_index).copied()
    }

    pub fn selected_task_id(&self) -> Option<String> {
        self.selected_task().map(|t| t.id.clone())
    }

    pub fn is_celebrating(&self, now: Instant) -> bool {
        self.celebrate_until.is_some_and(|until| now < until)
    }

    pub fn dispatch(&mut self, command: Command) {
        self.dispatch_at(command, Instant::now());
    }

    /// Perform one user intent. Task mutations are written through to the
    /// store immediately; theme changes likewise.
    pub fn dispatch_at(&mut self, command: Command, now: Instant) {
        tracing::trace!(?command, "dispatch");
        match command {
            Command::ToggleTaskForm => {
                self.show_form = !self.show_form;
                if self.show_form {
                    self.form_field = FIELD_TITLE;
                    self.ui_mode = UiMode::TaskForm;
                } else {
                    self.ui_mode = UiMode::Normal;
                }
            }
            Command::SubmitDraft => self.submit_draft(now),
            Command::EditTask(id) => {
                if let Some(task) = self.repo.get(&id) {
                    self.draft = TaskDraft::from_task(task);
                    self.editing_id = Some(id);
                    self.show_form = true;
                    self.form_field = FIELD_TITLE;
                    self.ui_mode = UiMode::TaskForm;
                }
            }
            Command::DeleteTask(id) => {
                self.repo.delete(&id);
                self.persist_tasks();
            }
            Command::ToggleTaskStatus(id) => {
                self.repo.toggle_status(&id);
                self.persist_tasks();
            }
            Command::AddSubtask { task_id, title } => {
                self.repo.add_subtask(&task_id, &title);
                self.persist_tasks();
            }
            Command::ToggleSubtask {
                task_id,
                subtask_id,
            } => {
                self.repo.toggle_subtask(&task_id, &subtask_id);
                self.persist_tasks();
            }
            Command::SetStatusFilter(status) => self.view.status = status,
            Command::SetSortKey(sort) => self.view.sort = sort,
            Command::SetSearch(search) => self.view.search = search,
            Command::ToggleTheme => {
                self.dark_mode = !self.dark_mode;
                self.persist_theme();
            }
            Command::TimerStartPause => self.timer.start_pause(now),
            Command::TimerStop => self.timer.stop(now),
            Command::TimerReset => self.timer.reset(now),
            Command::TimerToggleBreak => self.timer.toggle_break_mode(now),
            Command::VoiceInput => self.start_voice_input(),
            Command::DismissNotice => {
                self.notice = None;
                self.ui_mode = if self.show_form {
                    UiMode::TaskForm
                } else {
                    UiMode::Normal
                };
            }
        }
        self.clamp_selection();
    }

    fn submit_draft(&mut self, now: Instant) {
        if let Some(id) = self.editing_id.clone() {
            if !self.draft.has_title() {
                return;
            }
            self.repo.update(&id, &self.draft);
            self.persist_tasks();
            self.close_form();
            return;
        }

        match self.repo.create(&self.draft) {
            Some(_) => {
                notifications::celebrate_task_created(&self.draft.title);
                self.celebrate_until = Some(now + CELEBRATION);
                self.persist_tasks();
                self.close_form();
            }
            // Blank title: keep the form open with the draft as typed
            None => tracing::debug!("draft rejected: blank title"),
        }
    }

    fn close_form(&mut self) {
        self.draft = TaskDraft::default();
        self.editing_id = None;
        self.show_form = false;
        self.form_field = FIELD_TITLE;
        self.ui_mode = UiMode::Normal;
    }

    fn start_voice_input(&mut self) {
        if !self.speech.is_available() {
            self.show_notice(UNAVAILABLE_NOTICE);
            return;
        }
        tracing::debug!("speech recognition started");
        self.pending_speech = Some(self.speech.recognize());
    }

    pub fn show_notice(&mut self, message: &str) {
        self.notice = Some(message.to_string());
        self.ui_mode = UiMode::Notice;
    }

    pub fn is_listening(&self) -> bool {
        self.pending_speech.is_some()
    }

    /// Collect a finished speech attempt, if any
    pub fn poll_speech(&mut self) {
        let Some(rx) = self.pending_speech.as_mut() else {
            return;
        };
        match rx.try_recv() {
            Ok(SpeechOutcome::Transcript(text)) => {
                self.draft.title = text;
                self.pending_speech = None;
            }
            Ok(SpeechOutcome::Unavailable) => {
                self.pending_speech = None;
                self.show_notice(UNAVAILABLE_NOTICE);
            }
            // Recognition errors leave the draft alone
            Ok(SpeechOutcome::Failed) | Err(oneshot::error::TryRecvError::Closed) => {
                tracing::debug!("speech recognition gave no transcript");
                self.pending_speech = None;
            }
            Err(oneshot::error::TryRecvError::Empty) => {}
        }
    }

    /// Periodic housekeeping: timer ticks, speech results, celebration expiry
    pub fn tick(&mut self, now: Instant) {
        let was_running = self.timer.is_running();
        self.timer.advance(now);
        if was_running && !self.timer.is_running() && self.timer.remaining_secs() == 0 {
            notifications::notify_timer_finished(self.timer.is_break_mode());
        }

        self.poll_speech();

        if self.celebrate_until.is_some_and(|until| now >= until) {
            self.celebrate_until = None;
        }
    }

    /// How long the event loop may wait before the next timer tick is due
    pub fn next_wakeup(&self, now: Instant) -> Duration {
        let poll = ticker::tick_duration();
        match self.timer.ticker().time_until_next(now) {
            Some(until) => until.min(poll),
            None => poll,
        }
    }

    fn persist_tasks(&self) {
        if let Err(e) = persistence::save_tasks(self.store.as_ref(), self.repo.tasks()) {
            tracing::warn!(error = %e, "failed to save tasks");
        }
    }

    fn persist_theme(&self) {
        if let Err(e) = persistence::save_dark_mode(self.store.as_ref(), self.dark_mode) {
            tracing::warn!(error = %e, "failed to save theme");
        }
    }

    /// Keep selection indices inside the visible list
    fn clamp_selection(&mut self) {
        let visible_len = self.visible().len();
        if visible_len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= visible_len {
            self.selected_index = visible_len - 1;
        }

        let subtask_len = self.selected_task().map_or(0, |t| t.subtasks.len());
        if subtask_len == 0 {
            self.subtask_index = 0;
            self.focus = Focus::Tasks;
        } else if self.subtask_index >= subtask_len {
            self.subtask_index = subtask_len - 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        match self.focus {
            Focus::Tasks => {
                if self.selected_index > 0 {
                    self.selected_index -= 1;
                    self.subtask_index = 0;
                }
            }
            Focus::Subtasks => {
                self.subtask_index = self.subtask_index.saturating_sub(1);
            }
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        match self.focus {
            Focus::Tasks => {
                if self.selected_index + 1 < self.visible().len() {
                    self.selected_index += 1;
                    self.subtask_index = 0;
                }
            }
            Focus::Subtasks => {
                let count = self.selected_task().map_or(0, |t| t.subtasks.len());
                if self.subtask_index + 1 < count {
                    self.subtask_index += 1;
                }
            }
        }
    }

    /// Switch arrow keys between the task list and the selected task's subtasks
    pub fn toggle_focus(&mut self) {
        let has_subtasks = self.selected_task().is_some_and(|t| !t.subtasks.is_empty());
        self.focus = match self.focus {
            Focus::Tasks if has_subtasks => Focus::Subtasks,
            _ => Focus::Tasks,
        };
    }

    /// Command toggling whatever the cursor is on
    pub fn toggle_selected(&self) -> Option<Command> {
        let task = self.selected_task()?;
        match self.focus {
            Focus::Tasks => Some(Command::ToggleTaskStatus(task.id.clone())),
            Focus::Subtasks => {
                let subtask = task.subtasks.get(self.subtask_index)?;
                Some(Command::ToggleSubtask {
                    task_id: task.id.clone(),
                    subtask_id: subtask.id.clone(),
                })
            }
        }
    }

    /// Toggle between editing fields in the task form
    pub fn form_next_field(&mut self) {
        self.form_field = (self.form_field + 1) % FORM_FIELDS;
    }

    pub fn form_prev_field(&mut self) {
        self.form_field = (self.form_field + FORM_FIELDS - 1) % FORM_FIELDS;
    }

    /// Add character to the current form field
    pub fn form_add_char(&mut self, c: char) {
        match self.form_field {
            FIELD_TITLE => self.draft.title.push(c),
            FIELD_DESCRIPTION => self.draft.description.push(c),
            FIELD_DUE_DATE => {
                if c.is_ascii_digit() || c == '-' {
                    self.draft.due_date.push(c);
                }
            }
            FIELD_PRIORITY => {
                if c == ' ' {
                    self.draft.priority = self.draft.priority.next();
                }
            }
            FIELD_CATEGORY => self.draft.category.push(c),
            _ => {}
        }
    }

    /// Backspace in the current form field
    pub fn form_backspace(&mut self) {
        match self.form_field {
            FIELD_TITLE => {
                self.draft.title.pop();
            }
            FIELD_DESCRIPTION => {
                self.draft.description.pop();
            }
            FIELD_DUE_DATE => {
                self.draft.due_date.pop();
            }
            FIELD_CATEGORY => {
                self.draft.category.pop();
            }
            _ => {}
        }
    }

    /// Left/right on the priority field
    pub fn form_cycle_priority(&mut self, forward: bool) {
        if self.form_field == FIELD_PRIORITY {
            self.draft.priority = if forward {
                self.draft.priority.next()
            } else {
                self.draft.priority.prev()
            };
        }
    }

    /// Open the subtask prompt for the selected task
    pub fn start_add_subtask(&mut self) {
        if self.selected_task().is_some() {
            self.subtask_input.clear();
            self.ui_mode = UiMode::AddingSubtask;
        }
    }

    /// Close the subtask prompt, returning the command to run
    pub fn submit_subtask_input(&mut self) -> Option<Command> {
        self.ui_mode = UiMode::Normal;
        let title = std::mem::take(&mut self.subtask_input);
        let task_id = self.selected_task_id()?;
        Some(Command::AddSubtask { task_id, title })
    }

    pub fn cancel_subtask_input(&mut self) {
        self.subtask_input.clear();
        self.ui_mode = UiMode::Normal;
    }

    pub fn start_search(&mut self) {
        self.ui_mode = UiMode::Searching;
    }

    /// Search text with one more character appended
    pub fn search_with_char(&self, c: char) -> Command {
        let mut search = self.view.search.clone();
        search.push(c);
        Command::SetSearch(search)
    }

    pub fn search_without_last_char(&self) -> Command {
        let mut search = self.view.search.clone();
        search.pop();
        Command::SetSearch(search)
    }

    pub fn finish_search(&mut self) {
        self.ui_mode = UiMode::Normal;
    }
}
