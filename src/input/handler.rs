use crate::app::{AppState, Command};
use crate::domain::{Focus, UiMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::TaskForm => {
            handle_task_form_mode(app, key);
            false
        }
        UiMode::AddingSubtask => {
            handle_subtask_input_mode(app, key);
            false
        }
        UiMode::Searching => {
            handle_search_mode(app, key);
            false
        }
        UiMode::Notice => {
            handle_notice_mode(app, key);
            false
        }
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> bool {
    let command = match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_selection_up();
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_selection_down();
            None
        }
        KeyCode::Tab => {
            app.toggle_focus();
            None
        }

        // Complete / reopen task, or check subtask
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected(),

        // Task form
        KeyCode::Char('a') => Some(Command::ToggleTaskForm),
        KeyCode::Char('e') | KeyCode::Char('E') => app.selected_task_id().map(Command::EditTask),
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => {
            app.selected_task_id().map(Command::DeleteTask)
        }

        // Add subtask
        KeyCode::Char('A') => {
            app.start_add_subtask();
            None
        }

        // List controls
        KeyCode::Char('/') => {
            app.start_search();
            None
        }
        KeyCode::Char('f') | KeyCode::Char('F') => {
            Some(Command::SetStatusFilter(app.view.status.next()))
        }
        KeyCode::Char('o') | KeyCode::Char('O') => Some(Command::SetSortKey(app.view.sort.next())),

        // Theme
        KeyCode::Char('t') | KeyCode::Char('T') => Some(Command::ToggleTheme),

        // Pomodoro
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Command::TimerStartPause),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::TimerStop),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::TimerReset),
        KeyCode::Char('b') | KeyCode::Char('B') => Some(Command::TimerToggleBreak),

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,

        // Escape leaves subtask focus
        KeyCode::Esc => {
            app.focus = Focus::Tasks;
            None
        }

        _ => None,
    };

    if let Some(command) = command {
        app.dispatch(command);
    }
    false
}

/// Handle keys in the task form
fn handle_task_form_mode(app: &mut AppState, key: KeyEvent) {
    match key.code {
        // Submit form
        KeyCode::Enter => app.dispatch(Command::SubmitDraft),

        // Hide form, keeping the draft
        KeyCode::Esc => app.dispatch(Command::ToggleTaskForm),

        // Voice input for the title
        KeyCode::F(2) => app.dispatch(Command::VoiceInput),
        KeyCode::Char('v') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch(Command::VoiceInput)
        }

        // Switch fields
        KeyCode::Tab | KeyCode::Down => app.form_next_field(),
        KeyCode::BackTab | KeyCode::Up => app.form_prev_field(),

        // Priority selector
        KeyCode::Left => app.form_cycle_priority(false),
        KeyCode::Right => app.form_cycle_priority(true),

        KeyCode::Backspace => app.form_backspace(),
        // Control chords never type into the draft
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => app.form_add_char(c),

        _ => {}
    }
}

/// Handle keys in the subtask prompt
fn handle_subtask_input_mode(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            if let Some(command) = app.submit_subtask_input() {
                app.dispatch(command);
            }
        }
        KeyCode::Esc => app.cancel_subtask_input(),
        KeyCode::Backspace => {
            app.subtask_input.pop();
        }
        KeyCode::Char(c) => app.subtask_input.push(c),
        _ => {}
    }
}

/// Handle keys while typing a search; the list filters live
fn handle_search_mode(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => app.finish_search(),
        KeyCode::Backspace => {
            let command = app.search_without_last_char();
            app.dispatch(command);
        }
        KeyCode::Char(c) => {
            let command = app.search_with_char(c);
            app.dispatch(command);
        }
        _ => {}
    }
}

/// Any of Enter/Esc/Space closes a notice
fn handle_notice_mode(app: &mut AppState, key: KeyEvent) {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
        app.dispatch(Command::DismissNotice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::enums::TaskStatus;
    use crate::domain::TaskRepository;
    use crate::persistence::store::MemoryStore;
    use crate::speech::CommandRecognizer;

    fn create_test_app() -> AppState {
        AppState::with_repository(
            TaskRepository::new(Vec::new()),
            false,
            Box::new(MemoryStore::new()),
            Box::new(CommandRecognizer::new(None)),
        )
    }

    fn press(app: &mut AppState, code: KeyCode) -> bool {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_quit() {
        let mut app = create_test_app();
        assert!(press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_add_task_via_keys() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.ui_mode, UiMode::TaskForm);

        type_text(&mut app, "Buy milk");
        press(&mut app, KeyCode::Tab); // description
        press(&mut app, KeyCode::Tab); // due date
        type_text(&mut app, "2024-01-01");
        press(&mut app, KeyCode::Tab); // priority
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.ui_mode, UiMode::Normal);
        let task = &app.repo.tasks()[0];
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.due_date, "2024-01-01");
        assert_eq!(task.priority, crate::domain::Priority::High);
    }

    #[test]
    fn test_quit_key_types_in_form() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('a'));
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.draft.title, "q");
    }

    #[test]
    fn test_control_chords_do_not_type_in_form() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Tea");
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL));
        assert_eq!(app.draft.title, "Tea");
        assert_eq!(app.ui_mode, UiMode::TaskForm);

        // Shifted letters still type
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT));
        assert_eq!(app.draft.title, "TeaS");
    }

    #[test]
    fn test_complete_and_delete_via_keys() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Task");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.repo.tasks()[0].status, TaskStatus::Completed);

        press(&mut app, KeyCode::Char('x'));
        assert!(app.repo.is_empty());
    }

    #[test]
    fn test_search_mode_filters_live() {
        let mut app = create_test_app();
        for title in ["Alpha", "Beta"] {
            press(&mut app, KeyCode::Char('a'));
            type_text(&mut app, title);
            press(&mut app, KeyCode::Enter);
        }

        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "bet");
        assert_eq!(app.visible().len(), 1);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.view.search, "be");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.view.search, "be");
    }

    #[test]
    fn test_filter_and_sort_cycle() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('f'));
        assert_eq!(app.view.status, crate::domain::StatusFilter::Completed);
        press(&mut app, KeyCode::Char('o'));
        assert_eq!(app.view.sort, crate::domain::SortKey::Priority);
    }

    #[test]
    fn test_timer_keys() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('p'));
        assert!(app.timer.is_running());
        press(&mut app, KeyCode::Char('b'));
        assert!(!app.timer.is_running());
        assert!(app.timer.is_break_mode());
        press(&mut app, KeyCode::Char('s'));
        assert!(!app.timer.is_break_mode());
    }

    #[test]
    fn test_voice_key_and_notice() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::F(2));
        assert_eq!(app.ui_mode, UiMode::Notice);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.ui_mode, UiMode::TaskForm);
    }

    #[test]
    fn test_subtask_prompt_keys() {
        let mut app = create_test_app();
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Parent");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('A'));
        type_text(&mut app, "Child");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.repo.tasks()[0].subtasks[0].title, "Child");

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.repo.tasks()[0].subtasks[0].completed);
    }
}
