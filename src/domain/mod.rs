pub mod enums;
pub mod pomodoro;
pub mod repository;
pub mod task;
pub mod views;

pub use enums::{Focus, Priority, SortKey, StatusFilter, UiMode};
pub use pomodoro::PomodoroTimer;
pub use repository::TaskRepository;
pub use task::{Task, TaskDraft};
pub use views::{checkbox, status_badge, tree_connector, visible_tasks, ViewFilter};
