mod app;
mod domain;
mod input;
mod notifications;
mod persistence;
mod speech;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::{checkbox, status_badge, visible_tasks, SortKey, StatusFilter, ViewFilter};
use persistence::{ensure_data_dir, get_data_dir, init_local_data_dir, logs_dir, FileStore};
use ratatui::{backend::CrosstermBackend, Terminal};
use speech::CommandRecognizer;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_appender::non_blocking::WorkerGuard;

#[derive(Parser)]
#[command(name = "letsdo")]
#[command(about = "Let's do Todo - tasks, subtasks and a Pomodoro timer in your terminal", long_about = None)]
struct Cli {
    /// Use this data directory instead of .letsdo discovery
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .letsdo directory in the current directory
    Init,
    /// Print tasks without starting the TUI
    List {
        /// Which tasks to show
        #[arg(short, long, value_enum, default_value_t = StatusFilter::All)]
        filter: StatusFilter,
        /// Ordering of the list
        #[arg(short, long, value_enum, default_value_t = SortKey::DueDate)]
        sort: SortKey,
        /// Only tasks whose title or description contains this text
        #[arg(long)]
        search: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let data_dir = init_local_data_dir()?;
            println!("Initialized data directory: {}", data_dir.display());
            println!();
            println!("letsdo will now keep tasks in this directory.");
            println!("Run 'letsdo' to start.");
            Ok(())
        }
        Some(Commands::List {
            filter,
            sort,
            search,
        }) => {
            init_stderr_logging();
            let view = ViewFilter::new(filter, sort, search.unwrap_or_default());
            list_tasks(cli.dir.as_deref(), &view)
        }
        None => run_tui(cli.dir.as_deref()),
    }
}

/// Log to a daily rolling file so the TUI screen stays clean
fn init_file_logging(data_dir: &Path) -> Option<WorkerGuard> {
    let logs_dir = logs_dir(data_dir);
    if let Err(e) = fs::create_dir_all(&logs_dir) {
        eprintln!("Warning: Could not create logs directory: {}", e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "letsdo.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    Some(guard)
}

fn init_stderr_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn list_tasks(dir: Option<&Path>, view: &ViewFilter) -> Result<()> {
    let data_dir = get_data_dir(dir)?;
    tracing::debug!(dir = %data_dir.display(), "listing tasks");

    let store = FileStore::new(data_dir);
    let snapshot = persistence::load(&store);

    let tasks = visible_tasks(&snapshot.tasks, view);
    if tasks.is_empty() {
        println!("No tasks.");
        return Ok(());
    }

    for task in tasks {
        let due = if task.due_date.is_empty() {
            String::new()
        } else {
            format!("  due {}", task.due_date)
        };
        println!(
            "{:<10} [{}] {}{}",
            status_badge(task),
            task.priority.label(),
            task.title,
            due
        );
        for subtask in &task.subtasks {
            println!("    {} {}", checkbox(subtask.completed), subtask.title);
        }
    }

    Ok(())
}

fn run_tui(dir: Option<&Path>) -> Result<()> {
    let data_dir = ensure_data_dir(dir)?;
    let _log_guard = init_file_logging(&data_dir);
    tracing::info!(dir = %data_dir.display(), "starting letsdo");

    let store = FileStore::new(data_dir);
    let mut app = AppState::load(Box::new(store), Box::new(CommandRecognizer::from_env()));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!(error = %err, "event loop failed");
    }
    result.context("TUI event loop failed")
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Wake up for keys or the next timer tick, whichever comes first
        if event::poll(app.next_wakeup(Instant::now()))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key) {
                    tracing::info!("quit requested");
                    return Ok(());
                }
            }
        }

        app.tick(Instant::now());
    }
}
