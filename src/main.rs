mod app;
mod diagnostics;
mod domain;
mod drag;
mod error;
mod input;
mod logging;
mod persistence;
mod store;
mod theme;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use diagnostics::{Diagnostics, TracingDiagnostics};
use domain::{Filter, IdStrategy, TodoRecord};
use persistence::{ensure_data_dir, init_local_data_dir, log_file, shared, FileStore, MemoryStore, SharedStore};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;
use store::TodoStore;
use theme::ThemeCell;

/// How long to wait for a key before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "A terminal task list with filters, reordering and a light/dark theme", long_about = None)]
struct Cli {
    /// Data directory. Defaults to the nearest .tasklist directory, then ~/.tasklist
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Keep everything in memory; nothing is saved
    #[arg(long, global = true)]
    in_memory: bool,

    /// Use time-based IDs (todo-<millis>) instead of random UUIDs
    #[arg(long, global = true)]
    timestamp_ids: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .tasklist directory in the current directory
    Init,
    /// Print todos
    List {
        /// all, completed or pending
        #[arg(short, long, default_value = "all", value_parser = parse_filter)]
        filter: Filter,
    },
    /// Add a todo
    Add {
        title: String,
        #[arg(short, long, default_value = "")]
        description: String,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
    },
    /// Print the current theme
    Theme {
        /// Switch between light and dark first
        #[arg(long)]
        toggle: bool,
    },
}

fn parse_filter(value: &str) -> std::result::Result<Filter, String> {
    Filter::from_name(value).ok_or_else(|| format!("unknown filter '{}' (use all, completed or pending)", value))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let ids = if cli.timestamp_ids {
        IdStrategy::Timestamp
    } else {
        IdStrategy::Random
    };
    let diagnostics: Rc<dyn Diagnostics> = Rc::new(TracingDiagnostics);

    match &cli.command {
        Some(Commands::Init) => {
            let current_dir = std::env::current_dir().context("Could not determine current directory")?;
            let data_dir = init_local_data_dir(&current_dir)?;
            println!("Initialized data directory: {}", data_dir.display());
            println!("Run 'tasklist' here to use it.");
            Ok(())
        }
        Some(Commands::List { filter }) => {
            let store = TodoStore::new(open_store(&cli)?, diagnostics).with_ids(ids);
            if store.is_empty() {
                println!("No todos yet");
            }
            for todo in store.filtered_view(*filter) {
                println!("{}", list_line(todo));
            }
            Ok(())
        }
        Some(Commands::Add { title, description, due }) => {
            let mut store = TodoStore::new(open_store(&cli)?, diagnostics).with_ids(ids);
            match store.add(title, description, due.as_deref()) {
                Some(id) => println!("Added {}", id),
                None => println!("Nothing added: title is empty"),
            }
            Ok(())
        }
        Some(Commands::Theme { toggle }) => {
            let mut theme = ThemeCell::new(open_store(&cli)?, diagnostics);
            if *toggle {
                theme.toggle();
            }
            println!("{}", theme.current().name());
            Ok(())
        }
        None => {
            let backing = open_store(&cli)?;
            let store = TodoStore::new(backing.clone(), diagnostics.clone()).with_ids(ids);
            let theme = ThemeCell::new(backing, diagnostics);
            run_tui(AppState::new(store, theme))
        }
    }
}

/// Pick the backing store and start file logging next to it
fn open_store(cli: &Cli) -> Result<SharedStore> {
    if cli.in_memory {
        return Ok(shared(MemoryStore::new()));
    }

    let data_dir = ensure_data_dir(cli.data_dir.as_deref())?;
    logging::init_file_logging(&log_file(&data_dir));
    tracing::info!(dir = %data_dir.display(), "using data directory");

    Ok(shared(FileStore::new(data_dir)))
}

/// One line of `tasklist list` output
fn list_line(todo: &TodoRecord) -> String {
    let checkbox = if todo.completed { "[x]" } else { "[ ]" };
    match &todo.due_date {
        Some(_) => format!("{} {} (due {})", checkbox, todo.title, todo.due_formatted()),
        None => format!("{} {}", checkbox, todo.title),
    }
}

fn run_tui(mut app: AppState) -> Result<()> {
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
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_line() {
        let mut todo = TodoRecord::new(
            "id".to_string(),
            "Buy milk".to_string(),
            String::new(),
            Some("2024-05-01".to_string()),
        );
        assert_eq!(list_line(&todo), "[ ] Buy milk (due May 1, 2024)");

        todo.completed = true;
        todo.due_date = None;
        assert_eq!(list_line(&todo), "[x] Buy milk");
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!(parse_filter("pending"), Ok(Filter::Pending));
        assert!(parse_filter("later").is_err());
    }

    #[test]
    fn test_cli_parses_add() {
        let cli = Cli::parse_from(["tasklist", "--in-memory", "add", "Ship", "--due", "2024-01-02"]);
        assert!(cli.in_memory);
        assert!(!cli.timestamp_ids);
        match cli.command {
            Some(Commands::Add { title, due, description }) => {
                assert_eq!(title, "Ship");
                assert_eq!(due.as_deref(), Some("2024-01-02"));
                assert_eq!(description, "");
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn test_cli_parses_init_and_timestamp_ids() {
        let cli = Cli::parse_from(["tasklist", "init"]);
        assert!(matches!(cli.command, Some(Commands::Init)));

        let cli = Cli::parse_from(["tasklist", "list", "--timestamp-ids", "--filter", "completed"]);
        assert!(cli.timestamp_ids);
        match cli.command {
            Some(Commands::List { filter }) => assert_eq!(filter, Filter::Completed),
            _ => panic!("expected list"),
        }
    }
}
