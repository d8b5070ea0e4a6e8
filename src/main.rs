mod app;
mod domain;
mod input;
mod persistence;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{ensure_jot_dir, get_jot_dir, init_local_jot, load_or_default, tasks_file};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "jot")]
#[command(about = "A minimal terminal task list with single-file JSON storage", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .jot directory in the current directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let jot_dir = init_local_jot()?;
            println!("Initialized jot directory: {}", jot_dir.display());
            println!();
            println!("Jot will now use this local directory for task storage.");
            println!("Run 'jot' to start managing tasks.");
            Ok(())
        }
        None => run_tui(),
    }
}

fn run_tui() -> Result<()> {
    ensure_jot_dir()?;

    // Show which directory we're using
    let jot_dir = get_jot_dir()?;
    eprintln!("Using jot directory: {}", jot_dir.display());

    // Load the task blob; a missing or unreadable blob yields an empty list
    let tasks_path = tasks_file()?;
    let tasks = load_or_default(&tasks_path);

    let mut app = AppState::new(tasks, tasks_path);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Save on exit if anything is still unsynced
    if app.dirty {
        if let Err(e) = app.save() {
            eprintln!("Error saving tasks: {}", e);
        }
    }

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    let should_quit = input::handle_key(app, key)?;
                    if should_quit {
                        return Ok(());
                    }
                }
            }
        }

        // Persist the full list after every mutation. A failed write keeps
        // the store dirty, so it is retried on the next pass.
        if app.dirty {
            if let Err(e) = app.save() {
                eprintln!("Error saving tasks: {}", e);
            }
        }
    }
}
