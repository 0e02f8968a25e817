mod ui;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use fate::build_info;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;
use ui::app::App;
use ui::draw_ui;

fn print_help() {
    println!("Dice of Fate - Turn-Based Dice Combat\n");
    println!("Usage: fate [options]\n");
    println!("Options:");
    println!("  --log FILE  Write debug logs to FILE");
    println!("  --version   Show version information");
    println!("  --help      Show this help message");
    println!("\nKeys: Space/Enter roll, 1-3 pick loot, R restart, Q/Esc quit");
}

/// The terminal owns stdout, so logs only go to a file when asked for.
fn init_file_logging(path: &str) -> io::Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    tracing::info!(version = %build_info::version_line(), "logging initialized");
    Ok(())
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--log" => {
                i += 1;
                let Some(path) = args.get(i) else {
                    eprintln!("--log requires a file path");
                    std::process::exit(1);
                };
                init_file_logging(path)?;
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'fate --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut app = App::new();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Cleanup terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    if app.game.is_over() {
        println!(
            "You fell in round {} after defeating {} monster(s).",
            app.game.round(),
            app.game.monsters_defeated()
        );
    } else {
        println!("Goodbye!");
    }
    Ok(())
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|frame| draw_ui(frame, app))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && !app.handle_key(key.code, Instant::now()) {
                    return Ok(());
                }
            }
        }
    }
}
