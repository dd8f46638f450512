//! Warren: a seeded first-person dungeon crawler for the terminal.
//!
//! Main entry point.

use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, size, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use warren_core::dungeon::{generate, GenerationConfig};
use warren_core::{DEFAULT_ROOMS_X, DEFAULT_ROOMS_Y, DEFAULT_SEED};
use warren_tui::app::{DEFAULT_VIEW_HEIGHT, DEFAULT_VIEW_WIDTH};
use warren_tui::App;

/// Seeded first-person dungeon crawler
#[derive(Parser, Debug)]
#[command(name = "warren")]
#[command(author, version, about = "Warren - explore a generated dungeon", long_about = None)]
struct Args {
    /// World seed; the same seed always builds the same dungeon
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Room columns
    #[arg(long = "rooms-x", default_value_t = DEFAULT_ROOMS_X)]
    rooms_x: usize,

    /// Room rows
    #[arg(long = "rooms-y", default_value_t = DEFAULT_ROOMS_Y)]
    rooms_y: usize,
}

fn main() -> io::Result<()> {
    // Parse and generate before touching the terminal so configuration
    // errors print normally.
    let args = Args::parse();
    let config = GenerationConfig {
        rooms_x: args.rooms_x,
        rooms_y: args.rooms_y,
        seed: args.seed,
        ..GenerationConfig::default()
    };
    let dungeon = match generate(&config) {
        Ok(dungeon) => dungeon,
        Err(e) => {
            eprintln!("warren: {e}");
            std::process::exit(1);
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Viewport from the terminal, fixed for the run; the frame border
    // takes one cell on each side.
    let (view_width, view_height) = size()
        .map(|(w, h)| (w.saturating_sub(2) as usize, h.saturating_sub(2) as usize))
        .unwrap_or((DEFAULT_VIEW_WIDTH, DEFAULT_VIEW_HEIGHT));
    let mut app = App::new(dungeon, view_width, view_height);

    // Main loop
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(100))? {
            app.handle_event(event::read()?);
        }
        if app.should_quit() {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
