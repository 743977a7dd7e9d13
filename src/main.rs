mod app;
mod audio;
mod domain;
mod input;
mod motivation;
mod ticker;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use domain::Settings;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "lumina")]
#[command(about = "A calm, terminal-based Pomodoro timer with tasks and motivation", long_about = None)]
struct Cli {
    /// Focus duration in minutes
    #[arg(long, value_name = "MINUTES", value_parser = clap::value_parser!(u32).range(1..))]
    focus: Option<u32>,

    /// Short break duration in minutes
    #[arg(long, value_name = "MINUTES", value_parser = clap::value_parser!(u32).range(1..))]
    short_break: Option<u32>,

    /// Long break duration in minutes
    #[arg(long, value_name = "MINUTES", value_parser = clap::value_parser!(u32).range(1..))]
    long_break: Option<u32>,
}

impl Cli {
    /// Session settings: defaults overridden by any flags given
    fn settings(&self) -> Settings {
        let mut settings = Settings::default();
        if let Some(mins) = self.focus {
            settings.focus_secs = mins.saturating_mul(60);
        }
        if let Some(mins) = self.short_break {
            settings.short_break_secs = mins.saturating_mul(60);
        }
        if let Some(mins) = self.long_break {
            settings.long_break_secs = mins.saturating_mul(60);
        }
        settings
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Create app state (session-only; nothing is persisted)
    let mut app = AppState::new(cli.settings());

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

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let poll_rate = ticker::poll_duration();
    let mut last_title = String::new();

    loop {
        // Mirror the remaining time in the terminal title
        let title = format!("{} - Lumina", app.countdown.format_remaining());
        if title != last_title {
            execute!(io::stdout(), SetTitle(&title))?;
            last_title = title;
        }

        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(poll_rate)? {
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

        // Advance the countdown by any elapsed whole seconds
        app.on_tick(Instant::now());

        // Deliver a finished motivation fetch, if any
        app.poll_motivation();
    }
}
