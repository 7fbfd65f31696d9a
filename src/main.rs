use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::layout::Rect;

mod app;
mod backend;
mod config;
mod error;
mod form;
mod input;
mod logging;
mod scroll;
mod test_utils;
mod widgets;

use app::App;
use config::Config;

/// How long to wait for a key before redrawing
const TICK_RATE: Duration = Duration::from_millis(80);

/// Ask the Astro Archive quartermaster about mission inventory
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Inventory query endpoint (overrides the config file)
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Config file to read instead of ~/.config/astro-archive/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Where to write diagnostic logs
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    if let Some(path) = args.log_file.clone().or_else(logging::default_log_path)
        && let Err(e) = logging::init(&path)
    {
        eprintln!("Warning: {}", e);
    }

    let config = config::load_config(args.config.as_deref())?.with_endpoint_override(args.endpoint)?;
    log::info!("Using inventory endpoint {}", config.backend.endpoint);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    // Pastes arrive as one event instead of keystrokes
    if let Err(e) = execute!(std::io::stdout(), EnableBracketedPaste) {
        log::warn!("Bracketed paste unavailable: {}", e);
    }

    let result = run(terminal, &config);

    let _ = execute!(std::io::stdout(), DisableBracketedPaste);

    // Restore terminal (automatic cleanup)
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, config: &Config) -> Result<()> {
    let mut app = App::new(config);

    loop {
        let size = terminal.size()?;
        app.set_viewport(Rect::new(0, 0, size.width, size.height));

        terminal.draw(|frame| app.render(frame))?;

        app.handle_events(TICK_RATE)?;

        if app.should_quit() {
            break;
        }
    }

    if app.abandon_in_flight() {
        log::info!("Exited with a request in flight");
    }

    Ok(())
}
