//! rgn-showcase - animated game studio landing page for the terminal
//!
//! # Usage
//!
//! ```bash
//! # Launch the interactive showcase
//! rgn-showcase
//!
//! # CLI mode (for automation)
//! rgn-showcase games --json
//! rgn-showcase timeline
//! rgn-showcase snapshot --at-ms 2500
//! ```

use std::io::{stdout, Stdout};
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{info, warn};

use rgn_showcase::app::{App, HitMap};
use rgn_showcase::cli::{Cli, Command, ExitCode, Output};
use rgn_showcase::commands;
use rgn_showcase::config::{Config, ConfigError};
use rgn_showcase::logging;
use rgn_showcase::models::Catalog;
use rgn_showcase::sequencer::{Sequencer, Signal};
use rgn_showcase::ui;

/// Terminal type alias for convenience
type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(&cli);

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => std::process::exit(output.error(e.to_string(), ExitCode::ConfigError).into()),
    };

    let guard = logging::init(config.log_level.as_deref());
    if cli.config.is_none() && Config::path().is_none() {
        warn!("no config directory found, using defaults");
    }

    let catalog = match &config.catalog {
        Some(path) => match Catalog::load(path) {
            Ok(catalog) => {
                info!(path = %path.display(), games = catalog.games.len(), "catalog loaded");
                catalog
            }
            Err(e) => {
                let code = output.error(e.to_string(), ExitCode::CatalogError);
                drop(guard);
                std::process::exit(code.into());
            }
        },
        None => Catalog::builtin(),
    };
    let catalog = Arc::new(catalog);

    if cli.is_cli_mode() {
        // CLI mode: execute command and exit
        let exit_code = run_cli(cli, catalog, &config, &output);
        drop(guard);
        std::process::exit(exit_code.into());
    }

    // TUI mode: launch interactive interface
    let result = run_tui(catalog, &config).await;
    drop(guard);
    result
}

/// Config file (explicit path or default location) with flags applied
fn resolve_config(cli: &Cli) -> Result<Config, ConfigError> {
    let base = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    base.apply(cli.overrides())
}

/// Run CLI command and return exit code
fn run_cli(cli: Cli, catalog: Arc<Catalog>, config: &Config, output: &Output) -> ExitCode {
    match cli.command {
        Some(Command::Games(cmd)) => commands::games_cmd(cmd, &catalog, config, output),
        Some(Command::News(cmd)) => commands::news_cmd(cmd, &catalog, output),
        Some(Command::Timeline(cmd)) => commands::timeline_cmd(cmd, &catalog, output),
        Some(Command::Snapshot(cmd)) => commands::snapshot_cmd(cmd, catalog, config, output),
        Some(Command::Config(cmd)) => commands::config_cmd(cmd, config, output),
        None => {
            // Handled by the is_cli_mode check
            ExitCode::Success
        }
    }
}

// =============================================================================
// TUI Mode
// =============================================================================

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run interactive TUI
async fn run_tui(catalog: Arc<Catalog>, config: &Config) -> Result<()> {
    let mut terminal = init_terminal()?;

    let (tx, rx) = mpsc::unbounded_channel();
    let sequencer = Sequencer::mount(&catalog, config, tx);
    let mut app = App::new(catalog, sequencer, config.asset_base.clone());

    let result = match terminal.size() {
        Ok(size) => {
            app.resize(size.width, size.height);
            run_event_loop(&mut terminal, &mut app, rx, config).await
        }
        Err(e) => Err(e.into()),
    };

    // Cancel timers before handing the terminal back
    app.quit();

    // Always restore terminal, even on error
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop: terminal input, sequencer signals and frame ticks
async fn run_event_loop(
    terminal: &mut Tui,
    app: &mut App,
    mut signals: mpsc::UnboundedReceiver<Signal>,
    config: &Config,
) -> Result<()> {
    let mut events = EventStream::new();
    let mut frames = tokio::time::interval(config.frame_interval());
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    while app.running {
        tokio::select! {
            _ = frames.tick() => {
                let now = Instant::now();
                let mut hits = HitMap::default();
                terminal.draw(|frame| hits = ui::render(frame, app, now))?;
                app.hits = hits;
            }

            Some(signal) = signals.recv() => {
                app.handle_signal(signal, Instant::now());
            }

            event = events.next() => match event {
                // Only handle key press events (ignore releases on Windows)
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                }
                Some(Ok(Event::Mouse(mouse))) => {
                    app.handle_mouse(mouse, Instant::now());
                }
                Some(Ok(Event::Resize(width, height))) => app.resize(width, height),
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => app.quit(),
            },
        }
    }

    Ok(())
}
