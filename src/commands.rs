//! CLI Command Handlers
//!
//! Each handler takes its parsed args, the resolved config and catalog, and
//! the Output helper, and returns an ExitCode.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::time::Instant;
use tracing::debug;

use crate::app::App;
use crate::cli::{
    ConfigCmd, ExitCode, GamesCmd, NewsCmd, Output, SavedConfig, ScheduleEntry, SnapshotCmd,
    SnapshotResponse, TimelineCmd,
};
use crate::config::Config;
use crate::models::{Catalog, Game};
use crate::motion::Timeline;
use crate::sequencer::{Sequencer, Signal};
use crate::ui;

// =============================================================================
// Games Command
// =============================================================================

#[derive(Debug, Serialize)]
struct GameRow<'a> {
    #[serde(flatten)]
    game: &'a Game,
    image_url: String,
}

pub fn games_cmd(_cmd: GamesCmd, catalog: &Catalog, config: &Config, output: &Output) -> ExitCode {
    let rows: Vec<GameRow> = catalog
        .games
        .iter()
        .map(|game| GameRow {
            game,
            image_url: game.image_url(&config.asset_base),
        })
        .collect();

    let printed = output.print_or(&rows, || {
        rows.iter()
            .map(|r| format!("{:>3}  {}\n     {}", r.game.id, r.game, r.image_url))
            .collect::<Vec<_>>()
            .join("\n")
    });
    if let Err(e) = printed {
        return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
    }
    ExitCode::Success
}

// =============================================================================
// News Command
// =============================================================================

pub fn news_cmd(_cmd: NewsCmd, catalog: &Catalog, output: &Output) -> ExitCode {
    let printed = output.print_or(&catalog.news, || {
        catalog
            .news
            .iter()
            .enumerate()
            .map(|(i, n)| format!("{:>3}  {}", i + 1, n))
            .collect::<Vec<_>>()
            .join("\n")
    });
    if let Err(e) = printed {
        return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
    }
    ExitCode::Success
}

// =============================================================================
// Timeline Command
// =============================================================================

/// Entrance schedule for `card_count` cards
pub fn schedule(card_count: usize) -> Vec<ScheduleEntry> {
    Timeline::entrance(card_count)
        .steps()
        .iter()
        .map(|step| ScheduleEntry {
            target: step.target.to_string(),
            start_ms: step.start.as_millis() as u64,
            end_ms: step.end().as_millis() as u64,
        })
        .collect()
}

pub fn timeline_cmd(_cmd: TimelineCmd, catalog: &Catalog, output: &Output) -> ExitCode {
    let entries = schedule(catalog.games.len());
    let total = entries.iter().map(|e| e.end_ms).max().unwrap_or(0);

    let printed = output.print_or(&entries, || {
        let mut lines: Vec<String> = entries
            .iter()
            .map(|e| format!("{:<10} {:>5} ms -> {:>5} ms", e.target, e.start_ms, e.end_ms))
            .collect();
        lines.push(format!("{:<10} {:>5} ms", "total", total));
        lines.join("\n")
    });
    if let Err(e) = printed {
        return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
    }
    ExitCode::Success
}

// =============================================================================
// Snapshot Command
// =============================================================================

/// Replay the page headlessly up to `at` after mount and render one frame.
///
/// The load gate opens at the configured delay and the carousel advances
/// once per elapsed period, as the live timers would. Only the carousel
/// position modulo the news count is replayed.
pub fn render_snapshot(
    catalog: Arc<Catalog>,
    config: &Config,
    at: Duration,
    width: u16,
    height: u16,
) -> SnapshotResponse {
    let mounted = Instant::now();
    let mut sequencer = Sequencer::detached(&catalog, mounted);

    if at >= config.load_delay() {
        sequencer.on_signal(Signal::LoadComplete, mounted + config.load_delay());
    }

    let ticks = at.as_millis() / config.carousel_period().as_millis().max(1);
    let steps = ticks % catalog.news.len().max(1) as u128;
    for _ in 0..steps {
        sequencer.on_signal(Signal::CarouselTick, mounted);
    }

    let mut app = App::new(catalog, sequencer, config.asset_base.clone());
    app.resize(width, height);

    let sampled = mounted.checked_add(at).unwrap_or_else(|| far_future(mounted, config));
    let frame = ui::snapshot(&app, sampled, width, height);
    debug!(at_ms = at.as_millis() as u64, ticks = ticks as u64, "snapshot rendered");

    SnapshotResponse {
        at_ms: at.as_millis() as u64,
        width,
        height,
        loaded: app.sequencer().is_loaded(),
        news_index: app.sequencer().news_index(),
        frame,
    }
}

/// Stand-in sample instant when `at` overflows the clock: long after the
/// entrance has settled
fn far_future(mounted: Instant, config: &Config) -> Instant {
    mounted + config.load_delay() + Duration::from_secs(24 * 60 * 60)
}

pub fn snapshot_cmd(
    cmd: SnapshotCmd,
    catalog: Arc<Catalog>,
    config: &Config,
    output: &Output,
) -> ExitCode {
    if let Err(msg) = cmd.validate() {
        return output.error(msg, ExitCode::InvalidArgs);
    }

    let snap = render_snapshot(
        catalog,
        config,
        Duration::from_millis(cmd.at_ms),
        cmd.width,
        cmd.height,
    );

    let printed = output.print_or(&snap, || snap.frame.clone());
    if let Err(e) = printed {
        return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
    }
    ExitCode::Success
}

// =============================================================================
// Config Command
// =============================================================================

pub fn config_cmd(cmd: ConfigCmd, config: &Config, output: &Output) -> ExitCode {
    if cmd.write {
        return match config.save() {
            Ok(path) => {
                output.info(format!("Saved config to {}", path.display()));
                let saved = SavedConfig {
                    status: "ok",
                    path,
                };
                match output.print(&saved) {
                    Ok(()) => ExitCode::Success,
                    Err(e) => output.error(format!("Failed to serialize: {}", e), ExitCode::Error),
                }
            }
            Err(e) => output.error(e.to_string(), ExitCode::ConfigError),
        };
    }

    let printed = output.print_or(config, || {
        toml::to_string_pretty(config).unwrap_or_else(|e| format!("# unprintable config: {e}"))
    });
    if let Err(e) = printed {
        return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
    }
    ExitCode::Success
}

// =============================================================================
// Tests
// =============================================================================
