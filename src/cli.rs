//! CLI - Command Line Interface for rgn-showcase
//!
//! Without a subcommand the interactive showcase is launched. Subcommands
//! inspect the catalog, the entrance schedule and the configuration, or
//! render a headless frame. All output is JSON-parseable.
//!
//! # Examples
//!
//! ```bash
//! rgn-showcase games --json
//! rgn-showcase timeline
//! rgn-showcase snapshot --at-ms 2500 --width 120 --height 40
//! rgn-showcase --carousel-ms 3000 config --write
//! ```

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;

use crate::config::Overrides;

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for CLI operations (semantic for scripting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General error
    Error = 1,
    /// Invalid arguments
    InvalidArgs = 2,
    /// Config file unreadable or invalid
    ConfigError = 3,
    /// Catalog file unreadable or invalid
    CatalogError = 4,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> std::process::ExitCode {
        std::process::ExitCode::from(code as u8)
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// rgn-showcase - animated game studio landing page for the terminal
///
/// Run without arguments to launch the interactive showcase.
/// Use subcommands for scriptable inspection.
#[derive(Parser, Debug)]
#[command(
    name = "rgn-showcase",
    version,
    about = "Animated game studio landing page for the terminal",
    long_about = "A neon landing page for a fictional game studio: loading gate, \
                  entrance animation, glowing calls to action, news carousel \
                  and pointer parallax.\n\n\
                  Run without arguments to launch the interactive showcase.\n\
                  Use subcommands for inspection and scripting.",
    after_help = "EXAMPLES:\n\
                  rgn-showcase                         Launch interactive showcase\n\
                  rgn-showcase games --json            List the game catalog\n\
                  rgn-showcase timeline                Print the entrance schedule\n\
                  rgn-showcase snapshot --at-ms 2500   Render one frame as text"
)]
pub struct Cli {
    /// Output format as JSON (default for non-TTY)
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Path to config file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Catalog file replacing the built-in lineup
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Milliseconds before the page content is revealed
    #[arg(long, global = true)]
    pub load_delay_ms: Option<u64>,

    /// Milliseconds between automatic news advances
    #[arg(long = "carousel-ms", global = true)]
    pub carousel_ms: Option<u64>,

    /// Redraws per second
    #[arg(long, global = true)]
    pub fps: Option<u32>,

    /// Base URL for placeholder images
    #[arg(long, global = true)]
    pub asset_base: Option<String>,

    /// Log filter (overridden by RUST_LOG)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Subcommand to run (omit for TUI mode)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Check if running in CLI mode (has subcommand)
    pub fn is_cli_mode(&self) -> bool {
        self.command.is_some()
    }

    /// Check if JSON output should be used
    pub fn should_json(&self) -> bool {
        self.json || !std::io::stdout().is_terminal()
    }

    /// Config values given as flags
    pub fn overrides(&self) -> Overrides {
        Overrides {
            load_delay_ms: self.load_delay_ms,
            carousel_period_ms: self.carousel_ms,
            frame_rate: self.fps,
            asset_base: self.asset_base.clone(),
            catalog: self.catalog.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

// =============================================================================
// Subcommands
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the game catalog
    #[command(visible_alias = "g")]
    Games(GamesCmd),

    /// List the news entries
    #[command(visible_alias = "n")]
    News(NewsCmd),

    /// Print the entrance animation schedule
    #[command(visible_alias = "tl")]
    Timeline(TimelineCmd),

    /// Render one headless frame as plain text
    #[command(visible_alias = "snap")]
    Snapshot(SnapshotCmd),

    /// Print the effective configuration
    Config(ConfigCmd),
}

/// List every game with its image reference
#[derive(Args, Debug, Default)]
pub struct GamesCmd {}

/// List every news entry in carousel order
#[derive(Args, Debug, Default)]
pub struct NewsCmd {}

/// Print each entrance step with start and end times
#[derive(Args, Debug, Default)]
pub struct TimelineCmd {}

/// Render the page as it looks `at_ms` after mount
#[derive(Args, Debug)]
pub struct SnapshotCmd {
    /// Milliseconds after mount
    #[arg(long, default_value = "0")]
    pub at_ms: u64,

    /// Frame width in columns
    #[arg(long, short = 'W', default_value = "120")]
    pub width: u16,

    /// Frame height in rows
    #[arg(long, short = 'H', default_value = "40")]
    pub height: u16,
}

impl SnapshotCmd {
    /// Smallest frame the layout can be drawn into
    pub const MIN_SIZE: (u16, u16) = (20, 8);

    pub fn validate(&self) -> Result<(), String> {
        let (min_w, min_h) = Self::MIN_SIZE;
        if self.width < min_w || self.height < min_h {
            return Err(format!(
                "Frame must be at least {min_w}x{min_h} (got {}x{})",
                self.width, self.height
            ));
        }
        Ok(())
    }
}

/// Print or save the configuration after flags are applied
#[derive(Args, Debug, Default)]
pub struct ConfigCmd {
    /// Save the effective configuration to the config file
    #[arg(long, short = 'w')]
    pub write: bool,
}

// =============================================================================
// JSON Output Types
// =============================================================================

/// Generic JSON output wrapper with status
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub exit_code: i32,
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

impl<T: Serialize> JsonOutput<T> {
    /// Create success output with data
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            exit_code: 0,
        }
    }

    /// Create error output (no data)
    pub fn error_msg(msg: impl Into<String>, code: ExitCode) -> JsonOutput<()> {
        JsonOutput::<()> {
            data: None,
            error: Some(msg.into()),
            exit_code: code.into(),
        }
    }
}

/// One row of the `timeline` output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub target: String,
    pub start_ms: u64,
    pub end_ms: u64,
}

/// `snapshot` output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotResponse {
    pub at_ms: u64,
    pub width: u16,
    pub height: u16,
    pub loaded: bool,
    pub news_index: usize,
    pub frame: String,
}

/// `config --write` output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedConfig {
    pub status: &'static str,
    pub path: PathBuf,
}

// =============================================================================
// Output Helpers
// =============================================================================

/// Output handler for consistent formatting
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    pub fn new(cli: &Cli) -> Self {
        Self {
            json: cli.should_json(),
            quiet: cli.quiet,
        }
    }

    /// Print success data
    pub fn print<T: Serialize>(&self, data: T) -> anyhow::Result<()> {
        if self.json {
            let output = JsonOutput::success(data);
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        Ok(())
    }

    /// Print plain text for humans, or `data` as JSON
    pub fn print_or<T: Serialize>(&self, data: T, text: impl FnOnce() -> String) -> anyhow::Result<()> {
        if self.json {
            self.print(data)
        } else {
            println!("{}", text());
            Ok(())
        }
    }

    /// Print error and return exit code
    pub fn error(&self, msg: impl Into<String>, code: ExitCode) -> ExitCode {
        let msg = msg.into();
        if self.json {
            let output = JsonOutput::<()>::error_msg(&msg, code);
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                eprintln!("{}", json);
            }
        } else if !self.quiet {
            eprintln!("Error: {}", msg);
        }
        code
    }

    /// Print info message (suppressed in quiet mode)
    pub fn info(&self, msg: impl std::fmt::Display) {
        if !self.quiet && !self.json {
            eprintln!("{}", msg);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_args_is_tui_mode() {
        let cli = Cli::parse_from(["rgn-showcase"]);
        assert!(!cli.is_cli_mode());
    }

    #[test]
    fn test_global_flags_become_overrides() {
        let cli = Cli::parse_from([
            "rgn-showcase",
            "--load-delay-ms",
            "0",
            "--carousel-ms",
            "3000",
            "--fps",
            "60",
            "--asset-base",
            "https://cdn.test/img",
            "--log-level",
            "debug",
            "--catalog",
            "lineup.toml",
        ]);
        let o = cli.overrides();
        assert_eq!(o.load_delay_ms, Some(0));
        assert_eq!(o.carousel_period_ms, Some(3000));
        assert_eq!(o.frame_rate, Some(60));
        assert_eq!(o.asset_base.as_deref(), Some("https://cdn.test/img"));
        assert_eq!(o.log_level.as_deref(), Some("debug"));
        assert_eq!(o.catalog, Some(PathBuf::from("lineup.toml")));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["rgn-showcase", "games", "--json", "-q"]);
        assert!(cli.json);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Some(Command::Games(_))));
    }

    #[test]
    fn test_snapshot_defaults() {
        let cli = Cli::parse_from(["rgn-showcase", "snapshot"]);
        match cli.command {
            Some(Command::Snapshot(cmd)) => {
                assert_eq!(cmd.at_ms, 0);
                assert_eq!((cmd.width, cmd.height), (120, 40));
            }
            other => panic!("Expected Snapshot command, got {other:?}"),
        }
    }

    #[test]
    fn test_snapshot_validation() {
        let cmd = SnapshotCmd {
            at_ms: 0,
            width: 10,
            height: 40,
        };
        assert!(cmd.validate().is_err());

        let cmd = SnapshotCmd {
            at_ms: 0,
            width: 80,
            height: 24,
        };
        assert!(cmd.validate().is_ok());
    }

    #[test]
    fn test_aliases() {
        let cli = Cli::parse_from(["rgn-showcase", "tl"]);
        assert!(matches!(cli.command, Some(Command::Timeline(_))));

        let cli = Cli::parse_from(["rgn-showcase", "n"]);
        assert!(matches!(cli.command, Some(Command::News(_))));
    }

    #[test]
    fn test_config_write_flag() {
        let cli = Cli::parse_from(["rgn-showcase", "config", "--write"]);
        match cli.command {
            Some(Command::Config(cmd)) => assert!(cmd.write),
            other => panic!("Expected Config command, got {other:?}"),
        }
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::InvalidArgs), 2);
        assert_eq!(i32::from(ExitCode::ConfigError), 3);
        assert_eq!(i32::from(ExitCode::CatalogError), 4);
    }

    #[test]
    fn test_json_error_shape() {
        let out = JsonOutput::<()>::error_msg("bad", ExitCode::ConfigError);
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["error"], "bad");
        assert_eq!(json["exit_code"], 3);
        assert!(json.get("data").is_none());
    }
}
