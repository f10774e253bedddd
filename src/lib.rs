//! rgn-showcase - animated game studio landing page for the terminal
//!
//! A neon landing page for a fictional studio: a loading gate, a one-shot
//! entrance timeline, glowing calls to action, an auto-advancing news
//! carousel and a pointer-driven parallax backdrop.
//!
//! # Modules
//!
//! - `models` - Game and news catalog
//! - `motion` - Easing, tweens, timelines, parallax and scoped timers
//! - `carousel` - Wrapping news cursor
//! - `sequencer` - Load gate, entrance run, ambient loops, teardown
//! - `app` - Application state and input routing
//! - `ui` - TUI components
//! - `cli` / `commands` - Scriptable front-end
//! - `config` / `logging` - Ambient setup

pub mod app;
pub mod carousel;
pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod models;
pub mod motion;
pub mod sequencer;
pub mod ui;

// Re-export commonly used types
pub use app::{App, Hit, HitMap};
pub use carousel::Carousel;
pub use config::{Config, ConfigError, Overrides};
pub use models::{Catalog, CatalogError, Game, NewsItem};
pub use motion::{Ease, Parallax, Pose, Target, Timeline};
pub use sequencer::{LoadGate, Sequencer, Signal};
