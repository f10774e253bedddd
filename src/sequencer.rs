//! Presentation sequencer
//!
//! Owns every time-driven piece of the page:
//! - the load gate that lifts the loading overlay once
//! - the one-shot entrance timeline started when the gate opens
//! - the call-to-action glow loop
//! - the news carousel timer
//! - the pointer parallax plate
//!
//! Timers post [`Signal`]s into the event loop's channel and are held in a
//! [`TimerScope`] owned by the sequencer, so tearing the sequencer down (or
//! dropping it) cancels everything still pending.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::carousel::Carousel;
use crate::config::Config;
use crate::models::Catalog;
use crate::motion::{Parallax, Pose, Repeat, Target, TimerScope, Timeline, Tween};

/// Half-period of the call-to-action glow
pub const GLOW_PERIOD: Duration = Duration::from_millis(1800);

/// Message posted by a sequencer timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Load delay elapsed
    LoadComplete,
    /// Automatic news advance
    CarouselTick,
    /// Entrance timeline played out
    EntranceFinished,
}

// =============================================================================
// Load Gate
// =============================================================================

/// Whether the page content has been revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadGate {
    #[default]
    Pending,
    Loaded {
        at: Instant,
    },
}

impl LoadGate {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadGate::Loaded { .. })
    }

    pub fn opened_at(&self) -> Option<Instant> {
        match self {
            LoadGate::Loaded { at } => Some(*at),
            LoadGate::Pending => None,
        }
    }
}

// =============================================================================
// Entrance Run
// =============================================================================

/// The entrance timeline being played from a fixed start instant
#[derive(Debug, Clone)]
pub struct EntranceRun {
    timeline: Timeline,
    started_at: Instant,
    finished: bool,
}

impl EntranceRun {
    pub fn new(timeline: Timeline, started_at: Instant) -> Self {
        Self {
            timeline,
            started_at,
            finished: false,
        }
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }

    pub fn pose(&self, target: Target, now: Instant) -> Pose {
        self.timeline.pose_at(target, self.elapsed(now))
    }

    /// Finished either by its timer or by having played out
    pub fn is_finished(&self, now: Instant) -> bool {
        self.finished || self.timeline.is_complete(self.elapsed(now))
    }
}

// =============================================================================
// Sequencer
// =============================================================================

/// Time-driven state of the showcase view
#[derive(Debug)]
pub struct Sequencer {
    mounted_at: Instant,
    gate: LoadGate,
    entrance: Option<EntranceRun>,
    glow: Option<Tween>,
    carousel: Carousel,
    parallax: Parallax,
    card_count: usize,
    timers: Option<TimerScope<Signal>>,
    active: bool,
}

impl Sequencer {
    /// Mount with live timers posting into `tx`.
    ///
    /// Starts the load gate timer and the carousel timer. Must be called
    /// inside a tokio runtime.
    pub fn mount(catalog: &Catalog, config: &Config, tx: UnboundedSender<Signal>) -> Self {
        let mut sequencer = Self::detached(catalog, Instant::now());

        let mut timers = TimerScope::new(tx);
        timers.once(config.load_delay(), Signal::LoadComplete);
        timers.every(config.carousel_period(), Signal::CarouselTick);
        sequencer.timers = Some(timers);

        info!(
            load_delay_ms = config.load_delay_ms,
            carousel_period_ms = config.carousel_period_ms,
            "showcase mounted"
        );
        sequencer
    }

    /// Sequencer without timers, driven entirely through `on_signal`
    pub fn detached(catalog: &Catalog, now: Instant) -> Self {
        Self {
            mounted_at: now,
            gate: LoadGate::Pending,
            entrance: None,
            glow: None,
            carousel: Carousel::new(catalog.news.len()),
            parallax: Parallax::new(now),
            card_count: catalog.games.len(),
            timers: None,
            active: true,
        }
    }

    /// Apply a timer signal. Ignored after teardown.
    pub fn on_signal(&mut self, signal: Signal, now: Instant) {
        if !self.active {
            return;
        }

        match signal {
            Signal::LoadComplete => {
                self.open_gate(now);
            }
            Signal::CarouselTick => {
                self.carousel.advance();
                debug!(index = self.carousel.index(), "carousel auto-advance");
            }
            Signal::EntranceFinished => self.finish_entrance(now),
        }
    }

    /// Open the load gate and start the entrance and glow.
    ///
    /// Returns `false` when the gate was already open; nothing restarts.
    pub fn open_gate(&mut self, now: Instant) -> bool {
        if self.gate.is_loaded() || !self.active {
            return false;
        }

        self.gate = LoadGate::Loaded { at: now };

        let timeline = Timeline::entrance(self.card_count);
        let duration = timeline.duration();
        self.entrance = Some(EntranceRun::new(timeline, now));
        self.glow = Some(
            Tween::new(0.0, 1.0, GLOW_PERIOD, now)
                .repeat(Repeat::Infinite)
                .yoyo(true),
        );

        if let Some(timers) = self.timers.as_mut() {
            timers.once(duration, Signal::EntranceFinished);
        }

        info!(
            after_ms = now.saturating_duration_since(self.mounted_at).as_millis() as u64,
            entrance_ms = duration.as_millis() as u64,
            "load gate opened, entrance started"
        );
        true
    }

    fn finish_entrance(&mut self, now: Instant) {
        if let Some(run) = self.entrance.as_mut() {
            if !run.finished {
                run.finished = true;
                info!(
                    elapsed_ms = run.elapsed(now).as_millis() as u64,
                    "entrance finished"
                );
            }
        }
    }

    // -------------------------------------------------------------------------
    // Carousel controls
    // -------------------------------------------------------------------------

    pub fn next_news(&mut self) {
        self.carousel.next();
        debug!(index = self.carousel.index(), "carousel next");
    }

    pub fn prev_news(&mut self) {
        self.carousel.prev();
        debug!(index = self.carousel.index(), "carousel prev");
    }

    /// Show entry `index` immediately; out-of-range is ignored
    pub fn select_news(&mut self, index: usize) -> bool {
        let selected = self.carousel.select(index);
        debug!(index, selected, "carousel select");
        selected
    }

    pub fn news_index(&self) -> usize {
        self.carousel.index()
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    // -------------------------------------------------------------------------
    // Parallax
    // -------------------------------------------------------------------------

    pub fn pointer_moved(&mut self, col: u16, row: u16, width: u16, height: u16, now: Instant) {
        if self.active {
            self.parallax.pointer_moved(col, row, width, height, now);
        }
    }

    pub fn parallax(&self) -> &Parallax {
        &self.parallax
    }

    // -------------------------------------------------------------------------
    // Sampling
    // -------------------------------------------------------------------------

    pub fn gate(&self) -> LoadGate {
        self.gate
    }

    pub fn is_loaded(&self) -> bool {
        self.gate.is_loaded()
    }

    pub fn mounted_at(&self) -> Instant {
        self.mounted_at
    }

    pub fn entrance(&self) -> Option<&EntranceRun> {
        self.entrance.as_ref()
    }

    /// Pose of a section; sections are at rest until the entrance exists
    pub fn pose(&self, target: Target, now: Instant) -> Pose {
        self.entrance
            .as_ref()
            .map(|run| run.pose(target, now))
            .unwrap_or(Pose::REST)
    }

    /// Glow intensity in `[0, 1]`, zero until the gate opens
    pub fn glow_at(&self, now: Instant) -> f32 {
        self.glow.as_ref().map(|g| g.value_at(now)).unwrap_or(0.0)
    }

    /// Timers that may still fire
    pub fn pending_timers(&self) -> usize {
        self.timers.as_ref().map(|t| t.len()).unwrap_or(0)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    // -------------------------------------------------------------------------
    // Teardown
    // -------------------------------------------------------------------------

    /// Cancel every timer; later signals are ignored
    pub fn teardown(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        if let Some(mut timers) = self.timers.take() {
            timers.cancel_all();
        }
        debug!("showcase torn down");
    }
}

impl Drop for Sequencer {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_gate_opens_once() {
        let t0 = Instant::now();
        let mut seq = Sequencer::detached(&Catalog::builtin(), t0);
        assert!(!seq.is_loaded());
        assert!(seq.entrance().is_none());

        assert!(seq.open_gate(t0 + ms(1100)));
        let started = seq.entrance().unwrap().started_at();

        // A second signal neither reopens nor restarts the timeline
        seq.on_signal(Signal::LoadComplete, t0 + ms(1500));
        assert!(!seq.open_gate(t0 + ms(1600)));
        assert_eq!(seq.entrance().unwrap().started_at(), started);
        assert_eq!(seq.gate().opened_at(), Some(t0 + ms(1100)));
    }

    #[test]
    fn test_glow_waits_for_gate() {
        let t0 = Instant::now();
        let mut seq = Sequencer::detached(&Catalog::builtin(), t0);
        assert_eq!(seq.glow_at(t0 + ms(900)), 0.0);

        seq.open_gate(t0);
        assert!((seq.glow_at(t0 + GLOW_PERIOD) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_carousel_tick_advances() {
        let t0 = Instant::now();
        let mut seq = Sequencer::detached(&Catalog::builtin(), t0);
        for _ in 0..5 {
            seq.on_signal(Signal::CarouselTick, t0);
        }
        assert_eq!(seq.news_index(), 2);
    }

    #[test]
    fn test_entrance_finished_signal() {
        let t0 = Instant::now();
        let mut seq = Sequencer::detached(&Catalog::builtin(), t0);
        seq.open_gate(t0);
        assert!(!seq.entrance().unwrap().is_finished(t0 + ms(100)));

        seq.on_signal(Signal::EntranceFinished, t0 + ms(100));
        assert!(seq.entrance().unwrap().is_finished(t0 + ms(100)));
    }

    #[test]
    fn test_signals_ignored_after_teardown() {
        let t0 = Instant::now();
        let mut seq = Sequencer::detached(&Catalog::builtin(), t0);
        seq.teardown();

        seq.on_signal(Signal::LoadComplete, t0);
        seq.on_signal(Signal::CarouselTick, t0);
        assert!(!seq.is_loaded());
        assert_eq!(seq.news_index(), 0);
        assert!(!seq.is_active());
    }

    #[test]
    fn test_pose_is_rest_before_gate() {
        let t0 = Instant::now();
        let seq = Sequencer::detached(&Catalog::builtin(), t0);
        assert_eq!(seq.pose(Target::Hero, t0), Pose::REST);
    }
}
