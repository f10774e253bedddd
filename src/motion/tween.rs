//! Single-value tweens
//!
//! A tween interpolates one scalar between two values over a duration,
//! optionally repeating and ping-ponging (yoyo). Tweens are sampled by time;
//! they hold no timers and never call back.

use std::time::Duration;

use tokio::time::Instant;

use super::Ease;

/// Whether a tween stops after its first pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    /// Play once
    #[default]
    Once,
    /// Repeat until dropped
    Infinite,
}

/// Scalar tween sampled against a clock
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    start: Instant,
    duration: Duration,
    ease: Ease,
    repeat: Repeat,
    yoyo: bool,
}

impl Tween {
    /// Tween from `from` to `to` starting at `start`
    pub fn new(from: f32, to: f32, duration: Duration, start: Instant) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            ease: Ease::default(),
            repeat: Repeat::Once,
            yoyo: false,
        }
    }

    /// A tween that is already at rest on `value`
    pub fn still(value: f32, now: Instant) -> Self {
        Self::new(value, value, Duration::ZERO, now)
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// Run backwards on every other pass
    pub fn yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }

    pub fn start(&self) -> Instant {
        self.start
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Total play time, `None` for infinite tweens
    pub fn total_duration(&self) -> Option<Duration> {
        self.last_cycle()
            .map(|last| self.duration.saturating_mul(last.saturating_add(1)))
    }

    /// Whether a finite tween has played out by `now`
    pub fn is_finished(&self, now: Instant) -> bool {
        match self.total_duration() {
            Some(total) => now.saturating_duration_since(self.start) >= total,
            None => false,
        }
    }

    /// Sampled value at `now`. Before the start the tween holds `from`.
    pub fn value_at(&self, now: Instant) -> f32 {
        self.value_after(now.saturating_duration_since(self.start))
    }

    /// Sampled value `elapsed` after the start
    pub fn value_after(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return self.to;
        }

        let d = self.duration.as_secs_f64();
        let e = elapsed.as_secs_f64();
        let passes = (e / d).floor();

        let (cycle, progress) = match self.last_cycle() {
            Some(last) if passes > last as f64 => (last as u64, 1.0),
            _ => (passes as u64, ((e - passes * d) / d) as f32),
        };

        let progress = if self.yoyo && cycle % 2 == 1 {
            1.0 - progress
        } else {
            progress
        };

        self.from + (self.to - self.from) * self.ease.apply(progress)
    }

    /// Index of the final pass, `None` when the tween never ends
    fn last_cycle(&self) -> Option<u32> {
        match self.repeat {
            Repeat::Once => Some(0),
            Repeat::Infinite => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_linear_tween_progress() {
        let t0 = Instant::now();
        let tween = Tween::new(0.0, 10.0, ms(1000), t0).ease(Ease::Linear);

        assert!(approx(tween.value_at(t0), 0.0));
        assert!(approx(tween.value_at(t0 + ms(250)), 2.5));
        assert!(approx(tween.value_at(t0 + ms(1000)), 10.0));
        // Holds the end value
        assert!(approx(tween.value_at(t0 + ms(5000)), 10.0));
        assert!(tween.is_finished(t0 + ms(1000)));
        assert!(!tween.is_finished(t0 + ms(999)));
    }

    #[test]
    fn test_before_start_holds_from() {
        let t0 = Instant::now();
        let tween = Tween::new(3.0, 9.0, ms(500), t0 + ms(200));
        assert!(approx(tween.value_at(t0), 3.0));
    }

    #[test]
    fn test_zero_duration_jumps_to_end() {
        let t0 = Instant::now();
        let tween = Tween::new(1.0, 4.0, Duration::ZERO, t0);
        assert!(approx(tween.value_at(t0), 4.0));
        assert!(tween.is_finished(t0));
    }

    #[test]
    fn test_infinite_yoyo_ping_pongs() {
        let t0 = Instant::now();
        let glow = Tween::new(0.0, 1.0, ms(1800), t0)
            .repeat(Repeat::Infinite)
            .yoyo(true);

        assert!(approx(glow.value_at(t0), 0.0));
        assert!(approx(glow.value_at(t0 + ms(1800)), 1.0));
        assert!(approx(glow.value_at(t0 + ms(3600)), 0.0));
        assert!(approx(glow.value_at(t0 + ms(5400)), 1.0));
        assert!(glow.total_duration().is_none());
        assert!(!glow.is_finished(t0 + ms(1_000_000)));
    }

    #[test]
    fn test_yoyo_reverse_pass_is_mirrored() {
        let t0 = Instant::now();
        let tween = Tween::new(0.0, 1.0, ms(1000), t0)
            .repeat(Repeat::Infinite)
            .yoyo(true);

        let forward = tween.value_at(t0 + ms(300));
        let backward = tween.value_at(t0 + ms(1700));
        assert!(approx(forward, backward));
    }

    #[test]
    fn test_single_pass_ignores_yoyo() {
        let t0 = Instant::now();
        let tween = Tween::new(0.0, 1.0, ms(1000), t0).yoyo(true);
        assert_eq!(tween.total_duration(), Some(ms(1000)));
        assert!(approx(tween.value_at(t0 + ms(9000)), 1.0));
    }

    #[test]
    fn test_still_tween() {
        let t0 = Instant::now();
        let still = Tween::still(2.5, t0);
        assert!(approx(still.value_at(t0 + ms(10)), 2.5));
        assert_eq!(still.target(), 2.5);
    }
}
