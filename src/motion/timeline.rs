//! Timeline of staged transitions
//!
//! A timeline is an ordered list of steps `{target, from-pose, start,
//! duration, ease}`. Each step is a "from" transition: the target is shown at
//! its from-pose until the step starts, then eases back to rest. Start times
//! are resolved when a step is added, relative to the timeline's current end,
//! so overlapping steps are plain negative offsets and not a dependency graph.
//!
//! Timelines are pure schedules. Playing one means sampling it with the
//! elapsed time since it started; dropping it cancels everything.

use std::time::Duration;

use serde::Serialize;

use super::Ease;

/// Terminal cells per CSS-ish pixel used by the entrance offsets
pub const PX_PER_CELL: f32 = 10.0;

// =============================================================================
// Targets and Poses
// =============================================================================

/// Page section animated by the entrance timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "index", rename_all = "lowercase")]
pub enum Target {
    Nav,
    Hero,
    Card(usize),
    News,
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Nav => write!(f, "nav"),
            Target::Hero => write!(f, "hero"),
            Target::Card(i) => write!(f, "card[{}]", i),
            Target::News => write!(f, "news"),
        }
    }
}

/// Visual offset and opacity of a section, in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pose {
    pub dx: f32,
    pub dy: f32,
    pub alpha: f32,
}

impl Pose {
    /// Natural position, fully visible
    pub const REST: Pose = Pose {
        dx: 0.0,
        dy: 0.0,
        alpha: 1.0,
    };

    pub fn new(dx: f32, dy: f32, alpha: f32) -> Self {
        Self { dx, dy, alpha }
    }

    /// Hidden pose offset by pixel amounts
    pub fn hidden_px(dx_px: f32, dy_px: f32) -> Self {
        Self::new(dx_px / PX_PER_CELL, dy_px / PX_PER_CELL, 0.0)
    }

    /// Linear blend, `t = 0` is `self` and `t = 1` is `other`
    pub fn lerp(self, other: Pose, t: f32) -> Pose {
        Pose {
            dx: self.dx + (other.dx - self.dx) * t,
            dy: self.dy + (other.dy - self.dy) * t,
            alpha: self.alpha + (other.alpha - self.alpha) * t,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.alpha > 0.05
    }
}

// =============================================================================
// Steps
// =============================================================================

/// Where a new step starts relative to the timeline built so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    /// At the current end of the timeline
    #[default]
    End,
    /// This much before the current end (clamped at zero)
    Overlap(Duration),
}

/// Parameters for a "from" transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FromVars {
    pub pose: Pose,
    pub duration: Duration,
    pub ease: Ease,
    pub stagger: Duration,
    pub position: Position,
}

impl FromVars {
    pub fn new(pose: Pose, duration: Duration) -> Self {
        Self {
            pose,
            duration,
            ease: Ease::default(),
            stagger: Duration::ZERO,
            position: Position::End,
        }
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Delay between consecutive targets of the same step
    pub fn stagger(mut self, stagger: Duration) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }
}

/// One scheduled transition
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Step {
    pub target: Target,
    pub from: Pose,
    #[serde(rename = "start_ms", serialize_with = "as_millis")]
    pub start: Duration,
    #[serde(rename = "duration_ms", serialize_with = "as_millis")]
    pub duration: Duration,
    #[serde(skip)]
    pub ease: Ease,
}

fn as_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(d.as_millis() as u64)
}

impl Step {
    pub fn end(&self) -> Duration {
        self.start + self.duration
    }

    /// Pose of this step's target `elapsed` into the timeline
    pub fn pose_at(&self, elapsed: Duration) -> Pose {
        if elapsed <= self.start {
            return self.from;
        }
        if self.duration.is_zero() || elapsed >= self.end() {
            return Pose::REST;
        }

        let t = (elapsed - self.start).as_secs_f32() / self.duration.as_secs_f32();
        self.from.lerp(Pose::REST, self.ease.apply(t))
    }
}

// =============================================================================
// Timeline
// =============================================================================

/// Ordered schedule of transitions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    steps: Vec<Step>,
    end: Duration,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entrance sequence for the showcase page.
    ///
    /// Nav drops in, the hero rises while the nav settles, the cards rise one
    /// after another while the hero settles, and the news panel slides in
    /// from the right while the last cards settle.
    pub fn entrance(card_count: usize) -> Self {
        Timeline::new()
            .from(
                [Target::Nav],
                FromVars::new(Pose::hidden_px(0.0, -30.0), Duration::from_millis(600)),
            )
            .from(
                [Target::Hero],
                FromVars::new(Pose::hidden_px(0.0, 40.0), Duration::from_millis(800))
                    .at(Position::Overlap(Duration::from_millis(300))),
            )
            .from(
                (0..card_count).map(Target::Card),
                FromVars::new(Pose::hidden_px(0.0, 20.0), Duration::from_millis(600))
                    .stagger(Duration::from_millis(120))
                    .at(Position::Overlap(Duration::from_millis(400))),
            )
            .from(
                [Target::News],
                FromVars::new(Pose::hidden_px(20.0, 0.0), Duration::from_millis(800))
                    .at(Position::Overlap(Duration::from_millis(500))),
            )
    }

    /// Append a "from" transition for each target, staggered in order
    pub fn from(mut self, targets: impl IntoIterator<Item = Target>, vars: FromVars) -> Self {
        let base = match vars.position {
            Position::End => self.end,
            Position::Overlap(delta) => self.end.saturating_sub(delta),
        };

        let mut offset = Duration::ZERO;
        for target in targets {
            let step = Step {
                target,
                from: vars.pose,
                start: base + offset,
                duration: vars.duration,
                ease: vars.ease,
            };
            self.end = self.end.max(step.end());
            self.steps.push(step);
            offset += vars.stagger;
        }
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Time at which the last step settles
    pub fn duration(&self) -> Duration {
        self.end
    }

    pub fn is_complete(&self, elapsed: Duration) -> bool {
        elapsed >= self.end
    }

    pub fn step(&self, target: Target) -> Option<&Step> {
        self.steps.iter().find(|s| s.target == target)
    }

    /// Pose of `target` at `elapsed`; targets not on the timeline are at rest
    pub fn pose_at(&self, target: Target, elapsed: Duration) -> Pose {
        self.step(target)
            .map(|s| s.pose_at(elapsed))
            .unwrap_or(Pose::REST)
    }
}
