//! Motion primitives
//!
//! - `easing` - easing curves
//! - `tween` - single-value tweens with repeat and yoyo
//! - `timeline` - staged "from" transitions for the entrance sequence
//! - `parallax` - pointer-driven backdrop offset
//! - `timer` - scoped timers that die with their owner

pub mod easing;
pub mod parallax;
pub mod timeline;
pub mod timer;
pub mod tween;

pub use easing::Ease;
pub use parallax::Parallax;
pub use timeline::{FromVars, Pose, Position, Step, Target, Timeline};
pub use timer::{TimerHandle, TimerScope};
pub use tween::{Repeat, Tween};
