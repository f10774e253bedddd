//! Scoped timers
//!
//! Timers run as tokio tasks that post a message to the owning view's channel.
//! Each one is held by a [`TimerHandle`] that aborts the task when dropped, so
//! a view that owns a [`TimerScope`] cannot receive a message after it is gone.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Owning handle for a spawned timer task. Aborts the task on drop.
#[derive(Debug)]
pub struct TimerHandle(JoinHandle<()>);

impl TimerHandle {
    pub fn is_finished(&self) -> bool {
        self.0.is_finished()
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Set of timers registered by one view
///
/// Must be used inside a tokio runtime.
#[derive(Debug)]
pub struct TimerScope<M> {
    tx: UnboundedSender<M>,
    handles: Vec<TimerHandle>,
}

impl<M: Clone + Send + 'static> TimerScope<M> {
    pub fn new(tx: UnboundedSender<M>) -> Self {
        Self {
            tx,
            handles: Vec::new(),
        }
    }

    /// Post `msg` once after `delay`
    pub fn once(&mut self, delay: Duration, msg: M) {
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            time::sleep(delay).await;
            let _ = tx.send(msg);
        });
        self.register(handle);
    }

    /// Post `msg` every `period`, first after one full period.
    ///
    /// Ticks stay on the original schedule; nothing the receiver does shifts it.
    pub fn every(&mut self, period: Duration, msg: M) {
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                if tx.send(msg.clone()).is_err() {
                    break;
                }
            }
        });
        self.register(handle);
    }

    /// Stop every timer in the scope
    pub fn cancel_all(&mut self) {
        self.handles.clear();
    }

    /// Timers that may still fire
    pub fn len(&self) -> usize {
        self.handles.iter().filter(|h| !h.is_finished()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn register(&mut self, handle: JoinHandle<()>) {
        // One-shot timers that already fired are pruned on every registration
        self.handles.retain(|h| !h.is_finished());
        self.handles.push(TimerHandle(handle));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn test_once_fires_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scope = TimerScope::new(tx);
        let t0 = Instant::now();

        scope.once(Duration::from_millis(250), "ping");
        assert_eq!(rx.recv().await, Some("ping"));
        assert!(Instant::now() - t0 >= Duration::from_millis(250));
    }

    #[tokio::test(start_paused = true)]
    async fn test_every_keeps_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scope = TimerScope::new(tx);
        let t0 = Instant::now();

        scope.every(Duration::from_millis(100), 7u8);
        for n in 1..=3u64 {
            assert_eq!(rx.recv().await, Some(7));
            let elapsed = Instant::now() - t0;
            assert!(elapsed >= Duration::from_millis(100 * n));
            assert!(elapsed < Duration::from_millis(100 * n + 50));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_scope_closes_channel() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scope = TimerScope::new(tx);
        scope.once(Duration::from_secs(5), 1u8);
        scope.every(Duration::from_secs(1), 2u8);
        assert_eq!(scope.len(), 2);

        drop(scope);
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all_stops_timers() {
        let (tx, mut rx) = mpsc::unbounded_channel::<u8>();
        let mut scope = TimerScope::new(tx);
        scope.every(Duration::from_millis(10), 1);
        scope.cancel_all();
        assert!(scope.is_empty());

        time::sleep(Duration::from_millis(100)).await;
        assert!(rx.try_recv().is_err());
    }
}
