//! Scheduled callbacks owned by a view.
//!
//! Every timer a view starts is registered in its `TimerSet`. Dropping the
//! set (or calling [`TimerSet::cancel_all`]) aborts all of them, so nothing
//! fires against a view that has been torn down.

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;

/// The timers registered by one view.
///
/// Must be used from within a tokio runtime: registering a timer spawns a
/// task on the current runtime.
pub struct TimerSet {
    owner: &'static str,
    handles: Vec<JoinHandle<()>>,
}

impl TimerSet {
    /// Create an empty set. `owner` names the view in logs.
    pub fn new(owner: &'static str) -> Self {
        Self {
            owner,
            handles: Vec::new(),
        }
    }

    /// Register a long-running timer task, such as a tick loop.
    pub fn spawn<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.prune_finished();
        self.handles.push(tokio::spawn(task));
    }

    /// Run `callback` once after `delay`.
    pub fn after<F>(&mut self, delay: Duration, callback: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        });
    }

    /// Number of timers that have not fired or finished yet.
    pub fn active(&self) -> usize {
        self.handles.iter().filter(|h| !h.is_finished()).count()
    }

    /// Check if no timers are pending.
    pub fn is_idle(&self) -> bool {
        self.active() == 0
    }

    /// Abort every registered timer.
    pub fn cancel_all(&mut self) {
        let pending = self.active();
        for handle in self.handles.drain(..) {
            handle.abort();
        }
        if pending > 0 {
            tracing::debug!(owner = self.owner, pending, "Cancelled view timers");
        }
    }

    fn prune_finished(&mut self) {
        self.handles.retain(|h| !h.is_finished());
    }
}

impl Drop for TimerSet {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

impl std::fmt::Debug for TimerSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerSet")
            .field("owner", &self.owner)
            .field("active", &self.active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_after_fires_once() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut timers = TimerSet::new("test");

        let counter = fired.clone();
        timers.after(Duration::from_millis(4000), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(3999)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(timers.is_idle());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all_prevents_callbacks() {
        let fired = Arc::new(AtomicUsize::new(0));
        let mut timers = TimerSet::new("test");

        for _ in 0..3 {
            let counter = fired.clone();
            timers.after(Duration::from_millis(100), move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        }
        assert_eq!(timers.active(), 3);

        timers.cancel_all();
        tokio::time::sleep(Duration::from_millis(500)).await;

        assert_eq!(fired.load(Ordering::SeqCst), 0);
        assert!(timers.is_idle());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_tick_loop() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let mut timers = TimerSet::new("test");

        let counter = ticks.clone();
        timers.spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_millis(10)).await;
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        tokio::time::sleep(Duration::from_millis(55)).await;
        let before = ticks.load(Ordering::SeqCst);
        assert!(before >= 5);

        drop(timers);
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), before);
    }

    #[tokio::test]
    async fn test_debug_format() {
        let timers = TimerSet::new("home");
        let debug_str = format!("{:?}", timers);
        assert!(debug_str.contains("TimerSet"));
        assert!(debug_str.contains("home"));
    }
}
