//! Landing page view.

use super::lock;
use crate::error::SiteResult;
use crate::hero::{Typewriter, TypewriterSnapshot, TypewriterTiming};
use crate::site::HERO_HEADLINES;
use crate::timers::TimerSet;
use std::sync::{Arc, Mutex};

/// Mounted landing page: drives the hero typewriter while it is alive.
#[derive(Debug)]
pub struct HomeView {
    typewriter: Arc<Mutex<Typewriter>>,
    timers: TimerSet,
}

impl HomeView {
    /// Mount the landing page with the standard headline playlist.
    pub fn mount(timing: TypewriterTiming) -> SiteResult<Self> {
        Self::with_playlist(HERO_HEADLINES, timing)
    }

    /// Mount with a custom playlist and start the tick loop.
    ///
    /// Must be called from within a tokio runtime.
    pub fn with_playlist<I, S>(playlist: I, timing: TypewriterTiming) -> SiteResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let typewriter = Arc::new(Mutex::new(Typewriter::new(playlist, timing)?));
        let mut timers = TimerSet::new("home");

        let cycler = Arc::clone(&typewriter);
        timers.spawn(async move {
            let mut delay = lock(&cycler).next_delay();
            loop {
                tokio::time::sleep(delay).await;
                delay = lock(&cycler).tick();
            }
        });

        Ok(Self { typewriter, timers })
    }

    /// Text the hero shows right now.
    pub fn headline(&self) -> String {
        lock(&self.typewriter).current_text().to_string()
    }

    pub fn snapshot(&self) -> TypewriterSnapshot {
        lock(&self.typewriter).snapshot()
    }

    /// Number of timers still running for this view.
    pub fn active_timers(&self) -> usize {
        self.timers.active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_typewriter_runs_while_mounted() {
        let view = HomeView::with_playlist(["Hi"], TypewriterTiming::default()).unwrap();
        assert_eq!(view.headline(), "");
        assert_eq!(view.active_timers(), 1);

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(view.headline(), "H");

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(view.headline(), "Hi");
        assert!(!view.snapshot().deleting);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_the_loop() {
        let view = HomeView::mount(TypewriterTiming::default()).unwrap();
        let cycler = Arc::clone(&view.typewriter);
        drop(view);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(lock(&cycler).current_text(), "");
    }
}
