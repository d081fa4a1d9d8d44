//! Typewriter text cycler for the landing page hero.
//!
//! The cycler types the active headline one character per tick, pauses on
//! the full text, deletes it one character per tick, then moves on to the
//! next headline. It never terminates; the hosting view stops it by
//! cancelling the task that drives [`Typewriter::tick`].

use crate::config::Config;
use crate::error::{SiteError, SiteResult};
use serde::Serialize;
use std::time::Duration;

/// Tick intervals for the cycler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    /// Delay between typed characters
    pub type_interval: Duration,
    /// Delay between deleted characters
    pub delete_interval: Duration,
    /// Pause on a fully typed headline before deleting starts
    pub hold: Duration,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_interval: Duration::from_millis(100),
            delete_interval: Duration::from_millis(50),
            hold: Duration::from_millis(2000),
        }
    }
}

impl From<&Config> for TypewriterTiming {
    fn from(config: &Config) -> Self {
        Self {
            type_interval: Duration::from_millis(config.typewriter_type_ms),
            delete_interval: Duration::from_millis(config.typewriter_delete_ms),
            hold: Duration::from_millis(config.typewriter_hold_ms),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Deleting,
}

/// Point-in-time view of the cycler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypewriterSnapshot {
    pub text: String,
    pub index: usize,
    pub deleting: bool,
}

/// Typewriter state machine.
#[derive(Debug, Clone)]
pub struct Typewriter {
    playlist: Vec<String>,
    index: usize,
    text: String,
    /// Characters (not bytes) currently shown
    shown: usize,
    phase: Phase,
    timing: TypewriterTiming,
}

impl Typewriter {
    /// Create a cycler over `playlist`.
    ///
    /// # Errors
    ///
    /// Returns `SiteError::EmptyPlaylist` if the playlist has no entries.
    pub fn new<I, S>(playlist: I, timing: TypewriterTiming) -> SiteResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let playlist: Vec<String> = playlist.into_iter().map(Into::into).collect();
        if playlist.is_empty() {
            return Err(SiteError::EmptyPlaylist);
        }

        Ok(Self {
            playlist,
            index: 0,
            text: String::new(),
            shown: 0,
            phase: Phase::Typing,
            timing,
        })
    }

    /// Text currently shown. Always a prefix of [`Typewriter::target`].
    pub fn current_text(&self) -> &str {
        &self.text
    }

    /// Index of the active headline.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The active headline.
    pub fn target(&self) -> &str {
        &self.playlist[self.index]
    }

    /// True while characters are being removed.
    pub fn is_deleting(&self) -> bool {
        self.phase == Phase::Deleting
    }

    pub fn snapshot(&self) -> TypewriterSnapshot {
        TypewriterSnapshot {
            text: self.text.clone(),
            index: self.index,
            deleting: self.is_deleting(),
        }
    }

    /// How long to wait before the next tick.
    pub fn next_delay(&self) -> Duration {
        match self.phase {
            Phase::Typing => self.timing.type_interval,
            Phase::Holding => self.timing.hold,
            Phase::Deleting => self.timing.delete_interval,
        }
    }

    /// Advance one step and return the delay until the next one.
    pub fn tick(&mut self) -> Duration {
        match self.phase {
            Phase::Typing => {
                if let Some(c) = self.playlist[self.index].chars().nth(self.shown) {
                    self.text.push(c);
                    self.shown += 1;
                }
                if self.shown >= self.playlist[self.index].chars().count() {
                    self.phase = Phase::Holding;
                }
            }
            Phase::Holding => {
                self.phase = Phase::Deleting;
            }
            Phase::Deleting => {
                if self.text.pop().is_some() {
                    self.shown -= 1;
                }
                if self.shown == 0 {
                    self.phase = Phase::Typing;
                    self.index = (self.index + 1) % self.playlist.len();
                }
            }
        }

        self.next_delay()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycler(playlist: &[&str]) -> Typewriter {
        Typewriter::new(playlist.iter().copied(), TypewriterTiming::default()).unwrap()
    }

    #[test]
    fn test_empty_playlist_rejected() {
        let result = Typewriter::new(Vec::<String>::new(), TypewriterTiming::default());
        assert_eq!(result.err(), Some(SiteError::EmptyPlaylist));
    }

    #[test]
    fn test_types_one_character_per_tick() {
        let mut tw = cycler(&["Hey", "Yo"]);
        assert_eq!(tw.next_delay(), Duration::from_millis(100));

        assert_eq!(tw.tick(), Duration::from_millis(100));
        assert_eq!(tw.current_text(), "H");
        tw.tick();
        assert_eq!(tw.current_text(), "He");

        // Completing the headline schedules the hold
        assert_eq!(tw.tick(), Duration::from_millis(2000));
        assert_eq!(tw.current_text(), "Hey");
        assert!(!tw.is_deleting());
    }

    #[test]
    fn test_deletes_then_advances() {
        let mut tw = cycler(&["Hey", "Yo"]);
        for _ in 0..3 {
            tw.tick();
        }

        // Hold ends: switch to deleting
        assert_eq!(tw.tick(), Duration::from_millis(50));
        assert!(tw.is_deleting());
        assert_eq!(tw.current_text(), "Hey");

        tw.tick();
        assert_eq!(tw.current_text(), "He");
        tw.tick();
        tw.tick();
        assert_eq!(tw.current_text(), "");
        assert!(!tw.is_deleting());
        assert_eq!(tw.index(), 1);
        assert_eq!(tw.target(), "Yo");
    }

    #[test]
    fn test_wraps_around_playlist() {
        let mut tw = cycler(&["ab"]);
        // type 2, hold 1, delete 2
        for _ in 0..5 {
            tw.tick();
        }
        assert_eq!(tw.index(), 0);
        assert_eq!(tw.current_text(), "");
        tw.tick();
        assert_eq!(tw.current_text(), "a");
    }

    #[test]
    fn test_text_is_always_a_prefix_of_target() {
        let mut tw = cycler(&[
            "Welcome to LotsEye",
            "Grow Your Business with Powerful Digital Marketing",
            "Café ☕ déjà vu",
        ]);
        for _ in 0..1_000 {
            tw.tick();
            assert!(
                tw.target().starts_with(tw.current_text()),
                "{:?} is not a prefix of {:?}",
                tw.current_text(),
                tw.target()
            );
        }
    }

    #[test]
    fn test_empty_headline_is_skipped_over() {
        let mut tw = cycler(&["", "x"]);
        tw.tick(); // nothing to type, hold
        tw.tick(); // start deleting
        tw.tick(); // nothing to delete, advance
        assert_eq!(tw.index(), 1);
        tw.tick();
        assert_eq!(tw.current_text(), "x");
    }

    #[test]
    fn test_timing_from_config() {
        let config = Config {
            typewriter_type_ms: 10,
            typewriter_delete_ms: 5,
            typewriter_hold_ms: 200,
            ..Config::default()
        };
        let timing = TypewriterTiming::from(&config);
        assert_eq!(timing.type_interval, Duration::from_millis(10));
        assert_eq!(timing.delete_interval, Duration::from_millis(5));
        assert_eq!(timing.hold, Duration::from_millis(200));
    }
}
