//! Timer ownership for mounted views.
//!
//! This module provides the registry views use for their typewriter ticks
//! and toast expiry callbacks.

pub mod timer_set;

pub use timer_set::TimerSet;
