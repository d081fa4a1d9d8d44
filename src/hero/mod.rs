//! Landing page hero effects.

pub mod typewriter;

pub use typewriter::{Typewriter, TypewriterSnapshot, TypewriterTiming};
