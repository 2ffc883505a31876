//! Shared test doubles and story fixtures for the GopherTales engine.

mod clock;
pub mod fixtures;
mod progress;

pub use clock::FixedClock;
pub use progress::{FailingProgressStore, RecordingProgressStore, UnknownUserProgressStore};
