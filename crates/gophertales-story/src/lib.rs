//! GopherTales — Story Graph Engine.
//!
//! Responsible for ingesting arc data in either the classic or the
//! per-gopher layout, resolving arcs with fallback, aggregating statistics
//! and checking the choice graph for dangling links.

pub mod application;
pub mod domain;

pub use application::engine::{StoryEngine, StoryMode};
pub use application::integrity::{ArcLocation, IntegrityIssue, IntegrityReport};
pub use application::navigation::{VisitRequest, visit};
pub use application::resolution::ResolvedArc;
pub use application::source::{BytesSource, FileSource, StorySource};
pub use application::statistics::{GopherStats, StoryStats};
pub use application::store::{ReloadOutcome, StorySnapshot, StoryStore};
pub use domain::arc::{ArcOption, StoryArc};
pub use domain::graph::{INTRO, StoryGraph};
