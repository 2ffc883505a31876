//! The loaded story and its read accessors.

use std::collections::BTreeMap;

use gophertales_core::gopher::Gopher;
use serde::Serialize;

use crate::domain::graph::{INTRO, StoryGraph};

/// Which layout the loaded story came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryMode {
    /// Nothing has been loaded.
    Empty,
    /// A single flat graph of arcs.
    Classic,
    /// One graph per gopher, plus a derived classic view of the first intro.
    Gophers,
}

/// Immutable snapshot of story content.
///
/// Built once by [`StoryEngine::from_bytes`] and never mutated afterwards.
/// Share it by reference, or through a [`StoryStore`](crate::StoryStore)
/// when it needs to be reloaded.
#[derive(Debug, Clone, Default)]
pub struct StoryEngine {
    pub(crate) classic: StoryGraph,
    pub(crate) gophers: BTreeMap<Gopher, StoryGraph>,
    pub(crate) version_hash: String,
}

impl StoryEngine {
    /// An engine with no content. Every resolution fails and every report is empty.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Reports the layout the content was loaded from.
    #[must_use]
    pub fn mode(&self) -> StoryMode {
        if !self.gophers.is_empty() {
            StoryMode::Gophers
        } else if !self.classic.is_empty() {
            StoryMode::Classic
        } else {
            StoryMode::Empty
        }
    }

    /// The classic graph. In gopher mode this holds only the derived intro.
    #[must_use]
    pub fn classic_graph(&self) -> &StoryGraph {
        &self.classic
    }

    /// The storyline of one gopher, if it was present in the source.
    #[must_use]
    pub fn gopher_graph(&self, gopher: Gopher) -> Option<&StoryGraph> {
        self.gophers.get(&gopher)
    }

    /// Gophers with a storyline, in canonical order.
    #[must_use]
    pub fn list_partitions(&self) -> Vec<Gopher> {
        self.gophers.keys().copied().collect()
    }

    /// Arc names of the classic graph, sorted.
    #[must_use]
    pub fn list_arc_names(&self) -> Vec<String> {
        self.classic.names()
    }

    /// Whether `name` is a valid classic arc. The empty name stands for the intro.
    #[must_use]
    pub fn has_arc(&self, name: &str) -> bool {
        name.is_empty() || self.classic.contains(name)
    }

    /// Lowercase hex SHA-256 of the source the engine was built from.
    #[must_use]
    pub fn version_hash(&self) -> &str {
        &self.version_hash
    }

    pub(crate) fn classic_intro_source(&self) -> Option<Gopher> {
        self.gophers
            .iter()
            .find(|(_, graph)| graph.contains(INTRO))
            .map(|(gopher, _)| *gopher)
    }
}
