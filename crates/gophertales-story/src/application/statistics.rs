//! Aggregate statistics over the loaded story.

use std::collections::BTreeMap;

use gophertales_core::gopher::Gopher;
use serde::Serialize;

use super::engine::StoryEngine;
use crate::domain::graph::StoryGraph;

/// Average reading speed used for the reading-time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// Whole-story totals.
///
/// In gopher mode the totals span every storyline and `gopher_count` is set;
/// in classic mode `arcs` lists the classic arc names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StoryStats {
    /// Whether any story content is loaded.
    pub loaded: bool,
    /// Number of arcs.
    pub total_arcs: usize,
    /// Number of choices.
    pub total_options: usize,
    /// Number of paragraphs.
    pub total_story_paragraphs: usize,
    /// Number of gopher storylines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gopher_count: Option<usize>,
    /// Classic arc names, sorted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arcs: Option<Vec<String>>,
}

/// Totals for one gopher's storyline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GopherStats {
    /// Number of arcs.
    pub arc_count: usize,
    /// Number of whitespace-separated words across all paragraphs.
    pub total_words: usize,
    /// Number of choices.
    pub total_options: usize,
    /// Estimated reading time in minutes, never less than one.
    pub read_time: usize,
}

impl GopherStats {
    fn of(graph: &StoryGraph) -> Self {
        let total_words = graph.word_count();
        Self {
            arc_count: graph.len(),
            total_words,
            total_options: graph.option_count(),
            read_time: reading_time(total_words),
        }
    }
}

/// Minutes needed to read `words` words, rounded down, with a minimum of one.
#[must_use]
pub fn reading_time(words: usize) -> usize {
    (words / WORDS_PER_MINUTE).max(1)
}

impl StoryEngine {
    /// Totals for the loaded story. Gopher storylines take precedence over
    /// the classic view. An empty engine reports `loaded = false`.
    #[must_use]
    pub fn stats(&self) -> StoryStats {
        if !self.gophers.is_empty() {
            let graphs = self.gophers.values();
            return StoryStats {
                loaded: true,
                total_arcs: graphs.clone().map(StoryGraph::len).sum(),
                total_options: graphs.clone().map(StoryGraph::option_count).sum(),
                total_story_paragraphs: graphs.map(StoryGraph::paragraph_count).sum(),
                gopher_count: Some(self.gophers.len()),
                arcs: None,
            };
        }

        if self.classic.is_empty() {
            return StoryStats::default();
        }

        StoryStats {
            loaded: true,
            total_arcs: self.classic.len(),
            total_options: self.classic.option_count(),
            total_story_paragraphs: self.classic.paragraph_count(),
            gopher_count: None,
            arcs: Some(self.classic.names()),
        }
    }

    /// Per-gopher totals, keyed in canonical gopher order.
    #[must_use]
    pub fn gopher_stats(&self) -> BTreeMap<Gopher, GopherStats> {
        self.gophers
            .iter()
            .map(|(gopher, graph)| (*gopher, GopherStats::of(graph)))
            .collect()
    }
}
