//! Dangling-link detection over the choice graph.

use std::collections::BTreeMap;
use std::fmt;

use gophertales_core::gopher::Gopher;
use serde::{Serialize, Serializer};

use super::engine::{StoryEngine, StoryMode};
use crate::domain::graph::StoryGraph;

/// The arc an issue was found on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArcLocation {
    /// Storyline of the arc; `None` for the classic story.
    pub gopher: Option<Gopher>,
    /// Name of the arc.
    pub arc: String,
}

impl ArcLocation {
    /// Location of `arc` in `gopher`'s storyline, or the classic story.
    #[must_use]
    pub fn new(gopher: Option<Gopher>, arc: impl Into<String>) -> Self {
        Self {
            gopher,
            arc: arc.into(),
        }
    }
}

impl fmt::Display for ArcLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.gopher {
            Some(gopher) => write!(f, "{gopher}:{}", self.arc),
            None => f.write_str(&self.arc),
        }
    }
}

impl Serialize for ArcLocation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A problem found on one arc.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityIssue {
    /// A choice targets an arc that does not exist in the same graph.
    BrokenLink {
        /// The missing target arc name.
        target: String,
    },
}

impl fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BrokenLink { target } => write!(f, "Broken link to arc '{target}'"),
        }
    }
}

impl Serialize for IntegrityIssue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Issues keyed by the arc they were found on. Empty means no issues.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IntegrityReport {
    issues: BTreeMap<ArcLocation, Vec<IntegrityIssue>>,
}

impl IntegrityReport {
    /// Whether no issues were found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Total number of issues across all arcs.
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.issues.values().map(Vec::len).sum()
    }

    /// Issues recorded against one arc, in choice order.
    #[must_use]
    pub fn issues_at(&self, location: &ArcLocation) -> &[IntegrityIssue] {
        self.issues
            .get(location)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Iterates locations with their issues.
    pub fn iter(&self) -> impl Iterator<Item = (&ArcLocation, &[IntegrityIssue])> {
        self.issues
            .iter()
            .map(|(location, issues)| (location, issues.as_slice()))
    }

    fn check_graph(&mut self, gopher: Option<Gopher>, graph: &StoryGraph) {
        for (name, arc) in graph.iter() {
            for target in arc.targets().filter(|target| !graph.contains(target)) {
                self.issues
                    .entry(ArcLocation::new(gopher, name))
                    .or_default()
                    .push(IntegrityIssue::BrokenLink {
                        target: target.to_owned(),
                    });
            }
        }
    }
}

impl StoryEngine {
    /// Checks every choice for a target inside its own graph.
    ///
    /// Each gopher storyline is checked on its own; links never cross
    /// storylines. The classic story is checked when it was loaded directly.
    /// The intro derived in gopher mode is not, since its targets live in
    /// the gopher storyline it came from.
    #[must_use]
    pub fn validate(&self) -> IntegrityReport {
        let mut report = IntegrityReport::default();
        if self.mode() == StoryMode::Classic {
            report.check_graph(None, &self.classic);
        }
        for (gopher, graph) in &self.gophers {
            report.check_graph(Some(*gopher), graph);
        }
        report
    }
}
