//! A keyed collection of arcs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::arc::StoryArc;

/// Name of the default entry arc.
pub const INTRO: &str = "intro";

/// Mapping from arc name to arc. Names are case-sensitive and unique.
///
/// Arcs are kept ordered by name so listings are stable across loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoryGraph {
    arcs: BTreeMap<String, StoryArc>,
}

impl StoryGraph {
    /// Creates a graph from already-named arcs.
    #[must_use]
    pub fn from_arcs(arcs: impl IntoIterator<Item = (String, StoryArc)>) -> Self {
        Self {
            arcs: arcs.into_iter().collect(),
        }
    }

    /// Looks up an arc by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&StoryArc> {
        self.arcs.get(name)
    }

    /// Whether an arc with this exact name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.arcs.contains_key(name)
    }

    /// Number of arcs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    /// Whether the graph has no arcs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Arc names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.arcs.keys().cloned().collect()
    }

    /// Iterates `(name, arc)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StoryArc)> {
        self.arcs.iter().map(|(name, arc)| (name.as_str(), arc))
    }

    /// Total number of choices across all arcs.
    #[must_use]
    pub fn option_count(&self) -> usize {
        self.arcs.values().map(|arc| arc.options.len()).sum()
    }

    /// Total number of paragraphs across all arcs.
    #[must_use]
    pub fn paragraph_count(&self) -> usize {
        self.arcs.values().map(|arc| arc.paragraphs.len()).sum()
    }

    /// Total number of words across all arcs.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.arcs.values().map(StoryArc::word_count).sum()
    }

    /// Recomputes every arc's image with `lookup(name)`.
    pub(crate) fn attach_images(&mut self, lookup: impl Fn(&str) -> String) {
        for (name, arc) in &mut self.arcs {
            arc.image = lookup(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::arc::ArcOption;

    fn arc(title: &str, paragraphs: &[&str], targets: &[&str]) -> StoryArc {
        StoryArc {
            title: title.to_owned(),
            paragraphs: paragraphs.iter().map(|&p| p.to_owned()).collect(),
            options: targets
                .iter()
                .map(|&target| ArcOption {
                    text: format!("Go to {target}"),
                    target: target.to_owned(),
                })
                .collect(),
            image: String::new(),
        }
    }

    #[test]
    fn test_totals_sum_over_arcs() {
        // Arrange
        let graph = StoryGraph::from_arcs([
            (
                "intro".to_owned(),
                arc("Intro", &["Para 1", "Para 2"], &["chapter1", "chapter2"]),
            ),
            (
                "chapter1".to_owned(),
                arc("Chapter 1", &["Chapter 1 content"], &["ending"]),
            ),
        ]);

        // Act / Assert
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.option_count(), 3);
        assert_eq!(graph.paragraph_count(), 3);
        assert_eq!(graph.word_count(), 7);
    }

    #[test]
    fn test_names_are_sorted() {
        let graph = StoryGraph::from_arcs([
            ("intro".to_owned(), arc("Intro", &[], &[])),
            ("denver".to_owned(), arc("Denver", &[], &[])),
            ("home".to_owned(), arc("Home", &[], &[])),
        ]);

        assert_eq!(graph.names(), vec!["denver", "home", "intro"]);
    }

    #[test]
    fn test_attach_images_overwrites_existing_values() {
        let mut stale = arc("Intro", &[], &[]);
        stale.image = "stale.png".to_owned();
        let mut graph = StoryGraph::from_arcs([("intro".to_owned(), stale)]);

        graph.attach_images(|name| format!("{name}.png"));

        assert_eq!(graph.get("intro").unwrap().image, "intro.png");
    }

    #[test]
    fn test_deserializes_from_plain_map() {
        let graph: StoryGraph =
            serde_json::from_str(r#"{"intro": {"title": "Intro", "story": [], "options": []}}"#)
                .unwrap();

        assert!(graph.contains("intro"));
        assert!(!graph.contains("Intro"));
    }
}
