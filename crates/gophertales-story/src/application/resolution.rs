//! Arc lookup with fallback.
//!
//! Classic lookups fall back to the intro on any miss. Gopher lookups never
//! fall back: an unknown arc inside a known storyline is a hard miss.

use gophertales_core::error::StoryError;
use gophertales_core::gopher::Gopher;
use serde::Serialize;
use tracing::debug;

use super::engine::StoryEngine;
use crate::domain::arc::StoryArc;
use crate::domain::graph::INTRO;
use crate::domain::image::{classic_image, gopher_image};

/// An arc returned by resolution, with the name it was found under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedArc {
    /// The arc content, image included.
    pub arc: StoryArc,
    /// Name of the arc actually served.
    pub arc_name: String,
    /// Storyline the arc belongs to; `None` for the classic story.
    pub gopher: Option<Gopher>,
    /// Whether the requested arc was missing and the intro was served instead.
    pub fell_back: bool,
}

fn requested_or_intro(arc_name: &str) -> &str {
    if arc_name.is_empty() { INTRO } else { arc_name }
}

impl StoryEngine {
    /// Resolves `arc_name` in the classic story, or in `gopher`'s storyline.
    ///
    /// An empty `arc_name` means the intro.
    ///
    /// # Errors
    ///
    /// Returns `StoryError::NotLoaded` if the searched graph is empty,
    /// `StoryError::GopherNotFound` if `gopher` has no storyline, and
    /// `StoryError::ArcNotFound` if no arc could be served.
    pub fn resolve(
        &self,
        arc_name: &str,
        gopher: Option<Gopher>,
    ) -> Result<ResolvedArc, StoryError> {
        match gopher {
            Some(gopher) => self.resolve_gopher(arc_name, gopher),
            None => self.resolve_classic(arc_name),
        }
    }

    fn resolve_classic(&self, arc_name: &str) -> Result<ResolvedArc, StoryError> {
        if self.classic.is_empty() {
            return Err(StoryError::NotLoaded);
        }

        let requested = requested_or_intro(arc_name);
        let served = if self.classic.get(requested).is_some_and(StoryArc::has_title) {
            requested
        } else if self.classic.get(INTRO).is_some_and(StoryArc::has_title) {
            debug!(requested, "arc missing, falling back to intro");
            INTRO
        } else {
            return Err(StoryError::ArcNotFound {
                arc: requested.to_owned(),
                gopher: None,
            });
        };

        let mut arc = self.classic.get(served).cloned().unwrap_or_default();
        arc.image = classic_image(served);
        Ok(ResolvedArc {
            arc,
            arc_name: served.to_owned(),
            gopher: None,
            fell_back: served != requested,
        })
    }

    fn resolve_gopher(&self, arc_name: &str, gopher: Gopher) -> Result<ResolvedArc, StoryError> {
        if self.gophers.is_empty() {
            return Err(StoryError::NotLoaded);
        }
        let graph = self
            .gophers
            .get(&gopher)
            .ok_or_else(|| StoryError::GopherNotFound(gopher.to_string()))?;

        let requested = requested_or_intro(arc_name);
        let mut arc = graph
            .get(requested)
            .cloned()
            .ok_or_else(|| StoryError::ArcNotFound {
                arc: requested.to_owned(),
                gopher: Some(gopher),
            })?;
        arc.image = gopher_image(gopher, requested);

        Ok(ResolvedArc {
            arc,
            arc_name: requested.to_owned(),
            gopher: Some(gopher),
            fell_back: false,
        })
    }
}
