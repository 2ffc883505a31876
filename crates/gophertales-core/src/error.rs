//! Domain error types.

use std::path::PathBuf;

use thiserror::Error;
use uuid::Uuid;

use crate::gopher::Gopher;

/// Errors raised while loading or resolving story content.
#[derive(Debug, Error)]
pub enum StoryError {
    /// The story source could not be read.
    #[error("failed to read story source {}: {source}", .path.display())]
    Io {
        /// Location of the unreadable source.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The source was readable but matches neither the classic nor the gopher layout.
    #[error("story data matches neither layout: {0}")]
    Format(#[from] serde_json::Error),

    /// No arc could be resolved, even after fallback.
    #[error("{}", describe_missing_arc(.arc, .gopher))]
    ArcNotFound {
        /// The arc name that was requested (after empty-name substitution).
        arc: String,
        /// The gopher whose storyline was searched, if any.
        gopher: Option<Gopher>,
    },

    /// The requested gopher is not a recognised partition, or has no storyline.
    #[error("gopher '{0}' not found")]
    GopherNotFound(String),

    /// Resolution was attempted against an empty story.
    #[error("story not loaded")]
    NotLoaded,
}

impl StoryError {
    /// Whether this error belongs to the recoverable "not found" class that
    /// callers translate into a user-facing miss.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ArcNotFound { .. } | Self::GopherNotFound(_) | Self::NotLoaded
        )
    }
}

fn describe_missing_arc(arc: &str, gopher: &Option<Gopher>) -> String {
    match gopher {
        Some(gopher) => format!("arc '{arc}' not found for gopher '{gopher}'"),
        None => format!("arc '{arc}' not found"),
    }
}

/// Errors reported by a [`ProgressStore`](crate::progress::ProgressStore).
///
/// Progress is a side channel: these never invalidate a resolved arc.
#[derive(Debug, Error)]
pub enum ProgressError {
    /// The backing store could not be reached.
    #[error("progress store unavailable: {0}")]
    Unavailable(String),

    /// The store has no record of the user.
    #[error("unknown user: {0}")]
    UnknownUser(Uuid),
}
