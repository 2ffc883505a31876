//! Reader-facing arc visits.
//!
//! A visit resolves an arc exactly like [`StoryEngine::resolve`] and, for a
//! signed-in reader in a gopher storyline, records progress. Progress is
//! overwritten on every visit rather than accumulated: any arc with choices
//! sets the base value, any ending sets completion.

use gophertales_core::error::StoryError;
use gophertales_core::gopher::Gopher;
use gophertales_core::progress::{PROGRESS_COMPLETE, PROGRESS_VISITED, ProgressStore};
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use super::engine::StoryEngine;
use super::resolution::ResolvedArc;
use crate::domain::arc::StoryArc;

/// A reader asking to see an arc.
#[derive(Debug, Clone, Default)]
pub struct VisitRequest {
    /// Requested arc name; empty means the intro.
    pub arc: String,
    /// Storyline being read; `None` for the classic story.
    pub gopher: Option<Gopher>,
    /// The signed-in reader, if any.
    pub user_id: Option<Uuid>,
}

/// Progress value recorded for a visit to `arc`.
#[must_use]
pub fn progress_for(arc: &StoryArc) -> u8 {
    if arc.is_ending() {
        PROGRESS_COMPLETE
    } else {
        PROGRESS_VISITED
    }
}

/// Resolves the requested arc and records the reader's progress.
///
/// A failure to record progress is logged and otherwise ignored; it never
/// changes the returned arc.
///
/// # Errors
///
/// Returns the same errors as [`StoryEngine::resolve`].
#[instrument(
    skip(engine, request, progress),
    fields(arc = %request.arc, gopher = ?request.gopher)
)]
pub async fn visit(
    engine: &StoryEngine,
    request: &VisitRequest,
    progress: &dyn ProgressStore,
) -> Result<ResolvedArc, StoryError> {
    let resolved = engine.resolve(&request.arc, request.gopher)?;

    if let (Some(gopher), Some(user_id)) = (resolved.gopher, request.user_id) {
        let value = progress_for(&resolved.arc);
        match progress.set_progress(user_id, gopher, value).await {
            Ok(()) => debug!(%user_id, %gopher, value, "progress recorded"),
            Err(err) => {
                warn!(%user_id, %gopher, value, error = %err, "failed to record progress");
            }
        }
    }

    Ok(resolved)
}
