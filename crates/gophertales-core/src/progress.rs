//! User progress collaborator abstraction.
//!
//! The story engine never owns user records. It only instructs an external
//! store to overwrite a per-gopher progress value when a reader visits an arc.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ProgressError;
use crate::gopher::Gopher;

/// Progress value recorded when a reader reaches an ending.
pub const PROGRESS_COMPLETE: u8 = 100;

/// Progress value recorded on every visit to an arc that still has choices.
pub const PROGRESS_VISITED: u8 = 10;

/// Store that records per-gopher reading progress for a user.
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Overwrite the user's progress for `gopher` with `value` (0–100).
    async fn set_progress(
        &self,
        user_id: Uuid,
        gopher: Gopher,
        value: u8,
    ) -> Result<(), ProgressError>;
}
