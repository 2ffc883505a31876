//! GopherTales check — startup error types.

use gophertales_core::error::StoryError;
use thiserror::Error;

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The story could not be loaded.
    #[error("story error: {0}")]
    Story(#[from] StoryError),

    /// Strict mode is on and the story has broken links.
    #[error("story has {0} integrity issue(s)")]
    Integrity(usize),
}
