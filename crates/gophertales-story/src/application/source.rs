//! Where story bytes come from.

use std::path::{Path, PathBuf};

use gophertales_core::error::StoryError;

/// A readable snapshot of raw story data.
pub trait StorySource: Send + Sync {
    /// Reads the full source.
    ///
    /// # Errors
    ///
    /// Returns `StoryError::Io` if the source cannot be read.
    fn read(&self) -> Result<Vec<u8>, StoryError>;

    /// Human-readable description for logs.
    fn describe(&self) -> String;
}

/// Story data stored in a file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source reading from `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this source reads.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorySource for FileSource {
    fn read(&self) -> Result<Vec<u8>, StoryError> {
        std::fs::read(&self.path).map_err(|source| StoryError::Io {
            path: self.path.clone(),
            source,
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Story data already held in memory.
#[derive(Debug, Clone)]
pub struct BytesSource {
    label: String,
    bytes: Vec<u8>,
}

impl BytesSource {
    /// Creates a source serving `bytes`, described as `label` in logs.
    #[must_use]
    pub fn new(label: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            label: label.into(),
            bytes: bytes.into(),
        }
    }
}

impl StorySource for BytesSource {
    fn read(&self) -> Result<Vec<u8>, StoryError> {
        Ok(self.bytes.clone())
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}
