//! Test progress stores — mock `ProgressStore` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use gophertales_core::error::ProgressError;
use gophertales_core::gopher::Gopher;
use gophertales_core::progress::ProgressStore;
use uuid::Uuid;

/// A progress store that records every `set_progress` call and always
/// succeeds.
#[derive(Debug, Default)]
pub struct RecordingProgressStore {
    recorded: Mutex<Vec<(Uuid, Gopher, u8)>>,
}

impl RecordingProgressStore {
    /// Create an empty recording store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every recorded call, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn recorded(&self) -> Vec<(Uuid, Gopher, u8)> {
        self.recorded.lock().unwrap().clone()
    }

    /// The value most recently written for `user_id` and `gopher`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn latest(&self, user_id: Uuid, gopher: Gopher) -> Option<u8> {
        self.recorded
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(user, g, _)| *user == user_id && *g == gopher)
            .map(|(_, _, value)| *value)
    }
}

#[async_trait]
impl ProgressStore for RecordingProgressStore {
    async fn set_progress(
        &self,
        user_id: Uuid,
        gopher: Gopher,
        value: u8,
    ) -> Result<(), ProgressError> {
        self.recorded.lock().unwrap().push((user_id, gopher, value));
        Ok(())
    }
}

/// A progress store that always fails. Useful for checking that progress
/// failures stay non-fatal.
#[derive(Debug)]
pub struct FailingProgressStore;

#[async_trait]
impl ProgressStore for FailingProgressStore {
    async fn set_progress(
        &self,
        _user_id: Uuid,
        _gopher: Gopher,
        _value: u8,
    ) -> Result<(), ProgressError> {
        Err(ProgressError::Unavailable("connection refused".into()))
    }
}

/// A progress store with no registered users. Every write is rejected with
/// [`ProgressError::UnknownUser`].
#[derive(Debug)]
pub struct UnknownUserProgressStore;

#[async_trait]
impl ProgressStore for UnknownUserProgressStore {
    async fn set_progress(
        &self,
        user_id: Uuid,
        _gopher: Gopher,
        _value: u8,
    ) -> Result<(), ProgressError> {
        Err(ProgressError::UnknownUser(user_id))
    }
}
