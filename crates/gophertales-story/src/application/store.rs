//! Shared, atomically replaceable handle to the loaded story.

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;
use chrono::{DateTime, Utc};
use gophertales_core::clock::Clock;
use gophertales_core::error::StoryError;
use tracing::{error, info, instrument};

use super::engine::StoryEngine;
use super::source::StorySource;

/// A loaded engine and when it was built.
#[derive(Debug)]
pub struct StorySnapshot {
    /// The engine. Never mutated once published.
    pub engine: StoryEngine,
    /// When the engine was loaded.
    pub loaded_at: DateTime<Utc>,
}

/// Result of a successful reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReloadOutcome {
    /// The source hashed the same as the live story; nothing was swapped.
    Unchanged,
    /// A new engine was published.
    Replaced {
        /// Hash of the engine that was replaced.
        previous_hash: String,
        /// Hash of the engine now live.
        version_hash: String,
    },
}

/// Holds the live story behind an atomic pointer.
///
/// Readers take an owned snapshot with [`StoryStore::current`] and keep a
/// consistent view even if a reload publishes a new engine meanwhile. A
/// reload builds the new engine completely before swapping it in.
pub struct StoryStore {
    inner: ArcSwap<StorySnapshot>,
    clock: Arc<dyn Clock>,
}

impl StoryStore {
    /// Publishes `engine` as the live story.
    #[must_use]
    pub fn new(engine: StoryEngine, clock: Arc<dyn Clock>) -> Self {
        let snapshot = StorySnapshot {
            engine,
            loaded_at: clock.now(),
        };
        Self {
            inner: ArcSwap::new(Arc::new(snapshot)),
            clock,
        }
    }

    /// Loads `source` and publishes it as the live story.
    ///
    /// # Errors
    ///
    /// Returns `StoryError::Io` or `StoryError::Format` if the source cannot
    /// be loaded. No store is created in that case.
    pub fn open(source: &dyn StorySource, clock: Arc<dyn Clock>) -> Result<Self, StoryError> {
        let engine = StoryEngine::from_source(source)?;
        Ok(Self::new(engine, clock))
    }

    /// An owned snapshot of the live story.
    #[must_use]
    pub fn current(&self) -> Arc<StorySnapshot> {
        self.inner.load_full()
    }

    /// Rebuilds the story from `source` and swaps it in.
    ///
    /// On failure the live story is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `StoryError::Io` or `StoryError::Format` if the source cannot
    /// be loaded.
    #[instrument(skip(self, source), fields(source = %source.describe()))]
    pub fn reload(&self, source: &dyn StorySource) -> Result<ReloadOutcome, StoryError> {
        let engine = match StoryEngine::from_source(source) {
            Ok(engine) => engine,
            Err(err) => {
                error!(error = %err, "story reload failed, keeping live story");
                return Err(err);
            }
        };

        let next = Arc::new(StorySnapshot {
            engine,
            loaded_at: self.clock.now(),
        });
        let mut current = self.inner.load_full();
        loop {
            let version_hash = next.engine.version_hash();
            if current.engine.version_hash() == version_hash {
                info!(%version_hash, "story unchanged, skipping swap");
                return Ok(ReloadOutcome::Unchanged);
            }
            // Only swap over the snapshot the hashes were compared against.
            let witnessed = self.inner.compare_and_swap(&current, Arc::clone(&next));
            if Arc::ptr_eq(&witnessed, &current) {
                break;
            }
            current = Arc::clone(&witnessed);
        }

        let previous_hash = current.engine.version_hash().to_owned();
        let version_hash = next.engine.version_hash().to_owned();
        info!(%previous_hash, %version_hash, "story reloaded");

        Ok(ReloadOutcome::Replaced {
            previous_hash,
            version_hash,
        })
    }
}

impl fmt::Debug for StoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.inner.load();
        f.debug_struct("StoryStore")
            .field("mode", &snapshot.engine.mode())
            .field("version_hash", &snapshot.engine.version_hash())
            .field("loaded_at", &snapshot.loaded_at)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::engine::StoryMode;
    use crate::application::source::{BytesSource, FileSource};
    use gophertales_test_support::{FixedClock, fixtures};

    fn clock() -> Arc<dyn Clock> {
        Arc::new(FixedClock::reference())
    }

    #[test]
    fn test_open_publishes_loaded_story() {
        // Arrange
        let source = BytesSource::new("classic", fixtures::CLASSIC_STORY);

        // Act
        let store = StoryStore::open(&source, clock()).unwrap();

        // Assert
        let snapshot = store.current();
        assert_eq!(snapshot.engine.mode(), StoryMode::Classic);
        assert_eq!(snapshot.loaded_at, FixedClock::reference().0);
    }

    #[test]
    fn test_open_fails_on_bad_source() {
        let source = BytesSource::new("broken", "not json");

        let result = StoryStore::open(&source, clock());

        assert!(matches!(result.err(), Some(StoryError::Format(_))));
    }

    #[test]
    fn test_reload_swaps_in_new_story_without_touching_old_snapshot() {
        // Arrange
        let store = StoryStore::open(&BytesSource::new("classic", fixtures::CLASSIC_STORY), clock())
            .unwrap();
        let before = store.current();

        // Act
        let outcome = store
            .reload(&BytesSource::new("gophers", fixtures::GOPHER_STORY))
            .unwrap();

        // Assert
        let after = store.current();
        assert_eq!(before.engine.mode(), StoryMode::Classic);
        assert_eq!(after.engine.mode(), StoryMode::Gophers);
        match outcome {
            ReloadOutcome::Replaced {
                previous_hash,
                version_hash,
            } => {
                assert_eq!(previous_hash, before.engine.version_hash());
                assert_eq!(version_hash, after.engine.version_hash());
            }
            ReloadOutcome::Unchanged => panic!("expected Replaced"),
        }
    }

    #[test]
    fn test_reload_with_same_content_is_unchanged() {
        let source = BytesSource::new("classic", fixtures::CLASSIC_STORY);
        let store = StoryStore::open(&source, clock()).unwrap();
        let before = store.current();

        let outcome = store.reload(&source).unwrap();

        assert_eq!(outcome, ReloadOutcome::Unchanged);
        assert!(Arc::ptr_eq(&before, &store.current()));
    }

    #[test]
    fn test_racing_reloads_replace_the_old_story_once() {
        // Arrange
        let store = Arc::new(
            StoryStore::open(&BytesSource::new("classic", fixtures::CLASSIC_STORY), clock())
                .unwrap(),
        );
        let classic_hash = store.current().engine.version_hash().to_owned();
        let barrier = Arc::new(std::sync::Barrier::new(8));

        // Act
        let outcomes: Vec<ReloadOutcome> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                let barrier = Arc::clone(&barrier);
                std::thread::spawn(move || {
                    barrier.wait();
                    store
                        .reload(&BytesSource::new("gophers", fixtures::GOPHER_STORY))
                        .unwrap()
                })
            })
            .collect::<Vec<_>>()
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();

        // Assert
        let replaced: Vec<_> = outcomes
            .iter()
            .filter_map(|outcome| match outcome {
                ReloadOutcome::Replaced { previous_hash, .. } => Some(previous_hash),
                ReloadOutcome::Unchanged => None,
            })
            .collect();
        assert_eq!(replaced, vec![&classic_hash]);
        assert_eq!(store.current().engine.mode(), StoryMode::Gophers);
    }

    #[test]
    fn test_debug_shows_live_version() {
        let store = StoryStore::open(&BytesSource::new("classic", fixtures::CLASSIC_STORY), clock())
            .unwrap();
        let hash = store.current().engine.version_hash().to_owned();

        let rendered = format!("{store:?}");

        assert!(rendered.starts_with("StoryStore {"));
        assert!(rendered.contains(&hash));
        assert!(rendered.contains("Classic"));
        assert!(rendered.ends_with(".. }"));
    }

    #[test]
    fn test_failed_reload_keeps_live_story() {
        // Arrange
        let store = StoryStore::open(&BytesSource::new("classic", fixtures::CLASSIC_STORY), clock())
            .unwrap();
        let before = store.current();

        // Act
        let result = store.reload(&FileSource::new("/definitely/not/here/gopher.json"));

        // Assert
        assert!(matches!(result.unwrap_err(), StoryError::Io { .. }));
        assert!(Arc::ptr_eq(&before, &store.current()));
    }

    #[test]
    fn test_concurrent_readers_see_whole_stories() {
        let store = Arc::new(
            StoryStore::open(&BytesSource::new("classic", fixtures::CLASSIC_STORY), clock())
                .unwrap(),
        );

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        let stats = store.current().engine.stats();
                        assert!(matches!(
                            (stats.total_arcs, stats.gopher_count),
                            (4, None) | (6, Some(2))
                        ));
                    }
                })
            })
            .collect();

        for source in [fixtures::GOPHER_STORY, fixtures::CLASSIC_STORY] {
            store.reload(&BytesSource::new("swap", source)).unwrap();
        }
        for reader in readers {
            reader.join().unwrap();
        }
    }
}
