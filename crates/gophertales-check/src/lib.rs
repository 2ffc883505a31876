//! GopherTales check — loads the story once at startup, logs what was
//! loaded and refuses to continue on a broken source.

use std::sync::Arc;

use gophertales_core::clock::Clock;
use gophertales_story::{FileSource, StoryEngine, StoryStats, StoryStore};
use tracing::{info, instrument, warn};

pub mod config;
pub mod error;

use config::AppConfig;
use error::AppError;

/// What a successful check found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSummary {
    /// Whole-story totals.
    pub stats: StoryStats,
    /// Number of broken links.
    pub issue_count: usize,
}

/// Loads the configured story into a store.
///
/// # Errors
///
/// Returns `AppError::Story` if the data file cannot be read or parsed.
#[instrument(skip(config, clock), fields(data_file = %config.data_file.display()))]
pub fn load_store(config: &AppConfig, clock: Arc<dyn Clock>) -> Result<StoryStore, AppError> {
    let source = FileSource::new(&config.data_file);
    Ok(StoryStore::open(&source, clock)?)
}

/// Logs statistics and integrity findings for `engine`.
///
/// # Errors
///
/// Returns `AppError::Integrity` if `strict` is set and any link is broken.
pub fn report(engine: &StoryEngine, strict: bool) -> Result<CheckSummary, AppError> {
    let stats = engine.stats();
    info!(
        mode = ?engine.mode(),
        total_arcs = stats.total_arcs,
        total_options = stats.total_options,
        total_story_paragraphs = stats.total_story_paragraphs,
        "story statistics"
    );
    for (gopher, gopher_stats) in engine.gopher_stats() {
        info!(
            %gopher,
            arc_count = gopher_stats.arc_count,
            total_words = gopher_stats.total_words,
            total_options = gopher_stats.total_options,
            read_time = gopher_stats.read_time,
            "gopher statistics"
        );
    }

    let integrity = engine.validate();
    for (location, issues) in integrity.iter() {
        for issue in issues {
            warn!(%location, %issue, "integrity issue");
        }
    }

    let issue_count = integrity.issue_count();
    if strict && issue_count > 0 {
        return Err(AppError::Integrity(issue_count));
    }

    Ok(CheckSummary { stats, issue_count })
}

/// Loads the configured story and reports on it.
///
/// # Errors
///
/// Returns `AppError::Story` on a load failure and `AppError::Integrity` on
/// broken links in strict mode.
pub fn run(config: &AppConfig, clock: Arc<dyn Clock>) -> Result<CheckSummary, AppError> {
    let store = load_store(config, clock)?;
    report(&store.current().engine, config.strict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    use gophertales_core::error::StoryError;
    use gophertales_test_support::{FixedClock, fixtures};

    fn clock() -> Arc<dyn Clock> {
        Arc::new(FixedClock::reference())
    }

    fn story_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn config_for(path: impl Into<PathBuf>, strict: bool) -> AppConfig {
        AppConfig {
            data_file: path.into(),
            strict,
        }
    }

    #[test]
    fn test_run_reports_clean_classic_story() {
        // Arrange
        let file = story_file(fixtures::CLASSIC_STORY);

        // Act
        let summary = run(&config_for(file.path(), true), clock()).unwrap();

        // Assert
        assert!(summary.stats.loaded);
        assert_eq!(summary.stats.total_arcs, 4);
        assert_eq!(summary.issue_count, 0);
    }

    #[test]
    fn test_run_counts_broken_links_when_lenient() {
        let file = story_file(fixtures::GOPHER_STORY);

        let summary = run(&config_for(file.path(), false), clock()).unwrap();

        assert_eq!(summary.stats.gopher_count, Some(2));
        assert_eq!(summary.issue_count, 1);
    }

    #[test]
    fn test_run_fails_on_broken_links_when_strict() {
        let file = story_file(fixtures::GOPHER_STORY);

        let result = run(&config_for(file.path(), true), clock());

        assert!(matches!(result.unwrap_err(), AppError::Integrity(1)));
    }

    #[test]
    fn test_run_fails_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        let result = run(&config_for(dir.path().join("gopher.json"), false), clock());

        match result.unwrap_err() {
            AppError::Story(StoryError::Io { .. }) => {}
            other => panic!("expected Story(Io), got {other:?}"),
        }
    }

    #[test]
    fn test_run_fails_on_unparseable_file() {
        let file = story_file("invalid json content");

        let result = run(&config_for(file.path(), false), clock());

        assert!(matches!(
            result.unwrap_err(),
            AppError::Story(StoryError::Format(_))
        ));
    }
}
