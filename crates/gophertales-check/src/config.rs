//! Startup configuration read from the environment.

use std::path::PathBuf;

use crate::error::AppError;

/// Default location of the story data file.
pub const DEFAULT_DATA_FILE: &str = "gopher.json";

/// Settings for a startup check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Story data file (`STORY_DATA_FILE`).
    pub data_file: PathBuf,
    /// Whether broken links abort startup (`STORY_STRICT`).
    pub strict: bool,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let data_file = lookup("STORY_DATA_FILE")
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());
        let strict = match lookup("STORY_STRICT") {
            Some(value) => parse_flag("STORY_STRICT", &value)?,
            None => false,
        };

        Ok(Self {
            data_file: PathBuf::from(data_file),
            strict,
        })
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, AppError> {
    match value {
        "1" | "true" => Ok(true),
        "" | "0" | "false" => Ok(false),
        other => Err(AppError::Config(format!(
            "{key} must be one of true, false, 1, 0; got '{other}'"
        ))),
    }
}
