//! Environment-driven core configuration.
//!
//! # Responsibility
//! - Resolve database location and logging settings for core callers.
//! - Reject malformed values up front instead of falling back silently.
//!
//! # Invariants
//! - Unset variables mean defaults; set-but-blank variables are errors.
//! - `log_dir`, when present, is absolute.

use crate::logging::{default_log_level, normalize_level};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_DB_PATH: &str = "RECTANGLE_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "RECTANGLE_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "RECTANGLE_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Empty { key: &'static str },
    InvalidLogLevel(String),
    RelativeLogDir(PathBuf),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty { key } => write!(f, "{key} is set but empty"),
            Self::InvalidLogLevel(message) => write!(f, "{message}"),
            Self::RelativeLogDir(path) => write!(
                f,
                "{ENV_LOG_DIR} must be an absolute path, got `{}`",
                path.display()
            ),
        }
    }
}

impl Error for ConfigError {}

/// Resolved settings for opening storage and starting logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// SQLite file; `None` selects an in-memory database.
    pub db_path: Option<PathBuf>,
    /// Normalized level (`trace|debug|info|warn|error`).
    pub log_level: &'static str,
    /// Rolling log directory; `None` leaves file logging off.
    pub log_dir: Option<PathBuf>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl CoreConfig {
    /// Reads `RECTANGLE_*` variables from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds config from an arbitrary key lookup.
    ///
    /// # Errors
    /// - `Empty` when a variable is present but blank.
    /// - `InvalidLogLevel` for unknown levels.
    /// - `RelativeLogDir` when the log directory is not absolute.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = non_blank(&lookup, ENV_DB_PATH)? {
            config.db_path = Some(PathBuf::from(path));
        }
        if let Some(level) = non_blank(&lookup, ENV_LOG_LEVEL)? {
            config.log_level = normalize_level(&level).map_err(ConfigError::InvalidLogLevel)?;
        }
        if let Some(dir) = non_blank(&lookup, ENV_LOG_DIR)? {
            let dir = PathBuf::from(dir);
            if !dir.is_absolute() {
                return Err(ConfigError::RelativeLogDir(dir));
            }
            config.log_dir = Some(dir);
        }

        Ok(config)
    }
}

fn non_blank<F>(lookup: &F, key: &'static str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Err(ConfigError::Empty { key }),
        Some(value) => Ok(Some(value.trim().to_string())),
    }
}
