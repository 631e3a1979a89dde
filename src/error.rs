//! Typed error variants for the game.
//!
//! Only settings persistence can actually fail; everything that happens
//! during play (collisions, button misses, unknown keys) is ordinary control
//! flow and never produces an error.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::error::PongResult;
//!
//! fn startup() -> PongResult<()> {
//!     let settings = crate::config::load(&crate::config::settings_path())?;
//!     Ok(())
//! }
//! ```

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error enum for the game.
#[derive(Debug)]
pub enum PongError {
    /// The settings file exists but could not be read.
    SettingsRead {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// The settings file is not valid JSON or does not match the expected shape.
    SettingsParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The settings file parsed but holds a value the game cannot run with.
    InvalidSetting {
        /// JSON key of the rejected field.
        key: &'static str,
        /// The value that was rejected.
        value: i64,
        /// Human-readable description of the accepted range.
        expected: &'static str,
    },

    /// Settings could not be encoded as JSON.
    SettingsSerialize(serde_json::Error),

    /// The settings file (or its parent directory) could not be written.
    SettingsWrite { path: PathBuf, source: io::Error },
}

impl fmt::Display for PongError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PongError::SettingsRead { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            PongError::SettingsParse { path, source } => {
                write!(f, "failed to parse {}: {}", path.display(), source)
            }
            PongError::InvalidSetting {
                key,
                value,
                expected,
            } => write!(
                f,
                "setting '{}' = {} is outside accepted range {}",
                key, value, expected
            ),
            PongError::SettingsSerialize(source) => {
                write!(f, "failed to serialize settings: {}", source)
            }
            PongError::SettingsWrite { path, source } => {
                write!(f, "failed to write {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for PongError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PongError::SettingsRead { source, .. } => Some(source),
            PongError::SettingsParse { source, .. } => Some(source),
            PongError::SettingsSerialize(source) => Some(source),
            PongError::SettingsWrite { source, .. } => Some(source),
            PongError::InvalidSetting { .. } => None,
        }
    }
}

/// Convenience alias: a `Result` using `PongError` as the error type.
pub type PongResult<T> = Result<T, PongError>;
