//! Error types for `.env` loading.
//!
//! Responsibilities:
//! - Define error variants for every fatal load condition.
//!
//! Does NOT handle:
//! - Informational skip/change notices (emitted through `tracing`).
//!
//! Invariants:
//! - All variants carry context for debugging (paths, line numbers, keys).
//! - Errors NEVER include raw `.env` line contents or values to prevent
//!   secret leakage.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a profile file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to determine working directory: {0}")]
    WorkingDirectory(#[source] std::io::Error),

    #[error("Failed to read env file at {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A non-blank, non-comment line has no `=` or an empty key.
    ///
    /// SAFETY: Only the line number is reported, NOT the line content.
    #[error(
        "Malformed line {line} in {path}: expected KEY=VALUE. Hint: set GETENV_DISABLED=1 to skip env file loading"
    )]
    MalformedLine { path: PathBuf, line: usize },

    #[error("Failed to set environment variable {key}: {reason}")]
    EnvironmentWrite { key: String, reason: &'static str },

    #[error("Unknown profile '{0}' (expected default, development or production)")]
    UnknownProfile(String),
}

impl LoadError {
    /// 1-based line number for errors tied to a specific line.
    pub fn line(&self) -> Option<usize> {
        match self {
            LoadError::MalformedLine { line, .. } => Some(*line),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io::ErrorKind;

    #[test]
    fn test_file_read_exposes_source() {
        let err = LoadError::FileRead {
            path: PathBuf::from("/srv/app/.env"),
            source: std::io::Error::new(ErrorKind::PermissionDenied, "denied"),
        };

        let message = err.to_string();
        assert!(message.contains("/srv/app/.env"), "{}", message);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_malformed_line_reports_position_only() {
        let err = LoadError::MalformedLine {
            path: PathBuf::from(".env"),
            line: 3,
        };

        assert_eq!(err.line(), Some(3));
        let message = err.to_string();
        assert!(message.contains("line 3"), "{}", message);
        assert!(message.contains("GETENV_DISABLED"), "{}", message);
    }

    #[test]
    fn test_line_is_none_for_other_variants() {
        let err = LoadError::UnknownProfile("staging".to_string());
        assert_eq!(err.line(), None);
    }
}
