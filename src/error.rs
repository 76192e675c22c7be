//! Error taxonomy for argument parsing and configuration resolution
//!
//! Every error is raised while building a [`crate::settings::FrontEndArgs`]
//! or on first access of a lazily loaded side file. None are recovered
//! internally; the launcher reports them and exits.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving front-end arguments
#[derive(Error, Debug)]
pub enum ArgsError {
    #[error("Syntax error in argument '{token}': {reason}")]
    Syntax { token: String, reason: String },

    #[error("Unknown argument: --{0}")]
    UnknownFlag(String),

    #[error("Target program not provided")]
    MissingTarget,

    #[error("Malformed value for --{flag}: '{value}' ({reason})")]
    MalformedData {
        flag: String,
        value: String,
        reason: String,
    },

    #[error("Could not read {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not resolve target program {}: {reason}", path.display())]
    TargetResolution { path: PathBuf, reason: String },

    #[error("Precondition violated: {0}")]
    Precondition(String),
}

impl ArgsError {
    pub(crate) fn syntax(token: &str, reason: impl Into<String>) -> Self {
        Self::Syntax {
            token: token.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed(flag: &str, value: &str, reason: impl ToString) -> Self {
        Self::MalformedData {
            flag: flag.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }
}

/// Result type for argument resolution
pub type Result<T> = std::result::Result<T, ArgsError>;
