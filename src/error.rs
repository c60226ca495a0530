// File: src/error.rs
use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("Cannot access '{}': {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{}' is not valid UTF-8 (line {line})", .path.display())]
    Encoding { path: PathBuf, line: usize },

    #[error("Nothing to report: {0}")]
    EmptyInput(&'static str),

    #[error("Malformed record on line {line}: {content:?}")]
    MalformedRecord { line: usize, content: String },

    #[error("Invalid config '{}': {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("No existing file given after {attempts} attempts")]
    AttemptsExhausted { attempts: usize },

    #[error("Prompt failed: {0}")]
    Prompt(#[source] io::Error),

    #[error("Could not draw the word cloud: {0}")]
    Render(#[source] io::Error),
}

impl StatsError {
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileAccess { path: path.into(), source }
    }
}

pub type Result<T, E = StatsError> = std::result::Result<T, E>;
