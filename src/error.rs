//! Error types for sasswatch
//!
//! Library code returns `SassWatchError`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for sasswatch operations
pub type SassWatchResult<T> = Result<T, SassWatchError>;

/// Main error type for sasswatch operations
#[derive(Error, Debug)]
pub enum SassWatchError {
    /// Watched directory does not exist
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Watched path exists but is a file
    #[error("not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// No watched directory given on the command line
    #[error("must specify a directory to watch")]
    MissingWatchDir,

    /// No manifest output given on the command line
    #[error("must specify an output filename")]
    MissingOutput,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File system port error
    #[error(transparent)]
    Fs(#[from] FsError),

    /// Could not establish or keep the filesystem subscription
    #[error("watch error: {0}")]
    Watch(#[from] notify::Error),

    /// The style engine rejected the sources
    #[error("compile error: {message}")]
    Compile { message: String },

    /// Writing a generated artifact failed
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// User declined to overwrite an existing manifest
    #[error("aborted by user")]
    Aborted,
}

impl SassWatchError {
    /// Errors that stop the session before watching begins.
    pub fn is_startup_error(&self) -> bool {
        matches!(
            self,
            SassWatchError::DirectoryNotFound { .. }
                | SassWatchError::NotADirectory { .. }
                | SassWatchError::MissingWatchDir
                | SassWatchError::MissingOutput
                | SassWatchError::InvalidConfig { .. }
        )
    }
}
