//! Error types for tree listing

use std::io;
use std::path::PathBuf;

/// Exit code for a root path that is missing or not a directory.
pub const EXIT_INVALID_ROOT: i32 = 2;
/// Exit code for any I/O failure while listing.
pub const EXIT_IO_FAILURE: i32 = 1;

/// Errors that can end a listing run.
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    /// The root does not exist or is not a directory.
    #[error("the provided path is not a valid directory: {}", .0.display())]
    InvalidRoot(PathBuf),

    /// The destination could not be created or truncated.
    #[error("cannot create output file '{}': {source}", .path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A directory (or one of its entries) could not be read mid-walk.
    #[error("cannot read directory '{}': {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing or flushing the listing failed.
    #[error("error writing output: {0}")]
    Write(#[source] io::Error),
}

impl ListError {
    pub fn read_dir(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ReadDir {
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidRoot(_) => EXIT_INVALID_ROOT,
            Self::CreateOutput { .. } | Self::ReadDir { .. } | Self::Write(_) => EXIT_IO_FAILURE,
        }
    }
}

pub type ListResult<T> = Result<T, ListError>;
