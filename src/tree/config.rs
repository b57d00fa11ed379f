//! Configuration types for tree listing

use std::path::{Path, PathBuf};

/// Output file used when no destination is given.
pub const DEFAULT_OUTPUT_FILE: &str = "file_list.txt";

/// Directory scanned when no root is given.
pub const DEFAULT_ROOT: &str = ".";

/// Order in which files and subdirectories of one directory are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntryOrder {
    /// Byte-wise lexicographic by file name (case-sensitive).
    #[default]
    Sorted,
    /// Whatever order the host filesystem enumerates.
    Native,
}

/// What to do with a directory that cannot be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnreadablePolicy {
    /// Abort the run with an error naming the directory.
    #[default]
    Fail,
    /// Log a warning, leave the directory out, and continue with its siblings.
    Skip,
}

/// Where the listing is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Create or truncate a file.
    File(PathBuf),
    /// Standard output.
    Stdout,
}

impl Destination {
    /// Interpret a command-line value; `-` means stdout.
    pub fn from_arg(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdout
        } else {
            Self::File(path.to_path_buf())
        }
    }

    pub fn is_stdout(&self) -> bool {
        matches!(self, Self::Stdout)
    }

    /// Human-readable name for status messages.
    pub fn display_name(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Stdout => "<stdout>".to_string(),
        }
    }
}

impl Default for Destination {
    fn default() -> Self {
        Self::File(PathBuf::from(DEFAULT_OUTPUT_FILE))
    }
}

/// Configuration for a listing run.
#[derive(Debug, Clone)]
pub struct ListerConfig {
    pub root: PathBuf,
    pub destination: Destination,
    pub order: EntryOrder,
    pub unreadable: UnreadablePolicy,
}

impl ListerConfig {
    pub fn new(root: impl Into<PathBuf>, destination: Destination) -> Self {
        Self {
            root: root.into(),
            destination,
            ..Default::default()
        }
    }
}

impl Default for ListerConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            destination: Destination::default(),
            order: EntryOrder::default(),
            unreadable: UnreadablePolicy::default(),
        }
    }
}
