//! TreeLister - streams a pre-order directory listing to an output sink

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{ListError, ListResult};
use crate::output::IndentedFormatter;

use super::config::{Destination, ListerConfig, UnreadablePolicy};
use super::entries::read_listing;

/// Counts gathered during one listing run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListSummary {
    /// Directory lines written, root included.
    pub dirs: usize,
    /// File lines written.
    pub files: usize,
    /// Directories left out because they could not be read.
    pub skipped: usize,
}

impl ListSummary {
    /// Total number of lines written.
    pub fn lines(&self) -> usize {
        self.dirs + self.files
    }
}

/// Sink for listing output - receives entries in traversal order.
pub trait ListingOutput {
    /// A directory at `depth` levels below the root.
    fn output_dir(&mut self, name: &str, depth: usize) -> io::Result<()>;

    /// A file inside the directory at `depth`.
    fn output_file(&mut self, name: &str, depth: usize) -> io::Result<()>;

    /// Called once after a complete walk.
    fn finish(&mut self, summary: &ListSummary) -> io::Result<()>;
}

/// Name written on a directory line: the base name, or the whole path when
/// it has none (`.`, `..`, `/`).
pub fn dir_display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Fails with [`ListError::InvalidRoot`] unless `root` is an existing directory.
pub fn validate_root(root: &Path) -> ListResult<()> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(ListError::InvalidRoot(root.to_path_buf()))
    }
}

/// List `root` into the file at `output` using the default policies.
pub fn list(root: &Path, output: &Path) -> ListResult<ListSummary> {
    TreeLister::new(ListerConfig::new(
        root,
        Destination::File(output.to_path_buf()),
    ))
    .run()
}

/// Walks a directory tree top-down and writes one line per directory and file.
///
/// Memory use is O(depth) plus the entries of the directories on the current
/// path; nothing is buffered beyond the output writer.
pub struct TreeLister {
    config: ListerConfig,
}

impl TreeLister {
    pub fn new(config: ListerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ListerConfig {
        &self.config
    }

    /// Validate the root, open the destination and write the listing.
    ///
    /// The destination is not touched when the root is invalid. If the walk
    /// fails part way, whatever was written so far is flushed when the writer
    /// is dropped.
    pub fn run(&self) -> ListResult<ListSummary> {
        let root = &self.config.root;
        validate_root(root)?;

        match &self.config.destination {
            Destination::File(path) => {
                let file = File::create(path).map_err(|source| ListError::CreateOutput {
                    path: path.clone(),
                    source,
                })?;
                let mut formatter = IndentedFormatter::new(BufWriter::new(file));
                self.walk(root, &mut formatter)
            }
            Destination::Stdout => {
                let stdout = io::stdout();
                let mut formatter = IndentedFormatter::new(BufWriter::new(stdout.lock()));
                self.walk(root, &mut formatter)
            }
        }
    }

    /// Walk `root` and stream entries to `output`.
    pub fn walk<O: ListingOutput>(&self, root: &Path, output: &mut O) -> ListResult<ListSummary> {
        validate_root(root)?;

        let mut summary = ListSummary::default();
        self.walk_dir(root, 0, output, &mut summary)?;
        output.finish(&summary).map_err(ListError::Write)?;

        debug!(
            root = %root.display(),
            dirs = summary.dirs,
            files = summary.files,
            skipped = summary.skipped,
            "listing complete"
        );
        Ok(summary)
    }

    fn walk_dir<O: ListingOutput>(
        &self,
        path: &Path,
        depth: usize,
        output: &mut O,
        summary: &mut ListSummary,
    ) -> ListResult<()> {
        // Entries are read before the directory line so a skipped directory
        // leaves no trace in the output.
        let listing = match read_listing(path, self.config.order) {
            Ok(listing) => listing,
            Err(source) => match self.config.unreadable {
                UnreadablePolicy::Fail => return Err(ListError::read_dir(path, source)),
                UnreadablePolicy::Skip => {
                    warn!(path = %path.display(), error = %source, "skipping unreadable directory");
                    summary.skipped += 1;
                    return Ok(());
                }
            },
        };

        debug!(path = %path.display(), depth, "listing directory");
        output
            .output_dir(&dir_display_name(path), depth)
            .map_err(ListError::Write)?;
        summary.dirs += 1;

        for name in &listing.files {
            output
                .output_file(&name.to_string_lossy(), depth)
                .map_err(ListError::Write)?;
            summary.files += 1;
        }

        for subdir in &listing.subdirs {
            self.walk_dir(subdir, depth + 1, output, summary)?;
        }

        Ok(())
    }
}
