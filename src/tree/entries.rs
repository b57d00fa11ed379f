//! Reading and classifying the entries of a single directory.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::config::EntryOrder;

/// How an entry takes part in the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Listed on a file line.
    File,
    /// Written as a directory line and descended into.
    Dir,
    /// Symlink to a directory: never listed and never followed.
    LinkedDir,
}

/// Classify a directory entry without following directory symlinks.
pub fn classify(entry: &fs::DirEntry) -> io::Result<EntryKind> {
    let file_type = entry.file_type()?;
    if file_type.is_symlink() {
        // Broken links fall through to File.
        return Ok(match fs::metadata(entry.path()) {
            Ok(meta) if meta.is_dir() => EntryKind::LinkedDir,
            _ => EntryKind::File,
        });
    }
    Ok(if file_type.is_dir() {
        EntryKind::Dir
    } else {
        EntryKind::File
    })
}

/// Immediate contents of one directory, split the way the listing needs them.
#[derive(Debug, Default)]
pub struct DirListing {
    pub files: Vec<OsString>,
    pub subdirs: Vec<PathBuf>,
}

/// Read `path` and split its entries into files and subdirectories.
///
/// Any error reading the directory or one of its entries is returned as is;
/// the caller decides whether that aborts the walk.
pub fn read_listing(path: &Path, order: EntryOrder) -> io::Result<DirListing> {
    let mut entries = fs::read_dir(path)?.collect::<io::Result<Vec<_>>>()?;
    if order == EntryOrder::Sorted {
        entries.sort_by_key(|a| a.file_name());
    }

    let mut listing = DirListing::default();
    for entry in entries {
        match classify(&entry)? {
            EntryKind::File => listing.files.push(entry.file_name()),
            EntryKind::Dir => listing.subdirs.push(entry.path()),
            EntryKind::LinkedDir => {}
        }
    }
    Ok(listing)
}
