//! Directory tree listing
//!
//! `TreeLister` walks a root directory top-down and streams one entry at a
//! time to a `ListingOutput` sink, using O(depth) memory.

mod config;
mod entries;
mod walker;

pub use config::{
    DEFAULT_OUTPUT_FILE, DEFAULT_ROOT, Destination, EntryOrder, ListerConfig, UnreadablePolicy,
};
pub use entries::{DirListing, EntryKind, classify, read_listing};
pub use walker::{
    ListSummary, ListingOutput, TreeLister, dir_display_name, list, validate_root,
};
