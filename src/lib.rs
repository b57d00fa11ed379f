//! treelist - write a directory tree listing to a text file

pub mod error;
pub mod logging;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{ListError, ListResult};
pub use output::{IndentedFormatter, OutputConfig, StatusPrinter, report_error};
pub use tree::{
    Destination, EntryOrder, ListSummary, ListerConfig, ListingOutput, TreeLister,
    UnreadablePolicy, list,
};
