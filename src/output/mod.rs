//! Output formatting for tree listings
//!
//! - `IndentedFormatter`: the listing itself, written to a file or stdout
//! - `StatusPrinter`: progress and result messages for the user

mod config;
mod indented;
mod status;
mod utils;

pub use config::OutputConfig;
pub use indented::IndentedFormatter;
pub use status::{StatusPrinter, report_error, success_message, write_error};
pub use utils::{INDENT_WIDTH, indent, split_extension};
