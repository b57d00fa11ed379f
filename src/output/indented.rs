//! Indented plain-text listing formatter
//!
//! Writes one line per entry: directories as `/<name>` indented by their
//! depth, files as `<stem><ext>` one level deeper than their directory.

use std::io::{self, Write};

use crate::tree::{ListSummary, ListingOutput};

use super::utils::{indent, split_extension};

/// Streams listing lines to any writer.
pub struct IndentedFormatter<W: Write> {
    out: W,
}

impl<W: Write> IndentedFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the formatter and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ListingOutput for IndentedFormatter<W> {
    fn output_dir(&mut self, name: &str, depth: usize) -> io::Result<()> {
        writeln!(self.out, "{}/{}", indent(depth), name)
    }

    fn output_file(&mut self, name: &str, depth: usize) -> io::Result<()> {
        let (stem, ext) = split_extension(name);
        writeln!(self.out, "{}{}{}", indent(depth + 1), stem, ext)
    }

    fn finish(&mut self, _summary: &ListSummary) -> io::Result<()> {
        self.out.flush()
    }
}
