//! Human-readable status messages around a listing run

use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::error::ListError;
use crate::tree::{Destination, ListSummary};

use super::config::OutputConfig;

/// Prefix for failure messages on stderr.
const PROGRAM_PREFIX: &str = "treelist: ";

fn color_choice(use_color: bool) -> ColorChoice {
    if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Text of the success line.
pub fn success_message(summary: &ListSummary) -> String {
    let mut counts = format!(
        "{} directories, {} files",
        summary.dirs, summary.files
    );
    if summary.skipped > 0 {
        counts.push_str(&format!(", {} skipped", summary.skipped));
    }
    format!("File listing saved successfully ({})", counts)
}

/// Prints start and success messages.
pub struct StatusPrinter<W: WriteColor> {
    out: W,
    quiet: bool,
}

impl StatusPrinter<StandardStream> {
    pub fn new(config: OutputConfig) -> Self {
        let choice = color_choice(config.use_color);
        let out = if config.status_to_stderr {
            StandardStream::stderr(choice)
        } else {
            StandardStream::stdout(choice)
        };
        Self::with_writer(out, config.quiet)
    }
}

impl<W: WriteColor> StatusPrinter<W> {
    pub fn with_writer(out: W, quiet: bool) -> Self {
        Self { out, quiet }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn starting(&mut self, root: &Path, destination: &Destination) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(
            self.out,
            "Listing files in directory: {} and saving to {}",
            root.display(),
            destination.display_name()
        )
    }

    pub fn saved(&mut self, summary: &ListSummary) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.out
            .set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
        write!(self.out, "{}", success_message(summary))?;
        self.out.reset()?;
        writeln!(self.out)
    }
}

/// Write a failure to `out` as `treelist: <message>`.
pub fn write_error<W: WriteColor>(out: &mut W, err: &ListError) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(out, "{}", PROGRAM_PREFIX)?;
    out.reset()?;
    writeln!(out, "{}", err)
}

/// Report a failure on stderr.
pub fn report_error(err: &ListError, use_color: bool) -> io::Result<()> {
    let mut stderr = StandardStream::stderr(color_choice(use_color));
    write_error(&mut stderr, err)
}
