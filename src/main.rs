//! CLI entry point for treelist

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use treelist::tree::{DEFAULT_OUTPUT_FILE, DEFAULT_ROOT};
use treelist::{
    Destination, EntryOrder, ListerConfig, OutputConfig, StatusPrinter, TreeLister,
    UnreadablePolicy, logging, report_error,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode, status_to_stderr: bool) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            if status_to_stderr {
                std::io::stderr().is_terminal()
            } else {
                std::io::stdout().is_terminal()
            }
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "treelist")]
#[command(about = "Write the directory tree under PATH to a text file")]
#[command(version)]
struct Args {
    /// Directory to scan
    #[arg(default_value = DEFAULT_ROOT)]
    path: PathBuf,

    /// File to write the listing to ("-" for stdout)
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Keep the filesystem's enumeration order instead of sorting by name
    #[arg(long)]
    unsorted: bool,

    /// Skip directories that cannot be read instead of failing
    #[arg(long = "skip-unreadable")]
    skip_unreadable: bool,

    /// Do not print status messages
    #[arg(short, long)]
    quiet: bool,

    /// Log each visited directory to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    let destination = Destination::from_arg(&args.output);
    let status_to_stderr = destination.is_stdout();
    let use_color = should_use_color(args.color, status_to_stderr);

    let config = ListerConfig {
        root: args.path.clone(),
        destination,
        order: if args.unsorted {
            EntryOrder::Native
        } else {
            EntryOrder::Sorted
        },
        unreadable: if args.skip_unreadable {
            UnreadablePolicy::Skip
        } else {
            UnreadablePolicy::Fail
        },
    };

    let mut status = StatusPrinter::new(OutputConfig {
        use_color,
        quiet: args.quiet,
        status_to_stderr,
    });

    let lister = TreeLister::new(config);
    if let Err(e) = treelist::tree::validate_root(&args.path) {
        let _ = report_error(&e, use_color);
        process::exit(e.exit_code());
    }
    // Status output is best effort; a closed stdout must not stop the listing.
    let _ = status.starting(&args.path, &lister.config().destination);

    match lister.run() {
        Ok(summary) => {
            let _ = status.saved(&summary);
        }
        Err(e) => {
            let _ = report_error(&e, use_color);
            process::exit(e.exit_code());
        }
    }
}
