//! Output configuration types

/// Configuration for status reporting.
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Suppress progress and success messages. Failures are always reported.
    pub quiet: bool,
    /// Send status messages to stderr (used when the listing itself goes to stdout).
    pub status_to_stderr: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            quiet: false,
            status_to_stderr: false,
        }
    }
}
