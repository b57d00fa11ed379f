//! Shared helpers for formatting listing lines

/// Spaces per indentation level.
pub const INDENT_WIDTH: usize = 4;

/// Leading whitespace for a line at `level`.
pub fn indent(level: usize) -> String {
    " ".repeat(level * INDENT_WIDTH)
}

/// Split a file name into stem and extension at the last dot.
///
/// Leading dots never start an extension, so `.bashrc` has no extension,
/// and the extension keeps its dot: `report.pdf` splits into `report` and
/// `.pdf`. `stem + ext` always equals the input.
pub fn split_extension(name: &str) -> (&str, &str) {
    let first_non_dot = name.len() - name.trim_start_matches('.').len();
    match name.rfind('.') {
        Some(idx) if idx > first_non_dot => name.split_at(idx),
        _ => (name, ""),
    }
}
