//! Console output for scan results.
//!
//! Kept apart from the report file writer so the engine stays usable as a library.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use crate::issues::{Finding, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print findings in cargo-style format to stdout.
pub fn print_findings(findings: &[Finding]) {
    print_findings_to(findings, &mut io::stdout().lock());
}

/// Print findings to a custom writer.
pub fn print_findings_to<W: Write>(findings: &[Finding], writer: &mut W) {
    for finding in findings {
        let severity = match Finding::severity() {
            Severity::Error => "error".bold().red(),
            Severity::Warning => "warning".bold().yellow(),
        };
        let _ = writeln!(
            writer,
            "{}: \"{}\"  {}",
            severity,
            finding.text,
            Finding::rule().to_string().dimmed().cyan()
        );
        let _ = writeln!(
            writer,
            "  {} {}:{}:{}",
            "-->".blue(),
            finding.file,
            finding.location.line,
            finding.location.col
        );
    }
}

/// Print the completion line naming the report file.
pub fn print_complete(output: &Path) {
    print_complete_to(output, &mut io::stdout().lock());
}

pub fn print_complete_to<W: Write>(output: &Path, writer: &mut W) {
    let _ = writeln!(writer, "Search complete. Results written to {}", output.display());
}

/// Print a dimmed `note:` line to stderr.
pub fn print_note(message: &str) {
    eprintln!("{} {}", "note:".dimmed(), message);
}

pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", count, if count == 1 { singular } else { plural })
}
