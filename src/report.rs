//! Plain-text report file.
//!
//! One block per finding, in scan order:
//!
//! ```text
//! File: /abs/path/to/Component.tsx
//! Unwrapped Text: Hello World
//!
//! ```

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};

use crate::issues::Finding;

/// Create or truncate `path` and write every finding to it.
///
/// The file is written even when there are no findings.
pub fn write_report(findings: &[Finding], path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create report file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    write_report_to(findings, &mut writer)
        .with_context(|| format!("Failed to write report file: {}", path.display()))
}

/// Write the report to a custom writer and flush it.
pub fn write_report_to<W: Write>(findings: &[Finding], writer: &mut W) -> Result<()> {
    for finding in findings {
        write!(
            writer,
            "File: {}\nUnwrapped Text: {}\n\n",
            finding.file, finding.text
        )?;
    }
    writer.flush()?;
    Ok(())
}
