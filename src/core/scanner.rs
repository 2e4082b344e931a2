//! Scan driver: read, parse and visit files one at a time.

use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use colored::Colorize;

use super::parsers::{SourceParser, SwcParser};
use super::visitor::UnwrappedTextVisitor;
use crate::issues::{Finding, ParseErrorIssue};

/// Outcome of scanning a list of files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Findings of every file, concatenated in scan order.
    pub findings: Vec<Finding>,
    pub parse_errors: Vec<ParseErrorIssue>,
    pub files_checked: usize,
}

/// Runs the detection pipeline over files with a [`SourceParser`].
pub struct Scanner<P = SwcParser> {
    parser: P,
}

impl<P: SourceParser> Scanner<P> {
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    /// Scan files in the given order.
    ///
    /// A file that cannot be read or parsed is reported on stderr, recorded in
    /// [`ScanResult::parse_errors`] and skipped; the scan goes on.
    pub fn scan(&self, files: &[PathBuf]) -> ScanResult {
        let mut result = ScanResult::default();

        for file in files {
            let file_path = file.to_string_lossy();
            match self.scan_file(file) {
                Ok(findings) => {
                    result.files_checked += 1;
                    result.findings.extend(findings);
                }
                Err(e) => {
                    let issue = ParseErrorIssue {
                        file_path: file_path.into_owned(),
                        error: format!("{:#}", e),
                    };
                    eprintln!(
                        "{}: Error parsing file {}: {}  {}",
                        ParseErrorIssue::severity().to_string().bold().red(),
                        issue.file_path,
                        issue.error,
                        ParseErrorIssue::rule().to_string().dimmed().cyan()
                    );
                    result.parse_errors.push(issue);
                }
            }
        }

        result
    }

    /// Findings of a single file, in source order.
    pub fn scan_file(&self, path: &Path) -> Result<Vec<Finding>> {
        let file_path = path.to_string_lossy();
        let code = fs::read_to_string(path).context("Failed to read file")?;
        let tree = self.parser.parse(code, &file_path)?;

        Ok(UnwrappedTextVisitor::new(&file_path, &tree).check())
    }
}

/// Resolve the scan root given on the command line to an absolute path.
///
/// Relative paths are joined onto the current directory and `.`/`..` are
/// collapsed lexically, without resolving symlinks.
pub fn resolve_input_path(path: Option<&Path>) -> Result<PathBuf> {
    let Some(path) = path else {
        bail!("Please provide a directory path to search.");
    };

    let absolute = std::path::absolute(path)
        .with_context(|| format!("Failed to resolve path: {}", path.display()))?;
    let absolute = normalize_path(&absolute);
    if !absolute.exists() {
        bail!("The provided path does not exist: {}", absolute.display());
    }

    Ok(absolute)
}

/// Collapse `.` and `..` components without touching the filesystem.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !matches!(
                    normalized.components().next_back(),
                    Some(Component::RootDir | Component::Prefix(_)) | None
                ) {
                    normalized.pop();
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}
