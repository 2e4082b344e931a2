//! Unwrapt - find user-facing text that is not wrapped in a translation call
//!
//! Unwrapt is a CLI tool and library that scans JSX/TSX source files for string
//! literals, template segments, JSX text and attribute values that never pass
//! through the `t()` translation function, and writes them to a plain-text report.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (`scan` and `init` commands)
//! - `config`: Configuration file loading and parsing
//! - `core`: Detection engine (file selection, parsing, tree walk)
//! - `issues`: Finding and parse error types
//! - `report`: Report file writer

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod report;
