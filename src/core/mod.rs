//! Detection engine.
//!
//! Files flow through the modules in this order:
//!
//! 1. `file_scanner`: select source files under the root directory
//! 2. `parsers`: parse each file and lower it into a `tree::SyntaxTree`
//! 3. `visitor`: walk the tree and emit findings, using `classify` predicates
//!
//! `scanner` drives the whole pipeline for a list of files.

pub mod classify;
pub mod file_scanner;
pub mod parsers;
pub mod scanner;
pub mod tree;
pub mod visitor;

pub use scanner::{ScanResult, Scanner, resolve_input_path};
