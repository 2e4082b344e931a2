//! Source parsing.
//!
//! - `jsx`: swc-backed parser for JSX/TSX source files
//! - `lower`: converts the swc AST into the crate's [`SyntaxTree`](crate::core::tree::SyntaxTree)

pub mod jsx;
mod lower;

pub use jsx::{ParseOptions, SourceParser, SwcParser, parse_jsx_source};
