use std::path::Path;

use anyhow::{Result, anyhow};
use swc_common::{FileName, GLOBALS, Globals, SourceMap, Spanned};
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax, error::Error};

use super::lower::TreeBuilder;
use crate::core::tree::SyntaxTree;

/// Language features enabled when parsing a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Parse type annotations (TypeScript).
    pub typescript: bool,
    /// Parse embedded JSX markup.
    pub jsx: bool,
    /// Parse `@decorator` syntax.
    pub decorators: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            typescript: true,
            jsx: true,
            decorators: true,
        }
    }
}

impl ParseOptions {
    /// Options adjusted for a file's extension.
    ///
    /// Plain `.ts` files cannot contain JSX, and enabling it there would break
    /// `<T>value` type assertions.
    pub fn for_file(self, file_path: &str) -> Self {
        let ext = Path::new(file_path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        Self {
            jsx: self.jsx && !matches!(ext, "ts" | "mts" | "cts"),
            ..self
        }
    }

    pub fn syntax(&self) -> Syntax {
        if self.typescript {
            Syntax::Typescript(TsSyntax {
                tsx: self.jsx,
                decorators: self.decorators,
                ..Default::default()
            })
        } else {
            Syntax::Es(EsSyntax {
                jsx: self.jsx,
                decorators: self.decorators,
                ..Default::default()
            })
        }
    }
}

/// Turns source text into a [`SyntaxTree`].
///
/// The scanner only depends on this trait, so any parser able to produce the
/// lowered tree can stand in for swc.
pub trait SourceParser {
    /// Parse one file. The error describes the problem and where it occurred.
    fn parse(&self, code: String, file_path: &str) -> Result<SyntaxTree>;
}

/// swc-backed [`SourceParser`] parsing everything as an ES module.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwcParser {
    options: ParseOptions,
}

impl SwcParser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }
}

impl SourceParser for SwcParser {
    fn parse(&self, code: String, file_path: &str) -> Result<SyntaxTree> {
        parse_jsx_source(code, file_path, self.options.for_file(file_path))
    }
}

/// Parse JSX/TSX source code and lower it into a [`SyntaxTree`].
pub fn parse_jsx_source(code: String, file_path: &str, options: ParseOptions) -> Result<SyntaxTree> {
    let source_map = SourceMap::default();

    GLOBALS.set(&Globals::new(), || {
        let source_file =
            source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let mut parser = Parser::new(options.syntax(), StringInput::from(&*source_file), None);

        let module = parser
            .parse_module()
            .map_err(|e| describe_error(&source_map, e))?;

        Ok(TreeBuilder::new(&source_map).build(&module))
    })
}

fn describe_error(source_map: &SourceMap, error: Error) -> anyhow::Error {
    let loc = source_map.lookup_char_pos(error.span().lo);
    anyhow!(
        "{} ({}:{})",
        error.kind().msg(),
        loc.line,
        loc.col_display + 1
    )
}
