//! Unwrapped text detection over a lowered [`SyntaxTree`].
//!
//! Walks the tree once in document order and decides for every textual node
//! whether it is user-facing copy that skipped the translation function:
//!
//! - import declarations are skipped with their whole subtree
//! - JSX text is reported when eligible
//! - attributes other than `className` are reported from their string value,
//!   or from the first quoted string inside an embedded expression
//! - string literals and template segments are reported unless their nearest
//!   attribute ancestor is `className`
//!
//! Findings come out in the order their source appears in the file.

use crate::core::classify::{first_quoted_substring, is_eligible, is_trim_char, trim_text};
use crate::core::tree::{AttrNode, AttrValue, NodeId, NodeKind, Position, SyntaxTree, TextValue};
use crate::issues::{Finding, SourceLocation};

/// Attribute whose values are styling tokens, never copy.
pub const CLASS_NAME_ATTR: &str = "className";

/// Whether the walk descends into a node's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Walk {
    Descend,
    Skip,
}

pub struct UnwrappedTextVisitor<'a> {
    file_path: &'a str,
    tree: &'a SyntaxTree,
    findings: Vec<Finding>,
}

impl<'a> UnwrappedTextVisitor<'a> {
    pub fn new(file_path: &'a str, tree: &'a SyntaxTree) -> Self {
        Self {
            file_path,
            tree,
            findings: Vec::new(),
        }
    }

    /// Walk the whole tree and return its findings in document order.
    pub fn check(mut self) -> Vec<Finding> {
        let tree = self.tree;
        let mut stack = vec![tree.root()];

        while let Some(id) = stack.pop() {
            let node = tree.node(id);
            if self.dispatch(id, &node.kind) == Walk::Descend {
                stack.extend(node.children.iter().rev());
            }
        }

        self.findings
    }

    fn dispatch(&mut self, id: NodeId, kind: &NodeKind) -> Walk {
        match kind {
            NodeKind::Module | NodeKind::Element | NodeKind::Directive(_) => Walk::Descend,
            NodeKind::Import => Walk::Skip,
            NodeKind::Text(text) => {
                self.check_text(text);
                Walk::Descend
            }
            NodeKind::Attr(attr) => {
                self.check_attr(attr);
                Walk::Descend
            }
            NodeKind::Str(text) => {
                if !self.in_class_name(id) {
                    self.check_text(text);
                }
                Walk::Descend
            }
            NodeKind::Template(segments) => {
                if !self.in_class_name(id) {
                    for segment in segments {
                        self.check_text(segment);
                    }
                }
                Walk::Descend
            }
        }
    }

    fn in_class_name(&self, id: NodeId) -> bool {
        self.tree
            .nearest_attr(id)
            .is_some_and(|attr| attr.name == CLASS_NAME_ATTR)
    }

    fn check_attr(&mut self, attr: &AttrNode) {
        if attr.name == CLASS_NAME_ATTR {
            return;
        }

        match &attr.value {
            AttrValue::Str(text) => self.check_text(text),
            AttrValue::Expr(printed) => self.check_expr(printed),
            AttrValue::None | AttrValue::Markup => {}
        }
    }

    /// Narrow an embedded expression down to its first quoted string.
    ///
    /// The expression as a whole must pass the eligibility gate first; an
    /// expression without any quoted string yields nothing.
    fn check_expr(&mut self, printed: &TextValue) {
        if !is_eligible(&printed.value) {
            return;
        }

        if let Some(quoted) = first_quoted_substring(&printed.value) {
            let opening = &printed.value[..quoted.start + 1];
            let position = printed.position.advance(opening);
            self.check_value(quoted.inner, position);
        }
    }

    fn check_text(&mut self, text: &TextValue) {
        self.check_value(&text.value, text.position);
    }

    fn check_value(&mut self, raw: &str, position: Position) {
        let trimmed = trim_text(raw);
        if !is_eligible(trimmed) {
            return;
        }

        let leading_len = raw.len() - raw.trim_start_matches(is_trim_char).len();
        let position = position.advance(&raw[..leading_len]);

        self.findings.push(Finding {
            file: self.file_path.to_owned(),
            text: trimmed.to_owned(),
            location: SourceLocation::new(position.line, position.col),
        });
    }
}
