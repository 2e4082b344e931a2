//! Arena-based syntax tree walked by the unwrapped text visitor.
//!
//! The parser lowers the swc AST into this closed set of node kinds. Only the
//! shapes that matter for text detection keep their payload; everything else
//! collapses into its nearest lowered ancestor. Every node stores the index of
//! its parent so ancestor queries are a walk up the arena.

/// Index of a node inside a [`SyntaxTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// 1-based line and column of a position in a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    /// Position reached after reading `text` starting from `self`.
    pub fn advance(self, text: &str) -> Self {
        match text.rfind('\n') {
            Some(last_newline) => Self {
                line: self.line + text.matches('\n').count(),
                col: text[last_newline + 1..].chars().count() + 1,
            },
            None => Self {
                line: self.line,
                col: self.col + text.chars().count(),
            },
        }
    }
}

/// A piece of literal text with the position where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextValue {
    pub value: String,
    pub position: Position,
}

impl TextValue {
    pub fn new(value: impl Into<String>, position: Position) -> Self {
        Self {
            value: value.into(),
            position,
        }
    }
}

/// Value of a JSX attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Boolean shorthand: `<input disabled />`, or an empty container `{}`.
    None,
    /// `title="Submit"`
    Str(TextValue),
    /// `title={cond ? "A" : "B"}`, holding the printed expression source.
    Expr(TextValue),
    /// `icon={<Icon />}`
    Markup,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrNode {
    pub name: String,
    pub value: AttrValue,
}

/// Closed set of lowered node kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Root of the file.
    Module,
    /// `import ... from "..."`; its children are the literals inside it.
    Import,
    /// `"use client"` and other directive prologue strings.
    Directive(TextValue),
    /// JSX element or fragment.
    Element,
    /// Raw text between JSX tags.
    Text(TextValue),
    Attr(AttrNode),
    /// String literal outside of a direct attribute value.
    Str(TextValue),
    /// Template literal; holds its static segments in order.
    Template(Vec<TextValue>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

/// Lowered syntax tree of one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    nodes: Vec<Node>,
}

impl Default for SyntaxTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxTree {
    /// Create a tree holding only the [`NodeKind::Module`] root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                kind: NodeKind::Module,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Number of nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Append a node as the last child of `parent`.
    pub fn push(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Strict ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.node(id).parent, move |id| self.node(*id).parent)
    }

    /// The closest attribute enclosing `id`, if any.
    pub fn nearest_attr(&self, id: NodeId) -> Option<&AttrNode> {
        self.ancestors(id).find_map(|ancestor| match &self.node(ancestor).kind {
            NodeKind::Attr(attr) => Some(attr),
            _ => None,
        })
    }
}
