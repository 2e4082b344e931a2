//! Lowering of the swc AST into the arena [`SyntaxTree`].
//!
//! Only nodes that can carry user-facing text (or that change how that text is
//! treated) get their own arena node. Everything in between is flattened: a
//! string literal nested deep inside an expression simply becomes a child of
//! the nearest lowered ancestor, in source order.

use swc_common::{BytePos, SourceMap, SourceMapper, Spanned};
use swc_ecma_ast::{
    ArrowExpr, BlockStmtOrExpr, Constructor, Expr, ExprStmt, Function, GetterProp, ImportDecl,
    JSXAttr, JSXAttrName, JSXAttrValue, JSXElement, JSXExpr, JSXFragment, JSXText, Lit, Module,
    ModuleItem, SetterProp, Stmt, Str, Tpl,
};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::tree::{AttrNode, AttrValue, NodeId, NodeKind, Position, SyntaxTree, TextValue};

pub struct TreeBuilder<'a> {
    source_map: &'a SourceMap,
    tree: SyntaxTree,
    parent: NodeId,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(source_map: &'a SourceMap) -> Self {
        let tree = SyntaxTree::new();
        let parent = tree.root();
        Self {
            source_map,
            tree,
            parent,
        }
    }

    pub fn build(mut self, module: &Module) -> SyntaxTree {
        module.visit_with(&mut self);
        self.tree
    }

    fn position(&self, pos: BytePos) -> Position {
        let loc = self.source_map.lookup_char_pos(pos);
        Position::new(loc.line, loc.col_display + 1)
    }

    /// Position of a string literal's content, just past the opening quote.
    fn content_position(&self, s: &Str) -> Position {
        self.position(s.span.lo + BytePos(1))
    }

    /// Push a node under the current parent and lower `children` beneath it.
    fn with_node(&mut self, kind: NodeKind, children: impl FnOnce(&mut Self)) {
        let id = self.tree.push(self.parent, kind);
        let prev = std::mem::replace(&mut self.parent, id);
        children(self);
        self.parent = prev;
    }

    fn push_leaf(&mut self, kind: NodeKind) {
        self.tree.push(self.parent, kind);
    }

    /// Lower a statement list, turning its directive prologue into directives.
    fn lower_body(&mut self, stmts: &[Stmt]) {
        let prologue = stmts.iter().take_while(|s| directive(s).is_some()).count();
        for s in stmts[..prologue].iter().filter_map(directive) {
            self.push_directive(s);
        }
        for stmt in &stmts[prologue..] {
            stmt.visit_with(self);
        }
    }

    fn push_directive(&mut self, s: &Str) {
        if let Some(value) = s.value.as_str() {
            let text = TextValue::new(value, self.content_position(s));
            self.push_leaf(NodeKind::Directive(text));
        }
    }

    /// Source text of an attribute's embedded expression.
    fn printed_expr(&self, expr: &Expr) -> Option<TextValue> {
        let span = expr.span();
        let printed = self.source_map.span_to_snippet(span).ok()?;
        Some(TextValue::new(printed, self.position(span.lo)))
    }
}

fn directive(stmt: &Stmt) -> Option<&Str> {
    match stmt {
        Stmt::Expr(ExprStmt { expr, .. }) => match &**expr {
            Expr::Lit(Lit::Str(s)) => Some(s),
            _ => None,
        },
        _ => None,
    }
}

impl<'a> Visit for TreeBuilder<'a> {
    fn visit_module(&mut self, node: &Module) {
        let prologue = node
            .body
            .iter()
            .take_while(|item| matches!(item, ModuleItem::Stmt(s) if directive(s).is_some()))
            .count();

        for item in &node.body[..prologue] {
            if let ModuleItem::Stmt(stmt) = item
                && let Some(s) = directive(stmt)
            {
                self.push_directive(s);
            }
        }
        for item in &node.body[prologue..] {
            item.visit_with(self);
        }
    }

    fn visit_function(&mut self, node: &Function) {
        node.decorators.visit_with(self);
        node.type_params.visit_with(self);
        node.params.visit_with(self);
        node.return_type.visit_with(self);
        if let Some(body) = &node.body {
            self.lower_body(&body.stmts);
        }
    }

    fn visit_arrow_expr(&mut self, node: &ArrowExpr) {
        node.type_params.visit_with(self);
        node.params.visit_with(self);
        node.return_type.visit_with(self);
        match &*node.body {
            BlockStmtOrExpr::BlockStmt(block) => self.lower_body(&block.stmts),
            BlockStmtOrExpr::Expr(expr) => expr.visit_with(self),
        }
    }

    fn visit_constructor(&mut self, node: &Constructor) {
        node.key.visit_with(self);
        node.params.visit_with(self);
        if let Some(body) = &node.body {
            self.lower_body(&body.stmts);
        }
    }

    fn visit_getter_prop(&mut self, node: &GetterProp) {
        node.key.visit_with(self);
        node.type_ann.visit_with(self);
        if let Some(body) = &node.body {
            self.lower_body(&body.stmts);
        }
    }

    fn visit_setter_prop(&mut self, node: &SetterProp) {
        node.key.visit_with(self);
        node.this_param.visit_with(self);
        node.param.visit_with(self);
        if let Some(body) = &node.body {
            self.lower_body(&body.stmts);
        }
    }

    fn visit_import_decl(&mut self, node: &ImportDecl) {
        self.with_node(NodeKind::Import, |this| node.visit_children_with(this));
    }

    fn visit_jsx_element(&mut self, node: &JSXElement) {
        self.with_node(NodeKind::Element, |this| node.visit_children_with(this));
    }

    fn visit_jsx_fragment(&mut self, node: &JSXFragment) {
        self.with_node(NodeKind::Element, |this| node.visit_children_with(this));
    }

    fn visit_jsx_text(&mut self, node: &JSXText) {
        let text = TextValue::new(&*node.value, self.position(node.span.lo));
        self.push_leaf(NodeKind::Text(text));
    }

    fn visit_jsx_attr(&mut self, node: &JSXAttr) {
        let name = match &node.name {
            JSXAttrName::Ident(ident) => ident.sym.to_string(),
            JSXAttrName::JSXNamespacedName(ns) => format!("{}:{}", ns.ns.sym, ns.name.sym),
        };

        let value = match &node.value {
            None => AttrValue::None,
            Some(JSXAttrValue::Str(s)) => s
                .value
                .as_str()
                .map(|v| AttrValue::Str(TextValue::new(v, self.content_position(s))))
                .unwrap_or(AttrValue::None),
            Some(JSXAttrValue::JSXExprContainer(container)) => match &container.expr {
                JSXExpr::Expr(expr) => self
                    .printed_expr(expr)
                    .map(AttrValue::Expr)
                    .unwrap_or(AttrValue::None),
                JSXExpr::JSXEmptyExpr(_) => AttrValue::None,
            },
            Some(_) => AttrValue::Markup,
        };

        self.with_node(NodeKind::Attr(AttrNode { name, value }), |this| {
            // A plain string value belongs to the attribute itself.
            if !matches!(node.value, Some(JSXAttrValue::Str(_))) {
                node.value.visit_with(this);
            }
        });
    }

    fn visit_str(&mut self, node: &Str) {
        if let Some(value) = node.value.as_str() {
            let text = TextValue::new(value, self.content_position(node));
            self.push_leaf(NodeKind::Str(text));
        }
    }

    fn visit_tpl(&mut self, node: &Tpl) {
        let segments = node
            .quasis
            .iter()
            .filter_map(|quasi| {
                let cooked = quasi.cooked.as_ref()?.as_str()?;
                Some(TextValue::new(cooked, self.position(quasi.span.lo)))
            })
            .collect();

        self.with_node(NodeKind::Template(segments), |this| {
            node.exprs.visit_with(this)
        });
    }
}
