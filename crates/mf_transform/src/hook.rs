//! Routing of `import()` and `import.meta` through the import hook.
//!
//! `import(x)`     → `<hook>(x)`
//! `import.meta`   → `<hook>.meta`

use log::trace;
use mf_ast as ast;
use swc_ecma_visit::{Visit, VisitMut, VisitMutWith, VisitWith};

use crate::builders::{hook_meta, ident_expr};
use crate::names::{declared_names, hoisted_var_names, pat_bindings};

/// Visitor that rewrites dynamic imports and `import.meta` anywhere in a tree.
pub struct HookRewriter {
    hook: String,
    rewritten: usize,
}

impl HookRewriter {
    pub fn new(hook: impl Into<String>) -> Self {
        Self {
            hook: hook.into(),
            rewritten: 0,
        }
    }

    /// Number of expressions rewritten so far.
    pub fn rewritten(&self) -> usize {
        self.rewritten
    }
}

impl VisitMut for HookRewriter {
    fn visit_mut_expr(&mut self, node: &mut ast::Expr) {
        node.visit_mut_children_with(self);

        match node {
            ast::Expr::Call(call) => {
                let ast::Callee::Import(import) = &call.callee else {
                    return;
                };
                // `import.source(...)` and `import.defer(...)` have no hook
                // equivalent.
                if !matches!(import.phase, ast::ImportPhase::Evaluation) {
                    return;
                }
                let span = import.span;
                trace!("rewriting dynamic import at {:?}", call.span);
                call.callee = ast::Callee::Expr(ident_expr(&self.hook, span));
                self.rewritten += 1;
            }
            ast::Expr::MetaProp(meta) if matches!(meta.kind, ast::MetaPropKind::ImportMeta) => {
                let span = meta.span;
                trace!("rewriting import.meta at {span:?}");
                *node = hook_meta(&self.hook, span);
                self.rewritten += 1;
            }
            _ => {}
        }
    }
}

fn is_hook_use(expr: &ast::Expr) -> bool {
    match expr {
        ast::Expr::Call(ast::CallExpr {
            callee: ast::Callee::Import(import),
            ..
        }) => matches!(import.phase, ast::ImportPhase::Evaluation),
        ast::Expr::MetaProp(meta) => matches!(meta.kind, ast::MetaPropKind::ImportMeta),
        _ => false,
    }
}

/// Whether some `import()` or `import.meta` in `program` sits inside a
/// nested scope that rebinds `hook`, so the rewrite would reach the wrong
/// value.
pub(crate) fn hook_is_shadowed(program: &ast::Program, hook: &str) -> bool {
    let mut check = ShadowCheck {
        hook,
        depth: 0,
        found: false,
    };
    program.visit_with(&mut check);
    check.found
}

struct ShadowCheck<'a> {
    hook: &'a str,
    /// Number of enclosing scopes that rebind the hook.
    depth: usize,
    found: bool,
}

impl ShadowCheck<'_> {
    fn scoped(&mut self, binds: bool, visit: impl FnOnce(&mut Self)) {
        if binds {
            self.depth += 1;
        }
        visit(self);
        if binds {
            self.depth -= 1;
        }
    }

    fn binds_in_pats<'p>(&self, pats: impl IntoIterator<Item = &'p ast::Pat>) -> bool {
        let mut out = Vec::new();
        for pat in pats {
            pat_bindings(pat, &mut out);
        }
        out.iter().any(|id| &*id.sym == self.hook)
    }

    fn binds_in_body(&self, body: Option<&ast::BlockStmt>) -> bool {
        body.is_some_and(|body| hoisted_var_names(body).contains(self.hook))
    }

    fn binds_lexically(&self, stmts: &[ast::Stmt]) -> bool {
        stmts.iter().any(|stmt| match stmt {
            ast::Stmt::Decl(decl) => declared_names(decl).iter().any(|id| &*id.sym == self.hook),
            _ => false,
        })
    }

    fn binds_in_head(&self, decl: &ast::VarDecl) -> bool {
        decl.kind != ast::VarDeclKind::Var
            && self.binds_in_pats(decl.decls.iter().map(|d| &d.name))
    }

    fn binds_ident(&self, ident: Option<&ast::Ident>) -> bool {
        ident.is_some_and(|id| &*id.sym == self.hook)
    }
}

impl Visit for ShadowCheck<'_> {
    fn visit_expr(&mut self, node: &ast::Expr) {
        if self.depth > 0 && is_hook_use(node) {
            trace!("hook {:?} is shadowed by a nested binding", self.hook);
            self.found = true;
        }
        node.visit_children_with(self);
    }

    fn visit_function(&mut self, node: &ast::Function) {
        let binds = self.binds_in_pats(node.params.iter().map(|p| &p.pat))
            || self.binds_in_body(node.body.as_ref());
        self.scoped(binds, |v| node.visit_children_with(v));
    }

    fn visit_arrow_expr(&mut self, node: &ast::ArrowExpr) {
        let body = match &*node.body {
            ast::BlockStmtOrExpr::BlockStmt(block) => Some(block),
            ast::BlockStmtOrExpr::Expr(_) => None,
        };
        let binds = self.binds_in_pats(&node.params) || self.binds_in_body(body);
        self.scoped(binds, |v| node.visit_children_with(v));
    }

    fn visit_constructor(&mut self, node: &ast::Constructor) {
        let params = node.params.iter().filter_map(|param| match param {
            ast::ParamOrTsParamProp::Param(param) => Some(&param.pat),
            ast::ParamOrTsParamProp::TsParamProp(_) => None,
        });
        let binds = self.binds_in_pats(params) || self.binds_in_body(node.body.as_ref());
        self.scoped(binds, |v| node.visit_children_with(v));
    }

    fn visit_getter_prop(&mut self, node: &ast::GetterProp) {
        let binds = self.binds_in_body(node.body.as_ref());
        self.scoped(binds, |v| node.visit_children_with(v));
    }

    fn visit_setter_prop(&mut self, node: &ast::SetterProp) {
        let binds = self.binds_in_pats([&*node.param]) || self.binds_in_body(node.body.as_ref());
        self.scoped(binds, |v| node.visit_children_with(v));
    }

    fn visit_static_block(&mut self, node: &ast::StaticBlock) {
        let binds = self.binds_in_body(Some(&node.body));
        self.scoped(binds, |v| node.visit_children_with(v));
    }

    fn visit_fn_expr(&mut self, node: &ast::FnExpr) {
        let binds = self.binds_ident(node.ident.as_ref());
        self.scoped(binds, |v| node.visit_children_with(v));
    }

    fn visit_class_expr(&mut self, node: &ast::ClassExpr) {
        let binds = self.binds_ident(node.ident.as_ref());
        self.scoped(binds, |v| node.visit_children_with(v));
    }

    fn visit_block_stmt(&mut self, node: &ast::BlockStmt) {
        let binds = self.binds_lexically(&node.stmts);
        self.scoped(binds, |v| node.visit_children_with(v));
    }

    fn visit_switch_stmt(&mut self, node: &ast::SwitchStmt) {
        node.discriminant.visit_with(self);
        let binds = node.cases.iter().any(|case| self.binds_lexically(&case.cons));
        self.scoped(binds, |v| {
            for case in &node.cases {
                case.visit_with(v);
            }
        });
    }

    fn visit_catch_clause(&mut self, node: &ast::CatchClause) {
        let binds = self.binds_in_pats(node.param.as_ref());
        self.scoped(binds, |v| node.visit_children_with(v));
    }

    fn visit_for_stmt(&mut self, node: &ast::ForStmt) {
        let binds = match &node.init {
            Some(ast::VarDeclOrExpr::VarDecl(decl)) => self.binds_in_head(decl),
            _ => false,
        };
        self.scoped(binds, |v| node.visit_children_with(v));
    }

    fn visit_for_in_stmt(&mut self, node: &ast::ForInStmt) {
        let binds = matches!(&node.left, ast::ForHead::VarDecl(decl) if self.binds_in_head(decl));
        self.scoped(binds, |v| node.visit_children_with(v));
    }

    fn visit_for_of_stmt(&mut self, node: &ast::ForOfStmt) {
        let binds = matches!(&node.left, ast::ForHead::VarDecl(decl) if self.binds_in_head(decl));
        self.scoped(binds, |v| node.visit_children_with(v));
    }
}
