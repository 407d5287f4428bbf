//! Bindings produced by a static import or re-export.
//!
//! `import d, { a, b as c } from 'm'` → `const { default: d, a, b: c } = await <hook>("m")`
//! `import * as ns from 'm'`          → `const ns = await <hook>("m")`
//! `import 'm'`                       → `await <hook>("m")`

use mf_ast as ast;
use swc_common::{Span, DUMMY_SP};

use crate::builders::{
    await_hook_import, const_decl, declarator, expr_stmt, import_key, key_value_pat, object_pat,
    shorthand_pat,
};

/// How the names of one import declaration are bound.
#[derive(Default)]
pub(crate) struct ImportBindings {
    /// `* as ns`: the whole resolved module object.
    namespace: Option<ast::Ident>,
    /// Properties destructured out of the resolved module object.
    props: Vec<ast::ObjectPatProp>,
}

impl ImportBindings {
    pub fn bind_namespace(&mut self, local: ast::Ident) {
        self.namespace = Some(local);
    }

    pub fn bind_default(&mut self, local: ast::Ident) {
        self.props.push(key_value_pat(
            ast::PropName::Ident(ast::IdentName::new("default".into(), local.span)),
            local,
        ));
    }

    /// Bind property `imported` of the module object to `local`.
    pub fn bind_named(&mut self, imported: &ast::ModuleExportName, local: ast::Ident) {
        match imported {
            ast::ModuleExportName::Ident(id) if id.sym == local.sym => {
                self.props.push(shorthand_pat(local))
            }
            _ => self.props.push(key_value_pat(import_key(imported), local)),
        }
    }

    /// Bind every property except `default` to `rest`; `unused` receives
    /// `default` so it stays out of the rest object.
    pub fn bind_all_but_default(&mut self, unused: ast::Ident, rest: ast::Ident) {
        self.bind_default(unused);
        self.props.push(ast::ObjectPatProp::Rest(ast::RestPat {
            span: rest.span,
            dot3_token: DUMMY_SP,
            arg: Box::new(ast::Pat::Ident(ast::BindingIdent::from(rest))),
            type_ann: None,
        }));
    }

    pub fn is_empty(&self) -> bool {
        self.namespace.is_none() && self.props.is_empty()
    }

    /// Emit the statement that calls the hook and binds the names.
    pub fn into_stmt(
        self,
        hook: &str,
        span: Span,
        src: &ast::Str,
        with: Option<&ast::ObjectLit>,
    ) -> ast::Stmt {
        let call = await_hook_import(hook, span, src, with);

        match self.namespace {
            None if self.props.is_empty() => expr_stmt(span, call),
            None => const_decl(span, vec![declarator(object_pat(span, self.props), call)]),
            Some(ns) => {
                let mut decls = vec![declarator(
                    ast::Pat::Ident(ast::BindingIdent::from(ns.clone())),
                    call,
                )];
                if !self.props.is_empty() {
                    decls.push(declarator(
                        object_pat(span, self.props),
                        Box::new(ast::Expr::Ident(ns)),
                    ));
                }
                const_decl(span, decls)
            }
        }
    }
}
