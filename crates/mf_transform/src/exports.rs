//! The result container: the object literal the generated body returns.

use mf_ast as ast;
use swc_common::{Span, DUMMY_SP};

use crate::builders::{export_key, return_stmt};

enum Entry {
    /// `exported: local`
    Named {
        exported: ast::ModuleExportName,
        local: ast::Ident,
    },
    /// `...local`, from `export * from`.
    Spread { local: ast::Ident },
}

/// Export records collected while scanning the module, in source order.
#[derive(Default)]
pub(crate) struct ResultContainer {
    entries: Vec<Entry>,
}

impl ResultContainer {
    /// Export `local` under `exported`.
    pub fn export(&mut self, exported: ast::ModuleExportName, local: ast::Ident) {
        self.entries.push(Entry::Named { exported, local });
    }

    /// Export `local` under its own name.
    pub fn export_local(&mut self, local: ast::Ident) {
        self.export(ast::ModuleExportName::Ident(local.clone()), local);
    }

    /// Export `local` as `default`.
    pub fn export_default(&mut self, local: ast::Ident) {
        let exported = ast::Ident::new_no_ctxt("default".into(), local.span);
        self.export(ast::ModuleExportName::Ident(exported), local);
    }

    /// Merge every property of `local` into the container.
    pub fn export_all(&mut self, local: ast::Ident) {
        self.entries.push(Entry::Spread { local });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Build `return { ...stars, name: local, ... };`.
    ///
    /// Star re-exports are spread first so that every explicit export wins
    /// over a same-named binding pulled in by `export *`.
    pub fn into_return(self, span: Span) -> ast::Stmt {
        let (spreads, named): (Vec<_>, Vec<_>) = self
            .entries
            .into_iter()
            .partition(|entry| matches!(entry, Entry::Spread { .. }));

        let props = spreads
            .into_iter()
            .chain(named)
            .map(|entry| match entry {
                Entry::Spread { local } => ast::PropOrSpread::Spread(ast::SpreadElement {
                    dot3_token: DUMMY_SP,
                    expr: Box::new(ast::Expr::Ident(local)),
                }),
                Entry::Named { exported, local } => {
                    ast::PropOrSpread::Prop(Box::new(named_prop(&exported, local)))
                }
            })
            .collect();

        return_stmt(span, ast::Expr::Object(ast::ObjectLit { span, props }))
    }
}

fn named_prop(exported: &ast::ModuleExportName, local: ast::Ident) -> ast::Prop {
    match export_key(exported) {
        ast::PropName::Ident(key) if key.sym == local.sym => ast::Prop::Shorthand(local),
        key => ast::Prop::KeyValue(ast::KeyValueProp {
            key,
            value: Box::new(ast::Expr::Ident(local)),
        }),
    }
}
