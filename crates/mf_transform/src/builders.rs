//! Factories for the synthetic nodes the rewrite emits.

use mf_ast as ast;
use swc_common::{Span, DUMMY_SP};

pub(crate) fn ident(name: &str, span: Span) -> ast::Ident {
    ast::Ident::new_no_ctxt(name.into(), span)
}

pub(crate) fn ident_expr(name: &str, span: Span) -> Box<ast::Expr> {
    Box::new(ast::Expr::Ident(ident(name, span)))
}

pub(crate) fn str_lit(value: &str, span: Span) -> ast::Str {
    ast::Str {
        span,
        value: value.into(),
        raw: None,
    }
}

/// Build `<hook>(<args>)`.
pub(crate) fn hook_call(hook: &str, span: Span, args: Vec<ast::ExprOrSpread>) -> ast::Expr {
    ast::Expr::Call(ast::CallExpr {
        span,
        callee: ast::Callee::Expr(ident_expr(hook, span)),
        args,
        type_args: None,
        ..Default::default()
    })
}

/// Build `await <hook>(<src>[, { with: <attributes> }])` for a static
/// import or re-export.
pub(crate) fn await_hook_import(
    hook: &str,
    span: Span,
    src: &ast::Str,
    with: Option<&ast::ObjectLit>,
) -> Box<ast::Expr> {
    let mut args = vec![ast::ExprOrSpread {
        spread: None,
        expr: Box::new(ast::Expr::Lit(ast::Lit::Str(src.clone()))),
    }];

    if let Some(attributes) = with {
        let options = ast::ObjectLit {
            span: attributes.span,
            props: vec![ast::PropOrSpread::Prop(Box::new(ast::Prop::KeyValue(
                ast::KeyValueProp {
                    key: ast::PropName::Ident(ast::IdentName::new("with".into(), DUMMY_SP)),
                    value: Box::new(ast::Expr::Object(attributes.clone())),
                },
            )))],
        };
        args.push(ast::ExprOrSpread {
            spread: None,
            expr: Box::new(ast::Expr::Object(options)),
        });
    }

    Box::new(ast::Expr::Await(ast::AwaitExpr {
        span,
        arg: Box::new(hook_call(hook, span, args)),
    }))
}

/// Build `<hook>.meta`.
pub(crate) fn hook_meta(hook: &str, span: Span) -> ast::Expr {
    ast::Expr::Member(ast::MemberExpr {
        span,
        obj: ident_expr(hook, span),
        prop: ast::MemberProp::Ident(ast::IdentName::new("meta".into(), span)),
    })
}

pub(crate) fn binding(name: &str, span: Span) -> ast::Pat {
    ast::Pat::Ident(ast::BindingIdent::from(ident(name, span)))
}

/// Property key for reading or writing an export called `name`.
///
/// String export names (`export { x as "a-b" }`) become computed keys so
/// they survive printing, and so does `__proto__`: as a plain key in an
/// object literal it would set the prototype instead of an own property.
pub(crate) fn export_key(name: &ast::ModuleExportName) -> ast::PropName {
    match name {
        ast::ModuleExportName::Ident(id) if &*id.sym != "__proto__" => {
            ast::PropName::Ident(ast::IdentName::new(id.sym.clone(), id.span))
        }
        ast::ModuleExportName::Ident(id) => computed_key(str_lit(&id.sym, id.span)),
        ast::ModuleExportName::Str(s) => computed_key(s.clone()),
    }
}

fn computed_key(key: ast::Str) -> ast::PropName {
    ast::PropName::Computed(ast::ComputedPropName {
        span: key.span,
        expr: Box::new(ast::Expr::Lit(ast::Lit::Str(key))),
    })
}

/// Key used to read `name` out of a resolved module object.
pub(crate) fn import_key(name: &ast::ModuleExportName) -> ast::PropName {
    match name {
        ast::ModuleExportName::Ident(id) => {
            ast::PropName::Ident(ast::IdentName::new(id.sym.clone(), id.span))
        }
        ast::ModuleExportName::Str(s) => ast::PropName::Str(s.clone()),
    }
}

/// Object pattern property `<key>: <local>`.
pub(crate) fn key_value_pat(key: ast::PropName, local: ast::Ident) -> ast::ObjectPatProp {
    ast::ObjectPatProp::KeyValue(ast::KeyValuePatProp {
        key,
        value: Box::new(ast::Pat::Ident(ast::BindingIdent::from(local))),
    })
}

/// Object pattern property `<local>` (shorthand).
pub(crate) fn shorthand_pat(local: ast::Ident) -> ast::ObjectPatProp {
    ast::ObjectPatProp::Assign(ast::AssignPatProp {
        span: local.span,
        key: ast::BindingIdent::from(local),
        value: None,
    })
}

pub(crate) fn object_pat(span: Span, props: Vec<ast::ObjectPatProp>) -> ast::Pat {
    ast::Pat::Object(ast::ObjectPat {
        span,
        props,
        optional: false,
        type_ann: None,
    })
}

pub(crate) fn declarator(name: ast::Pat, init: Box<ast::Expr>) -> ast::VarDeclarator {
    ast::VarDeclarator {
        span: DUMMY_SP,
        name,
        init: Some(init),
        definite: false,
    }
}

/// Build `const <decls>;`.
pub(crate) fn const_decl(span: Span, decls: Vec<ast::VarDeclarator>) -> ast::Stmt {
    ast::Stmt::Decl(ast::Decl::Var(Box::new(ast::VarDecl {
        span,
        ctxt: Default::default(),
        kind: ast::VarDeclKind::Const,
        declare: false,
        decls,
    })))
}

pub(crate) fn expr_stmt(span: Span, expr: Box<ast::Expr>) -> ast::Stmt {
    ast::Stmt::Expr(ast::ExprStmt { span, expr })
}

pub(crate) fn return_stmt(span: Span, arg: ast::Expr) -> ast::Stmt {
    ast::Stmt::Return(ast::ReturnStmt {
        span,
        arg: Some(Box::new(arg)),
    })
}
