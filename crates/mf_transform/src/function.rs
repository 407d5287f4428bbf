//! The function signature around a rewritten body.
//!
//! The rewrite produces a statement list; hosts either print it and hand it
//! to an `AsyncFunction` constructor together with the hook name, or wrap it
//! as AST with the helpers here.

use mf_ast::{self as ast, ModuleToFunctionOptions};
use swc_common::DUMMY_SP;

use crate::builders::binding;

/// The single parameter of the generated function: the import hook.
pub fn hook_param(options: &ModuleToFunctionOptions) -> ast::Param {
    ast::Param {
        span: DUMMY_SP,
        decorators: Vec::new(),
        pat: binding(&options.import_name, DUMMY_SP),
    }
}

/// `async function (<hook>) { <body> }`
pub fn into_async_function(body: ast::Script, options: &ModuleToFunctionOptions) -> ast::Function {
    ast::Function {
        params: vec![hook_param(options)],
        decorators: Vec::new(),
        span: body.span,
        ctxt: Default::default(),
        body: Some(ast::BlockStmt {
            span: body.span,
            ctxt: Default::default(),
            stmts: body.body,
        }),
        is_generator: false,
        is_async: true,
        type_params: None,
        return_type: None,
    }
}

/// A script holding the single statement `(async function (<hook>) { <body> });`.
pub fn async_function_script(body: ast::Script, options: &ModuleToFunctionOptions) -> ast::Script {
    let span = body.span;
    let function = ast::Expr::Fn(ast::FnExpr {
        ident: None,
        function: Box::new(into_async_function(body, options)),
    });

    ast::Script {
        span,
        body: vec![ast::Stmt::Expr(ast::ExprStmt {
            span,
            expr: Box::new(ast::Expr::Paren(ast::ParenExpr {
                span,
                expr: Box::new(function),
            })),
        })],
        shebang: None,
    }
}
