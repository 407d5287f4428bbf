//! Identifier bookkeeping: fresh synthetic names and top-level bindings.

use std::collections::HashSet;

use mf_ast as ast;
use swc_ecma_visit::{Visit, VisitWith};

/// Hands out local names that occur nowhere else in the program.
pub(crate) struct NameGen {
    taken: HashSet<String>,
}

impl NameGen {
    /// Seed the generator with every identifier spelled anywhere in `program`.
    pub fn new(program: &ast::Program, reserved: &str) -> Self {
        let mut collector = IdentCollector::default();
        program.visit_with(&mut collector);
        collector.names.insert(reserved.to_string());
        Self {
            taken: collector.names,
        }
    }

    /// `_<base>`, or `_<base><n>` for the first `n` that is still free.
    pub fn fresh(&mut self, base: &str) -> String {
        let stem = format!("_{}", sanitize(base));
        let mut candidate = stem.clone();
        let mut n = 1;
        while self.taken.contains(&candidate) {
            candidate = format!("{stem}{n}");
            n += 1;
        }
        self.taken.insert(candidate.clone());
        candidate
    }
}

/// Keep only characters that can continue an identifier.
fn sanitize(base: &str) -> String {
    let cleaned: String = base
        .chars()
        .map(|c| if ast::Ident::is_valid_continue(c) { c } else { '_' })
        .collect();
    if cleaned.is_empty() {
        "ref".to_string()
    } else {
        cleaned
    }
}

#[derive(Default)]
struct IdentCollector {
    names: HashSet<String>,
}

impl Visit for IdentCollector {
    fn visit_ident(&mut self, node: &ast::Ident) {
        self.names.insert(node.sym.to_string());
    }

    fn visit_ident_name(&mut self, node: &ast::IdentName) {
        self.names.insert(node.sym.to_string());
    }
}

/// Names bound at the top level of `program` once types are erased.
///
/// Includes `var` declarations nested in top-level blocks and loops, which
/// hoist to the same scope.
pub(crate) fn top_level_bindings(program: &ast::Program) -> HashSet<String> {
    let mut names = hoisted_var_names(program);
    match program {
        ast::Program::Module(module) => {
            for item in &module.body {
                match item {
                    ast::ModuleItem::ModuleDecl(decl) => module_decl_bindings(decl, &mut names),
                    ast::ModuleItem::Stmt(ast::Stmt::Decl(decl)) => {
                        decl_bindings(decl, &mut names)
                    }
                    ast::ModuleItem::Stmt(_) => {}
                }
            }
        }
        ast::Program::Script(script) => {
            for stmt in &script.body {
                if let ast::Stmt::Decl(decl) = stmt {
                    decl_bindings(decl, &mut names);
                }
            }
        }
    }
    names
}

/// Names of the `var` declarations that hoist to the scope `node` opens.
pub(crate) fn hoisted_var_names<N>(node: &N) -> HashSet<String>
where
    N: VisitWith<HoistedVars>,
{
    let mut collector = HoistedVars::default();
    node.visit_with(&mut collector);
    collector.names
}

/// Walks statements for `var` declarators without entering nested scopes.
#[derive(Default)]
pub(crate) struct HoistedVars {
    names: HashSet<String>,
}

impl Visit for HoistedVars {
    fn visit_var_decl(&mut self, node: &ast::VarDecl) {
        if node.kind != ast::VarDeclKind::Var || node.declare {
            return;
        }
        let mut out = Vec::new();
        for declarator in &node.decls {
            pat_bindings(&declarator.name, &mut out);
        }
        self.names.extend(out.into_iter().map(|id| id.sym.to_string()));
    }

    // A `var` can only sit in a statement, and expressions only reach
    // statements through function bodies.
    fn visit_expr(&mut self, _: &ast::Expr) {}

    fn visit_function(&mut self, _: &ast::Function) {}

    fn visit_class(&mut self, _: &ast::Class) {}

    fn visit_ts_module_decl(&mut self, _: &ast::TsModuleDecl) {}
}

fn module_decl_bindings(decl: &ast::ModuleDecl, names: &mut HashSet<String>) {
    match decl {
        ast::ModuleDecl::Import(import) => {
            for specifier in &import.specifiers {
                let local = match specifier {
                    ast::ImportSpecifier::Named(s) => &s.local,
                    ast::ImportSpecifier::Default(s) => &s.local,
                    ast::ImportSpecifier::Namespace(s) => &s.local,
                };
                names.insert(local.sym.to_string());
            }
        }
        ast::ModuleDecl::ExportDecl(export) => decl_bindings(&export.decl, names),
        ast::ModuleDecl::ExportDefaultDecl(export) => match &export.decl {
            ast::DefaultDecl::Class(class) => {
                if let Some(id) = &class.ident {
                    names.insert(id.sym.to_string());
                }
            }
            ast::DefaultDecl::Fn(function) => {
                if let Some(id) = &function.ident {
                    names.insert(id.sym.to_string());
                }
            }
            ast::DefaultDecl::TsInterfaceDecl(_) => {}
        },
        ast::ModuleDecl::TsImportEquals(import) => {
            names.insert(import.id.sym.to_string());
        }
        ast::ModuleDecl::ExportNamed(_)
        | ast::ModuleDecl::ExportDefaultExpr(_)
        | ast::ModuleDecl::ExportAll(_)
        | ast::ModuleDecl::TsExportAssignment(_)
        | ast::ModuleDecl::TsNamespaceExport(_) => {}
    }
}

/// Runtime names introduced by a declaration, in source order.
pub(crate) fn declared_names(decl: &ast::Decl) -> Vec<ast::Ident> {
    let mut out = Vec::new();
    match decl {
        ast::Decl::Class(class) => out.push(class.ident.clone()),
        ast::Decl::Fn(function) => out.push(function.ident.clone()),
        ast::Decl::Var(var) => {
            for declarator in &var.decls {
                pat_bindings(&declarator.name, &mut out);
            }
        }
        ast::Decl::Using(using) => {
            for declarator in &using.decls {
                pat_bindings(&declarator.name, &mut out);
            }
        }
        ast::Decl::TsEnum(ts_enum) => out.push(ts_enum.id.clone()),
        ast::Decl::TsModule(ts_module) => {
            if let ast::TsModuleName::Ident(id) = &ts_module.id {
                out.push(id.clone());
            }
        }
        ast::Decl::TsInterface(_) | ast::Decl::TsTypeAlias(_) => {}
    }
    out
}

fn decl_bindings(decl: &ast::Decl, names: &mut HashSet<String>) {
    if !has_runtime_value(decl) {
        return;
    }
    names.extend(declared_names(decl).into_iter().map(|id| id.sym.to_string()));
}

/// Whether the declaration leaves a value behind once types are erased.
pub(crate) fn has_runtime_value(decl: &ast::Decl) -> bool {
    match decl {
        ast::Decl::Class(class) => !class.declare,
        ast::Decl::Fn(function) => !function.declare,
        ast::Decl::Var(var) => !var.declare,
        ast::Decl::Using(_) => true,
        // Const enums are inlined at their use sites.
        ast::Decl::TsEnum(ts_enum) => !ts_enum.declare && !ts_enum.is_const,
        ast::Decl::TsModule(ts_module) => {
            !ts_module.declare
                && matches!(ts_module.id, ast::TsModuleName::Ident(_))
                && ts_module.body.as_ref().is_some_and(namespace_has_value)
        }
        ast::Decl::TsInterface(_) | ast::Decl::TsTypeAlias(_) => false,
    }
}

/// A namespace is only emitted when its body holds something besides types.
fn namespace_has_value(body: &ast::TsNamespaceBody) -> bool {
    match body {
        ast::TsNamespaceBody::TsModuleBlock(block) => block.body.iter().any(|item| match item {
            ast::ModuleItem::Stmt(ast::Stmt::Decl(decl)) => has_runtime_value(decl),
            ast::ModuleItem::Stmt(_) => true,
            ast::ModuleItem::ModuleDecl(ast::ModuleDecl::ExportDecl(export)) => {
                has_runtime_value(&export.decl)
            }
            ast::ModuleItem::ModuleDecl(ast::ModuleDecl::TsImportEquals(import)) => {
                !import.is_type_only
            }
            ast::ModuleItem::ModuleDecl(_) => true,
        }),
        ast::TsNamespaceBody::TsNamespaceDecl(nested) => {
            !nested.declare && namespace_has_value(&nested.body)
        }
    }
}

pub(crate) fn pat_bindings(pat: &ast::Pat, out: &mut Vec<ast::Ident>) {
    match pat {
        ast::Pat::Ident(binding) => out.push(binding.id.clone()),
        ast::Pat::Array(array) => {
            for elem in array.elems.iter().flatten() {
                pat_bindings(elem, out);
            }
        }
        ast::Pat::Rest(rest) => pat_bindings(&rest.arg, out),
        ast::Pat::Object(object) => {
            for prop in &object.props {
                match prop {
                    ast::ObjectPatProp::KeyValue(kv) => pat_bindings(&kv.value, out),
                    ast::ObjectPatProp::Assign(assign) => out.push(assign.key.id.clone()),
                    ast::ObjectPatProp::Rest(rest) => pat_bindings(&rest.arg, out),
                }
            }
        }
        ast::Pat::Assign(assign) => pat_bindings(&assign.left, out),
        ast::Pat::Invalid(_) | ast::Pat::Expr(_) => {}
    }
}
