//! Top-level rewriting entry point.
//!
//! Takes a parsed module and rewrites it into the body of an async function
//! `async function (<hook>) { ... }` that returns the module's exports.

use log::debug;
use mf_ast::{self as ast, ConfigError, ModuleToFunctionOptions};
use swc_common::Span;
use swc_ecma_visit::VisitMutWith;

use crate::builders::{await_hook_import, binding, const_decl, declarator};
use crate::exports::ResultContainer;
use crate::hook::{hook_is_shadowed, HookRewriter};
use crate::imports::ImportBindings;
use crate::names::{declared_names, has_runtime_value, top_level_bindings, NameGen};

/// Rewrite `program` in place into an async function body.
///
/// Afterwards `program` is a `Program::Script` whose statements:
/// - load every static import through `await <hook>(specifier)`
/// - call `<hook>(...)` wherever the module called `import(...)`
/// - read `<hook>.meta` wherever the module read `import.meta`
/// - end with `return { ... }` holding every export under its exported name
///
/// The hook (`options.import_name`) is the only parameter the enclosing
/// function needs; see [`crate::hook_param`].
///
/// Fails without touching `program` if the hook name is not a usable
/// identifier, is already bound at the top level, or is rebound by a nested
/// scope that uses `import()` or `import.meta`.
pub fn module_to_function(
    program: &mut ast::Program,
    options: &ModuleToFunctionOptions,
) -> Result<(), ConfigError> {
    options.validate()?;
    let hook = options.import_name.as_str();
    if top_level_bindings(program).contains(hook) {
        return Err(ConfigError::ImportNameCollision {
            name: hook.to_string(),
        });
    }

    if hook_is_shadowed(program, hook) {
        return Err(ConfigError::ImportNameShadowed {
            name: hook.to_string(),
        });
    }

    let names = NameGen::new(program, hook);

    let mut hook_rewriter = HookRewriter::new(hook);
    program.visit_mut_with(&mut hook_rewriter);

    let (span, items) = match program {
        ast::Program::Module(module) => (module.span, std::mem::take(&mut module.body)),
        ast::Program::Script(script) => (
            script.span,
            std::mem::take(&mut script.body)
                .into_iter()
                .map(ast::ModuleItem::Stmt)
                .collect(),
        ),
    };

    let mut rewriter = ModuleRewriter {
        hook,
        names,
        body: Vec::with_capacity(items.len() + 1),
        exports: ResultContainer::default(),
        imports: 0,
    };
    for item in items {
        rewriter.rewrite_item(item);
    }

    debug!(
        "module rewritten: {} import(s), {} export(s), {} dynamic import/meta expression(s)",
        rewriter.imports,
        rewriter.exports.len(),
        hook_rewriter.rewritten()
    );

    let mut body = rewriter.body;
    body.push(rewriter.exports.into_return(span));

    // A hashbang is only legal at the very start of a source text, never
    // inside a function body.
    *program = ast::Program::Script(ast::Script {
        span,
        body,
        shebang: None,
    });

    Ok(())
}

struct ModuleRewriter<'a> {
    hook: &'a str,
    names: NameGen,
    body: Vec<ast::Stmt>,
    exports: ResultContainer,
    imports: usize,
}

impl ModuleRewriter<'_> {
    fn rewrite_item(&mut self, item: ast::ModuleItem) {
        match item {
            ast::ModuleItem::Stmt(stmt) => self.body.push(stmt),
            ast::ModuleItem::ModuleDecl(decl) => self.rewrite_module_decl(decl),
        }
    }

    fn rewrite_module_decl(&mut self, decl: ast::ModuleDecl) {
        match decl {
            ast::ModuleDecl::Import(import) => self.rewrite_import(import),
            ast::ModuleDecl::ExportDecl(export) => self.rewrite_export_decl(export),
            ast::ModuleDecl::ExportNamed(export) => self.rewrite_export_named(export),
            ast::ModuleDecl::ExportDefaultDecl(export) => self.rewrite_export_default_decl(export),
            ast::ModuleDecl::ExportDefaultExpr(export) => {
                debug!("export default <expr>");
                self.export_default_expr(export.span, export.expr);
            }
            ast::ModuleDecl::ExportAll(export) => self.rewrite_export_all(export),
            ast::ModuleDecl::TsImportEquals(import) => self.rewrite_ts_import_equals(*import),
            ast::ModuleDecl::TsExportAssignment(export) => {
                debug!("export = <expr>, exported as default");
                self.export_default_expr(export.span, export.expr);
            }
            ast::ModuleDecl::TsNamespaceExport(export) => {
                debug!("dropping `export as namespace {}`", export.id.sym);
            }
        }
    }

    /// `import ... from 'm'` → `const { ... } = await <hook>("m")`
    fn rewrite_import(&mut self, import: ast::ImportDecl) {
        if import.type_only {
            debug!("dropping type-only import of {:?}", import.src.value);
            return;
        }

        let had_specifiers = !import.specifiers.is_empty();
        let mut bindings = ImportBindings::default();
        for specifier in import.specifiers {
            match specifier {
                ast::ImportSpecifier::Named(s) if s.is_type_only => {}
                ast::ImportSpecifier::Named(s) => {
                    let imported = s
                        .imported
                        .unwrap_or_else(|| ast::ModuleExportName::Ident(s.local.clone()));
                    bindings.bind_named(&imported, s.local);
                }
                ast::ImportSpecifier::Default(s) => bindings.bind_default(s.local),
                ast::ImportSpecifier::Namespace(s) => bindings.bind_namespace(s.local),
            }
        }

        // `import { type A } from 'm'` is elided like `import type`.
        if had_specifiers && bindings.is_empty() {
            debug!("dropping import of {:?} with only type specifiers", import.src.value);
            return;
        }

        debug!("import {:?}", import.src.value);
        self.imports += 1;
        self.body.push(bindings.into_stmt(
            self.hook,
            import.span,
            &import.src,
            import.with.as_deref(),
        ));
    }

    /// `export <decl>` → `<decl>`, exporting every name it binds.
    fn rewrite_export_decl(&mut self, export: ast::ExportDecl) {
        let names = if has_runtime_value(&export.decl) {
            declared_names(&export.decl)
        } else {
            Vec::new()
        };

        debug!("export declaration binding {} name(s)", names.len());
        self.body.push(ast::Stmt::Decl(export.decl));
        for name in names {
            self.exports.export_local(name);
        }
    }

    /// `export { a as b }` and `export { a as b } from 'm'`.
    fn rewrite_export_named(&mut self, export: ast::NamedExport) {
        if export.type_only {
            debug!("dropping type-only export");
            return;
        }

        let Some(src) = export.src else {
            for specifier in export.specifiers {
                match specifier {
                    ast::ExportSpecifier::Named(s) if s.is_type_only => {}
                    ast::ExportSpecifier::Named(ast::ExportNamedSpecifier {
                        orig: ast::ModuleExportName::Ident(local),
                        exported,
                        ..
                    }) => {
                        let exported =
                            exported.unwrap_or_else(|| ast::ModuleExportName::Ident(local.clone()));
                        self.exports.export(exported, local);
                    }
                    // Only valid with a `from` clause.
                    ast::ExportSpecifier::Named(_)
                    | ast::ExportSpecifier::Namespace(_)
                    | ast::ExportSpecifier::Default(_) => {}
                }
            }
            debug!("local export list");
            return;
        };

        let had_specifiers = !export.specifiers.is_empty();
        let mut bindings = ImportBindings::default();
        for specifier in export.specifiers {
            match specifier {
                ast::ExportSpecifier::Named(s) if s.is_type_only => {}
                ast::ExportSpecifier::Named(s) => {
                    let exported = s.exported.unwrap_or_else(|| s.orig.clone());
                    let local = self.fresh_ident(export_name_base(&exported), export.span);
                    bindings.bind_named(&s.orig, local.clone());
                    self.exports.export(exported, local);
                }
                // `export * as ns from 'm'`
                ast::ExportSpecifier::Namespace(s) => {
                    let local = self.fresh_ident(export_name_base(&s.name), s.span);
                    bindings.bind_namespace(local.clone());
                    self.exports.export(s.name, local);
                }
                // `export v from 'm'`
                ast::ExportSpecifier::Default(s) => {
                    let local = self.fresh_ident(&s.exported.sym, s.exported.span);
                    bindings.bind_default(local.clone());
                    self.exports.export(ast::ModuleExportName::Ident(s.exported), local);
                }
            }
        }

        if had_specifiers && bindings.is_empty() {
            debug!("dropping re-export of {:?} with only type specifiers", src.value);
            return;
        }

        debug!("re-export from {:?}", src.value);
        self.imports += 1;
        self.body.push(bindings.into_stmt(
            self.hook,
            export.span,
            &src,
            export.with.as_deref(),
        ));
    }

    /// `export default function/class` → the declaration, exported as `default`.
    fn rewrite_export_default_decl(&mut self, export: ast::ExportDefaultDecl) {
        let (decl, ident) = match export.decl {
            ast::DefaultDecl::Fn(function) => {
                let ident = function
                    .ident
                    .unwrap_or_else(|| self.fresh_ident("default", export.span));
                let decl = ast::Decl::Fn(ast::FnDecl {
                    ident: ident.clone(),
                    declare: false,
                    function: function.function,
                });
                (decl, ident)
            }
            ast::DefaultDecl::Class(class) => {
                let ident = class
                    .ident
                    .unwrap_or_else(|| self.fresh_ident("default", export.span));
                let decl = ast::Decl::Class(ast::ClassDecl {
                    ident: ident.clone(),
                    declare: false,
                    class: class.class,
                });
                (decl, ident)
            }
            ast::DefaultDecl::TsInterfaceDecl(interface) => {
                debug!("export default interface, kept without a runtime export");
                self.body.push(ast::Stmt::Decl(ast::Decl::TsInterface(interface)));
                return;
            }
        };

        debug!("export default declaration `{}`", ident.sym);
        self.body.push(ast::Stmt::Decl(decl));
        self.exports.export_default(ident);
    }

    /// `export default <expr>` → `const _default = <expr>`, exported as `default`.
    ///
    /// The value is captured where the export stood so later reassignments
    /// of anything it refers to do not leak into the export.
    fn export_default_expr(&mut self, span: Span, expr: Box<ast::Expr>) {
        let local = self.fresh_ident("default", span);
        self.body.push(const_decl(
            span,
            vec![declarator(binding(&local.sym, local.span), expr)],
        ));
        self.exports.export_default(local);
    }

    /// `export * from 'm'` → `const { default: _unused, ..._exportAll } = await <hook>("m")`
    fn rewrite_export_all(&mut self, export: ast::ExportAll) {
        if export.type_only {
            debug!("dropping type-only star export of {:?}", export.src.value);
            return;
        }

        debug!("star re-export from {:?}", export.src.value);
        let unused = self.fresh_ident("unused", export.span);
        let rest = self.fresh_ident("exportAll", export.span);

        let mut bindings = ImportBindings::default();
        bindings.bind_all_but_default(unused, rest.clone());

        self.imports += 1;
        self.body.push(bindings.into_stmt(
            self.hook,
            export.span,
            &export.src,
            export.with.as_deref(),
        ));
        self.exports.export_all(rest);
    }

    /// `import x = require('m')` → `const x = await <hook>("m")`
    /// `import x = A.B`          → `const x = A.B`
    fn rewrite_ts_import_equals(&mut self, import: ast::TsImportEqualsDecl) {
        if import.is_type_only {
            debug!("dropping `import type {} = ...`", import.id.sym);
            return;
        }

        let init = match import.module_ref {
            ast::TsModuleRef::TsEntityName(entity) => Box::new(entity_expr(entity)),
            ast::TsModuleRef::TsExternalModuleRef(module) => {
                self.imports += 1;
                await_hook_import(self.hook, import.span, &module.expr, None)
            }
        };

        debug!("import equals `{}`", import.id.sym);
        self.body.push(const_decl(
            import.span,
            vec![declarator(binding(&import.id.sym, import.id.span), init)],
        ));
        if import.is_export {
            self.exports.export_local(import.id);
        }
    }

    fn fresh_ident(&mut self, base: &str, span: Span) -> ast::Ident {
        let name = self.names.fresh(base);
        ast::Ident::new_no_ctxt(name.into(), span)
    }
}

/// Readable base for a synthetic local holding export `name`.
fn export_name_base(name: &ast::ModuleExportName) -> &str {
    match name {
        ast::ModuleExportName::Ident(id) => &id.sym,
        ast::ModuleExportName::Str(_) => "reexport",
    }
}

/// `A.B.C` as a member expression chain.
fn entity_expr(entity: ast::TsEntityName) -> ast::Expr {
    match entity {
        ast::TsEntityName::Ident(id) => ast::Expr::Ident(id),
        ast::TsEntityName::TsQualifiedName(qualified) => {
            let qualified = *qualified;
            ast::Expr::Member(ast::MemberExpr {
                span: qualified.right.span,
                obj: Box::new(entity_expr(qualified.left)),
                prop: ast::MemberProp::Ident(qualified.right),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use swc_common::{sync::Lrc, SourceMap};
    use swc_ecma_codegen::{text_writer::JsWriter, Emitter, Node};

    use super::*;

    fn print(program: &ast::Program, source_map: Lrc<SourceMap>) -> String {
        let mut buf = Vec::new();
        {
            let writer = JsWriter::new(source_map.clone(), "\n", &mut buf, None);
            let mut emitter = Emitter {
                cfg: swc_ecma_codegen::Config::default().with_target(ast::EsVersion::latest()),
                cm: source_map,
                comments: None,
                wr: writer,
            };
            program.emit_with(&mut emitter).unwrap();
        }
        String::from_utf8(buf).unwrap()
    }

    fn transform_with(source: &str, filename: &str, options: &ModuleToFunctionOptions) -> String {
        let parsed = mf_parser::parse_module(source, filename).unwrap();
        let mut program = parsed.program;
        module_to_function(&mut program, options).unwrap();
        assert!(matches!(program, ast::Program::Script(_)));
        print(&program, parsed.source_map)
    }

    fn transform(source: &str) -> String {
        transform_with(source, "input.js", &ModuleToFunctionOptions::default())
    }

    fn transform_ts(source: &str) -> String {
        transform_with(source, "input.ts", &ModuleToFunctionOptions::default())
    }

    /// Compare generated code ignoring layout.
    fn compact(code: &str) -> String {
        code.split_whitespace().collect()
    }

    macro_rules! assert_code {
        ($actual:expr, $expected:expr) => {
            assert_eq!(compact(&$actual), compact($expected))
        };
    }

    #[test]
    fn plain_statements_return_empty_object() {
        assert_code!(
            transform("const a = 1;\nconsole.log(a);\n"),
            "const a = 1; console.log(a); return {};"
        );
    }

    #[test]
    fn default_import_reads_default_property() {
        assert_code!(
            transform("import x from 'm';\nx();\n"),
            "const { default: x } = await $import('m'); x(); return {};"
        );
    }

    #[test]
    fn named_import_uses_imported_name_as_key() {
        assert_code!(
            transform("import { a as b, c } from 'm';\n"),
            "const { a: b, c } = await $import('m'); return {};"
        );
    }

    #[test]
    fn namespace_import_binds_whole_module() {
        assert_code!(
            transform("import * as ns from 'm';\n"),
            "const ns = await $import('m'); return {};"
        );
    }

    #[test]
    fn default_and_namespace_share_one_hook_call() {
        assert_code!(
            transform("import d, * as ns from 'm';\n"),
            "const ns = await $import('m'), { default: d } = ns; return {};"
        );
    }

    #[test]
    fn default_and_named_share_one_pattern() {
        assert_code!(
            transform("import d, { a, b as c } from 'm';\n"),
            "const { default: d, a, b: c } = await $import('m'); return {};"
        );
    }

    #[test]
    fn side_effect_imports_are_kept() {
        assert_code!(
            transform("import 'm';\nimport {} from 'n';\n"),
            "await $import('m'); await $import('n'); return {};"
        );
    }

    #[test]
    fn repeated_imports_are_not_deduplicated() {
        assert_code!(
            transform("import a from 'm';\nimport { b } from 'm';\n"),
            "const { default: a } = await $import('m'); const { b } = await $import('m'); return {};"
        );
    }

    #[test]
    fn import_attributes_become_second_argument() {
        assert_code!(
            transform_ts("import data from './data.json' with { type: 'json' };\n"),
            "const { default: data } = await $import('./data.json', { with: { type: 'json' } }); return {};"
        );
    }

    #[test]
    fn statement_order_is_preserved() {
        assert_code!(
            transform("console.log(1);\nimport a from 'a';\nconsole.log(2);\nexport { a };\n"),
            "console.log(1); const { default: a } = await $import('a'); console.log(2); return { a };"
        );
    }

    #[test]
    fn import_then_export_composes() {
        assert_code!(
            transform("import { a } from 'm';\nexport { a };\n"),
            "const { a } = await $import('m'); return { a };"
        );
    }

    #[test]
    fn exported_declarations_stay_in_place() {
        assert_code!(
            transform(
                "export const x = 1, { y } = obj;\nexport function f() {}\nexport class C {}\n"
            ),
            "const x = 1, { y } = obj; function f() {} class C {} return { x, y, f, C };"
        );
    }

    #[test]
    fn local_export_list_renames() {
        assert_code!(
            transform("const a = 1, b = 2;\nexport { a, b as c };\n"),
            "const a = 1, b = 2; return { a, c: b };"
        );
    }

    #[test]
    fn export_default_expression() {
        assert_code!(
            transform("export default 42;\n"),
            "const _default = 42; return { default: _default };"
        );
    }

    #[test]
    fn export_default_anonymous_declarations_get_a_name() {
        assert_code!(
            transform("export default function () {}\n"),
            "function _default() {} return { default: _default };"
        );
        assert_code!(
            transform("export default class {}\n"),
            "class _default {} return { default: _default };"
        );
    }

    #[test]
    fn export_default_named_function_keeps_its_name() {
        assert_code!(
            transform("export default function main() {}\n"),
            "function main() {} return { default: main };"
        );
    }

    #[test]
    fn synthetic_names_do_not_collide() {
        assert_code!(
            transform("const _default = 1;\nexport default 2;\n"),
            "const _default = 1; const _default1 = 2; return { default: _default1 };"
        );
    }

    #[test]
    fn named_re_exports_go_through_the_hook() {
        assert_code!(
            transform("export { a, b as c, default as d } from 'm';\n"),
            "const { a: _a, b: _c, default: _d } = await $import('m'); return { a: _a, c: _c, d: _d };"
        );
    }

    #[test]
    fn export_default_from() {
        assert_code!(
            transform("export v from 'm';\n"),
            "const { default: _v } = await $import('m'); return { v: _v };"
        );
    }

    #[test]
    fn empty_re_export_still_loads_the_module() {
        assert_code!(
            transform("export {} from 'm';\n"),
            "await $import('m'); return {};"
        );
    }

    #[test]
    fn star_export_is_merged_without_default() {
        assert_code!(
            transform("export const a = 1;\nexport * from 'm';\n"),
            "const a = 1; const { default: _unused, ..._exportAll } = await $import('m'); return { ..._exportAll, a };"
        );
    }

    #[test]
    fn star_as_namespace_export() {
        assert_code!(
            transform("export * as ns from 'm';\n"),
            "const _ns = await $import('m'); return { ns: _ns };"
        );
    }

    #[test]
    fn proto_and_string_export_names_are_computed_keys() {
        assert_code!(
            transform("const x = 1;\nexport { x as __proto__, x as 'a-b' };\n"),
            r#"const x = 1; return { ["__proto__"]: x, ['a-b']: x };"#
        );
    }

    #[test]
    fn dynamic_import_and_meta_use_the_hook() {
        assert_code!(
            transform(
                "export const load = () => [import('x'), import('x')];\nexport const url = import.meta.url;\n"
            ),
            "const load = () => [$import('x'), $import('x')]; const url = $import.meta.url; return { load, url };"
        );
    }

    #[test]
    fn custom_import_name_is_used_everywhere() {
        let options = ModuleToFunctionOptions::with_import_name("_import");
        let output = transform_with(
            "import a from 'a';\nexport * from 'b';\nexport const c = import('c');\nexport const d = import.meta;\n",
            "input.js",
            &options,
        );

        assert!(!output.contains("$import"));
        assert_code!(
            output,
            "const { default: a } = await _import('a'); \
             const { default: _unused, ..._exportAll } = await _import('b'); \
             const c = _import('c'); \
             const d = _import.meta; \
             return { ..._exportAll, c, d };"
        );
    }

    #[test]
    fn hashbang_is_dropped() {
        assert_code!(
            transform("#!/usr/bin/env node\nexport const a = 1;\n"),
            "const a = 1; return { a };"
        );
    }

    #[test]
    fn scripts_are_rewritten_too() {
        let parsed = mf_parser::parse_module("const m = import('m');\n", "input.js").unwrap();
        let ast::Program::Module(module) = parsed.program else {
            panic!("expected a module");
        };
        let mut program = ast::Program::Script(ast::Script {
            span: module.span,
            body: module
                .body
                .into_iter()
                .filter_map(|item| match item {
                    ast::ModuleItem::Stmt(stmt) => Some(stmt),
                    ast::ModuleItem::ModuleDecl(_) => None,
                })
                .collect(),
            shebang: None,
        });

        module_to_function(&mut program, &ModuleToFunctionOptions::default()).unwrap();
        assert_code!(
            print(&program, parsed.source_map),
            "const m = $import('m'); return {};"
        );
    }

    #[test]
    fn typescript_only_constructs_have_no_runtime_export() {
        assert_code!(
            transform_ts(
                "import type { T } from 't';\n\
                 import { type U } from 'u';\n\
                 import { type V, w } from 'v';\n\
                 export type { T };\n\
                 export interface I {}\n\
                 export type A = string;\n\
                 export declare const d: number;\n\
                 export enum E { A }\n"
            ),
            "const { w } = await $import('v'); interface I {} type A = string; declare const d: number; enum E { A } return { E };"
        );
    }

    #[test]
    fn typescript_import_equals() {
        assert_code!(
            transform_ts("import x = require('m');\nexport import y = A.B;\n"),
            "const x = await $import('m'); const y = A.B; return { y };"
        );
    }

    #[test]
    fn typescript_export_assignment_is_the_default_export() {
        assert_code!(
            transform_ts("export = 1;\n"),
            "const _default = 1; return { default: _default };"
        );
    }

    #[test]
    fn colliding_import_name_is_rejected_untouched() {
        let parsed = mf_parser::parse_module("const $import = 1;\nexport { $import };\n", "input.js")
            .unwrap();
        let mut program = parsed.program;
        let before = program.clone();

        let err = module_to_function(&mut program, &ModuleToFunctionOptions::default()).unwrap_err();
        assert_eq!(
            err,
            ConfigError::ImportNameCollision {
                name: "$import".to_string()
            }
        );
        assert_eq!(program, before);
    }

    #[test]
    fn nested_var_of_the_import_name_is_a_collision() {
        for source in [
            "if (true) { var $import = 1; }\nimport x from 'm';\nexport { x };\n",
            "for (var $import of xs) {}\n",
        ] {
            let mut program = mf_parser::parse_module(source, "input.js").unwrap().program;
            let err =
                module_to_function(&mut program, &ModuleToFunctionOptions::default()).unwrap_err();
            assert_eq!(
                err,
                ConfigError::ImportNameCollision {
                    name: "$import".to_string()
                }
            );
        }
    }

    #[test]
    fn ambient_declaration_of_the_import_name_is_allowed() {
        assert_code!(
            transform_ts("declare const $import: any;\nexport const y = 1;\n"),
            "declare const $import: any; const y = 1; return { y };"
        );
    }

    #[test]
    fn shadowed_import_name_is_rejected() {
        let options = ModuleToFunctionOptions::with_import_name("_import");
        let source = "export const f = (_import) => import('x');\n";
        let mut program = mf_parser::parse_module(source, "input.js").unwrap().program;
        let before = program.clone();

        let err = module_to_function(&mut program, &options).unwrap_err();
        assert_eq!(
            err,
            ConfigError::ImportNameShadowed {
                name: "_import".to_string()
            }
        );
        assert_eq!(program, before);
    }

    #[test]
    fn erased_enums_and_namespaces_are_not_exported() {
        assert_code!(
            transform_ts(
                "export const enum E { A }\n\
                 export namespace T { export type X = 1; }\n\
                 export namespace V { export const x = 1; }\n"
            ),
            "const enum E { A } namespace T { export type X = 1; } namespace V { export const x = 1; } return { V };"
        );
    }

    #[test]
    fn invalid_import_name_is_rejected() {
        let parsed = mf_parser::parse_module("export const a = 1;\n", "input.js").unwrap();
        let mut program = parsed.program;

        let err = module_to_function(
            &mut program,
            &ModuleToFunctionOptions::with_import_name("not-an-identifier"),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidImportName { .. }));
        assert!(matches!(program, ast::Program::Module(_)));
    }
}
