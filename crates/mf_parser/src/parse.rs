use anyhow::Result;
use mf_ast::{EsVersion, Program};
use swc_common::{
    comments::SingleThreadedComments, errors::Handler, sync::Lrc, FileName, SourceFile, SourceMap,
};
use swc_ecma_parser::{EsSyntax, Syntax, TsSyntax};

/// Result of parsing a source file.
pub struct ParseResult {
    pub program: Program,
    pub comments: SingleThreadedComments,
    pub source_map: Lrc<SourceMap>,
}

/// Pick the parser syntax from the file extension.
///
/// `.ts`, `.mts`, `.cts` and `.tsx` parse as TypeScript; everything else as
/// ECMAScript with JSX and the stage-1 `export v from 'm'` form enabled.
fn syntax_for(filename: &str) -> Syntax {
    let is_tsx = filename.ends_with(".tsx");
    let is_ts = is_tsx
        || filename.ends_with(".ts")
        || filename.ends_with(".mts")
        || filename.ends_with(".cts");

    if is_ts {
        Syntax::Typescript(TsSyntax {
            tsx: is_tsx,
            decorators: true,
            ..Default::default()
        })
    } else {
        Syntax::Es(EsSyntax {
            jsx: true,
            export_default_from: true,
            ..Default::default()
        })
    }
}

fn load(source: String, filename: &str) -> (Lrc<SourceMap>, Lrc<SourceFile>) {
    let source_map: Lrc<SourceMap> = Default::default();
    let source_file = source_map.new_source_file(
        Lrc::new(FileName::Custom(filename.to_string())),
        source,
    );
    (source_map, source_file)
}

/// Parse a JavaScript/TypeScript source string as an ES module.
pub fn parse_module(source: &str, filename: &str) -> Result<ParseResult> {
    let (source_map, source_file) = load(source.to_string(), filename);
    let comments = SingleThreadedComments::default();
    let handler =
        Handler::with_emitter_writer(Box::new(std::io::stderr()), Some(source_map.clone()));

    let module = swc_ecma_parser::parse_file_as_module(
        &source_file,
        syntax_for(filename),
        EsVersion::latest(),
        Some(&comments),
        &mut vec![],
    )
    .map_err(|e| {
        e.into_diagnostic(&handler).emit();
        anyhow::anyhow!("failed to parse {filename}")
    })?;

    Ok(ParseResult {
        program: Program::Module(module),
        comments,
        source_map,
    })
}

/// Parse `body` as the body of `async function (<import_name>) { ... }`.
///
/// Top-level `await` and `return` are only legal inside such a function, so
/// a rewritten module is wrapped before parsing it as a script.
pub fn parse_async_function_body(
    body: &str,
    filename: &str,
    import_name: &str,
) -> Result<ParseResult> {
    let wrapped = format!("(async function ({import_name}) {{\n{body}\n}});\n");
    let (source_map, source_file) = load(wrapped, filename);
    let comments = SingleThreadedComments::default();
    let handler =
        Handler::with_emitter_writer(Box::new(std::io::stderr()), Some(source_map.clone()));

    let script = swc_ecma_parser::parse_file_as_script(
        &source_file,
        syntax_for(filename),
        EsVersion::latest(),
        Some(&comments),
        &mut vec![],
    )
    .map_err(|e| {
        e.into_diagnostic(&handler).emit();
        anyhow::anyhow!("{filename} is not a valid async function body")
    })?;

    Ok(ParseResult {
        program: Program::Script(script),
        comments,
        source_map,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_module_syntax() {
        let parsed = parse_module("import x from 'm';\nexport { x };\n", "input.js").unwrap();
        let Program::Module(module) = parsed.program else {
            panic!("expected a module");
        };
        assert_eq!(module.body.len(), 2);
    }

    #[test]
    fn parses_typescript_by_extension() {
        assert!(parse_module("export type T = string;\n", "input.ts").is_ok());
        assert!(parse_module("export const x: number = 1;\n", "input.mts").is_ok());
    }

    #[test]
    fn function_body_allows_await_and_return() {
        let body = "const { default: x } = await $import(\"m\");\nreturn {\n    x\n};";
        assert!(parse_async_function_body(body, "output.js", "$import").is_ok());
    }

    #[test]
    fn function_body_rejects_module_syntax() {
        assert!(parse_async_function_body("export const x = 1;", "output.js", "$import").is_err());
    }
}
