use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, LevelFilter};
use mf_ast::{ModuleToFunctionOptions, Program, DEFAULT_IMPORT_NAME};
use mf_parser::parse_module;
use mf_transform::{async_function_script, module_to_function};
use swc_common::source_map::DefaultSourceMapGenConfig;
use swc_ecma_codegen::{text_writer::JsWriter, Emitter, Node};

#[derive(Parser)]
#[command(name = "modfn", about = "modfn — turn an ES module into an async function body")]
struct Cli {
    /// Log what the rewrite does (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse, rewrite, and emit the function body.
    Transform {
        /// Input .js/.mjs/.ts/.tsx file.
        input: PathBuf,
        /// Output file (stdout if omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Name of the injected import hook.
        #[arg(long, default_value = DEFAULT_IMPORT_NAME)]
        import_name: String,
        /// Emit `(async function (<hook>) { ... })` instead of the bare body.
        #[arg(long)]
        wrap: bool,
        /// Generate a source map.
        #[arg(long)]
        source_map: bool,
    },
    /// Parse the file and report any syntax errors.
    Check { input: PathBuf },
    /// Parse and dump the AST.
    Parse {
        input: PathBuf,
        /// Dump as JSON instead of Rust debug output.
        #[arg(long)]
        ast: bool,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default)
        .parse_env("RUST_LOG")
        .init();
}

fn read_source(input: &Path) -> Result<(String, String)> {
    let source = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    Ok((source, input.display().to_string()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Transform {
            input,
            output,
            import_name,
            wrap,
            source_map,
        } => {
            let (source, filename) = read_source(&input)?;
            let options = ModuleToFunctionOptions::with_import_name(import_name);

            let parsed = parse_module(&source, &filename)?;
            let mut program = parsed.program;
            module_to_function(&mut program, &options)
                .with_context(|| format!("cannot rewrite {filename}"))?;

            if wrap {
                program = match program {
                    Program::Script(body) => Program::Script(async_function_script(body, &options)),
                    other => other,
                };
            }

            let mut buf = Vec::new();
            let mut srcmap_buf = if source_map { Some(vec![]) } else { None };
            {
                let writer = JsWriter::new(
                    parsed.source_map.clone(),
                    "\n",
                    &mut buf,
                    srcmap_buf.as_mut(),
                );
                let mut emitter = Emitter {
                    cfg: swc_ecma_codegen::Config::default()
                        .with_target(mf_ast::EsVersion::latest()),
                    cm: parsed.source_map.clone(),
                    comments: None,
                    wr: writer,
                };
                program.emit_with(&mut emitter)?;
            }

            let output_str = String::from_utf8(buf)?;
            debug!("emitted {} byte(s) for {filename}", output_str.len());

            match &output {
                Some(path) => std::fs::write(path, &output_str)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => print!("{output_str}"),
            }

            if let Some(srcmap_data) = srcmap_buf {
                let srcmap = parsed
                    .source_map
                    .build_source_map(&srcmap_data, None, DefaultSourceMapGenConfig);
                let mut srcmap_json = vec![];
                srcmap
                    .to_writer(&mut srcmap_json)
                    .context("failed to serialize source map")?;
                let srcmap_str = String::from_utf8(srcmap_json)?;

                let map_path = match &output {
                    Some(path) => format!("{}.map", path.display()),
                    None => format!("{filename}.map"),
                };
                std::fs::write(&map_path, &srcmap_str)?;
                eprintln!("Source map written to {map_path}");
            }
        }
        Commands::Check { input } => {
            let (source, filename) = read_source(&input)?;
            parse_module(&source, &filename)?;
            eprintln!("OK: {filename}");
        }
        Commands::Parse { input, ast } => {
            let (source, filename) = read_source(&input)?;
            let parsed = parse_module(&source, &filename)?;

            if ast {
                let json = serde_json::to_string_pretty(&parsed.program)?;
                println!("{json}");
            } else {
                println!("{:#?}", parsed.program);
            }
        }
    }

    Ok(())
}
