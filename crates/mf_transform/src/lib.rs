//! Rewrites an ECMAScript module into the body of an async function.
//!
//! Transforms:
//! - `import x from 'm'`       → `const { default: x } = await $import("m")`
//! - `export const x = 1`      → `const x = 1` + `x` in the returned object
//! - `export * from 'm'`       → rest-destructured, spread into the returned object
//! - `import('m')`             → `$import('m')`
//! - `import.meta`             → `$import.meta`
//!
//! The rewritten body ends with `return { ...exports }` and expects the hook
//! (`$import` unless configured otherwise) as its only parameter.

mod builders;
mod exports;
mod imports;
mod names;

pub mod function;
pub mod hook;
pub mod module_to_function;

pub use function::{async_function_script, hook_param, into_async_function};
pub use hook::HookRewriter;
pub use mf_ast::{ConfigError, ModuleToFunctionOptions, DEFAULT_IMPORT_NAME};
pub use module_to_function::module_to_function;
