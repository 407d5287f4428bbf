//! JavaScript/TypeScript parser front-end for modfn.
//!
//! Wraps the standard SWC parser:
//!
//! - [`parse_module`] reads a source file in module mode, producing the
//!   `Program` the rewrite consumes.
//! - [`parse_async_function_body`] checks that rewritten output is valid as
//!   the body of an async function taking the import hook.

pub mod parse;

pub use parse::{parse_async_function_body, parse_module, ParseResult};
