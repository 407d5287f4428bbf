//! ECMAScript AST and configuration for the module-to-function rewrite.
//!
//! Re-exports the standard SWC AST and adds:
//! - `ModuleToFunctionOptions`, the knobs of the rewrite
//! - `ConfigError`, raised when those knobs cannot produce valid output

pub use swc_ecma_ast::*;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hook name used when the caller does not pick one.
///
/// Dollar-prefixed so it is unlikely to shadow anything the module declares.
pub const DEFAULT_IMPORT_NAME: &str = "$import";

/// Options controlling the module-to-function rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModuleToFunctionOptions {
    /// Name of the injected import hook.
    ///
    /// Used as the single parameter of the generated function, as the callee
    /// of every rewritten `import()` and as the object `import.meta` is read
    /// from (`<name>.meta`).
    pub import_name: String,
}

impl ModuleToFunctionOptions {
    pub fn with_import_name(import_name: impl Into<String>) -> Self {
        Self {
            import_name: import_name.into(),
        }
    }

    /// Check that `import_name` can be printed as a binding identifier.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if is_binding_identifier(&self.import_name) {
            Ok(())
        } else {
            Err(ConfigError::InvalidImportName {
                name: self.import_name.clone(),
            })
        }
    }
}

impl Default for ModuleToFunctionOptions {
    fn default() -> Self {
        Self {
            import_name: DEFAULT_IMPORT_NAME.to_string(),
        }
    }
}

/// Configuration rejected before the program is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("import name {name:?} is not a valid identifier")]
    InvalidImportName { name: String },

    #[error("import name {name:?} is already bound at the top level of the module")]
    ImportNameCollision { name: String },

    #[error("import name {name:?} is shadowed where `import()` or `import.meta` is used")]
    ImportNameShadowed { name: String },
}

/// Words that cannot name a parameter of an async function.
const RESERVED_WORDS: &[&str] = &[
    "arguments", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "eval", "export", "extends", "false", "finally",
    "for", "function", "if", "implements", "import", "in", "instanceof", "interface", "let",
    "new", "null", "package", "private", "protected", "public", "return", "static", "super",
    "switch", "this", "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Whether `name` is an IdentifierName that is not a reserved word.
pub fn is_binding_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    Ident::is_valid_start(first)
        && chars.all(Ident::is_valid_continue)
        && !RESERVED_WORDS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_use_dollar_import() {
        let options = ModuleToFunctionOptions::default();
        assert_eq!(options.import_name, "$import");
        assert!(options.validate().is_ok());
    }

    #[test]
    fn options_deserialize_from_camel_case() {
        let options: ModuleToFunctionOptions =
            serde_json::from_str(r#"{ "importName": "_import" }"#).unwrap();
        assert_eq!(options.import_name, "_import");

        let options: ModuleToFunctionOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, ModuleToFunctionOptions::default());
    }

    #[test]
    fn binding_identifiers() {
        assert!(is_binding_identifier("_import"));
        assert!(is_binding_identifier("$"));
        assert!(is_binding_identifier("imp0rt"));
        assert!(is_binding_identifier("ímport"));

        assert!(!is_binding_identifier(""));
        assert!(!is_binding_identifier("0import"));
        assert!(!is_binding_identifier("my-import"));
        assert!(!is_binding_identifier("import"));
        assert!(!is_binding_identifier("await"));
    }

    #[test]
    fn invalid_import_name_is_a_config_error() {
        let options = ModuleToFunctionOptions::with_import_name("not valid");
        assert_eq!(
            options.validate(),
            Err(ConfigError::InvalidImportName {
                name: "not valid".to_string()
            })
        );
    }
}
