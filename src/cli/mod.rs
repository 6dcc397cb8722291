//! CLI support for formulac
//!
//! Console prompting and value binding for the `formulac` binary; the
//! compilation pipeline itself lives in the library modules.

mod prompt;

pub use prompt::{banner, emphasize, prompt, prompt_number};

use std::collections::HashMap;
use std::io;

use crate::FormulaError;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// Pipeline error from compiling the formula
    Formula(FormulaError),
    /// IO error
    Io(io::Error),
    /// A `--set` definition that is not `name=value`
    BadBinding(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Formula(e) => write!(f, "Formula error: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::BadBinding(def) => {
                write!(f, "Invalid binding '{}': expected name=value", def)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Formula(e) => Some(e),
            CliError::Io(e) => Some(e),
            CliError::BadBinding(_) => None,
        }
    }
}

impl From<FormulaError> for CliError {
    fn from(e: FormulaError) -> Self {
        CliError::Formula(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

/// Parse repeated `--set name=value` definitions into a lookup table.
/// Names are lowercased to match the lexer's normalization.
pub fn parse_bindings(defs: &[String]) -> Result<HashMap<String, f64>, CliError> {
    let mut bindings = HashMap::new();
    for def in defs {
        let (name, value) = def
            .split_once('=')
            .ok_or_else(|| CliError::BadBinding(def.clone()))?;
        let value: f64 = value
            .trim()
            .parse()
            .map_err(|_| CliError::BadBinding(def.clone()))?;
        bindings.insert(name.trim().to_ascii_lowercase(), value);
    }
    Ok(bindings)
}
