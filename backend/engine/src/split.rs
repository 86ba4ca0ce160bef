//! Structural splitting of a raw expression into its five fields.

use thiserror::Error;

/// The expression did not contain exactly five whitespace-separated fields.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("cron expression must have exactly 5 fields, got {count}")]
pub struct StructuralError {
    pub count: usize,
}

/// Trim the input and split it on runs of whitespace into exactly five
/// tokens.
pub fn split_fields(expression: &str) -> Result<[String; 5], StructuralError> {
    let parts: Vec<&str> = expression.split_whitespace().collect();
    match <[&str; 5]>::try_from(parts.as_slice()) {
        Ok(fields) => Ok(fields.map(str::to_string)),
        Err(_) => Err(StructuralError { count: parts.len() }),
    }
}
