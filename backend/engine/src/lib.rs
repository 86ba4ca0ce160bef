//! Cron expression validation and analysis engine.
//!
//! Pure and synchronous: every entry point is a function of its input
//! string (plus the ambient clock for run projection), with no I/O and no
//! shared state. Malformed input is reported inside the returned
//! [`ValidationResult`], never as an error or panic.

pub mod analyzer;
pub mod describe;
pub mod field;
pub mod pipeline;
pub mod project;
pub mod split;
pub mod types;
pub mod validator;

pub use describe::describe;
pub use field::{FieldForm, FieldName, FieldSet, StepBase, Term};
pub use pipeline::{validate, validate_batch, validate_with_runs};
pub use project::{project, project_from, DEFAULT_RUN_COUNT};
pub use split::{split_fields, StructuralError};
pub use types::{
    BatchEntry, CrossFieldWarning, DiagnosticScope, FieldError, ParsedFields, Severity,
    ValidationResult,
};
