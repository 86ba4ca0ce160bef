//! The full validation pipeline: split, validate each field, analyze the
//! combination, describe, and project upcoming runs.
//!
//! Both entry points are total: malformed input of any kind comes back as
//! diagnostics inside the result, never as an error or panic.

use crate::analyzer::analyze;
use crate::describe::describe;
use crate::field::{FieldForm, FieldName, FieldSet};
use crate::project::{project, DEFAULT_RUN_COUNT};
use crate::split::split_fields;
use crate::types::{
    BatchEntry, CrossFieldWarning, DiagnosticScope, FieldError, ParsedFields, ValidationResult,
};
use crate::validator::validate_field;

/// Shown in place of a description when the expression has the wrong
/// field count.
const INVALID_DESCRIPTION: &str = "Invalid cron expression";

const FORMAT_SUGGESTION: &str =
    "use five space-separated fields: minute hour day-of-month month day-of-week";

/// Validate a single cron expression through every stage.
pub fn validate(expression: &str) -> ValidationResult {
    validate_with_runs(expression, DEFAULT_RUN_COUNT)
}

/// As [`validate`], projecting `run_count` upcoming runs instead of the
/// default.
pub fn validate_with_runs(expression: &str, run_count: usize) -> ValidationResult {
    let tokens = match split_fields(expression) {
        Ok(tokens) => tokens,
        Err(structural) => {
            tracing::debug!(%expression, count = structural.count, "wrong field count");
            return ValidationResult {
                is_valid: false,
                errors: vec![FieldError::new(
                    DiagnosticScope::Structure,
                    structural.to_string(),
                )],
                warnings: Vec::new(),
                suggestions: vec![FORMAT_SUGGESTION.to_string()],
                parsed_fields: ParsedFields::default(),
                human_readable: INVALID_DESCRIPTION.to_string(),
                next_runs: Vec::new(),
            };
        }
    };

    let mut errors: Vec<FieldError> = Vec::new();
    let mut warnings: Vec<CrossFieldWarning> = Vec::new();
    let mut forms: Vec<Option<FieldForm>> = Vec::with_capacity(5);
    for (token, name) in tokens.iter().zip(FieldName::ALL) {
        let mut report = validate_field(token, name);
        errors.append(&mut report.errors);
        warnings.append(&mut report.warnings);
        forms.push(report.form);
    }

    let human_readable = describe(&tokens);

    let mut suggestions = Vec::new();
    let mut next_runs = Vec::new();
    if errors.is_empty() {
        // Zero errors implies every field parsed.
        let forms: Vec<FieldForm> = forms.into_iter().flatten().collect();
        if let Ok(forms) = <[FieldForm; 5]>::try_from(forms) {
            let set = FieldSet {
                tokens: tokens.clone(),
                forms,
            };
            let (cross_warnings, cross_suggestions) = analyze(&set);
            warnings.extend(cross_warnings);
            suggestions = cross_suggestions;
            next_runs = project(&set, run_count);
        }
    }

    tracing::debug!(
        %expression,
        valid = errors.is_empty(),
        errors = errors.len(),
        warnings = warnings.len(),
        "validation complete"
    );

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
        warnings,
        suggestions,
        parsed_fields: ParsedFields::from_tokens(&tokens),
        human_readable,
        next_runs,
    }
}

/// Validate every non-blank line of `text` independently, preserving
/// input order.
pub fn validate_batch(text: &str) -> Vec<BatchEntry> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| BatchEntry {
            expression: line.to_string(),
            result: validate(line),
        })
        .collect()
}
