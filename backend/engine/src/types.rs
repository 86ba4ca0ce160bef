//! Result types returned by the validation pipeline.
//!
//! Everything here is plain data, built once per call and handed to the
//! caller; the engine keeps no state between calls.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::field::FieldName;

/// Where a diagnostic points: one of the five cron fields, or one of the
/// cross-field categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticScope {
    #[serde(rename = "minute")]
    Minute,
    #[serde(rename = "hour")]
    Hour,
    #[serde(rename = "dayOfMonth")]
    DayOfMonth,
    #[serde(rename = "month")]
    Month,
    #[serde(rename = "dayOfWeek")]
    DayOfWeek,
    /// Wrong field count; the expression never reached per-field checks.
    #[serde(rename = "structure")]
    Structure,
    /// Schedule density concerns (per-minute execution and the like).
    #[serde(rename = "frequency")]
    Frequency,
    /// Calendar dates that do not exist in every scheduled month.
    #[serde(rename = "date-validity")]
    DateValidity,
    /// Day-of-month / day-of-week interaction (cron OR semantics).
    #[serde(rename = "day-specification")]
    DaySpecification,
}

impl fmt::Display for DiagnosticScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DiagnosticScope::Minute => "minute",
            DiagnosticScope::Hour => "hour",
            DiagnosticScope::DayOfMonth => "dayOfMonth",
            DiagnosticScope::Month => "month",
            DiagnosticScope::DayOfWeek => "dayOfWeek",
            DiagnosticScope::Structure => "structure",
            DiagnosticScope::Frequency => "frequency",
            DiagnosticScope::DateValidity => "date-validity",
            DiagnosticScope::DaySpecification => "day-specification",
        };
        f.write_str(s)
    }
}

impl From<FieldName> for DiagnosticScope {
    fn from(name: FieldName) -> Self {
        match name {
            FieldName::Minute => DiagnosticScope::Minute,
            FieldName::Hour => DiagnosticScope::Hour,
            FieldName::DayOfMonth => DiagnosticScope::DayOfMonth,
            FieldName::Month => DiagnosticScope::Month,
            FieldName::DayOfWeek => DiagnosticScope::DayOfWeek,
        }
    }
}

/// Diagnostic severity. Only `Error` entries invalidate an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A single field-level failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub field: DiagnosticScope,
    pub message: String,
    pub severity: Severity,
}

impl FieldError {
    pub fn new(field: impl Into<DiagnosticScope>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

/// An advisory finding: the expression is legal but operationally risky.
/// Never invalidates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossFieldWarning {
    pub field: DiagnosticScope,
    pub message: String,
    pub suggestion: String,
}

impl CrossFieldWarning {
    pub fn new(
        field: impl Into<DiagnosticScope>,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            suggestion: suggestion.into(),
        }
    }
}

/// The raw token of each field, kept for display. Populated with empty
/// strings when the field count was wrong.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedFields {
    pub minute: String,
    pub hour: String,
    pub day_of_month: String,
    pub month: String,
    pub day_of_week: String,
}

impl ParsedFields {
    pub fn from_tokens(tokens: &[String; 5]) -> Self {
        Self {
            minute: tokens[0].clone(),
            hour: tokens[1].clone(),
            day_of_month: tokens[2].clone(),
            month: tokens[3].clone(),
            day_of_week: tokens[4].clone(),
        }
    }
}

/// Aggregate outcome of validating one cron expression.
///
/// Invariants: `is_valid` holds exactly when `errors` is empty, and
/// `next_runs` is empty whenever the expression is invalid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<FieldError>,
    pub warnings: Vec<CrossFieldWarning>,
    pub suggestions: Vec<String>,
    pub parsed_fields: ParsedFields,
    pub human_readable: String,
    pub next_runs: Vec<String>,
}

/// One line of a batch validation, paired with its result. Entries are
/// order-preserving, one per non-blank input line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchEntry {
    pub expression: String,
    pub result: ValidationResult,
}
