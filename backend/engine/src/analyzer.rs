//! Cross-field analysis: combinations that are legal but operationally
//! risky, plus purely advisory suggestions.
//!
//! Runs only on expressions whose five fields all validated cleanly.

use crate::field::{FieldName, FieldSet};
use crate::types::{CrossFieldWarning, DiagnosticScope};

/// Inspect the five validated fields together. Returns advisory warnings
/// and free-form suggestions; neither affects validity.
pub fn analyze(set: &FieldSet) -> (Vec<CrossFieldWarning>, Vec<String>) {
    let mut warnings = Vec::new();
    let mut suggestions = Vec::new();

    let minute = set.token(FieldName::Minute);
    let hour = set.token(FieldName::Hour);
    let dom = set.token(FieldName::DayOfMonth);
    let dow = set.token(FieldName::DayOfWeek);

    // Restricting both day fields is the classic cron surprise: the job
    // fires when EITHER matches, not both.
    if dom != "*" && dow != "*" {
        warnings.push(CrossFieldWarning::new(
            DiagnosticScope::DaySpecification,
            "both day-of-month and day-of-week are restricted; cron runs the job when either \
             matches (OR logic), not when both do",
            "restrict only one of the two day fields unless OR behavior is intended",
        ));
    }

    if minute == "*" && hour == "*" {
        warnings.push(CrossFieldWarning::new(
            DiagnosticScope::Frequency,
            "this schedule runs every minute of every hour",
            "consider an explicit minute (for example */5) to reduce load",
        ));
    }

    check_date_validity(set, &mut warnings);

    if minute == "*" || minute == "*/1" {
        suggestions.push(
            "this expression runs every minute; confirm that frequency is necessary".to_string(),
        );
    }

    let normalized = set.tokens.join(" ");
    if normalized == "0 0 * * *" {
        suggestions.push(
            "runs daily at midnight, the common pattern for maintenance tasks".to_string(),
        );
    }

    tracing::debug!(
        expression = %normalized,
        warnings = warnings.len(),
        suggestions = suggestions.len(),
        "cross-field analysis complete"
    );

    (warnings, suggestions)
}

/// Day 29, 30, or 31 combined with a month selection that includes
/// February may never fire in some (or any) years.
fn check_date_validity(set: &FieldSet, warnings: &mut Vec<CrossFieldWarning>) {
    let dom_form = set.form(FieldName::DayOfMonth);
    let month_form = set.form(FieldName::Month);

    let risky_day = dom_form.accepts_any(FieldName::DayOfMonth, |d| d >= 29);
    let explicit_february =
        set.token(FieldName::Month) != "*" && month_form.accepts(2, FieldName::Month);

    if risky_day && explicit_february {
        warnings.push(CrossFieldWarning::new(
            DiagnosticScope::DateValidity,
            "the scheduled day does not exist in February every year",
            "schedule by day-of-week instead for a date that always exists",
        ));
    }
}
