//! Per-field grammar and bounds validation.
//!
//! A token is first screened against the cron character set, then parsed
//! once into a [`FieldForm`], then bounds-checked uniformly over the
//! variant. Top-level ranges and list elements share the same range rules.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::field::{FieldForm, FieldName, StepBase, Term};
use crate::types::{CrossFieldWarning, FieldError};

static FIELD_CHARSET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9,\-*/]+$").unwrap());

/// Everything produced by validating one field token.
#[derive(Debug, Default)]
pub struct FieldReport {
    pub errors: Vec<FieldError>,
    pub warnings: Vec<CrossFieldWarning>,
    /// Present when the token parsed into a well-formed shape, even if
    /// bounds checks then failed.
    pub form: Option<FieldForm>,
}

/// Validate one field token against its field's bounds. All bounds
/// failures inside a list are reported independently.
pub fn validate_field(token: &str, name: FieldName) -> FieldReport {
    let mut report = FieldReport::default();

    if token.is_empty() {
        report
            .errors
            .push(FieldError::new(name, format!("{name} field is empty")));
        return report;
    }

    if !FIELD_CHARSET.is_match(token) {
        report.errors.push(FieldError::new(
            name,
            format!("{name} field contains invalid characters: '{token}'"),
        ));
        return report;
    }

    let form = match FieldForm::parse(token) {
        Ok(form) => form,
        Err(problems) => {
            for problem in problems {
                report
                    .errors
                    .push(FieldError::new(name, format!("{problem} in {name} field")));
            }
            return report;
        }
    };

    check_bounds(&form, name, &mut report);

    // 7 and 0 both denote Sunday; prefer the conventional form.
    if name == FieldName::DayOfWeek && token == "7" {
        report.warnings.push(CrossFieldWarning::new(
            name,
            "day-of-week 7 means Sunday, the same as 0".to_string(),
            "use 0 instead of 7 for Sunday".to_string(),
        ));
    }

    report.form = Some(form);
    report
}

fn check_bounds(form: &FieldForm, name: FieldName, report: &mut FieldReport) {
    match form {
        FieldForm::Wildcard => {}
        FieldForm::Single(v) => check_value(*v, name, report),
        FieldForm::Range { lo, hi } => check_range(*lo, *hi, name, report),
        FieldForm::List(terms) => {
            for term in terms {
                match term {
                    Term::Single(v) => check_value(*v, name, report),
                    Term::Range { lo, hi } => check_range(*lo, *hi, name, report),
                }
            }
        }
        FieldForm::Step { base, step } => {
            if *step == 0 {
                report.errors.push(FieldError::new(
                    name,
                    format!("step must be greater than 0 in {name} field"),
                ));
            } else if *step > name.span() {
                // Legal, but the step never wraps: it fires at most once
                // per cycle.
                report.warnings.push(CrossFieldWarning::new(
                    name,
                    format!(
                        "step {step} exceeds the {name} span of {}; the schedule fires at most once per cycle",
                        name.span()
                    ),
                    format!("use a step of {} or less", name.span()),
                ));
            }
            match base {
                StepBase::Wildcard => {}
                StepBase::Single(v) => check_value(*v, name, report),
                StepBase::Range { lo, hi } => check_range(*lo, *hi, name, report),
            }
        }
    }
}

fn check_value(value: u32, name: FieldName, report: &mut FieldReport) {
    let (min, max) = name.bounds();
    if value < min || value > max {
        report.errors.push(FieldError::new(
            name,
            format!("value {value} out of range for {name} ({min}-{max})"),
        ));
    }
}

fn check_range(lo: u32, hi: u32, name: FieldName, report: &mut FieldReport) {
    if lo > hi {
        report.errors.push(FieldError::new(
            name,
            format!("range {lo}-{hi} in {name} field is inverted (start exceeds end)"),
        ));
        return;
    }
    check_value(lo, name, report);
    check_value(hi, name, report);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DiagnosticScope;

    fn errors(token: &str, name: FieldName) -> Vec<String> {
        validate_field(token, name)
            .errors
            .into_iter()
            .map(|e| e.message)
            .collect()
    }

    #[test]
    fn wildcard_is_always_valid() {
        for name in FieldName::ALL {
            let report = validate_field("*", name);
            assert!(report.errors.is_empty() && report.warnings.is_empty());
            assert_eq!(report.form, Some(FieldForm::Wildcard));
        }
    }

    #[test]
    fn empty_token_is_an_error() {
        let msgs = errors("", FieldName::Minute);
        assert_eq!(msgs.len(), 1);
        assert!(msgs[0].contains("empty"));
    }

    #[test]
    fn rejects_characters_outside_the_cron_charset() {
        assert!(errors("abc", FieldName::Minute)[0].contains("invalid characters"));
        assert!(errors("１５", FieldName::Minute)[0].contains("invalid characters"));
        assert!(errors("5;rm", FieldName::Hour)[0].contains("invalid characters"));
    }

    #[test]
    fn bounds_are_field_specific() {
        assert!(errors("60", FieldName::Minute)[0].contains("out of range"));
        assert!(errors("59", FieldName::Minute).is_empty());
        assert!(errors("24", FieldName::Hour)[0].contains("out of range"));
        assert!(errors("0", FieldName::DayOfMonth)[0].contains("out of range"));
        assert!(errors("13", FieldName::Month)[0].contains("out of range"));
        assert!(errors("8", FieldName::DayOfWeek)[0].contains("out of range"));
        assert!(errors("7", FieldName::DayOfWeek).is_empty());
    }

    #[test]
    fn inverted_range_is_an_error() {
        assert!(errors("30-10", FieldName::Minute)[0].contains("inverted"));
    }

    #[test]
    fn list_reports_each_bad_member() {
        let msgs = errors("0,60,99", FieldName::Minute);
        assert_eq!(msgs.len(), 2);
        assert!(msgs.iter().all(|m| m.contains("out of range")));
    }

    #[test]
    fn list_member_embedded_out_of_range_is_caught() {
        // "0,60" must not slip past as valid just because 0 is fine.
        assert!(!errors("0,60", FieldName::Minute).is_empty());
        assert!(!errors("10-60", FieldName::Minute).is_empty());
        assert!(!errors("1,24", FieldName::Hour).is_empty());
    }

    #[test]
    fn zero_step_is_an_error() {
        assert!(errors("*/0", FieldName::Minute)[0].contains("greater than 0"));
    }

    #[test]
    fn oversized_step_is_a_warning_not_an_error() {
        let report = validate_field("*/120", FieldName::Minute);
        assert!(report.errors.is_empty());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].message.contains("once per cycle"));
    }

    #[test]
    fn negative_step_fails_the_charset_or_shape_check() {
        assert!(!errors("*/-5", FieldName::Minute).is_empty());
    }

    #[test]
    fn sunday_alias_warns_and_suggests_zero() {
        let report = validate_field("7", FieldName::DayOfWeek);
        assert!(report.errors.is_empty());
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].field, DiagnosticScope::DayOfWeek);
        assert!(report.warnings[0].suggestion.contains("0 instead of 7"));
    }

    #[test]
    fn step_base_bounds_are_checked() {
        assert!(errors("61/5", FieldName::Minute)[0].contains("out of range"));
        assert!(errors("5-70/5", FieldName::Minute)[0].contains("out of range"));
    }
}
