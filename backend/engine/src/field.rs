//! The five cron fields and their parsed forms.
//!
//! Each field token is parsed exactly once into a [`FieldForm`] variant;
//! bounds and semantic checks then run uniformly over the variant instead
//! of re-deriving the shape with scattered string tests.

use std::fmt;

/// One of the five positional cron fields. Bounds are domain constants,
/// not configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldName {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl FieldName {
    /// All five fields in positional order.
    pub const ALL: [FieldName; 5] = [
        FieldName::Minute,
        FieldName::Hour,
        FieldName::DayOfMonth,
        FieldName::Month,
        FieldName::DayOfWeek,
    ];

    /// Inclusive numeric bounds for this field. Day-of-week allows both
    /// 0 and 7 for Sunday.
    pub fn bounds(self) -> (u32, u32) {
        match self {
            FieldName::Minute => (0, 59),
            FieldName::Hour => (0, 23),
            FieldName::DayOfMonth => (1, 31),
            FieldName::Month => (1, 12),
            FieldName::DayOfWeek => (0, 7),
        }
    }

    /// Number of distinct values in the field's range.
    pub fn span(self) -> u32 {
        let (min, max) = self.bounds();
        max - min + 1
    }

    fn index(self) -> usize {
        match self {
            FieldName::Minute => 0,
            FieldName::Hour => 1,
            FieldName::DayOfMonth => 2,
            FieldName::Month => 3,
            FieldName::DayOfWeek => 4,
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FieldName::Minute => "minute",
            FieldName::Hour => "hour",
            FieldName::DayOfMonth => "day-of-month",
            FieldName::Month => "month",
            FieldName::DayOfWeek => "day-of-week",
        };
        f.write_str(s)
    }
}

/// A list element: a single value or an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    Single(u32),
    Range { lo: u32, hi: u32 },
}

/// The base of a `base/step` expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepBase {
    Wildcard,
    Single(u32),
    Range { lo: u32, hi: u32 },
}

/// The parsed shape of one field token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldForm {
    Wildcard,
    Step { base: StepBase, step: u32 },
    Range { lo: u32, hi: u32 },
    List(Vec<Term>),
    Single(u32),
}

impl FieldForm {
    /// Parse a token into its form. Purely shape-level: numbers must parse,
    /// but bounds and inversion are checked later, uniformly per variant.
    ///
    /// Returns every shape problem found (list elements are reported
    /// independently), so callers can surface them all at once.
    pub fn parse(token: &str) -> Result<FieldForm, Vec<String>> {
        if token == "*" {
            return Ok(FieldForm::Wildcard);
        }
        if token.contains('/') {
            return parse_step(token);
        }
        if token.contains(',') {
            return parse_list(token);
        }
        if token.contains('-') {
            return parse_range(token).map(|(lo, hi)| FieldForm::Range { lo, hi });
        }
        match token.parse::<u32>() {
            Ok(v) => Ok(FieldForm::Single(v)),
            Err(_) => Err(vec![format!("'{token}' is not a number")]),
        }
    }

    /// Whether `value` is in this form's accepted set for field `name`.
    /// Callers pass in-bounds values; day-of-week 7 is handled by the
    /// projector's day matching, not here.
    pub fn accepts(&self, value: u32, name: FieldName) -> bool {
        match self {
            FieldForm::Wildcard => true,
            FieldForm::Single(v) => *v == value,
            FieldForm::Range { lo, hi } => (*lo..=*hi).contains(&value),
            FieldForm::List(terms) => terms.iter().any(|t| match t {
                Term::Single(v) => *v == value,
                Term::Range { lo, hi } => (*lo..=*hi).contains(&value),
            }),
            FieldForm::Step { base, step } => {
                let (start, end) = match base {
                    StepBase::Wildcard => (name.bounds().0, name.bounds().1),
                    // "5/15" means every 15th value starting at 5.
                    StepBase::Single(v) => (*v, name.bounds().1),
                    StepBase::Range { lo, hi } => (*lo, *hi),
                };
                let step = (*step).max(1);
                value >= start && value <= end && (value - start) % step == 0
            }
        }
    }

    /// Whether any accepted value of this form satisfies `pred`.
    pub fn accepts_any(&self, name: FieldName, mut pred: impl FnMut(u32) -> bool) -> bool {
        let (min, max) = name.bounds();
        (min..=max).any(|v| self.accepts(v, name) && pred(v))
    }
}

fn parse_step(token: &str) -> Result<FieldForm, Vec<String>> {
    let Some((base_str, step_str)) = token.split_once('/') else {
        return Err(vec![format!("invalid step syntax '{token}'")]);
    };
    let Ok(step) = step_str.parse::<u32>() else {
        return Err(vec![format!("step '{step_str}' is not a number")]);
    };
    let base = if base_str == "*" {
        StepBase::Wildcard
    } else if base_str.contains('-') {
        let (lo, hi) = parse_range(base_str)?;
        StepBase::Range { lo, hi }
    } else {
        match base_str.parse::<u32>() {
            Ok(v) => StepBase::Single(v),
            Err(_) => {
                return Err(vec![format!(
                    "step base '{base_str}' must be '*', a number, or a range"
                )])
            }
        }
    };
    Ok(FieldForm::Step { base, step })
}

fn parse_list(token: &str) -> Result<FieldForm, Vec<String>> {
    let mut terms = Vec::new();
    let mut problems = Vec::new();
    for element in token.split(',') {
        if element.is_empty() {
            problems.push("empty list element".to_string());
            continue;
        }
        if element.contains('-') {
            match parse_range(element) {
                Ok((lo, hi)) => terms.push(Term::Range { lo, hi }),
                Err(mut e) => problems.append(&mut e),
            }
        } else {
            match element.parse::<u32>() {
                Ok(v) => terms.push(Term::Single(v)),
                Err(_) => problems.push(format!("'{element}' is not a number")),
            }
        }
    }
    if problems.is_empty() {
        Ok(FieldForm::List(terms))
    } else {
        Err(problems)
    }
}

fn parse_range(token: &str) -> Result<(u32, u32), Vec<String>> {
    let parts: Vec<&str> = token.split('-').collect();
    if parts.len() != 2 {
        return Err(vec![format!(
            "range '{token}' must be exactly two values separated by '-'"
        )]);
    }
    let mut problems = Vec::new();
    let lo = parts[0].parse::<u32>();
    let hi = parts[1].parse::<u32>();
    if lo.is_err() {
        problems.push(format!("'{}' is not a number", parts[0]));
    }
    if hi.is_err() {
        problems.push(format!("'{}' is not a number", parts[1]));
    }
    match (lo, hi) {
        (Ok(lo), Ok(hi)) => Ok((lo, hi)),
        _ => Err(problems),
    }
}

/// The five tokens of an expression together with their parsed forms.
/// Only built once every field has parsed and validated cleanly.
#[derive(Debug, Clone)]
pub struct FieldSet {
    pub tokens: [String; 5],
    pub forms: [FieldForm; 5],
}

impl FieldSet {
    pub fn token(&self, name: FieldName) -> &str {
        &self.tokens[name.index()]
    }

    pub fn form(&self, name: FieldName) -> &FieldForm {
        &self.forms[name.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_shape() {
        assert_eq!(FieldForm::parse("*").unwrap(), FieldForm::Wildcard);
        assert_eq!(FieldForm::parse("7").unwrap(), FieldForm::Single(7));
        assert_eq!(
            FieldForm::parse("1-5").unwrap(),
            FieldForm::Range { lo: 1, hi: 5 }
        );
        assert_eq!(
            FieldForm::parse("*/15").unwrap(),
            FieldForm::Step { base: StepBase::Wildcard, step: 15 }
        );
        assert_eq!(
            FieldForm::parse("10-40/5").unwrap(),
            FieldForm::Step { base: StepBase::Range { lo: 10, hi: 40 }, step: 5 }
        );
        assert_eq!(
            FieldForm::parse("1,3-5,9").unwrap(),
            FieldForm::List(vec![
                Term::Single(1),
                Term::Range { lo: 3, hi: 5 },
                Term::Single(9),
            ])
        );
    }

    #[test]
    fn list_reports_every_bad_element() {
        let problems = FieldForm::parse("1,,x,4").unwrap_err();
        assert_eq!(problems.len(), 2);
        assert!(problems[0].contains("empty"));
        assert!(problems[1].contains("'x'"));
    }

    #[test]
    fn step_with_garbage_base_is_rejected() {
        assert!(FieldForm::parse("a/5").is_err());
        assert!(FieldForm::parse("*/x").is_err());
        assert!(FieldForm::parse("1/2/3").is_err());
    }

    #[test]
    fn wildcard_step_accepts_multiples_from_min() {
        let form = FieldForm::parse("*/15").unwrap();
        assert!(form.accepts(0, FieldName::Minute));
        assert!(form.accepts(45, FieldName::Minute));
        assert!(!form.accepts(20, FieldName::Minute));
    }

    #[test]
    fn single_base_step_starts_at_base() {
        let form = FieldForm::parse("5/10").unwrap();
        assert!(form.accepts(5, FieldName::Minute));
        assert!(form.accepts(25, FieldName::Minute));
        assert!(!form.accepts(0, FieldName::Minute));
    }

    #[test]
    fn accepts_any_sees_list_members() {
        let form = FieldForm::parse("28-31").unwrap();
        assert!(form.accepts_any(FieldName::DayOfMonth, |v| v >= 29));
        let form = FieldForm::parse("1,15").unwrap();
        assert!(!form.accepts_any(FieldName::DayOfMonth, |v| v >= 29));
    }

    #[test]
    fn huge_literal_is_a_parse_problem_not_a_panic() {
        assert!(FieldForm::parse("99999999999999999999").is_err());
    }
}
