//! Projection of upcoming run times.
//!
//! Walks calendar time with each field's accepted-value set as a
//! predicate, skipping whole months, days, and hours that cannot match
//! rather than scanning minute by minute. Day-of-month and day-of-week
//! combine with cron's OR semantics when both are restricted.
//!
//! Times are naive local time; timezone and DST transitions are out of
//! scope.

use chrono::{Datelike, Duration, Local, NaiveDateTime, Timelike};

use crate::field::{FieldForm, FieldName, FieldSet};

/// Default number of upcoming runs to project.
pub const DEFAULT_RUN_COUNT: usize = 5;

/// Upper bound on calendar skips per projection. Generous for any real
/// schedule; forces termination for dates that never occur (Feb 30).
const MAX_WALK_STEPS: usize = 100_000;

/// Project the next `count` runs after the current local time.
pub fn project(set: &FieldSet, count: usize) -> Vec<String> {
    project_from(set, Local::now().naive_local(), count)
}

/// Project the next `count` runs strictly after `after`. Deterministic;
/// the time-reading entry point is [`project`].
pub fn project_from(set: &FieldSet, after: NaiveDateTime, count: usize) -> Vec<String> {
    let minute_form = set.form(FieldName::Minute);
    let hour_form = set.form(FieldName::Hour);
    let month_form = set.form(FieldName::Month);

    // First candidate: the next whole minute strictly after `after`.
    let mut candidate = after
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(after)
        + Duration::minutes(1);

    let mut runs = Vec::with_capacity(count);
    let mut steps = 0usize;
    while runs.len() < count && steps < MAX_WALK_STEPS {
        steps += 1;
        if !month_form.accepts(candidate.month(), FieldName::Month) {
            candidate = start_of_next_month(candidate);
            continue;
        }
        if !day_matches(set, candidate) {
            candidate = start_of_next_day(candidate);
            continue;
        }
        if !hour_form.accepts(candidate.hour(), FieldName::Hour) {
            candidate = start_of_next_hour(candidate);
            continue;
        }
        if !minute_form.accepts(candidate.minute(), FieldName::Minute) {
            candidate += Duration::minutes(1);
            continue;
        }
        runs.push(candidate.format("%Y-%m-%dT%H:%M:%S").to_string());
        candidate += Duration::minutes(1);
    }

    if runs.len() < count {
        tracing::debug!(
            found = runs.len(),
            requested = count,
            "projection walk capped before finding all runs"
        );
    }
    runs
}

/// Cron day semantics: when both day fields are restricted the job fires
/// when EITHER matches; otherwise the restricted one (if any) decides.
fn day_matches(set: &FieldSet, t: NaiveDateTime) -> bool {
    let dom_form = set.form(FieldName::DayOfMonth);
    let dow_form = set.form(FieldName::DayOfWeek);

    let dom_ok = dom_form.accepts(t.day(), FieldName::DayOfMonth);
    let weekday = t.weekday().num_days_from_sunday();
    let dow_ok = dow_form.accepts(weekday, FieldName::DayOfWeek)
        || (weekday == 0 && dow_form.accepts(7, FieldName::DayOfWeek));

    let dom_wild = matches!(dom_form, FieldForm::Wildcard);
    let dow_wild = matches!(dow_form, FieldForm::Wildcard);
    match (dom_wild, dow_wild) {
        (true, true) => true,
        (false, true) => dom_ok,
        (true, false) => dow_ok,
        (false, false) => dom_ok || dow_ok,
    }
}

fn start_of_next_month(t: NaiveDateTime) -> NaiveDateTime {
    let (year, month) = if t.month() == 12 {
        (t.year() + 1, 1)
    } else {
        (t.year(), t.month() + 1)
    };
    chrono::NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        // Unreachable for in-range dates; the fallback still makes progress.
        .unwrap_or(t + Duration::days(1))
}

fn start_of_next_day(t: NaiveDateTime) -> NaiveDateTime {
    (t.date() + Duration::days(1))
        .and_hms_opt(0, 0, 0)
        .unwrap_or(t + Duration::days(1))
}

fn start_of_next_hour(t: NaiveDateTime) -> NaiveDateTime {
    (t + Duration::hours(1)).with_minute(0).unwrap_or(t + Duration::hours(1))
}
