//! Terminal rendering of validation results: ANSI formatting and the
//! per-field breakdown.

use cronlint_engine::{BatchEntry, ValidationResult};

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Check if the terminal supports color output.
pub fn supports_color() -> bool {
    std::env::var("NO_COLOR").is_err()
        && std::env::var("TERM").map(|t| t != "dumb").unwrap_or(false)
}

fn paint(text: &str, code: &str, color: bool) -> String {
    if color {
        format!("{code}{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// Print the full breakdown for one expression.
pub fn print_result(expression: &str, result: &ValidationResult, color: bool) {
    let verdict = if result.is_valid {
        paint("valid", GREEN, color)
    } else {
        paint("invalid", RED, color)
    };
    println!("{} {verdict}", paint(expression, BOLD, color));

    let pf = &result.parsed_fields;
    println!(
        "  fields: minute={} hour={} day-of-month={} month={} day-of-week={}",
        show(&pf.minute),
        show(&pf.hour),
        show(&pf.day_of_month),
        show(&pf.month),
        show(&pf.day_of_week),
    );
    println!("  {}", result.human_readable);

    for error in &result.errors {
        println!("  {} [{}] {}", paint("error", RED, color), error.field, error.message);
    }
    for warning in &result.warnings {
        println!(
            "  {} [{}] {}",
            paint("warning", YELLOW, color),
            warning.field,
            warning.message
        );
        println!("    {}", paint(&warning.suggestion, DIM, color));
    }
    for suggestion in &result.suggestions {
        println!("  {} {}", paint("note", DIM, color), suggestion);
    }

    if !result.next_runs.is_empty() {
        println!("  next runs:");
        for run in &result.next_runs {
            println!("    {run}");
        }
    }
}

/// Print a one-line verdict per batch entry.
pub fn print_batch_summary(entries: &[BatchEntry], color: bool) {
    for entry in entries {
        let verdict = if entry.result.is_valid {
            paint("ok", GREEN, color)
        } else {
            paint("FAIL", RED, color)
        };
        let detail = entry
            .result
            .errors
            .first()
            .map(|e| format!("  ({})", e.message))
            .unwrap_or_default();
        println!("{verdict}  {}{detail}", entry.expression);
    }

    let failed = entries.iter().filter(|e| !e.result.is_valid).count();
    println!(
        "{} expression(s), {} invalid",
        entries.len(),
        if failed > 0 {
            paint(&failed.to_string(), RED, color)
        } else {
            failed.to_string()
        }
    );
}

fn show(token: &str) -> &str {
    if token.is_empty() {
        "-"
    } else {
        token
    }
}
