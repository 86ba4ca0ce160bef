//! Natural-language rendering of a five-field expression.
//!
//! Purely syntactic: renders whatever tokens it is given, valid or not,
//! and never fails. The pipeline decides when a description is shown.

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Render the five field tokens into one sentence.
pub fn describe(tokens: &[String; 5]) -> String {
    let minute = tokens[0].as_str();
    let hour = tokens[1].as_str();
    let dom = tokens[2].as_str();
    let month = tokens[3].as_str();
    let dow = tokens[4].as_str();

    let mut clauses = vec![
        minute_clause(minute),
        hour_clause(hour),
        day_month_clause(dom, month),
    ];
    if dow != "*" {
        clauses.push(weekday_clause(dow));
    }

    format!("Runs {}", clauses.join(" "))
}

fn minute_clause(minute: &str) -> String {
    if minute == "*" {
        return "every minute".to_string();
    }
    if let Some((_, step)) = minute.split_once('/') {
        return format!("every {step} minutes");
    }
    if minute == "0" {
        return "at the start of the hour".to_string();
    }
    format!("at minute {minute}")
}

fn hour_clause(hour: &str) -> String {
    if hour == "*" {
        return "of every hour".to_string();
    }
    if let Some((_, step)) = hour.split_once('/') {
        return format!("of every {step} hours");
    }
    if let Some((lo, hi)) = hour.split_once('-') {
        return format!("between {lo}:00 and {hi}:00");
    }
    format!("at {hour}:00")
}

fn day_month_clause(dom: &str, month: &str) -> String {
    match (dom == "*", month == "*") {
        (true, true) => "every day".to_string(),
        (false, true) => format!("on day {dom} of every month"),
        (true, false) => format!("every day in month {month}"),
        (false, false) => format!("on day {dom} of month {month}"),
    }
}

fn weekday_clause(dow: &str) -> String {
    if dow.contains(',') {
        let names: Vec<String> = dow.split(',').map(weekday_element).collect();
        return format!("on {}", names.join(", "));
    }
    if let Some((lo, hi)) = dow.split_once('-') {
        return format!("from {} to {}", day_name(lo), day_name(hi));
    }
    format!("on {}", day_name(dow))
}

fn weekday_element(element: &str) -> String {
    match element.split_once('-') {
        Some((lo, hi)) => format!("{} to {}", day_name(lo), day_name(hi)),
        None => day_name(element),
    }
}

/// Map a numeric day-of-week token to its name; 7 is Sunday. Tokens that
/// do not name a day render as-is so invalid expressions still describe.
fn day_name(token: &str) -> String {
    match token.parse::<usize>() {
        Ok(n) if n < 7 => DAY_NAMES[n].to_string(),
        Ok(7) => DAY_NAMES[0].to_string(),
        _ => token.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(tokens: [&str; 5]) -> String {
        describe(&tokens.map(String::from))
    }

    #[test]
    fn daily_midnight() {
        assert_eq!(
            render(["0", "0", "*", "*", "*"]),
            "Runs at the start of the hour at 0:00 every day"
        );
    }

    #[test]
    fn step_minute() {
        assert_eq!(
            render(["*/15", "*", "*", "*", "*"]),
            "Runs every 15 minutes of every hour every day"
        );
    }

    #[test]
    fn hour_range() {
        assert_eq!(
            render(["30", "9-17", "*", "*", "*"]),
            "Runs at minute 30 between 9:00 and 17:00 every day"
        );
    }

    #[test]
    fn day_of_month_with_weekday() {
        assert_eq!(
            render(["0", "0", "15", "*", "1"]),
            "Runs at the start of the hour at 0:00 on day 15 of every month on Monday"
        );
    }

    #[test]
    fn month_only() {
        assert_eq!(
            render(["0", "12", "*", "6", "*"]),
            "Runs at the start of the hour at 12:00 every day in month 6"
        );
    }

    #[test]
    fn weekday_list_and_range() {
        assert_eq!(
            render(["0", "8", "*", "*", "1,3-5"]),
            "Runs at the start of the hour at 8:00 every day on Monday, Wednesday to Friday"
        );
        assert_eq!(
            render(["0", "8", "*", "*", "1-5"]),
            "Runs at the start of the hour at 8:00 every day from Monday to Friday"
        );
    }

    #[test]
    fn seven_renders_as_sunday() {
        assert!(render(["0", "0", "*", "*", "7"]).ends_with("on Sunday"));
    }

    #[test]
    fn garbage_tokens_render_without_panicking() {
        let s = render(["abc", "??", "0", "0", "xyz"]);
        assert!(s.starts_with("Runs"));
        assert!(s.contains("xyz"));
    }
}
