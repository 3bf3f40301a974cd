//! Display formatting: rupee amounts, donation progress, dates, initials.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::OffsetDateTime;
use time::macros::format_description;

const MINUTES_IN_HOUR: i64 = 60;
const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_MONTH: i64 = 43_200;

/// Indian digit grouping: last three digits, then pairs (`12,34,567`).
#[must_use]
pub fn group_indian(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, right) = rest.split_at(rest.len() - 2);
        groups.push(right);
        rest = left;
    }
    groups.push(rest);
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

/// Currency display with paise, e.g. `₹1,20,000.00`.
#[must_use]
pub fn rupees(amount: u64) -> String {
    format!("₹{}.00", group_indian(amount))
}

/// Compact currency display for buttons, e.g. `₹1,000`.
#[must_use]
pub fn rupees_whole(amount: u64) -> String {
    format!("₹{}", group_indian(amount))
}

/// Rounded percentage of `goal` reached, capped at 100.
#[must_use]
pub fn progress_percent(received: u64, goal: u64) -> u64 {
    if goal == 0 {
        return 0;
    }
    let goal = u128::from(goal);
    let rounded = (u128::from(received) * 200 + goal) / (2 * goal);
    u64::try_from(rounded.min(100)).unwrap_or(100)
}

/// Upper-cased first letter of each word.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace().filter_map(|w| w.chars().next()).flat_map(char::to_uppercase).collect()
}

/// `Apr 20, 2023`.
#[must_use]
pub fn date(at: OffsetDateTime) -> String {
    at.format(format_description!("[month repr:short] [day padding:none], [year]")).unwrap_or_default()
}

/// `10:30 AM`.
#[must_use]
pub fn clock_time(at: OffsetDateTime) -> String {
    at.format(format_description!("[hour repr:12 padding:none]:[minute] [period]")).unwrap_or_default()
}

/// `April 2023`.
#[must_use]
pub fn month_year(at: OffsetDateTime) -> String {
    at.format(format_description!("[month repr:long] [year]")).unwrap_or_default()
}

/// Human distance between `at` and `now` with a direction suffix,
/// e.g. `3 days ago`, `about 1 month ago`, `in 2 hours`.
#[must_use]
pub fn relative_time(at: OffsetDateTime, now: OffsetDateTime) -> String {
    let seconds = (now - at).whole_seconds();
    let distance = distance_words((seconds.abs() + 30) / 60);
    if seconds >= 0 { format!("{distance} ago") } else { format!("in {distance}") }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 { format!("1 {unit}") } else { format!("{n} {unit}s") }
}

fn round_div(value: i64, unit: i64) -> i64 {
    (value + unit / 2) / unit
}

fn distance_words(minutes: i64) -> String {
    if minutes < 1 {
        return "less than a minute".to_owned();
    }
    if minutes < 45 {
        return plural(minutes, "minute");
    }
    if minutes < 90 {
        return "about 1 hour".to_owned();
    }
    if minutes < MINUTES_IN_DAY {
        return format!("about {}", plural(round_div(minutes, MINUTES_IN_HOUR), "hour"));
    }
    if minutes < 2520 {
        return "1 day".to_owned();
    }
    if minutes < MINUTES_IN_MONTH {
        return plural(round_div(minutes, MINUTES_IN_DAY), "day");
    }
    if minutes < 2 * MINUTES_IN_MONTH {
        return format!("about {}", plural(round_div(minutes, MINUTES_IN_MONTH), "month"));
    }
    let months = minutes / MINUTES_IN_MONTH;
    if months < 12 {
        return plural(round_div(minutes, MINUTES_IN_MONTH), "month");
    }
    let years = months / 12;
    match months % 12 {
        0..3 => format!("about {}", plural(years, "year")),
        3..9 => format!("over {}", plural(years, "year")),
        _ => format!("almost {}", plural(years + 1, "year")),
    }
}
