use time::OffsetDateTime;

const MINUTES_IN_HOUR: i64 = 60;
const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2520;
const MINUTES_IN_MONTH: i64 = 43200;
const MINUTES_IN_TWO_MONTHS: i64 = 86400;

/// Whole seconds from `start` to `now`, floored. Never negative, so a clock
/// that steps backwards shows no progress instead of extra time.
pub fn elapsed_seconds(start: OffsetDateTime, now: OffsetDateTime) -> i64 {
    (now - start).whole_seconds().max(0)
}

/// Seconds left of `target_seconds` after `elapsed_seconds`, clamped at zero.
pub fn remaining_seconds(target_seconds: i64, elapsed_seconds: i64) -> i64 {
    (target_seconds - elapsed_seconds).max(0)
}

/// Split a second count into (minutes, seconds).
pub fn split_minutes_seconds(total_seconds: i64) -> (i64, i64) {
    let total_seconds = total_seconds.max(0);
    (total_seconds / 60, total_seconds % 60)
}

/// Format a second count as `MM:SS`, both parts zero-padded to two digits.
pub fn format_mm_ss(total_seconds: i64) -> String {
    let (minutes, seconds) = split_minutes_seconds(total_seconds);
    format!("{:02}:{:02}", minutes, seconds)
}

/// Human readable distance between two instants, e.g. "about 2 hours".
///
/// Buckets follow the usual "time ago" conventions: minutes are rounded,
/// under a minute reads "less than a minute", and past 45 minutes the
/// wording switches to approximate hours, then days, months and years.
pub fn format_distance(earlier: OffsetDateTime, later: OffsetDateTime) -> String {
    let seconds = (later - earlier).whole_seconds().abs();
    let minutes = (seconds as f64 / 60.0).round() as i64;

    if minutes < 2 {
        if minutes == 0 {
            "less than a minute".to_string()
        } else {
            "1 minute".to_string()
        }
    } else if minutes < 45 {
        format!("{} minutes", minutes)
    } else if minutes < 90 {
        "about 1 hour".to_string()
    } else if minutes < MINUTES_IN_DAY {
        let hours = (minutes as f64 / MINUTES_IN_HOUR as f64).round() as i64;
        format!("about {} hours", hours)
    } else if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
        "1 day".to_string()
    } else if minutes < MINUTES_IN_MONTH {
        let days = (minutes as f64 / MINUTES_IN_DAY as f64).round() as i64;
        format!("{} days", days)
    } else if minutes < MINUTES_IN_TWO_MONTHS {
        let months = (minutes as f64 / MINUTES_IN_MONTH as f64).round() as i64;
        plural("about", months, "month")
    } else {
        let months = minutes / MINUTES_IN_MONTH;
        if months < 12 {
            format!("{} months", months)
        } else {
            plural("about", months / 12, "year")
        }
    }
}

fn plural(prefix: &str, count: i64, unit: &str) -> String {
    if count == 1 {
        format!("{} 1 {}", prefix, unit)
    } else {
        format!("{} {} {}s", prefix, count, unit)
    }
}
