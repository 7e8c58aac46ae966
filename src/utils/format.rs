//! Duration and number formatting.
//!
//! Two renderings of a [`Duration`] are provided:
//!
//! - simple: `M:SS` or `H:MM:SS`, for anything shorter than a day
//! - detailed: `1 day, 5 hrs, 5 mins, 5 secs`, listing only non-zero units

use super::duration::Duration;

/// Returned by the simple format for durations of one day or more.
pub const MORE_THAN_A_DAY: &str = "MORE_THAN_A_DAY";

/// Formats a duration as a simple or a detailed string.
///
/// # Examples
///
/// ```
/// use botkit_utils::utils::duration::Duration;
/// use botkit_utils::utils::format::ms_to_time_string;
///
/// assert_eq!(ms_to_time_string(&Duration::new(0, 0, 0, 5), true), "0:05");
/// assert_eq!(ms_to_time_string(&Duration::new(0, 5, 5, 5), true), "5:05:05");
/// assert_eq!(ms_to_time_string(&Duration::new(0, 0, 0, 5), false), "5 secs");
/// ```
pub fn ms_to_time_string(duration: &Duration, simple: bool) -> String {
    if simple {
        format_simple(duration)
    } else {
        format_detailed(duration)
    }
}

/// Colon-separated rendering. Lossy for multi-day values, which collapse to
/// [`MORE_THAN_A_DAY`].
pub fn format_simple(duration: &Duration) -> String {
    if duration.days > 0 {
        return MORE_THAN_A_DAY.to_string();
    }
    if duration.hours > 0 {
        format!(
            "{}:{:02}:{:02}",
            duration.hours, duration.minutes, duration.seconds
        )
    } else {
        format!("{}:{:02}", duration.minutes, duration.seconds)
    }
}

/// Comma-separated list of the non-zero units. A zero duration renders as an
/// empty string.
pub fn format_detailed(duration: &Duration) -> String {
    let units = [
        (duration.days, "day"),
        (duration.hours, "hr"),
        (duration.minutes, "min"),
        (duration.seconds, "sec"),
    ];

    units
        .iter()
        .filter(|(n, _)| *n > 0)
        .map(|(n, unit)| format!("{} {}{}", n, unit, if *n == 1 { "" } else { "s" }))
        .collect::<Vec<_>>()
        .join(", ")
}
