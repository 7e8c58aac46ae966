//! Millisecond to duration conversion.
//!
//! A [`Duration`] is the (days, hours, minutes, seconds) breakdown of a
//! millisecond count. Sub-second remainders are discarded.
//!
//! # Examples
//!
//! ```
//! use botkit_utils::utils::duration::{ms_to_time, ms_to_unit, Duration, TimeUnit};
//!
//! assert_eq!(ms_to_time(3_600_000), Duration::new(0, 1, 0, 0));
//! assert_eq!(ms_to_unit(3_600_000, TimeUnit::Hours), 1);
//! assert_eq!(ms_to_unit(86_400_000, TimeUnit::Days), 1);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MS_PER_SECOND: u64 = 1_000;
pub const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

/// Elapsed time split into days and the remaining hours, minutes and seconds.
///
/// Serializes with the short field names `d`, `h`, `m` and `s`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Duration {
    #[serde(rename = "d")]
    pub days: u64,
    #[serde(rename = "h")]
    pub hours: u64,
    #[serde(rename = "m")]
    pub minutes: u64,
    #[serde(rename = "s")]
    pub seconds: u64,
}

impl Duration {
    pub const fn new(days: u64, hours: u64, minutes: u64, seconds: u64) -> Self {
        Self {
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// Whole-second millisecond total represented by this breakdown.
    ///
    /// Saturates at `u64::MAX` for out-of-range component values.
    pub fn as_millis(&self) -> u64 {
        self.days
            .saturating_mul(MS_PER_DAY)
            .saturating_add(self.hours.saturating_mul(MS_PER_HOUR))
            .saturating_add(self.minutes.saturating_mul(MS_PER_MINUTE))
            .saturating_add(self.seconds.saturating_mul(MS_PER_SECOND))
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&super::format::format_detailed(self))
    }
}

/// Unit selector for [`ms_to_unit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    /// Milliseconds in one of this unit.
    pub const fn millis(self) -> u64 {
        match self {
            TimeUnit::Seconds => MS_PER_SECOND,
            TimeUnit::Minutes => MS_PER_MINUTE,
            TimeUnit::Hours => MS_PER_HOUR,
            TimeUnit::Days => MS_PER_DAY,
        }
    }

    /// Single-letter suffix used in time strings like `1h30m`.
    pub const fn suffix(self) -> char {
        match self {
            TimeUnit::Seconds => 's',
            TimeUnit::Minutes => 'm',
            TimeUnit::Hours => 'h',
            TimeUnit::Days => 'd',
        }
    }

    pub const fn from_suffix(c: char) -> Option<Self> {
        match c {
            's' => Some(TimeUnit::Seconds),
            'm' => Some(TimeUnit::Minutes),
            'h' => Some(TimeUnit::Hours),
            'd' => Some(TimeUnit::Days),
            _ => None,
        }
    }
}

impl FromStr for TimeUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "s" | "sec" | "secs" | "second" | "seconds" => Ok(TimeUnit::Seconds),
            "m" | "min" | "mins" | "minute" | "minutes" => Ok(TimeUnit::Minutes),
            "h" | "hr" | "hrs" | "hour" | "hours" => Ok(TimeUnit::Hours),
            "d" | "day" | "days" => Ok(TimeUnit::Days),
            other => Err(format!(
                "unknown time unit '{}', expected one of: s, m, h, d",
                other
            )),
        }
    }
}

/// Result of [`convert`]: either the full breakdown or a single-unit total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TimeConversion {
    Breakdown(Duration),
    Total(u64),
}

/// Breaks a millisecond count into days, hours, minutes and seconds.
///
/// Days are unbounded; the other components are remainders.
pub fn ms_to_time(milliseconds: u64) -> Duration {
    let total_seconds = milliseconds / MS_PER_SECOND;
    let total_minutes = total_seconds / 60;
    let total_hours = total_minutes / 60;

    Duration {
        days: total_hours / 24,
        hours: total_hours % 24,
        minutes: total_minutes % 60,
        seconds: total_seconds % 60,
    }
}

/// Total number of whole `unit`s in a millisecond count.
///
/// This is the floor of the total, not the remainder: 90 minutes in hours is 1,
/// in minutes it is 90.
pub fn ms_to_unit(milliseconds: u64, unit: TimeUnit) -> u64 {
    milliseconds / unit.millis()
}

pub fn convert(milliseconds: u64, unit: Option<TimeUnit>) -> TimeConversion {
    match unit {
        Some(unit) => TimeConversion::Total(ms_to_unit(milliseconds, unit)),
        None => TimeConversion::Breakdown(ms_to_time(milliseconds)),
    }
}

/// [`ms_to_time`] for signed or fractional inputs.
///
/// Fractions are floored. Negative values and NaN clamp to zero, values past
/// `u64::MAX` saturate.
pub fn ms_to_time_f64(milliseconds: f64) -> Duration {
    // `as` saturates and maps NaN to 0
    ms_to_time(milliseconds.floor() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ms_to_time_one_hour() {
        assert_eq!(ms_to_time(3_600_000), Duration::new(0, 1, 0, 0));
    }

    #[test]
    fn test_ms_to_time_remainders() {
        // 1 day, 5 hours, 5 minutes, 5 seconds and 999ms
        let ms = MS_PER_DAY + 5 * MS_PER_HOUR + 5 * MS_PER_MINUTE + 5 * MS_PER_SECOND + 999;
        assert_eq!(ms_to_time(ms), Duration::new(1, 5, 5, 5));
    }

    #[test]
    fn test_ms_to_time_drops_sub_second() {
        assert_eq!(ms_to_time(999), Duration::default());
        assert_eq!(ms_to_time(1_000), Duration::new(0, 0, 0, 1));
    }

    #[test]
    fn test_ms_to_unit_totals() {
        assert_eq!(ms_to_unit(3_600_000, TimeUnit::Hours), 1);
        assert_eq!(ms_to_unit(86_400_000, TimeUnit::Days), 1);
        assert_eq!(ms_to_unit(90 * MS_PER_MINUTE, TimeUnit::Minutes), 90);
        assert_eq!(ms_to_unit(90 * MS_PER_MINUTE, TimeUnit::Hours), 1);
        assert_eq!(ms_to_unit(1_999, TimeUnit::Seconds), 1);
    }

    #[test]
    fn test_convert_tags_result() {
        assert_eq!(
            convert(3_600_000, None),
            TimeConversion::Breakdown(Duration::new(0, 1, 0, 0))
        );
        assert_eq!(
            convert(3_600_000, Some(TimeUnit::Minutes)),
            TimeConversion::Total(60)
        );
    }

    #[test]
    fn test_as_millis_reconstructs_whole_seconds() {
        for ms in [0, 999, 1_000, 61_001, 3_661_500, 10 * MS_PER_DAY + 7] {
            assert_eq!(ms_to_time(ms).as_millis(), ms / 1000 * 1000);
        }
    }

    #[test]
    fn test_ms_to_time_f64_clamps() {
        assert_eq!(ms_to_time_f64(-5_000.0), Duration::default());
        assert_eq!(ms_to_time_f64(f64::NAN), Duration::default());
        assert_eq!(ms_to_time_f64(1_999.9), Duration::new(0, 0, 0, 1));
    }

    #[test]
    fn test_time_unit_from_str() {
        assert_eq!("h".parse::<TimeUnit>().unwrap(), TimeUnit::Hours);
        assert_eq!("Days".parse::<TimeUnit>().unwrap(), TimeUnit::Days);
        assert!("w".parse::<TimeUnit>().is_err());
    }

    #[test]
    fn test_duration_serializes_short_keys() {
        let json = serde_json::to_string(&Duration::new(1, 2, 3, 4)).unwrap();
        assert_eq!(json, r#"{"d":1,"h":2,"m":3,"s":4}"#);
    }
}
