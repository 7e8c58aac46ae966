//! Time string parsing.

use super::duration::TimeUnit;
use tracing::trace;

/// Parses a string of `<number><unit>` tokens into milliseconds.
///
/// Units are `s`, `m`, `h` and `d`, case-sensitive. Tokens may appear in any
/// order and repeat (`2s2s` is 4 seconds). Digits not directly followed by a
/// unit letter are dropped, as is everything else that is not part of a token.
/// A string without any token parses to 0. The total saturates at `u64::MAX`.
///
/// # Examples
///
/// ```
/// use botkit_utils::utils::time::parse_time_string;
///
/// assert_eq!(parse_time_string("1h1m1s"), 3_661_000);
/// assert_eq!(parse_time_string("2s2s"), 4_000);
/// assert_eq!(parse_time_string("0"), 0);
/// ```
pub fn parse_time_string(time_string: &str) -> u64 {
    let mut total: u64 = 0;
    // None until at least one digit of the current token has been seen
    let mut pending: Option<u64> = None;

    for c in time_string.chars() {
        if let Some(digit) = c.to_digit(10) {
            let amount = pending.unwrap_or(0);
            pending = Some(amount.saturating_mul(10).saturating_add(u64::from(digit)));
            continue;
        }

        if let (Some(amount), Some(unit)) = (pending, TimeUnit::from_suffix(c)) {
            trace!(amount, unit = ?unit, "time token");
            total = total.saturating_add(amount.saturating_mul(unit.millis()));
        }
        pending = None;
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_tokens() {
        assert_eq!(parse_time_string("1h1m1s"), 3_661_000);
        assert_eq!(parse_time_string("30s"), 30_000);
        assert_eq!(parse_time_string("1d"), 86_400_000);
    }

    #[test]
    fn test_parse_any_order_and_repeats() {
        assert_eq!(parse_time_string("1s1h"), 3_601_000);
        assert_eq!(parse_time_string("2s2s"), 4_000);
    }

    #[test]
    fn test_parse_ignores_separators() {
        assert_eq!(parse_time_string("1h 30m"), 5_400_000);
        assert_eq!(parse_time_string("in 5m, please"), 300_000);
    }

    #[test]
    fn test_parse_drops_unitless_digits() {
        assert_eq!(parse_time_string("0"), 0);
        assert_eq!(parse_time_string("5m10"), 300_000);
        assert_eq!(parse_time_string("5 m"), 0);
        assert_eq!(parse_time_string("5x3s"), 3_000);
    }

    #[test]
    fn test_parse_empty_and_garbage() {
        assert_eq!(parse_time_string(""), 0);
        assert_eq!(parse_time_string("hms"), 0);
        assert_eq!(parse_time_string("1H"), 0);
    }

    #[test]
    fn test_parse_saturates() {
        assert_eq!(parse_time_string("99999999999999999999999d"), u64::MAX);
    }
}
