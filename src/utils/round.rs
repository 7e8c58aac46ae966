//! Decimal rounding that behaves the way people expect on paper.
//!
//! Plain `(n * 100.0).round() / 100.0` rounds `1.005` down to `1.0` because the
//! scaled value is `100.49999999999999`. Here the scaled value is first
//! normalised to 11 decimal places, which absorbs that representation error
//! before the half-away-from-zero step.

/// Decimal places the scaled value is normalised to before rounding.
const NORMALISE_DIGITS: usize = 11;

/// Rounds `n` to `digits` decimal places, half away from zero.
///
/// NaN and infinities are returned unchanged, as is `n` when `10^digits`
/// overflows an `f64`.
///
/// # Examples
///
/// ```
/// use botkit_utils::utils::round::round_to;
///
/// assert_eq!(round_to(3.1415, 2), 3.14);
/// assert_eq!(round_to(1.005, 2), 1.01);
/// assert_eq!(round_to(-5.678, 1), -5.7);
/// ```
pub fn round_to(n: f64, digits: u32) -> f64 {
    if !n.is_finite() {
        return n;
    }
    let Ok(exponent) = i32::try_from(digits) else {
        return n;
    };
    let multiplicator = 10f64.powi(exponent);
    if !multiplicator.is_finite() {
        return n;
    }

    let negative = n < 0.0;
    let scaled = to_fixed(n.abs() * multiplicator, NORMALISE_DIGITS);
    if !scaled.is_finite() {
        return n;
    }
    let rounded = to_fixed(scaled.round() / multiplicator, digits as usize);

    let signed = if negative { -rounded } else { rounded };
    // -0.0 -> 0.0
    if signed == 0.0 {
        0.0
    } else {
        signed
    }
}

/// Rounds `n` to the nearest integer, half away from zero.
///
/// Out-of-range values saturate at `i64::MIN`/`i64::MAX` and NaN becomes 0.
pub fn round_to_int(n: f64) -> i64 {
    round_to(n, 0) as i64
}

/// Round-trips `n` through its fixed-point text form, like `toFixed`.
fn to_fixed(n: f64, digits: usize) -> f64 {
    format!("{:.*}", digits, n).parse().unwrap_or(n)
}
