//! Rounding command.

use crate::utils::round::{round_to, round_to_int};
use anyhow::{ensure, Result};

/// Rounds `value` to `digits` places, or to an integer when `digits` is unset.
pub fn render(value: f64, digits: Option<u32>) -> Result<String> {
    ensure!(value.is_finite(), "Cannot round non-finite value: {}", value);

    Ok(match digits {
        None | Some(0) => round_to_int(value).to_string(),
        Some(digits) => round_to(value, digits).to_string(),
    })
}

pub fn run(value: f64, digits: Option<u32>) -> Result<()> {
    println!("{}", render(value, digits)?);
    Ok(())
}
