//! Duration conversion commands.

use crate::utils::duration::{convert, ms_to_time, TimeConversion, TimeUnit};
use crate::utils::format::ms_to_time_string;
use crate::utils::time::parse_time_string;
use anyhow::{Context, Result};

/// Renders `milliseconds` as a duration string, a unit total, or JSON.
pub fn render(
    milliseconds: u64,
    unit: Option<TimeUnit>,
    simple: bool,
    json: bool,
) -> Result<String> {
    let conversion = convert(milliseconds, unit);
    if json {
        return serde_json::to_string(&conversion).context("Failed to serialize duration");
    }

    Ok(match conversion {
        TimeConversion::Total(total) => total.to_string(),
        // The detailed form of a zero duration is empty
        TimeConversion::Breakdown(duration) if duration.is_zero() && !simple => "0".to_string(),
        TimeConversion::Breakdown(duration) => ms_to_time_string(&duration, simple),
    })
}

pub fn run(milliseconds: u64, unit: Option<TimeUnit>, simple: bool, json: bool) -> Result<()> {
    println!("{}", render(milliseconds, unit, simple, json)?);
    Ok(())
}

/// Renders the millisecond total of `text`, followed by its detailed form
/// when non-zero, e.g. `5400000 (1 hr, 30 mins)`.
pub fn render_parse(text: &str) -> String {
    let milliseconds = parse_time_string(text);
    let duration = ms_to_time(milliseconds);
    if duration.is_zero() {
        milliseconds.to_string()
    } else {
        format!("{} ({})", milliseconds, duration)
    }
}

pub fn run_parse(text: &str) -> Result<()> {
    println!("{}", render_parse(text));
    Ok(())
}
