//! Progress bar command.

use crate::utils::progress::{render_bar, BarStyle};
use anyhow::Result;

pub fn render(progress: f64, ascii: bool) -> String {
    let style = if ascii {
        BarStyle::ASCII
    } else {
        BarStyle::EMOJI
    };
    render_bar(progress, &style)
}

pub fn run(progress: f64, ascii: bool) -> Result<()> {
    println!("{}", render(progress, ascii));
    Ok(())
}
