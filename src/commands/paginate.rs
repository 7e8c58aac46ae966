//! Pagination command.

use crate::utils::paginate::{page_count, paginate};
use anyhow::{ensure, Result};

/// Renders one line per page: `Page 1/2: a, b, c`.
pub fn render(items: &[String], size: usize) -> Result<String> {
    ensure!(size > 0, "Page size must be at least 1");

    let total = page_count(items.len(), size);
    let lines: Vec<String> = paginate(items, size)
        .iter()
        .enumerate()
        .map(|(i, page)| format!("Page {}/{}: {}", i + 1, total, page.join(", ")))
        .collect();

    Ok(lines.join("\n"))
}

pub fn run(items: &[String], size: usize) -> Result<()> {
    let output = render(items, size)?;
    if output.is_empty() {
        eprintln!("No items to paginate");
    } else {
        println!("{}", output);
    }
    Ok(())
}
