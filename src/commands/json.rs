//! Reads a JSON document from stdin in chunks and pretty-prints it.

use crate::utils::json::{
    chunks_from_reader, get_json_response, get_json_response_limited, DEFAULT_CHUNK_SIZE,
};
use anyhow::{Context, Result};
use serde_json::Value;
use tokio::io::AsyncRead;

/// Collects `reader` as a JSON body, optionally capped at `max_bytes`, and
/// returns it pretty-printed.
pub async fn render<R>(reader: R, max_bytes: Option<usize>) -> Result<String>
where
    R: AsyncRead + Unpin,
{
    let chunks = chunks_from_reader(reader, DEFAULT_CHUNK_SIZE);
    let value: Value = match max_bytes {
        Some(limit) => get_json_response_limited(chunks, limit).await,
        None => get_json_response(chunks).await,
    }
    .context("Failed to read JSON from input")?;

    serde_json::to_string_pretty(&value).context("Failed to format JSON")
}

pub async fn run(max_bytes: Option<usize>) -> Result<()> {
    let output = render(tokio::io::stdin(), max_bytes).await?;
    println!("{}", output);
    Ok(())
}
