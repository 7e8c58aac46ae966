//! Streaming JSON body aggregation.
//!
//! Request and response bodies often arrive as a stream of byte chunks. These
//! helpers drain such a stream in order and parse the concatenated text.
//!
//! # Examples
//!
//! ```
//! use botkit_utils::utils::json::get_json_response;
//! use futures::stream;
//! use serde_json::{json, Value};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let chunks = vec![Ok::<_, std::io::Error>(r#"{"a":"#), Ok(r#"1,"b":2}"#)];
//! let value: Value = get_json_response(stream::iter(chunks)).await.unwrap();
//! assert_eq!(value, json!({"a": 1, "b": 2}));
//! # });
//! ```

use crate::error::BodyError;
use futures::stream::{self, Stream, StreamExt};
use serde::de::DeserializeOwned;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{debug, warn};

/// Default chunk size for [`chunks_from_reader`].
pub const DEFAULT_CHUNK_SIZE: usize = 8 * 1024;

/// Collects every chunk of `body` and parses the result as JSON.
///
/// The whole stream is consumed before parsing. A stream error aborts
/// immediately with [`BodyError::Stream`]; an empty or malformed body fails
/// with [`BodyError::Parse`].
pub async fn get_json_response<T, S, B, E>(body: S) -> Result<T, BodyError>
where
    T: DeserializeOwned,
    S: Stream<Item = Result<B, E>>,
    B: AsRef<[u8]>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    collect_json(body, None).await
}

/// Like [`get_json_response`], but fails with [`BodyError::TooLarge`] as soon
/// as more than `max_bytes` have been received.
pub async fn get_json_response_limited<T, S, B, E>(
    body: S,
    max_bytes: usize,
) -> Result<T, BodyError>
where
    T: DeserializeOwned,
    S: Stream<Item = Result<B, E>>,
    B: AsRef<[u8]>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    collect_json(body, Some(max_bytes)).await
}

async fn collect_json<T, S, B, E>(body: S, limit: Option<usize>) -> Result<T, BodyError>
where
    T: DeserializeOwned,
    S: Stream<Item = Result<B, E>>,
    B: AsRef<[u8]>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    futures::pin_mut!(body);

    let mut buf = Vec::new();
    let mut chunks = 0usize;
    while let Some(chunk) = body.next().await {
        let chunk = chunk.map_err(|e| BodyError::Stream(e.into()))?;
        buf.extend_from_slice(chunk.as_ref());
        chunks += 1;

        if let Some(limit) = limit {
            if buf.len() > limit {
                warn!(limit, received = buf.len(), "JSON body over limit");
                return Err(BodyError::TooLarge { limit });
            }
        }
    }

    debug!(chunks, bytes = buf.len(), "collected JSON body");
    Ok(serde_json::from_slice(&buf)?)
}

/// Turns an async reader into a stream of chunks of at most `chunk_size`
/// bytes, ending at EOF.
pub fn chunks_from_reader<R>(
    reader: R,
    chunk_size: usize,
) -> impl Stream<Item = std::io::Result<Vec<u8>>>
where
    R: AsyncRead + Unpin,
{
    let chunk_size = chunk_size.max(1);
    stream::unfold(Some(reader), move |state| async move {
        let mut reader = state?;
        let mut buf = vec![0u8; chunk_size];
        match reader.read(&mut buf).await {
            Ok(0) => None,
            Ok(n) => {
                buf.truncate(n);
                Some((Ok(buf), Some(reader)))
            }
            // Yield the error, then end the stream
            Err(e) => Some((Err(e), None)),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::{json, Value};
    use std::io;

    fn ok_chunks(parts: &[&'static str]) -> impl Stream<Item = io::Result<&'static str>> {
        stream::iter(parts.iter().copied().map(Ok::<_, io::Error>).collect::<Vec<_>>())
    }

    #[tokio::test]
    async fn test_single_chunk() {
        let value: Value = get_json_response(ok_chunks(&[r#"{"a":1,"b":2}"#]))
            .await
            .unwrap();
        assert_eq!(value, json!({"a": 1, "b": 2}));
    }

    #[tokio::test]
    async fn test_chunks_concatenate_in_order() {
        let value: Value = get_json_response(ok_chunks(&["[1,", "2,", "3]"]))
            .await
            .unwrap();
        assert_eq!(value, json!([1, 2, 3]));
    }

    #[tokio::test]
    async fn test_typed_target() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Pair {
            a: u32,
            b: u32,
        }

        let pair: Pair = get_json_response(ok_chunks(&[r#"{"a":1,"#, r#""b":2}"#]))
            .await
            .unwrap();
        assert_eq!(pair, Pair { a: 1, b: 2 });
    }

    #[tokio::test]
    async fn test_empty_body_is_parse_error() {
        let result: Result<Value, _> = get_json_response(ok_chunks(&[])).await;
        assert!(result.unwrap_err().is_parse());

        let result: Result<Value, _> = get_json_response(ok_chunks(&[""])).await;
        assert!(result.unwrap_err().is_parse());
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let result: Result<Value, _> = get_json_response(ok_chunks(&[r#"{"a":"#])).await;
        assert!(matches!(result, Err(BodyError::Parse(_))));
    }

    #[tokio::test]
    async fn test_stream_error_propagates() {
        let chunks = stream::iter(vec![
            Ok("{"),
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset")),
            Ok("}"),
        ]);
        let result: Result<Value, _> = get_json_response(chunks).await;
        match result {
            Err(BodyError::Stream(e)) => assert!(e.to_string().contains("reset")),
            other => panic!("expected stream error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_limit() {
        let result: Result<Value, _> =
            get_json_response_limited(ok_chunks(&["[1,2,", "3,4]"]), 6).await;
        assert!(matches!(result, Err(BodyError::TooLarge { limit: 6 })));

        let value: Value = get_json_response_limited(ok_chunks(&["[1,2,", "3,4]"]), 9)
            .await
            .unwrap();
        assert_eq!(value, json!([1, 2, 3, 4]));
    }

    #[tokio::test]
    async fn test_chunks_from_reader() {
        let body: &[u8] = br#"{"name":"botkit","tags":["a","b"]}"#;
        let chunks: Vec<Vec<u8>> = chunks_from_reader(body, 4)
            .map(|c| c.unwrap())
            .collect()
            .await;
        assert!(chunks.len() > 1);
        assert!(chunks.iter().all(|c| c.len() <= 4));

        let value: Value = get_json_response(chunks_from_reader(body, 4)).await.unwrap();
        assert_eq!(value["tags"], json!(["a", "b"]));
    }
}
