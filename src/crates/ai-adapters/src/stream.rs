//! SSE delta pump.
//!
//! Converts a `data: <json>`-framed byte stream into incremental content
//! deltas on an unbounded channel. The channel closing is the completion
//! signal; no explicit terminal payload is required.

use crate::error::ChatApiError;
use crate::types::StreamChunk;
use eventsource_stream::Eventsource;
use futures::{Stream, StreamExt};
use log::{error, trace, warn};
use tokio::sync::mpsc;

const DONE_SENTINEL: &str = "[DONE]";

/// One streaming event for the session layer: a content delta, or the
/// failure that ended the stream.
pub type DeltaResult = Result<String, ChatApiError>;

/// Drive an SSE byte stream to completion, sending each content delta in
/// arrival order.
///
/// Chunk boundaries may split an event line; the SSE decoder carries the
/// partial line over to the next read. A single malformed event is logged
/// and skipped — one bad line must not abort the stream. Exhaustion of the
/// underlying stream ends the pump; the dropped sender closes the channel.
pub async fn pump_delta_stream<S, B, E>(stream: S, tx: mpsc::UnboundedSender<DeltaResult>)
where
    S: Stream<Item = Result<B, E>>,
    B: AsRef<[u8]>,
    E: std::error::Error,
{
    let stream = stream.eventsource();
    futures::pin_mut!(stream);

    while let Some(event) = stream.next().await {
        let event = match event {
            Ok(event) => event,
            Err(e) => {
                let msg = format!("SSE stream error: {}", e);
                error!("{}", msg);
                let _ = tx.send(Err(ChatApiError::Stream(msg)));
                return;
            }
        };

        let data = event.data;
        trace!("chat SSE: {:?}", data);

        // The sentinel carries no payload and is never parsed as JSON;
        // end-of-data, not the sentinel, is the terminal signal.
        if data.trim() == DONE_SENTINEL {
            continue;
        }

        let chunk: StreamChunk = match serde_json::from_str(&data) {
            Ok(chunk) => chunk,
            Err(e) => {
                warn!("skipping malformed SSE event: {}, data: {}", e, data);
                continue;
            }
        };

        if let Some(delta) = chunk.into_delta() {
            let _ = tx.send(Ok(delta));
        }
    }
}

/// Spawn the pump over an HTTP response body and hand back the receiving
/// end of the delta channel.
pub fn spawn_response_pump(
    response: reqwest::Response,
) -> mpsc::UnboundedReceiver<DeltaResult> {
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        pump_delta_stream(response.bytes_stream(), tx).await;
    });
    rx
}
