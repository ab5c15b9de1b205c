/*
[INPUT]:  Streaming HTTP response bodies
[OUTPUT]: Ordered, decoded JSON messages delivered over a channel
[POS]:    Stream layer - live feed plumbing
[UPDATE]: When the wire format or delivery mechanism changes
*/

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_util::Stream;
use serde_json::Value;
use tokio::sync::mpsc;

use crate::http::Result;

pub mod decoder;

pub use decoder::LineJsonDecoder;

/// Live sequence of decoded JSON messages from a streaming endpoint
///
/// Push-based, single-pass, non-restartable. Dropping the stream closes the
/// underlying connection; any buffered partial line is discarded.
#[derive(Debug)]
pub struct JsonMessageStream {
    rx: mpsc::Receiver<Result<Value>>,
}

impl JsonMessageStream {
    pub(crate) fn new(rx: mpsc::Receiver<Result<Value>>) -> Self {
        Self { rx }
    }

    /// Receive the next message, or `None` once the stream has ended
    ///
    /// An `Err` item is terminal; nothing follows it.
    pub async fn recv(&mut self) -> Option<Result<Value>> {
        self.rx.recv().await
    }

    /// Close the stream without waiting for the server
    pub fn close(&mut self) {
        self.rx.close();
    }
}

impl Stream for JsonMessageStream {
    type Item = Result<Value>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().rx.poll_recv(cx)
    }
}
