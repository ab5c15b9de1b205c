/*
[INPUT]:  Byte chunks arriving at arbitrary boundaries
[OUTPUT]: Parsed JSON values, exactly one per newline-terminated line
[POS]:    Stream layer - incremental NDJSON transducer
[UPDATE]: When line framing or failure semantics change
*/

use serde_json::Value;

use crate::http::ExanteError;

/// Incremental decoder for newline-delimited JSON
///
/// Buffers at the byte level so a multi-byte character split across chunk
/// boundaries never corrupts a line; text is only decoded once a full line
/// is framed. A parse failure is terminal: the decoder ignores all further
/// input once failed.
#[derive(Debug, Default)]
pub struct LineJsonDecoder {
    buffer: Vec<u8>,
    failed: bool,
}

impl LineJsonDecoder {
    /// Create a decoder with an empty pending buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one chunk, returning the values decoded from every line it
    /// completed, in order, plus the terminal error if a line failed to parse
    ///
    /// Values preceding a failing line within the same chunk are still
    /// returned, so no successfully framed message is ever lost. Empty lines
    /// produce no value. Unterminated trailing bytes stay buffered for the
    /// next chunk.
    pub fn decode(&mut self, chunk: &[u8]) -> (Vec<Value>, Option<ExanteError>) {
        if self.failed {
            return (Vec::new(), None);
        }

        self.buffer.extend_from_slice(chunk);

        let mut values = Vec::new();
        let mut consumed = 0;

        while let Some(offset) = self.buffer[consumed..].iter().position(|b| *b == b'\n') {
            let line_end = consumed + offset;
            let line = &self.buffer[consumed..line_end];
            consumed = line_end + 1;

            if line.is_empty() {
                continue;
            }

            match serde_json::from_slice(line) {
                Ok(value) => values.push(value),
                Err(source) => {
                    let line = String::from_utf8_lossy(line).into_owned();
                    self.failed = true;
                    self.buffer.clear();
                    return (values, Some(ExanteError::StreamDecode { line, source }));
                }
            }
        }

        self.buffer.drain(..consumed);
        (values, None)
    }

    /// Unterminated bytes held over for the next chunk
    pub fn pending(&self) -> &[u8] {
        &self.buffer
    }

    /// Whether a terminal parse failure has occurred
    pub fn is_failed(&self) -> bool {
        self.failed
    }
}
