/*
[INPUT]:  Error sources (transport, HTTP status, JSON parsing, streaming)
[OUTPUT]: One unified error type with diagnostics for every call path
[POS]:    Error handling layer - shared across the entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Main error type for the Exante adapter
///
/// Both dispatch paths (single-response and streaming) surface failures
/// through this one enum; nothing is retried internally.
#[derive(Error, Debug)]
pub enum ExanteError {
    /// Request never reached or completed with the server
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response status was not 2xx
    ///
    /// `body` carries the parsed JSON error body on the streaming path,
    /// where the server describes the failure in the body itself.
    #[error("HTTP status {status}: {reason}")]
    HttpStatus {
        status: StatusCode,
        reason: String,
        body: Option<Value>,
    },

    /// 2xx response whose body is not valid JSON
    #[error("response body is not valid JSON: {source}")]
    BodyParse { source: serde_json::Error },

    /// A line in an otherwise-successful stream failed to parse; fatal
    #[error("stream line is not valid JSON: {line}")]
    StreamDecode {
        line: String,
        source: serde_json::Error,
    },

    /// URL construction failed
    #[error("invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Request serialization failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ExanteError {
    /// HTTP status of the failed response, if this was a status error
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ExanteError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Parsed JSON error body, if the server returned one
    pub fn error_body(&self) -> Option<&Value> {
        match self {
            ExanteError::HttpStatus { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    /// Whether this error ended a stream on a malformed line
    pub fn is_stream_decode(&self) -> bool {
        matches!(self, ExanteError::StreamDecode { .. })
    }

    /// Create a status error from a response status and optional JSON body
    pub fn http_status(status: StatusCode, body: Option<Value>) -> Self {
        ExanteError::HttpStatus {
            status,
            reason: status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string(),
            body,
        }
    }
}

/// Result type alias for Exante adapter operations
pub type Result<T> = std::result::Result<T, ExanteError>;
