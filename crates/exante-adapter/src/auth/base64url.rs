/*
[INPUT]:  Text, bytes, or serializable values
[OUTPUT]: URL-safe base64 without padding
[POS]:    Auth layer - token segment encoding
[UPDATE]: When changing the encoding alphabet or padding rules
*/

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::Serialize;

use crate::http::Result;

/// Encode raw bytes as url-safe base64 without padding
pub fn encode_bytes(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Serialize a value to canonical JSON, then encode it as url-safe base64
pub fn encode_json<T: Serialize>(value: &T) -> Result<String> {
    let bytes = serde_json::to_vec(value)?;
    Ok(encode_bytes(&bytes))
}

/// Convert standard base64 text to the url-safe alphabet
///
/// Strips `=` padding and replaces `+`/`/` with `-`/`_`. Used when a
/// collaborator hands over standard base64 text instead of raw bytes.
pub fn url_safe(base64: &str) -> String {
    base64
        .chars()
        .filter(|c| *c != '=')
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect()
}
