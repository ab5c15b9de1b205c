/*
[INPUT]:  Credentials, claim payloads, and an injected unix-seconds clock
[OUTPUT]: Signed HS256 bearer tokens (header.payload.signature)
[POS]:    Auth layer - per-request token signing
[UPDATE]: When claims, audience scopes, or the signing algorithm change
*/

use hmac::{Hmac, Mac};
use serde_json::Value;
use sha2::Sha256;

use crate::auth::base64url;
use crate::http::{Credentials, Result};

type HmacSha256 = Hmac<Sha256>;

/// Fixed JWT header for all tokens issued by this adapter
pub const DEFAULT_HEADER: &str = r#"{"alg":"HS256","typ":"JWT"}"#;

/// Token validity window in seconds
///
/// Deliberately narrow; tokens are recomputed for every request and must
/// never be cached.
pub const TOKEN_TTL_SECONDS: i64 = 5;

/// Resource scopes every token is issued for
pub const TOKEN_AUDIENCE: [&str; 8] = [
    "symbols",
    "feed",
    "change",
    "ohlc",
    "crossrates",
    "summary",
    "transactions",
    "orders",
];

/// Sign an HS256 JWT from explicit header and payload values
///
/// Encodes both independently, signs the ASCII `header.payload` concatenation
/// with HMAC-SHA256 keyed by `secret`, and joins the three url-safe base64
/// segments with `.`. Deterministic for identical inputs.
pub fn sign(secret: &str, payload: &Value, header: &Value) -> Result<String> {
    let header_b64 = base64url::encode_json(header)?;
    let payload_b64 = base64url::encode_json(payload)?;
    let signing_input = format!("{header_b64}.{payload_b64}");

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC-SHA256 accepts keys of any length");
    mac.update(signing_input.as_bytes());
    let digest = mac.finalize().into_bytes();

    Ok(format!(
        "{signing_input}.{}",
        base64url::encode_bytes(&digest)
    ))
}

/// Build the per-request bearer token for the given credentials
///
/// `issued_at` is the current unix time in seconds, passed in by the caller
/// so the function stays a pure map of (credentials, clock) -> token.
/// Expiry is pinned to `issued_at + 5`.
pub fn bearer_token(credentials: &Credentials, issued_at: i64) -> Result<String> {
    let header: Value = serde_json::from_str(DEFAULT_HEADER)?;
    let payload = serde_json::json!({
        "sub": credentials.app_id,
        "iss": credentials.client_id,
        "iat": issued_at,
        "exp": issued_at + TOKEN_TTL_SECONDS,
        "aud": TOKEN_AUDIENCE,
    });

    sign(&credentials.shared_key, &payload, &header)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};

    fn test_credentials() -> Credentials {
        Credentials {
            client_id: "d0c5340b-6d6c-49d9-b567-48c4bfca13d2".to_string(),
            app_id: "6cca6a14-a5e3-4219-9542-86123fc9d6c3".to_string(),
            shared_key: "5eeac64cc46b34f5332e5326/CHo4bRWq6pqqynnWKQg".to_string(),
        }
    }

    fn segments(token: &str) -> Vec<&str> {
        token.split('.').collect()
    }

    #[test]
    fn test_sign_is_deterministic() {
        let payload = serde_json::json!({ "sub": "app", "iss": "client" });
        let header: Value = serde_json::from_str(DEFAULT_HEADER).unwrap();

        let first = sign("secret", &payload, &header).unwrap();
        let second = sign("secret", &payload, &header).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_secret_change_touches_signature_segment_only() {
        let payload = serde_json::json!({ "sub": "app", "iss": "client" });
        let header: Value = serde_json::from_str(DEFAULT_HEADER).unwrap();

        let a = sign("secret", &payload, &header).unwrap();
        let b = sign("secreu", &payload, &header).unwrap();

        let a = segments(&a);
        let b = segments(&b);
        assert_eq!(a.len(), 3);
        assert_eq!(a[0], b[0]);
        assert_eq!(a[1], b[1]);
        assert_ne!(a[2], b[2]);
    }

    #[test]
    fn test_bearer_token_header_segment_is_fixed() {
        let token = bearer_token(&test_credentials(), 1_700_000_000).unwrap();
        let parts = segments(&token);
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9");
    }

    #[test]
    fn test_bearer_token_claims() {
        let credentials = test_credentials();
        let issued_at = 1_700_000_000;
        let token = bearer_token(&credentials, issued_at).unwrap();

        let payload_b64 = segments(&token)[1];
        let payload: Value =
            serde_json::from_slice(&URL_SAFE_NO_PAD.decode(payload_b64).unwrap()).unwrap();

        assert_eq!(payload["sub"], credentials.app_id.as_str());
        assert_eq!(payload["iss"], credentials.client_id.as_str());
        assert_eq!(payload["iat"], issued_at);
        assert_eq!(payload["exp"], issued_at + TOKEN_TTL_SECONDS);
        assert_eq!(
            payload["aud"],
            serde_json::json!([
                "symbols",
                "feed",
                "change",
                "ohlc",
                "crossrates",
                "summary",
                "transactions",
                "orders"
            ])
        );
    }

    #[test]
    fn test_bearer_token_differs_per_clock_tick() {
        let credentials = test_credentials();
        let a = bearer_token(&credentials, 1_700_000_000).unwrap();
        let b = bearer_token(&credentials, 1_700_000_001).unwrap();
        assert_ne!(a, b);
    }
}
