/*
[INPUT]:  API credentials and the current unix time
[OUTPUT]: Short-lived signed bearer tokens
[POS]:    Auth layer - handles Exante API authentication
[UPDATE]: When the token algorithm or claim set changes
*/

pub mod base64url;
pub mod token;

pub use base64url::{encode_bytes, encode_json, url_safe};
pub use token::{DEFAULT_HEADER, TOKEN_AUDIENCE, TOKEN_TTL_SECONDS, bearer_token, sign};
