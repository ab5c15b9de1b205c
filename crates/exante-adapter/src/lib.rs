/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Exante adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod stream;
pub mod types;

// Re-export commonly used items from auth
pub use auth::{
    DEFAULT_HEADER,
    TOKEN_AUDIENCE,
    TOKEN_TTL_SECONDS,
    bearer_token,
    sign,
};

// Re-export commonly used types from http
pub use http::{
    CandlesQuery,
    ClientConfig,
    Credentials,
    EXANTE_DEMO_URL,
    EXANTE_LIVE_URL,
    ExanteClient,
    ExanteError,
    Result,
    set_query,
};

// Re-export streaming types
pub use stream::{JsonMessageStream, LineJsonDecoder};

// Re-export all wire types
pub use types::*;
