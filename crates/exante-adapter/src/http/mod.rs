/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod accounts;
pub mod client;
pub mod error;
pub mod market;
pub mod query;

pub use error::{ExanteError, Result};
pub use market::CandlesQuery;
pub use query::set_query;

pub use client::{
    ClientConfig, Credentials, EXANTE_DEMO_URL, EXANTE_LIVE_URL, ExanteClient,
};
