/*
[INPUT]:  Symbol identifiers, candle windows, and API version tags
[OUTPUT]: Market data (candles) and the live quote feed
[POS]:    HTTP layer - market data endpoints (bearer auth)
[UPDATE]: When adding new market endpoints or changing query parameters
*/

use reqwest::Method;

use crate::http::{ExanteClient, Result};
use crate::stream::JsonMessageStream;
use crate::types::{ApiVersion, Candle};

/// Optional bounds for a candle history request
#[derive(Debug, Clone, Default)]
pub struct CandlesQuery {
    /// Window start, unix milliseconds
    pub from: Option<i64>,
    /// Window end, unix milliseconds
    pub to: Option<i64>,
    /// Maximum number of candles returned
    pub size: Option<u32>,
}

impl ExanteClient {
    /// Get OHLC candle history for a symbol
    ///
    /// GET /md/{version}/ohlc/{symbolId}/{duration}?from={from}&to={to}&size={size}
    pub async fn get_candles(
        &self,
        version: ApiVersion,
        symbol_id: &str,
        duration_seconds: u32,
        query: CandlesQuery,
    ) -> Result<Vec<Candle>> {
        let endpoint = format!("/md/{version}/ohlc/{symbol_id}/{duration_seconds}");
        let url = self.url_with_query(
            &endpoint,
            &[
                ("from", query.from.map(|v| v.to_string())),
                ("to", query.to.map(|v| v.to_string())),
                ("size", query.size.map(|v| v.to_string())),
            ],
        )?;

        let builder = self.request(Method::GET, url);
        self.send_json(builder).await
    }

    /// Open the live quote feed for one or more symbols
    ///
    /// GET /md/{version}/feed/{symbolIds}
    ///
    /// The connection stays open; the server emits one JSON document per
    /// line, including periodic heartbeats. Messages are delivered as raw
    /// JSON values in arrival order.
    pub async fn get_quote_stream(
        &self,
        version: ApiVersion,
        symbol_ids: &[&str],
    ) -> Result<JsonMessageStream> {
        let endpoint = format!("/md/{version}/feed/{}", symbol_ids.join(","));
        let builder = self.api_request(Method::GET, &endpoint)?;
        self.send_stream(builder).await
    }
}
