/*
[INPUT]:  HTTP configuration (base URL, timeouts, credentials)
[OUTPUT]: Authenticated single-response and streaming dispatch
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing dispatch behavior
*/

use std::fmt;
use std::time::Duration;

use chrono::Utc;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::auth::bearer_token;
use crate::http::{ExanteError, Result, set_query};
use crate::stream::{JsonMessageStream, LineJsonDecoder};

/// Base URLs for the Exante API
pub const EXANTE_LIVE_URL: &str = "https://api-live.exante.eu/";
pub const EXANTE_DEMO_URL: &str = "https://api-demo.exante.eu/";

/// Accept header value for streaming endpoints
const ACCEPT_JSON_STREAM: &str = "application/x-json-stream";

/// Bound on messages decoded ahead of a slow stream consumer
const STREAM_CHANNEL_CAPACITY: usize = 64;

/// HTTP client configuration
///
/// `timeout` bounds single-response calls only; streaming connections stay
/// open indefinitely and must be bounded by the caller.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// API credentials: identity pair plus the shared signing secret
///
/// Owned by the client for its lifetime. Never persisted; `Debug` redacts
/// the shared key so credentials cannot leak through logs.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub app_id: String,
    pub shared_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("app_id", &self.app_id)
            .field("shared_key", &"<redacted>")
            .finish()
    }
}

/// Main HTTP client for the Exante API
#[derive(Debug)]
pub struct ExanteClient {
    http_client: Client,
    base_url: Url,
    credentials: Credentials,
    config: ClientConfig,
}

impl ExanteClient {
    /// Create a client against the live environment
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config_and_base_url(ClientConfig::default(), EXANTE_LIVE_URL, credentials)
    }

    /// Create a client against the demo environment
    pub fn demo(credentials: Credentials) -> Result<Self> {
        Self::with_config_and_base_url(ClientConfig::default(), EXANTE_DEMO_URL, credentials)
    }

    /// Create a live client with custom configuration
    pub fn with_config(config: ClientConfig, credentials: Credentials) -> Result<Self> {
        Self::with_config_and_base_url(config, EXANTE_LIVE_URL, credentials)
    }

    /// Create a client with custom configuration and an explicit base URL
    pub fn with_config_and_base_url(
        config: ClientConfig,
        base_url: &str,
        credentials: Credentials,
    ) -> Result<Self> {
        // Only the connect timeout lives on the shared client; a total
        // timeout there would cut off long-lived streaming responses.
        let http_client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            credentials,
            config,
        })
    }

    /// Base URL this client dispatches against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build a full URL for an endpoint path
    pub(crate) fn url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint)?)
    }

    /// Build a full URL with optional query parameters
    pub(crate) fn url_with_query(
        &self,
        endpoint: &str,
        params: &[(&str, Option<String>)],
    ) -> Result<Url> {
        let mut url = self.url(endpoint)?;
        set_query(&mut url, params);
        Ok(url)
    }

    /// Build a request builder for an API endpoint
    pub(crate) fn api_request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.url(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    /// Build a request builder for a pre-constructed URL
    pub(crate) fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http_client.request(method, url)
    }

    /// Attach a freshly signed bearer token
    ///
    /// Recomputed on every call; the 5-second validity window makes any
    /// form of token reuse unsafe.
    fn authorize(&self, builder: RequestBuilder) -> Result<RequestBuilder> {
        let token = bearer_token(&self.credentials, Utc::now().timestamp())?;
        Ok(builder.header(AUTHORIZATION, format!("Bearer {token}")))
    }

    /// Dispatch an authenticated request and parse the full body as JSON
    ///
    /// Non-2xx responses fail before any parse attempt; a 2xx response with
    /// a non-JSON body fails with `BodyParse`. No retries, no caching.
    pub async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = self
            .authorize(builder)?
            .header(CONTENT_TYPE, "application/json")
            .timeout(self.config.timeout)
            .send()
            .await?;

        let status = response.status();
        debug!(%status, url = %response.url(), "request completed");

        if !status.is_success() {
            return Err(ExanteError::http_status(status, None));
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|source| ExanteError::BodyParse { source })
    }

    /// Dispatch an authenticated request expecting a streaming NDJSON body
    ///
    /// A non-2xx response is fully read and its parsed JSON body becomes the
    /// error; streaming is never attempted for error responses. On success
    /// the body is pumped through a fresh line decoder and delivered over a
    /// bounded channel, so a slow consumer pauses chunk reading instead of
    /// growing memory.
    pub async fn send_stream(&self, builder: RequestBuilder) -> Result<JsonMessageStream> {
        let response = self
            .authorize(builder)?
            .header(ACCEPT, ACCEPT_JSON_STREAM)
            .send()
            .await?;

        let status = response.status();
        debug!(%status, url = %response.url(), "stream response received");

        if !status.is_success() {
            let bytes = response.bytes().await?;
            let body = serde_json::from_slice::<Value>(&bytes).ok();
            return Err(ExanteError::http_status(status, body));
        }

        let (tx, rx) = mpsc::channel(STREAM_CHANNEL_CAPACITY);
        tokio::spawn(pump_stream(response, tx));

        Ok(JsonMessageStream::new(rx))
    }
}

/// Read response chunks through the decoder until EOF, error, or cancellation
///
/// Each decoded value is forwarded in order. The first decode or transport
/// error is forwarded once and ends the task. A dropped receiver makes the
/// next send fail, which releases the connection.
async fn pump_stream(mut response: Response, tx: mpsc::Sender<Result<Value>>) {
    let mut decoder = LineJsonDecoder::new();

    loop {
        match response.chunk().await {
            Ok(Some(chunk)) => {
                let (values, error) = decoder.decode(&chunk);
                for value in values {
                    if tx.send(Ok(value)).await.is_err() {
                        debug!("stream receiver dropped, closing connection");
                        return;
                    }
                }
                if let Some(err) = error {
                    let _ = tx.send(Err(err)).await;
                    return;
                }
            }
            Ok(None) => {
                if !decoder.pending().is_empty() {
                    // The server terminates every document with a newline;
                    // anything left here is a truncated final line.
                    warn!(
                        bytes = decoder.pending().len(),
                        "stream ended with unterminated trailing data, dropped"
                    );
                }
                debug!("stream ended");
                return;
            }
            Err(err) => {
                let _ = tx.send(Err(ExanteError::Transport(err))).await;
                return;
            }
        }
    }
}
