//! HTTP transport for the rates API.

use reqwest::blocking::Client;
use reqwest::Url;
use tracing::debug;

use calcroi_core::constants::DEFAULT_API_URL;
use calcroi_core::{Endpoint, RatesApi, RawReply, TransportError};

/// Where the API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// Errors building the client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The base URL does not parse.
    #[error("invalid API URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The base URL is not http(s).
    #[error("unsupported scheme {0:?} in API URL (expected http or https)")]
    UnsupportedScheme(String),

    /// The underlying HTTP client could not be created.
    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Blocking client for the four API endpoints.
///
/// One GET per call, no retries. Requests wait for the server however long
/// it takes; `reqwest`'s default 30 s timeout is switched off.
#[derive(Debug, Clone)]
pub struct HttpRatesClient {
    http: Client,
    base_url: Url,
}

impl HttpRatesClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let base_url = normalize_base_url(&config.base_url)?;
        let http = Client::builder()
            .user_agent(concat!("calcroi/", env!("CARGO_PKG_VERSION")))
            .timeout(None)
            .build()?;
        Ok(Self { http, base_url })
    }

    /// Base URL, always ending in `/`.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full URL of an endpoint, relative to the base URL's path.
    pub fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url, TransportError> {
        self.base_url
            .join(endpoint.path().trim_start_matches('/'))
            .map_err(|e| TransportError(format!("cannot build URL for {endpoint}: {e}")))
    }
}

impl RatesApi for HttpRatesClient {
    fn fetch(
        &self,
        endpoint: Endpoint,
        query: &[(&'static str, String)],
    ) -> Result<RawReply, TransportError> {
        let url = self.endpoint_url(endpoint)?;
        let response = self
            .http
            .get(url.clone())
            .query(query)
            .send()
            .map_err(|e| TransportError(format!("GET {url} failed: {e}")))?;

        let status = response.status().as_u16();
        let body = response.text().unwrap_or_else(|e| {
            debug!(%url, error = %e, "failed to read response body");
            String::new()
        });
        debug!(%url, status, bytes = body.len(), "response received");
        Ok(RawReply { status, body })
    }
}

/// Parse the base URL and make sure relative joins keep its path.
fn normalize_base_url(raw: &str) -> Result<Url, ClientError> {
    let mut url = Url::parse(raw.trim()).map_err(|e| ClientError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ClientError::UnsupportedScheme(url.scheme().to_string()));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}
