//! HTTP fetch adapter shared by every tool.
//!
//! One GET, fixed headers, bounded timeout. Any failure comes back as a
//! [`FetchError`], which tools treat as "no data".

use reqwest::{header::ACCEPT, Client, Url};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

use crate::config::WeatherConfig;
use crate::constants::{NWS_ACCEPT, OPEN_METEO_ACCEPT};
use crate::error::{FetchError, FetchResult};

/// Thin wrapper over a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Arc<Client>,
}

impl HttpFetcher {
    /// Creates a fetcher with the configured User-Agent and timeout.
    pub fn new(config: &WeatherConfig) -> FetchResult<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            client: Arc::new(client),
        })
    }

    /// GET a National Weather Service resource.
    pub async fn nws(&self, url: &str) -> FetchResult<Value> {
        self.get_json(url, NWS_ACCEPT).await
    }

    /// GET an Open-Meteo resource.
    pub async fn open_meteo(&self, url: &str) -> FetchResult<Value> {
        self.get_json(url, OPEN_METEO_ACCEPT).await
    }

    /// Makes an HTTP GET request and decodes the JSON body.
    #[instrument(skip(self))]
    pub async fn get_json(&self, url: &str, accept: &str) -> FetchResult<Value> {
        let result = self.request(url, accept).await;
        match &result {
            Err(e) if e.is_local() => error!(error = %e, "Request never sent"),
            Err(e) => warn!(error = %e, "Upstream data unavailable"),
            Ok(_) => debug!("Received document"),
        }
        result
    }

    async fn request(&self, url: &str, accept: &str) -> FetchResult<Value> {
        debug!("Sending request");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, accept)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

/// Joins a base URL and path, then appends percent-encoded query parameters.
pub fn build_url<K, V>(base: &str, path: &str, params: &[(K, V)]) -> FetchResult<String>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let raw = format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    let mut url = Url::parse(&raw).map_err(|e| FetchError::InvalidUrl(format!("{raw}: {e}")))?;
    if !params.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(params.iter().map(|(k, v)| (k.as_ref(), v.as_ref())));
    }
    Ok(url.into())
}
