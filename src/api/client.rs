use std::time::Duration;

use futures::future::BoxFuture;
use futures::FutureExt;
use reqwest::Client;
use tokio::time::timeout;

use crate::api::error::FetchError;
use crate::config::ApiConfig;
use crate::model::Rocket;

/// Source of rocket records.
///
/// The store only sees this seam, so tests swap in canned or delayed
/// responses without a network.
pub trait RocketsProvider: Send + Sync + 'static {
    fn fetch(&self) -> BoxFuture<'static, Result<Vec<Rocket>, FetchError>>;
}

/// Live provider: one `GET {base_url}/v3/rockets`, no retries.
#[derive(Clone)]
pub struct HttpRocketsProvider {
    client: Client,
    url: String,
    request_timeout: Duration,
}

impl HttpRocketsProvider {
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let url = config.rockets_url();
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .build()
            .map_err(|e| FetchError::Transport {
                url: url.clone(),
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            url,
            request_timeout: Duration::from_secs(config.timeout_seconds.into()),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl RocketsProvider for HttpRocketsProvider {
    fn fetch(&self) -> BoxFuture<'static, Result<Vec<Rocket>, FetchError>> {
        let client = self.client.clone();
        let url = self.url.clone();
        let request_timeout = self.request_timeout;

        async move {
            let result = timeout(request_timeout, fetch_rockets(&client, &url)).await;
            match result {
                Ok(response) => response,
                Err(_) => Err(FetchError::Timeout {
                    duration: request_timeout.as_secs(),
                }),
            }
        }
        .boxed()
    }
}

async fn fetch_rockets(client: &Client, url: &str) -> Result<Vec<Rocket>, FetchError> {
    tracing::debug!("GET {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.bytes().await.map_err(|e| FetchError::Transport {
        url: url.to_string(),
        message: format!("Failed to read response body: {}", e),
    })?;

    let rockets: Vec<Rocket> =
        serde_json::from_slice(&body).map_err(|e| FetchError::Decode {
            message: e.to_string(),
        })?;

    tracing::info!("Fetched {} rockets from {}", rockets.len(), url);
    Ok(rockets)
}
