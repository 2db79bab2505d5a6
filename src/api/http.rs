use crate::api::traits::ListingApi;
use crate::api::types::{ListingQuery, ListingsEnvelope, StatisticsEnvelope};
use crate::config::DashboardConfig;
use crate::error::{FetchError, FetchResult};
use crate::models::{Listing, Statistics};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// `ListingApi` backed by the JSON HTTP backend
pub struct HttpListingApi {
    client: Client,
    config: DashboardConfig,
}

impl HttpListingApi {
    pub fn new(config: DashboardConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> FetchResult<T> {
        let endpoint = self.config.endpoint(path);
        debug!("Fetching {}", endpoint);

        let response = self
            .client
            .get(&endpoint)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                endpoint: endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} returned status {}", endpoint, status);
            return Err(FetchError::Status { endpoint, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport {
                endpoint: endpoint.clone(),
                source,
            })?;
        debug!("Downloaded {} bytes from {}", body.len(), endpoint);

        serde_json::from_slice(&body).map_err(|e| FetchError::Decode {
            endpoint,
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl ListingApi for HttpListingApi {
    async fn statistics(&self) -> FetchResult<Statistics> {
        let path = "/api/statistics";
        let envelope: StatisticsEnvelope = self.get_json(path).await?;
        if !envelope.success {
            return Err(FetchError::Unsuccessful {
                endpoint: self.config.endpoint(path),
            });
        }
        Ok(envelope.statistics)
    }

    async fn listings(&self, query: &ListingQuery) -> FetchResult<Vec<Listing>> {
        let path = query.path();
        let envelope: ListingsEnvelope = self.get_json(&path).await?;
        if !envelope.success {
            return Err(FetchError::Unsuccessful {
                endpoint: self.config.endpoint(&path),
            });
        }
        debug!("{} returned {} listings", path, envelope.listings.len());
        Ok(envelope.listings)
    }
}
