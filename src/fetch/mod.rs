// src/fetch/mod.rs

use anyhow::{Context, Result};
use async_trait::async_trait;
use futures::future::try_join_all;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info};
use url::Url;

pub mod urls;

pub use urls::Locators;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches a batch of resources and hands them back in request order.
///
/// Either every resource comes back or the whole batch fails.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch_all(&self, locators: &[String]) -> Result<Vec<Value>>;
}

/// JSON over HTTP, with locators resolved against a base URL.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    base: Url,
}

impl HttpFetcher {
    pub fn new(base: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .gzip(true)
            .build()
            .context("building HTTP client")?;
        Self::with_client(client, base)
    }

    pub fn with_client(client: Client, base: &str) -> Result<Self> {
        // without the trailing slash `join` would replace the last segment
        let base = if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{}/", base)
        };
        let base = Url::parse(&base).with_context(|| format!("parsing base URL {}", base))?;
        Ok(Self { client, base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    async fn get_json(&self, locator: &str) -> Result<Value> {
        let url = self
            .base
            .join(locator.trim_start_matches('/'))
            .with_context(|| format!("resolving {} against {}", locator, self.base))?;
        debug!(%url, "fetching");
        self.client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("GET {} failed", url))?
            .error_for_status()
            .with_context(|| format!("Non-success status {}", url))?
            .json::<Value>()
            .await
            .with_context(|| format!("Reading JSON from {}", url))
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch_all(&self, locators: &[String]) -> Result<Vec<Value>> {
        let start = Instant::now();
        // all requests are in flight together; results keep the locator order
        let results = try_join_all(locators.iter().map(|l| self.get_json(l))).await?;
        info!(count = results.len(), elapsed = ?start.elapsed(), "fetched resources");
        Ok(results)
    }
}
