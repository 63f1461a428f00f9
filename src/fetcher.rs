use std::time::Duration;

use futures::stream::{FuturesUnordered, StreamExt};
use log::{debug, warn};
use reqwest::{Client, Url};
use tokio::sync::mpsc;

use crate::config::{FetcherConfig, DEFAULT_ENDPOINT};
use crate::error::FetchError;
use crate::model::{parse_meal, FetchResult, Recipe};

/// Fetches batches of random recipes from the meal endpoint
///
/// One instance can serve any number of batches; batches are independent and
/// share nothing but the HTTP client.
pub struct RecipeFetcher {
    client: Client,
    endpoint: String,
}

impl RecipeFetcher {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Use a different endpoint (mirrors, test servers)
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        RecipeFetcher {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &FetcherConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(RecipeFetcher {
            client: builder.build()?,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Fetch up to `batch_size` random recipes concurrently
    ///
    /// Launches exactly `batch_size` independent requests at once and waits
    /// for every one of them. Each attempt either contributes a [`Recipe`],
    /// flips the result's `reachable` flag (transport failure), or is
    /// dropped (unusable payload). Never fails: all failure modes are
    /// encoded in the returned [`FetchResult`].
    pub async fn fetch_recipes(&self, batch_size: usize) -> FetchResult {
        self.run_batch(batch_size, None).await
    }

    /// Like [`fetch_recipes`](Self::fetch_recipes), additionally sending
    /// each recipe over `updates` the moment it arrives
    ///
    /// Arrival order on the channel matches the order of the returned list.
    /// A dropped receiver does not disturb the batch.
    pub async fn fetch_recipes_streaming(
        &self,
        batch_size: usize,
        updates: mpsc::UnboundedSender<Recipe>,
    ) -> FetchResult {
        self.run_batch(batch_size, Some(updates)).await
    }

    async fn run_batch(
        &self,
        batch_size: usize,
        updates: Option<mpsc::UnboundedSender<Recipe>>,
    ) -> FetchResult {
        // Validate before any request goes out
        let url = match Url::parse(&self.endpoint) {
            Ok(url) => url,
            Err(err) => {
                warn!("Invalid endpoint {:?}: {err}", self.endpoint);
                return FetchResult::unreachable();
            }
        };

        let mut attempts: FuturesUnordered<_> = (0..batch_size)
            .map(|_| self.fetch_one(url.clone()))
            .collect();

        // Drain to completion: the batch resolves only once every attempt
        // has been accounted for. Outcomes are reduced single-threadedly in
        // arrival order, so no synchronization is needed.
        let mut result = FetchResult::new();
        while let Some(outcome) = attempts.next().await {
            if let (Some(tx), Some(recipe)) = (&updates, result.absorb(outcome)) {
                let _ = tx.send(recipe.clone());
            }
        }

        debug!("Fetched {} of {batch_size} recipes", result.recipes.len());
        result
    }

    async fn fetch_one(&self, url: Url) -> Result<Recipe, FetchError> {
        let response = self.client.get(url).send().await?;
        // Status codes are not inspected; a junk body is dropped at parse time
        let body = response.bytes().await?;
        if body.is_empty() {
            return Err(FetchError::EmptyBody);
        }
        parse_meal(&body)
    }
}

impl Default for RecipeFetcher {
    fn default() -> Self {
        Self::new()
    }
}
