use reqwest::{Client, Url};
use tracing::{debug, error};

use crate::{
    domain::{
        common::{UpstreamConfig, entities::app_errors::CoreError},
        food_search::{entities::ExternalFoodRecord, ports::FoodSearchClient, value_objects::SearchQuery},
    },
    infrastructure::nutrition::dto::SearchResponse,
};

/// [`FoodSearchClient`] backed by the Open Food Facts product search.
#[derive(Debug, Clone)]
pub struct OpenFoodFactsClient {
    base_url: String,
    client: Client,
}

impl OpenFoodFactsClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, CoreError> {
        Url::parse(&config.base_url).map_err(|e| {
            CoreError::InvalidConfiguration(format!(
                "invalid upstream base url {:?}: {}",
                config.base_url, e
            ))
        })?;

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| {
                CoreError::InvalidConfiguration(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            base_url: config.base_url.clone(),
            client,
        })
    }
}

/// Render the search URL for `query`, requesting one page of `page_size` products.
pub fn build_search_url(base_url: &str, query: &SearchQuery, page_size: usize) -> String {
    format!(
        "{}?search_terms={}&search_simple=1&action=process&json=1&page_size={}",
        base_url,
        urlencoding::encode(query.as_str()),
        page_size
    )
}

fn transport_error(e: reqwest::Error) -> CoreError {
    if e.is_timeout() {
        error!("Nutrition API request timed out: {}", e);
        return CoreError::UpstreamUnavailable("request timed out".to_string());
    }

    error!("Nutrition API request failed: {}", e);
    CoreError::UpstreamUnavailable(e.to_string())
}

impl FoodSearchClient for OpenFoodFactsClient {
    async fn search_products(
        &self,
        query: &SearchQuery,
        page_size: usize,
    ) -> Result<Vec<ExternalFoodRecord>, CoreError> {
        let url = build_search_url(&self.base_url, query, page_size);
        debug!(url = %url, "querying nutrition database");

        let response = self.client.get(&url).send().await.map_err(transport_error)?;

        if !response.status().is_success() {
            let status = response.status();
            error!("Nutrition API error: {}", status);
            return Err(CoreError::UpstreamUnavailable(format!(
                "nutrition API returned {}",
                status
            )));
        }

        let payload: SearchResponse = response.json().await.map_err(|e| {
            if !e.is_decode() {
                return transport_error(e);
            }
            error!("Failed to parse nutrition API response: {}", e);
            CoreError::MalformedUpstreamPayload(e.to_string())
        })?;

        Ok(payload
            .products
            .into_iter()
            .map(ExternalFoodRecord::from)
            .collect())
    }
}
