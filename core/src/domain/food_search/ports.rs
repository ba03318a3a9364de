use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_search::{
        entities::{ExternalFoodRecord, FoodSearchResult},
        value_objects::{SearchFoodsInput, SearchQuery},
    },
};

/// Outbound port to the nutrition database.
///
/// Implementations issue exactly one request per call and never retry.
#[cfg_attr(test, mockall::automock)]
pub trait FoodSearchClient: Send + Sync {
    fn search_products(
        &self,
        query: &SearchQuery,
        page_size: usize,
    ) -> impl Future<Output = Result<Vec<ExternalFoodRecord>, CoreError>> + Send;
}

/// Service trait for food search business logic
#[cfg_attr(test, mockall::automock)]
pub trait FoodSearchService: Send + Sync {
    fn search_foods(
        &self,
        input: SearchFoodsInput,
    ) -> impl Future<Output = Result<Vec<FoodSearchResult>, CoreError>> + Send;
}
