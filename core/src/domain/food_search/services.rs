use tracing::debug;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food_search::{
        entities::FoodSearchResult,
        helpers::normalize_records,
        ports::{FoodSearchClient, FoodSearchService},
        value_objects::{SEARCH_PAGE_SIZE, SearchFoodsInput, SearchQuery},
    },
};

impl<F> FoodSearchService for Service<F>
where
    F: FoodSearchClient,
{
    async fn search_foods(
        &self,
        input: SearchFoodsInput,
    ) -> Result<Vec<FoodSearchResult>, CoreError> {
        // 1. Validate before touching the network
        let query = SearchQuery::new(input.query.unwrap_or_default())?;

        // 2. Single upstream call, failures are surfaced as-is
        let records = self
            .food_search_client
            .search_products(&query, SEARCH_PAGE_SIZE)
            .await?;
        let candidates = records.len();

        // 3. Default missing fields and drop entries without calories
        let foods = normalize_records(records);

        debug!(
            query = query.as_str(),
            candidates,
            returned = foods.len(),
            "food search completed"
        );

        Ok(foods)
    }
}
