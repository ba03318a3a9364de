use std::sync::Arc;

use crate::domain::food_search::ports::FoodSearchClient;

#[derive(Clone)]
pub struct Service<F>
where
    F: FoodSearchClient,
{
    pub(crate) food_search_client: Arc<F>,
}

impl<F> Service<F>
where
    F: FoodSearchClient,
{
    pub fn new(food_search_client: F) -> Self {
        Self {
            food_search_client: Arc::new(food_search_client),
        }
    }
}
