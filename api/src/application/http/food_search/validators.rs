use mealbook_core::domain::food_search::FoodSearchResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SearchFoodRequest {
    #[serde(default)]
    #[schema(example = "Mela")]
    #[validate(
        required(message = "search term (query) is required"),
        length(min = 1, message = "search term (query) is required")
    )]
    pub query: Option<String>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SearchFoodResponse {
    pub foods: Vec<FoodSearchResult>,
}
