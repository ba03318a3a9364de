use axum::extract::State;
use mealbook_core::domain::food_search::{FoodSearchService, SearchFoodsInput};

use crate::application::http::{
    food_search::validators::{SearchFoodRequest, SearchFoodResponse},
    server::{
        api_entities::{
            api_error::{ApiError, ErrorBody, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/search-food",
    tag = "food-search",
    summary = "Search foods by name",
    description = "Looks the query up in the Open Food Facts database and returns up to 10 foods with their calories and macro-nutrients per 100g. Products without calorie data are left out.",
    request_body = SearchFoodRequest,
    responses(
        (status = 200, body = SearchFoodResponse),
        (status = 400, body = ErrorBody, description = "Missing query or nutrition service failure")
    )
)]
pub async fn search_food(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SearchFoodRequest>,
) -> Result<Response<SearchFoodResponse>, ApiError> {
    let foods = state
        .service
        .search_foods(SearchFoodsInput {
            query: payload.query,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SearchFoodResponse { foods }))
}
