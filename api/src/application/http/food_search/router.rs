use super::handlers::search_food::{__path_search_food, search_food};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(search_food))]
pub struct FoodSearchApiDoc;

pub fn food_search_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!(
            "{}/functions/v1/search-food",
            state.args.server.root_path
        ),
        post(search_food),
    )
}
