use crate::application::http::{food_search::router::FoodSearchApiDoc, health::HealthApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mealbook API"
    ),
    nest(
        (path = "/functions/v1", api = FoodSearchApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
