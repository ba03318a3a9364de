use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A food returned to the caller. Nutrient values are per 100g.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodSearchResult {
    #[schema(example = "Mela")]
    pub name: String,
    /// kcal per 100g, always strictly positive
    #[schema(example = 52.0)]
    pub calories: f64,
    #[schema(example = 0.3)]
    pub protein: f64,
    #[schema(example = 14.0)]
    pub carbs: f64,
    #[schema(example = 0.2)]
    pub fats: f64,
}

/// A candidate product as read from the nutrition database.
///
/// Every field may be absent upstream; defaulting happens in
/// [`crate::domain::food_search::helpers::normalize_records`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExternalFoodRecord {
    pub name: Option<String>,
    pub nutrients: ExternalNutrients,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ExternalNutrients {
    pub energy_kcal_100g: Option<f64>,
    pub proteins_100g: Option<f64>,
    pub carbohydrates_100g: Option<f64>,
    pub fat_100g: Option<f64>,
}
