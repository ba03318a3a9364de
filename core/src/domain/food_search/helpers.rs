use crate::domain::food_search::{
    entities::{ExternalFoodRecord, FoodSearchResult},
    value_objects::{NAME_PLACEHOLDER, SEARCH_PAGE_SIZE},
};

/// Turn raw upstream candidates into the results handed back to the caller.
///
/// Only the first [`SEARCH_PAGE_SIZE`] candidates are considered. The upstream
/// may ignore `page_size` and send more; the extras are cut here, before the
/// calorie filter, so fewer than [`SEARCH_PAGE_SIZE`] results can come back
/// even when later candidates would have passed it. Missing
/// nutrients default to 0 and a missing or empty name becomes
/// [`NAME_PLACEHOLDER`]. Candidates without a strictly positive calorie value
/// are dropped. Upstream order is preserved.
pub fn normalize_records(records: Vec<ExternalFoodRecord>) -> Vec<FoodSearchResult> {
    records
        .into_iter()
        .take(SEARCH_PAGE_SIZE)
        .map(to_food_search_result)
        .filter(|food| food.calories > 0.0)
        .collect()
}

fn to_food_search_result(record: ExternalFoodRecord) -> FoodSearchResult {
    let name = record
        .name
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| NAME_PLACEHOLDER.to_string());
    let nutrients = record.nutrients;

    FoodSearchResult {
        name,
        calories: nutrients.energy_kcal_100g.unwrap_or(0.0),
        protein: nutrients.proteins_100g.unwrap_or(0.0),
        carbs: nutrients.carbohydrates_100g.unwrap_or(0.0),
        fats: nutrients.fat_100g.unwrap_or(0.0),
    }
}
