use serde::Deserialize;

/// Body of a search response from the Open Food Facts `search.pl` endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub products: Vec<Product>,
}

#[derive(Debug, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub product_name: Option<ProductName>,
    #[serde(default)]
    pub nutriments: Option<Nutriments>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Nutriments {
    #[serde(rename = "energy-kcal_100g", default)]
    pub energy_kcal_100g: Option<NutrientValue>,
    #[serde(default)]
    pub proteins_100g: Option<NutrientValue>,
    #[serde(default)]
    pub carbohydrates_100g: Option<NutrientValue>,
    #[serde(default)]
    pub fat_100g: Option<NutrientValue>,
    // Legacy spelling, only read when `fat_100g` is absent.
    #[serde(default)]
    pub fats_100g: Option<NutrientValue>,
}

/// Names are usually strings; anything else is kept only to be discarded.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ProductName {
    Text(String),
    Other(serde_json::Value),
}

/// Nutrient values show up as numbers, numeric strings, or garbage.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum NutrientValue {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}
