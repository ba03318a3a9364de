use crate::{
    domain::food_search::entities::{ExternalFoodRecord, ExternalNutrients},
    infrastructure::nutrition::dto::{NutrientValue, Nutriments, Product, ProductName},
};

impl NutrientValue {
    /// Finite numeric value, if there is one.
    pub fn to_f64(&self) -> Option<f64> {
        let value = match self {
            NutrientValue::Number(value) => Some(*value),
            NutrientValue::Text(text) => text.trim().parse::<f64>().ok(),
            NutrientValue::Other(other) => {
                tracing::trace!(value = %other, "ignoring non-numeric nutrient value");
                None
            }
        };

        value.filter(|v| v.is_finite())
    }
}

impl ProductName {
    pub fn into_text(self) -> Option<String> {
        match self {
            ProductName::Text(text) => Some(text),
            ProductName::Other(other) => {
                tracing::trace!(value = %other, "ignoring non-text product name");
                None
            }
        }
    }
}

fn nutrient(value: &Option<NutrientValue>) -> Option<f64> {
    value.as_ref().and_then(NutrientValue::to_f64)
}

impl From<&Nutriments> for ExternalNutrients {
    fn from(nutriments: &Nutriments) -> Self {
        Self {
            energy_kcal_100g: nutrient(&nutriments.energy_kcal_100g),
            proteins_100g: nutrient(&nutriments.proteins_100g),
            carbohydrates_100g: nutrient(&nutriments.carbohydrates_100g),
            fat_100g: nutrient(&nutriments.fat_100g).or_else(|| nutrient(&nutriments.fats_100g)),
        }
    }
}

impl From<Product> for ExternalFoodRecord {
    fn from(product: Product) -> Self {
        Self {
            name: product.product_name.and_then(ProductName::into_text),
            nutrients: product
                .nutriments
                .as_ref()
                .map(ExternalNutrients::from)
                .unwrap_or_default(),
        }
    }
}
