//! Test fixtures and builders for API model types
//!
//! Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)]

use serde_json::{Map, Value, json};

use super::models::{ExternalProduct, GroceryItem};

// ============================================================================
// GroceryItemBuilder
// ============================================================================

/// Builder for creating test GroceryItem instances.
///
/// # Example
/// ```ignore
/// let item = GroceryItemBuilder::new(1, "Oats").brands("Quaker").quantity(2).build();
/// ```
#[derive(Debug, Clone)]
pub struct GroceryItemBuilder {
    item: GroceryItem,
}

impl GroceryItemBuilder {
    /// Create a new builder with quantity 1 and no optional fields.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            item: GroceryItem {
                id,
                product_name: name.into(),
                quantity: 1,
                brands: None,
                thumb_url: None,
                ingredients: None,
                allergens: None,
                labels: None,
                serving_size: None,
                categories: None,
                calories: None,
                fat: None,
                saturated_fat: None,
                carbohydrates: None,
                sugars: None,
                protein: None,
                salt: None,
            },
        }
    }

    pub fn quantity(mut self, quantity: i64) -> Self {
        self.item.quantity = quantity;
        self
    }

    pub fn brands(mut self, brands: impl Into<String>) -> Self {
        self.item.brands = Some(brands.into());
        self
    }

    pub fn calories(mut self, calories: impl Into<String>) -> Self {
        self.item.calories = Some(calories.into());
        self
    }

    pub fn protein(mut self, protein: impl Into<String>) -> Self {
        self.item.protein = Some(protein.into());
        self
    }

    pub fn ingredients(mut self, ingredients: impl Into<String>) -> Self {
        self.item.ingredients = Some(ingredients.into());
        self
    }

    pub fn allergens(mut self, allergens: impl Into<String>) -> Self {
        self.item.allergens = Some(allergens.into());
        self
    }

    pub fn build(self) -> GroceryItem {
        self.item
    }
}

/// Shorthand for a bare item
pub fn item(id: i64, name: &str) -> GroceryItem {
    GroceryItemBuilder::new(id, name).build()
}

// ============================================================================
// Products
// ============================================================================

/// Nutriments object from a JSON literal
pub fn nutriments(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("nutriments fixture must be a JSON object"),
    }
}

/// A product with a name and code only
pub fn product(code: &str, name: &str) -> ExternalProduct {
    ExternalProduct {
        code: Some(code.to_string()),
        product_name: Some(name.to_string()),
        ..Default::default()
    }
}

/// A fully populated product, shaped like a typical catalogue record
pub fn rich_product() -> ExternalProduct {
    ExternalProduct {
        code: Some("0016000275287".to_string()),
        nutriments: Some(nutriments(json!({
            "energy-kcal_serving": 150,
            "energy-kcal_100g": 375.0,
            "fat_100g": 6.5,
            "saturated-fat_100g": 1.2,
            "carbohydrates_serving": 27,
            "sugars_100g": 1,
            "proteins_serving": 5.26,
            "salt_100g": 0.01,
            "salt_unit": "mg"
        }))),
        product_name: Some("Old Fashioned Oats".to_string()),
        generic_name: None,
        brands_tags: Some(vec!["quaker-oats".to_string()]),
        image_thumb_url: Some("https://images.example/oats.100.jpg".to_string()),
        ingredients_text_en: Some("Whole grain rolled oats.".to_string()),
        ingredients_text: Some("Flocons d'avoine.".to_string()),
        allergens_tags: Some(vec!["en:gluten".to_string()]),
        labels_tags: Some(vec!["en:whole-grain".to_string(), "en:kosher".to_string()]),
        categories_tags: Some(vec![
            "en:plant-based-foods".to_string(),
            "en:cereals".to_string(),
            "fr:flocons".to_string(),
        ]),
        serving_size: Some("40 g".to_string()),
    }
}
