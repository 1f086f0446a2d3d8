//! Grocery list item models

use serde::{Deserialize, Serialize};

/// A saved entry on the user's grocery list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub id: i64,
    pub product_name: String,
    pub quantity: i64,

    #[serde(default)]
    pub brands: Option<String>,
    #[serde(default)]
    pub thumb_url: Option<String>,

    #[serde(default)]
    pub ingredients: Option<String>,
    #[serde(default)]
    pub allergens: Option<String>,
    #[serde(default)]
    pub labels: Option<String>,
    #[serde(default)]
    pub serving_size: Option<String>,
    #[serde(default)]
    pub categories: Option<String>,

    #[serde(default)]
    pub calories: Option<String>,
    #[serde(default)]
    pub fat: Option<String>,
    #[serde(default)]
    pub saturated_fat: Option<String>,
    #[serde(default)]
    pub carbohydrates: Option<String>,
    #[serde(default)]
    pub sugars: Option<String>,
    #[serde(default)]
    pub protein: Option<String>,
    #[serde(default)]
    pub salt: Option<String>,
}

impl GroceryItem {
    /// Whether any of the headline nutrients is known. Blank values do not
    /// count.
    pub fn has_nutrition(&self) -> bool {
        [&self.calories, &self.protein, &self.fat, &self.carbohydrates]
            .into_iter()
            .any(|value| value.as_deref().is_some_and(|v| !v.trim().is_empty()))
    }

    /// Case-insensitive substring match over name and brand.
    ///
    /// `term` must already be lowercase.
    pub fn matches(&self, term: &str) -> bool {
        if self.product_name.to_lowercase().contains(term) {
            return true;
        }
        self.brands
            .as_deref()
            .is_some_and(|b| b.to_lowercase().contains(term))
    }
}

/// Create payload for `POST /api/list/items`.
///
/// Absent optional fields are sent as explicit `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewGroceryItem {
    pub product_name: String,
    pub quantity: i64,
    pub brands: Option<String>,
    pub thumb_url: Option<String>,

    pub ingredients: Option<String>,
    pub allergens: Option<String>,
    pub labels: Option<String>,
    pub serving_size: Option<String>,
    pub categories: Option<String>,

    pub calories: Option<String>,
    pub fat: Option<String>,
    pub saturated_fat: Option<String>,
    pub carbohydrates: Option<String>,
    pub sugars: Option<String>,
    pub protein: Option<String>,
    pub salt: Option<String>,
}

impl NewGroceryItem {
    /// An item known only by name, as typed by the user
    pub fn manual(name: &str) -> Self {
        Self {
            product_name: name.trim().to_string(),
            quantity: 1,
            ..Default::default()
        }
    }
}

/// Body for `PUT /api/list/:id`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuantityUpdate {
    pub quantity: i64,
}
