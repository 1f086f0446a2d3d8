//! Search result mapping

use serde::Serialize;

use super::{english_tags, nutrient_value};
use crate::client::models::{ExternalProduct, NewGroceryItem};

/// Display-ready product derived from an [`ExternalProduct`].
///
/// Same shape as a grocery item minus id and quantity, plus the barcode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub name: String,
    pub code: Option<String>,
    pub brands: String,
    pub thumb_url: Option<String>,

    pub ingredients: Option<String>,
    pub allergens: Option<String>,
    pub labels: Option<String>,
    pub categories: Option<String>,
    pub serving_size: Option<String>,

    pub calories: Option<String>,
    pub fat: Option<String>,
    pub saturated_fat: Option<String>,
    pub carbohydrates: Option<String>,
    pub sugars: Option<String>,
    pub protein: Option<String>,
    pub salt: Option<String>,
}

impl From<&ExternalProduct> for SearchResult {
    fn from(p: &ExternalProduct) -> Self {
        let nutrient = |key: &str| nutrient_value(p, key, true);
        let tags = |list: &Option<Vec<String>>| list.as_deref().and_then(english_tags);

        let name = non_empty(&p.product_name)
            .or_else(|| non_empty(&p.generic_name))
            .unwrap_or_else(|| {
                format!("Item Code: {}", p.code.as_deref().unwrap_or("unknown"))
            });

        Self {
            name,
            code: p.code.clone(),
            brands: brand_line(p.brands_tags.as_deref()),
            thumb_url: p.image_thumb_url.clone(),

            ingredients: non_empty(&p.ingredients_text_en)
                .or_else(|| non_empty(&p.ingredients_text)),
            allergens: tags(&p.allergens_tags),
            labels: tags(&p.labels_tags),
            categories: tags(&p.categories_tags).map(|c| c.replace(", ", " > ")),
            serving_size: non_empty(&p.serving_size),

            calories: nutrient("energy-kcal"),
            fat: nutrient("fat"),
            saturated_fat: nutrient("saturated-fat"),
            carbohydrates: nutrient("carbohydrates"),
            sugars: nutrient("sugars"),
            protein: nutrient("proteins"),
            salt: nutrient("salt"),
        }
    }
}

impl SearchResult {
    /// Map the first `limit` products of a search response
    pub fn from_products(products: &[ExternalProduct], limit: usize) -> Vec<Self> {
        products.iter().take(limit).map(Self::from).collect()
    }

    /// A result carrying only a name, for adding free text to the list
    pub fn manual(name: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            code: None,
            brands: String::new(),
            thumb_url: None,
            ingredients: None,
            allergens: None,
            labels: None,
            categories: None,
            serving_size: None,
            calories: None,
            fat: None,
            saturated_fat: None,
            carbohydrates: None,
            sugars: None,
            protein: None,
            salt: None,
        }
    }

    /// Create payload adding one unit of this product. Empty strings are
    /// sent as null.
    pub fn to_new_item(&self) -> NewGroceryItem {
        let opt = |v: &Option<String>| non_empty(v);
        NewGroceryItem {
            product_name: self.name.trim().to_string(),
            quantity: 1,
            brands: Some(self.brands.clone()).filter(|b| !b.is_empty()),
            thumb_url: opt(&self.thumb_url),
            ingredients: opt(&self.ingredients),
            allergens: opt(&self.allergens),
            labels: opt(&self.labels),
            serving_size: opt(&self.serving_size),
            categories: opt(&self.categories),
            calories: opt(&self.calories),
            fat: opt(&self.fat),
            saturated_fat: opt(&self.saturated_fat),
            carbohydrates: opt(&self.carbohydrates),
            sugars: opt(&self.sugars),
            protein: opt(&self.protein),
            salt: opt(&self.salt),
        }
    }
}

/// `brands_tags` joined into one line; `"N/A"` when the record has none
fn brand_line(tags: Option<&[String]>) -> String {
    match tags {
        Some(tags) => tags.join(",").replace("tag:", "").replace('-', " "),
        None => "N/A".to_string(),
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|s| !s.is_empty()).cloned()
}
