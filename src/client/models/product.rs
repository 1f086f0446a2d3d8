//! External product records returned by the search endpoint

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Third-party product schema. Every field may be missing or null.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalProduct {
    #[serde(default, deserialize_with = "code_string")]
    pub code: Option<String>,

    /// `<key>_serving`, `<key>_100g` and `<key>_unit` fields
    #[serde(default)]
    pub nutriments: Option<Map<String, Value>>,

    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub generic_name: Option<String>,
    #[serde(default)]
    pub brands_tags: Option<Vec<String>>,
    #[serde(default)]
    pub image_thumb_url: Option<String>,
    #[serde(default)]
    pub ingredients_text_en: Option<String>,
    #[serde(default)]
    pub ingredients_text: Option<String>,
    #[serde(default)]
    pub allergens_tags: Option<Vec<String>>,
    #[serde(default)]
    pub labels_tags: Option<Vec<String>>,
    #[serde(default)]
    pub categories_tags: Option<Vec<String>>,
    #[serde(default)]
    pub serving_size: Option<String>,
}

/// Barcodes usually arrive as strings but some records carry a number
fn code_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Response of `GET /api/list/search`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub products: Vec<ExternalProduct>,
}
