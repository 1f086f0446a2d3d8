//! Nutrient value extraction and formatting

use serde_json::Value;

use crate::client::models::ExternalProduct;

/// Unit assumed for energy keys without an explicit unit
const ENERGY_UNIT: &str = "kcal";

/// Unit assumed for every other key without an explicit unit
const MASS_UNIT: &str = "g";

/// Format one nutrient of `product` as `"<value> <unit>"`.
///
/// With `per_serving` set, `<key>_serving` is preferred and `<key>_100g` is
/// the fallback; otherwise only `<key>_100g` is consulted. A null field
/// counts as missing. Numbers are rendered with one fractional digit, any
/// other value is used as supplied.
pub fn nutrient_value(product: &ExternalProduct, key: &str, per_serving: bool) -> Option<String> {
    let nutriments = product.nutriments.as_ref()?;
    let present = |field: String| nutriments.get(&field).filter(|v| !v.is_null());

    let value = per_serving
        .then(|| present(format!("{}_serving", key)))
        .flatten()
        .or_else(|| present(format!("{}_100g", key)))?;

    let unit = nutriments
        .get(&format!("{}_unit", key))
        .and_then(Value::as_str)
        .filter(|u| !u.is_empty())
        .unwrap_or(if key.starts_with("energy") {
            ENERGY_UNIT
        } else {
            MASS_UNIT
        });

    Some(format!("{} {}", render(value), unit))
}

fn render(value: &Value) -> String {
    match value {
        Value::Number(n) => match n.as_f64() {
            // ties round away from zero: 0.25 -> 0.3
            Some(f) => format!("{:.1}", (f * 10.0).round() / 10.0),
            None => n.to_string(),
        },
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
