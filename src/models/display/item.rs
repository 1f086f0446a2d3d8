//! Grocery item display models

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::client::models::GroceryItem;
use crate::error::Result;
use crate::output::formatters::{INGREDIENTS_MAX_CHARS, or_dash, or_na, truncate_chars};
use crate::output::{Formattable, Pretty, json, table};

/// Grocery item row for list output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ItemDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "BRAND")]
    pub brand: String,

    #[tabled(rename = "QTY")]
    pub quantity: i64,

    /// Calories per serving, `--` when unknown
    #[tabled(rename = "CALORIES")]
    pub calories: String,
}

impl From<&GroceryItem> for ItemDisplay {
    fn from(item: &GroceryItem) -> Self {
        Self {
            id: item.id,
            name: item.product_name.clone(),
            brand: or_dash(item.brands.as_deref()),
            quantity: item.quantity,
            calories: or_dash(item.calories.as_deref()),
        }
    }
}

impl Pretty for ItemDisplay {
    fn pretty(&self) -> String {
        let mut line = format!(
            "{} {}",
            format!("#{}", self.id).dimmed(),
            self.name.bold()
        );
        if self.brand != "--" {
            line.push_str(&format!(" ({})", self.brand));
        }
        line.push_str(&format!(" x{}", self.quantity.to_string().cyan()));
        if self.calories != "--" {
            line.push_str(&format!("  {}", self.calories.dimmed()));
        }
        line
    }
}

/// Nutrition breakdown on a detail card. Missing values read `N/A`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NutritionFacts {
    pub calories: String,
    pub protein: String,
    pub fat: String,
    pub saturated_fat: String,
    pub carbohydrates: String,
    pub sugars: String,
    pub salt: String,
}

/// Full detail card for one item.
#[derive(Debug, Clone, Serialize)]
pub struct ItemDetail {
    pub id: i64,
    pub name: String,
    pub brand: Option<String>,
    pub quantity: i64,
    pub serving_size: Option<String>,
    /// Present only when a headline nutrient is known
    pub nutrition: Option<NutritionFacts>,
    pub labels: Option<String>,
    pub categories: Option<String>,
    /// Truncated for display
    pub ingredients: Option<String>,
    pub allergens: Option<String>,
    pub thumb_url: Option<String>,
}

impl From<&GroceryItem> for ItemDetail {
    fn from(item: &GroceryItem) -> Self {
        let nutrition = item.has_nutrition().then(|| NutritionFacts {
            calories: or_na(item.calories.as_deref()),
            protein: or_na(item.protein.as_deref()),
            fat: or_na(item.fat.as_deref()),
            saturated_fat: or_na(item.saturated_fat.as_deref()),
            carbohydrates: or_na(item.carbohydrates.as_deref()),
            sugars: or_na(item.sugars.as_deref()),
            salt: or_na(item.salt.as_deref()),
        });

        Self {
            id: item.id,
            name: item.product_name.clone(),
            brand: item.brands.clone(),
            quantity: item.quantity,
            serving_size: item.serving_size.clone(),
            nutrition,
            labels: item.labels.clone(),
            categories: item.categories.clone(),
            ingredients: item
                .ingredients
                .as_deref()
                .map(|text| truncate_chars(text, INGREDIENTS_MAX_CHARS)),
            allergens: item.allergens.clone(),
            thumb_url: item.thumb_url.clone(),
        }
    }
}

impl ItemDetail {
    fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("ID", self.id.to_string()),
            ("Name", self.name.clone()),
            ("Brand", or_dash(self.brand.as_deref())),
            ("Quantity", self.quantity.to_string()),
            ("Serving size", or_dash(self.serving_size.as_deref())),
        ];
        if let Some(n) = &self.nutrition {
            fields.extend([
                ("Calories", n.calories.clone()),
                ("Protein", n.protein.clone()),
                ("Fat", n.fat.clone()),
                ("Saturated fat", n.saturated_fat.clone()),
                ("Carbohydrates", n.carbohydrates.clone()),
                ("Sugars", n.sugars.clone()),
                ("Salt", n.salt.clone()),
            ]);
        }
        fields.extend([
            ("Labels", or_dash(self.labels.as_deref())),
            ("Category", or_dash(self.categories.as_deref())),
            ("Ingredients", or_dash(self.ingredients.as_deref())),
            ("Allergens", or_dash(self.allergens.as_deref())),
        ]);
        fields
    }
}

impl Pretty for ItemDetail {
    fn pretty(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("{}\n", self.name.bold()));
        if let Some(brand) = &self.brand {
            out.push_str(&format!("{}\n", brand.dimmed()));
        }
        out.push_str("══════════════════════════════════════\n");
        out.push_str(&format!("Quantity:     {}\n", self.quantity));
        if let Some(serving) = &self.serving_size {
            out.push_str(&format!("Serving size: {}\n", serving));
        }

        if let Some(n) = &self.nutrition {
            out.push_str(&format!("\n{}\n", "Nutrition (per serving)".bold()));
            for (label, value) in [
                ("Calories", &n.calories),
                ("Protein", &n.protein),
                ("Fat", &n.fat),
                ("  Saturated", &n.saturated_fat),
                ("Carbohydrates", &n.carbohydrates),
                ("  Sugars", &n.sugars),
                ("Salt", &n.salt),
            ] {
                out.push_str(&format!("  {:<14} {}\n", label, value));
            }
        }

        let sections = [
            ("Labels", &self.labels),
            ("Category", &self.categories),
            ("Ingredients", &self.ingredients),
        ];
        for (title, value) in sections {
            if let Some(value) = value {
                out.push_str(&format!("\n{}\n  {}\n", title.bold(), value));
            }
        }
        if let Some(allergens) = &self.allergens {
            out.push_str(&format!("\n{}\n  {}\n", "Allergens".bold(), allergens.yellow()));
        }

        out.trim_end().to_string()
    }
}

impl Formattable for ItemDetail {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty => Ok(self.pretty()),
            OutputFormat::Table => Ok(table::format_fields(self.fields())),
            OutputFormat::Json => Ok(json::format_json(self)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::{GroceryItemBuilder, item};

    #[test]
    fn test_item_display_placeholders() {
        let display = ItemDisplay::from(&item(3, "Bread"));

        assert_eq!(display.id, 3);
        assert_eq!(display.brand, "--");
        assert_eq!(display.calories, "--");
        assert_eq!(display.quantity, 1);
    }

    #[test]
    fn test_item_display_pretty_line() {
        colored::control::set_override(false);
        let display = ItemDisplay::from(
            &GroceryItemBuilder::new(4, "Oats")
                .brands("Quaker")
                .quantity(2)
                .calories("150.0 kcal")
                .build(),
        );
        assert_eq!(display.pretty(), "#4 Oats (Quaker) x2  150.0 kcal");
    }

    #[test]
    fn test_detail_nutrition_with_missing_values() {
        let detail = ItemDetail::from(&GroceryItemBuilder::new(1, "Oats").protein("5.0 g").build());
        let nutrition = detail.nutrition.expect("protein alone enables the breakdown");

        assert_eq!(nutrition.protein, "5.0 g");
        assert_eq!(nutrition.calories, "N/A");
        assert_eq!(nutrition.salt, "N/A");
    }

    #[test]
    fn test_detail_without_headline_nutrients() {
        let detail = ItemDetail::from(&item(1, "Bananas"));
        assert!(detail.nutrition.is_none());
    }

    #[test]
    fn test_detail_blank_nutrients_hide_breakdown() {
        let detail = ItemDetail::from(
            &GroceryItemBuilder::new(1, "Bananas")
                .calories("")
                .protein("  ")
                .build(),
        );
        assert!(detail.nutrition.is_none());
    }

    #[test]
    fn test_detail_truncates_ingredients() {
        let long = "x".repeat(1000);
        let detail = ItemDetail::from(&GroceryItemBuilder::new(1, "Soup").ingredients(long).build());
        let ingredients = detail.ingredients.unwrap();

        assert_eq!(ingredients.chars().count(), 803);
        assert!(ingredients.ends_with("..."));
    }

    #[test]
    fn test_detail_pretty_card() {
        colored::control::set_override(false);
        let detail = ItemDetail::from(
            &GroceryItemBuilder::new(7, "Peanut Butter")
                .brands("Jif")
                .calories("190.0 kcal")
                .allergens("peanuts")
                .build(),
        );
        let card = detail.pretty();

        assert!(card.starts_with("Peanut Butter\nJif\n"));
        assert!(card.contains("Calories       190.0 kcal"));
        assert!(card.contains("Protein        N/A"));
        assert!(card.contains("Allergens\n  peanuts"));
        assert!(!card.contains("Ingredients"));
    }

    #[test]
    fn test_detail_formats() {
        let detail = ItemDetail::from(&GroceryItemBuilder::new(2, "Milk").calories("100 kcal").build());

        let table = detail.format(OutputFormat::Table).unwrap();
        assert!(table.contains("Calories"));
        assert!(table.contains("100 kcal"));

        let json = detail.format(OutputFormat::Json).unwrap();
        assert!(json.contains("\"name\": \"Milk\""));
        assert!(json.contains("\"nutrition\""));
    }
}
