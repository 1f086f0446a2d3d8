//! Search result display model

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::nutrition::SearchResult;
use crate::output::Pretty;
use crate::output::formatters::or_dash;

/// Numbered search result row. The number is what `search --add` takes.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct SearchResultDisplay {
    #[tabled(rename = "#")]
    pub number: usize,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "BRANDS")]
    pub brands: String,

    #[tabled(rename = "CALORIES")]
    pub calories: String,

    #[tabled(rename = "PROTEIN")]
    pub protein: String,

    #[tabled(rename = "SERVING")]
    pub serving_size: String,

    #[tabled(skip)]
    pub code: Option<String>,
}

impl SearchResultDisplay {
    /// Number results from 1 in the order given
    pub fn numbered(results: &[SearchResult]) -> Vec<Self> {
        results
            .iter()
            .enumerate()
            .map(|(idx, result)| Self::new(idx + 1, result))
            .collect()
    }

    fn new(number: usize, result: &SearchResult) -> Self {
        Self {
            number,
            name: result.name.clone(),
            brands: result.brands.clone(),
            calories: or_dash(result.calories.as_deref()),
            protein: or_dash(result.protein.as_deref()),
            serving_size: or_dash(result.serving_size.as_deref()),
            code: result.code.clone(),
        }
    }
}

impl Pretty for SearchResultDisplay {
    fn pretty(&self) -> String {
        let mut line = format!("{:>2}. {}", self.number, self.name.bold());
        if !self.brands.is_empty() && self.brands != "N/A" {
            line.push_str(&format!(" ({})", self.brands));
        }
        let facts: Vec<String> = [
            (&self.calories, ""),
            (&self.protein, " protein"),
            (&self.serving_size, " per serving"),
        ]
        .iter()
        .filter(|(value, _)| value.as_str() != "--")
        .map(|(value, suffix)| format!("{}{}", value, suffix))
        .collect();
        if !facts.is_empty() {
            line.push_str(&format!("\n    {}", facts.join(" | ").dimmed()));
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::{product, rich_product};

    #[test]
    fn test_numbered_from_one() {
        let results = SearchResult::from_products(&[rich_product(), product("2", "Milk")], 10);
        let rows = SearchResultDisplay::numbered(&results);

        assert_eq!(rows[0].number, 1);
        assert_eq!(rows[1].number, 2);
        assert_eq!(rows[0].calories, "150.0 kcal");
        assert_eq!(rows[1].calories, "--");
        assert_eq!(rows[1].brands, "N/A");
    }

    #[test]
    fn test_pretty_rows() {
        colored::control::set_override(false);
        let results = SearchResult::from_products(&[rich_product(), product("2", "Milk")], 10);
        let rows = SearchResultDisplay::numbered(&results);

        assert_eq!(
            rows[0].pretty(),
            " 1. Old Fashioned Oats (quaker oats)\n    150.0 kcal | 5.3 g protein | 40 g per serving"
        );
        assert_eq!(rows[1].pretty(), " 2. Milk");
    }
}
