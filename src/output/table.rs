//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Shown in place of an empty table
pub const EMPTY: &str = "No results found.";

/// Format data as a table
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return EMPTY.to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

/// One labelled value of a detail view
#[derive(Debug, Tabled)]
pub struct FieldRow {
    #[tabled(rename = "FIELD")]
    pub field: &'static str,
    #[tabled(rename = "VALUE")]
    pub value: String,
}

/// Format labelled values as a two-column table
pub fn format_fields(fields: Vec<(&'static str, String)>) -> String {
    let rows: Vec<FieldRow> = fields
        .into_iter()
        .map(|(field, value)| FieldRow { field, value })
        .collect();
    format_table(&rows)
}
