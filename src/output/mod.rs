//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod formatters;
pub mod json;
pub mod table;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;

    /// Format and print to stdout
    fn print(&self, format: OutputFormat) -> Result<()> {
        println!("{}", self.format(format)?);
        Ok(())
    }
}

/// Human-oriented rendering used by the `pretty` format
pub trait Pretty {
    fn pretty(&self) -> String;
}

impl<T: Tabled + Serialize + Pretty> Formattable for Vec<T> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty if self.is_empty() => Ok(table::EMPTY.to_string()),
            OutputFormat::Pretty => Ok(self
                .iter()
                .map(Pretty::pretty)
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => Ok(table::format_table(self)),
            OutputFormat::Json => Ok(json::format_json_list(self)?),
        }
    }
}
