pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use arrears_core::service::OverdueTitle;

use crate::OutputFormat;

/// Dispatch the overdue listing to the appropriate formatter.
pub fn render(format: &OutputFormat, rows: &[OverdueTitle]) {
    match format {
        OutputFormat::Json => json::print_json(rows),
        OutputFormat::Table => table::print_table(rows),
        OutputFormat::Csv => csv_out::print_csv(rows),
        OutputFormat::Minimal => minimal::print_minimal(rows),
    }
}
