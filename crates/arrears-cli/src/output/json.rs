use arrears_core::service::OverdueTitle;

/// Pretty-print the listing as JSON to stdout.
pub fn print_json(rows: &[OverdueTitle]) {
    match serde_json::to_string_pretty(rows) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("JSON serialization error: {}", e),
    }
}
