use arrears_core::service::OverdueTitle;

/// Print just the title number and updated amount, one line per title.
pub fn print_minimal(rows: &[OverdueTitle]) {
    for row in rows {
        println!("{} {}", row.number, row.updated_amount);
    }
}
