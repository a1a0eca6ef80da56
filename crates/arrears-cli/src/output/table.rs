use arrears_core::service::OverdueTitle;
use tabled::{builder::Builder, Table};

/// Format the listing as a table using the tabled crate.
pub fn print_table(rows: &[OverdueTitle]) {
    if rows.is_empty() {
        println!("(empty)");
        return;
    }

    let mut builder = Builder::default();
    builder.push_record([
        "Number",
        "Debtor",
        "Installments",
        "Original",
        "Days Late",
        "Updated",
        "Penalty",
        "Interest",
    ]);

    for row in rows {
        builder.push_record([
            row.number.as_str(),
            row.debtor_name.as_str(),
            &row.installment_count.to_string(),
            &row.original_amount.to_string(),
            &row.days_late.to_string(),
            &row.updated_amount.to_string(),
            &row.penalty.to_string(),
            &row.total_interest.to_string(),
        ]);
    }

    let table = Table::from(builder);
    println!("{}", table);
}
