use std::io;

use arrears_core::service::OverdueTitle;

/// Write the listing as CSV to stdout, one row per overdue title.
pub fn print_csv(rows: &[OverdueTitle]) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let _ = wtr.write_record([
        "number",
        "debtorName",
        "installmentCount",
        "originalAmount",
        "daysLate",
        "updatedAmount",
        "penalty",
        "totalInterest",
    ]);

    for row in rows {
        let _ = wtr.write_record([
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

    let _ = wtr.flush();
}
