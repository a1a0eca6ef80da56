use std::sync::Arc;

use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;

use arrears_core::clock::SystemClock;
use arrears_core::query::OverdueQuery;
use arrears_core::service::{OverdueTitle, OverdueTitleService};

use crate::repository::JsonFileTitleRepository;

/// Arguments for the overdue-titles listing
#[derive(Args)]
pub struct ListOverdueArgs {
    /// Path to the titles JSON data file
    #[arg(long, default_value = "data/titles.json")]
    pub data: String,

    /// Keep only titles whose number contains this text (case-insensitive)
    #[arg(long)]
    pub number_contains: Option<String>,

    /// Keep only titles whose debtor name contains this text (case-insensitive)
    #[arg(long)]
    pub debtor_contains: Option<String>,

    /// Minimum updated amount, inclusive
    #[arg(long)]
    pub min_updated_amount: Option<Decimal>,

    /// Maximum updated amount, inclusive
    #[arg(long)]
    pub max_updated_amount: Option<Decimal>,

    /// Minimum days late, inclusive
    #[arg(long)]
    pub min_days_late: Option<i64>,

    /// Maximum days late, inclusive
    #[arg(long)]
    pub max_days_late: Option<i64>,

    /// Reference date override, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub reference_date: Option<NaiveDate>,

    /// Sort key: updated-amount | days-late | debtor-name | title-number | original-amount
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Sort direction: asc | desc
    #[arg(long)]
    pub sort_dir: Option<String>,
}

pub async fn run_list_overdue(
    args: ListOverdueArgs,
) -> Result<Vec<OverdueTitle>, Box<dyn std::error::Error>> {
    let repository = Arc::new(JsonFileTitleRepository::new(&args.data));
    let service = OverdueTitleService::new(repository, Arc::new(SystemClock));

    let query = OverdueQuery {
        number_contains: args.number_contains,
        debtor_contains: args.debtor_contains,
        min_updated_amount: args.min_updated_amount,
        max_updated_amount: args.max_updated_amount,
        min_days_late: args.min_days_late,
        max_days_late: args.max_days_late,
        reference_date: args.reference_date,
        sort_by: args.sort_by,
        sort_dir: args.sort_dir,
    };

    let rows = service.list_overdue(&query).await?;
    Ok(rows)
}
