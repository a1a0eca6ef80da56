use std::path::PathBuf;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use arrears_core::repository::TitleRepository;
use arrears_core::title::{Installment, Title};
use arrears_core::{ArrearsError, ArrearsResult};

/// Raw wire shape of one installment in the titles data file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InstallmentRecord {
    number: u32,
    amount: Decimal,
    due_date: NaiveDate,
    #[serde(default)]
    paid: bool,
}

/// Raw wire shape of one title in the titles data file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TitleRecord {
    number: String,
    debtor_name: String,
    #[serde(default)]
    installments: Vec<InstallmentRecord>,
}

/// Reads the full title snapshot from a JSON file on every call.
///
/// Records pass through the entity constructors, so a file carrying an
/// invariant-violating record fails the whole load instead of being
/// silently dropped.
pub struct JsonFileTitleRepository {
    path: PathBuf,
}

impl JsonFileTitleRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TitleRepository for JsonFileTitleRepository {
    async fn list_all(&self) -> ArrearsResult<Vec<Title>> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            ArrearsError::DataSource(format!("failed to read '{}': {}", self.path.display(), e))
        })?;

        let records: Vec<TitleRecord> = serde_json::from_str(&contents).map_err(|e| {
            ArrearsError::DataSource(format!("failed to parse '{}': {}", self.path.display(), e))
        })?;

        debug!(count = records.len(), path = %self.path.display(), "titles file loaded");

        records.into_iter().map(into_title).collect()
    }
}

fn into_title(record: TitleRecord) -> ArrearsResult<Title> {
    let installments = record
        .installments
        .into_iter()
        .map(|p| Installment::new(p.number, p.amount, p.due_date, p.paid))
        .collect::<ArrearsResult<Vec<_>>>()?;

    Title::new(record.number, record.debtor_name, installments)
}
