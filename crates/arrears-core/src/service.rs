use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::clock::Clock;
use crate::query::{OverdueQuery, SortDirection, SortKey};
use crate::repository::TitleRepository;
use crate::revaluation::revalue;
use crate::title::Title;
use crate::types::Money;
use crate::ArrearsResult;

/// One row of the overdue listing: identity plus the computed amounts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverdueTitle {
    pub number: String,
    pub debtor_name: String,
    pub installment_count: usize,
    pub original_amount: Money,
    pub days_late: i64,
    pub updated_amount: Money,
    pub penalty: Money,
    pub total_interest: Money,
}

/// Orchestrates the overdue listing: snapshot fetch, filtering, revaluation
/// and ordering. Holds no mutable state; safe to share across tasks.
pub struct OverdueTitleService {
    repository: Arc<dyn TitleRepository>,
    clock: Arc<dyn Clock>,
}

impl OverdueTitleService {
    pub fn new(repository: Arc<dyn TitleRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// List titles overdue at the reference date, revalued and ordered.
    ///
    /// Validation runs first so a contradictory query never costs a data
    /// fetch. Text filters apply before the overdue cut and revaluation;
    /// numeric range filters apply to the computed rows. An empty list is a
    /// valid result.
    pub async fn list_overdue(&self, query: &OverdueQuery) -> ArrearsResult<Vec<OverdueTitle>> {
        query.validate()?;

        let reference = query.reference_date.unwrap_or_else(|| self.clock.today());
        let titles = self.repository.list_all().await?;
        debug!(count = titles.len(), %reference, "title snapshot loaded");

        let mut rows: Vec<OverdueTitle> = titles
            .iter()
            .filter(|t| matches_text_filters(t, query))
            .filter(|t| t.is_overdue(reference))
            .map(|t| to_row(t, reference))
            .filter(|row| within_ranges(row, query))
            .collect();

        sort_rows(&mut rows, query.sort_key(), query.sort_direction());
        debug!(count = rows.len(), "overdue listing computed");

        Ok(rows)
    }
}

fn matches_text_filters(title: &Title, query: &OverdueQuery) -> bool {
    // Blank terms behave as absent filters.
    let matches = |haystack: &str, term: &Option<String>| match term.as_deref().map(str::trim) {
        Some(term) if !term.is_empty() => haystack
            .to_lowercase()
            .contains(&term.to_lowercase()),
        _ => true,
    };

    matches(title.number(), &query.number_contains)
        && matches(title.debtor_name(), &query.debtor_contains)
}

fn to_row(title: &Title, reference: NaiveDate) -> OverdueTitle {
    let r = revalue(title, reference);
    OverdueTitle {
        number: title.number().to_string(),
        debtor_name: title.debtor_name().to_string(),
        installment_count: title.installments().len(),
        original_amount: r.original_amount,
        days_late: r.max_days_late,
        updated_amount: r.updated_amount,
        penalty: r.penalty,
        total_interest: r.total_interest,
    }
}

fn within_ranges(row: &OverdueTitle, query: &OverdueQuery) -> bool {
    if query.min_updated_amount.is_some_and(|min| row.updated_amount < min) {
        return false;
    }
    if query.max_updated_amount.is_some_and(|max| row.updated_amount > max) {
        return false;
    }
    if query.min_days_late.is_some_and(|min| row.days_late < min) {
        return false;
    }
    if query.max_days_late.is_some_and(|max| row.days_late > max) {
        return false;
    }
    true
}

/// Stable sort; string keys compare by byte order for reproducible results.
fn sort_rows(rows: &mut [OverdueTitle], key: SortKey, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ordering = match key {
            SortKey::UpdatedAmount => a.updated_amount.cmp(&b.updated_amount),
            SortKey::DaysLate => a.days_late.cmp(&b.days_late),
            SortKey::DebtorName => a.debtor_name.cmp(&b.debtor_name),
            SortKey::TitleNumber => a.number.cmp(&b.number),
            SortKey::OriginalAmount => a.original_amount.cmp(&b.original_amount),
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}
