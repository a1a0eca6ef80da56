use chrono::NaiveDate;

use crate::types::Money;
use crate::{ArrearsError, ArrearsResult};

/// Optional filters, reference-date override and ordering for the overdue
/// listing. Built per request and discarded after use.
///
/// Sort tokens stay raw strings here: an unknown `sort_by` must degrade to
/// the default key, while an unknown `sort_dir` is a caller error.
#[derive(Debug, Clone, Default)]
pub struct OverdueQuery {
    /// Title-number substring, case-insensitive.
    pub number_contains: Option<String>,
    /// Debtor-name substring, case-insensitive.
    pub debtor_contains: Option<String>,
    /// Inclusive lower bound on the computed updated amount.
    pub min_updated_amount: Option<Money>,
    /// Inclusive upper bound on the computed updated amount.
    pub max_updated_amount: Option<Money>,
    /// Inclusive lower bound on days late.
    pub min_days_late: Option<i64>,
    /// Inclusive upper bound on days late.
    pub max_days_late: Option<i64>,
    /// Overrides the clock's "today" when present.
    pub reference_date: Option<NaiveDate>,
    pub sort_by: Option<String>,
    pub sort_dir: Option<String>,
}

impl OverdueQuery {
    /// Reject self-contradictory parameters before any computation starts.
    pub fn validate(&self) -> ArrearsResult<()> {
        if let (Some(min), Some(max)) = (self.min_days_late, self.max_days_late) {
            if min > max {
                return Err(ArrearsError::InvalidQuery(
                    "min_days_late cannot be greater than max_days_late".into(),
                ));
            }
        }
        if let (Some(min), Some(max)) = (self.min_updated_amount, self.max_updated_amount) {
            if min > max {
                return Err(ArrearsError::InvalidQuery(
                    "min_updated_amount cannot be greater than max_updated_amount".into(),
                ));
            }
        }
        if let Some(dir) = self.sort_dir.as_deref() {
            SortDirection::parse(dir)?;
        }
        Ok(())
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_by
            .as_deref()
            .map(SortKey::from_token)
            .unwrap_or_default()
    }

    /// Direction resolved from the raw token. Only valid tokens survive
    /// `validate`, so the fallback covers the absent case.
    pub fn sort_direction(&self) -> SortDirection {
        self.sort_dir
            .as_deref()
            .and_then(|d| SortDirection::parse(d).ok())
            .unwrap_or_default()
    }
}

/// Result ordering key. Unrecognized tokens fall back to days late.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    UpdatedAmount,
    #[default]
    DaysLate,
    DebtorName,
    TitleNumber,
    OriginalAmount,
}

impl SortKey {
    /// Matches case-insensitively ignoring `-` and `_`, so `updated-amount`,
    /// `updatedAmount` and `updated_amount` resolve to the same key.
    pub fn from_token(token: &str) -> Self {
        let normalized: String = token
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "updatedamount" => Self::UpdatedAmount,
            "dayslate" => Self::DaysLate,
            "debtorname" => Self::DebtorName,
            "titlenumber" => Self::TitleNumber,
            "originalamount" => Self::OriginalAmount,
            _ => Self::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn parse(token: &str) -> ArrearsResult<Self> {
        match token.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Ascending),
            "desc" => Ok(Self::Descending),
            _ => Err(ArrearsError::InvalidQuery(
                "sort_dir must be 'asc' or 'desc'".into(),
            )),
        }
    }
}
