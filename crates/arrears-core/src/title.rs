use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::types::Money;
use crate::{ArrearsError, ArrearsResult};

/// One scheduled payment within a title, with its own due date and paid flag.
///
/// Immutable after construction; the paid flag reflects the source data and
/// is never mutated by this read-only system.
#[derive(Debug, Clone, PartialEq)]
pub struct Installment {
    number: u32,
    amount: Money,
    due_date: NaiveDate,
    paid: bool,
}

impl Installment {
    pub fn new(number: u32, amount: Money, due_date: NaiveDate, paid: bool) -> ArrearsResult<Self> {
        if number == 0 {
            return Err(ArrearsError::InvalidInput {
                field: "number".into(),
                reason: "Installment number must be positive.".into(),
            });
        }
        if amount <= Decimal::ZERO {
            return Err(ArrearsError::InvalidInput {
                field: "amount".into(),
                reason: "Installment amount must be positive.".into(),
            });
        }
        Ok(Self {
            number,
            amount,
            due_date,
            paid,
        })
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    pub fn is_paid(&self) -> bool {
        self.paid
    }

    /// Unpaid and strictly past due. An installment due on the reference
    /// date itself is not overdue.
    pub fn is_overdue(&self, reference: NaiveDate) -> bool {
        !self.paid && self.due_date < reference
    }

    /// Whole calendar days between due date and reference date; 0 when not
    /// overdue.
    pub fn days_late(&self, reference: NaiveDate) -> i64 {
        if self.is_overdue(reference) {
            (reference - self.due_date).num_days()
        } else {
            0
        }
    }
}

/// A financial obligation composed of one or more installments.
#[derive(Debug, Clone, PartialEq)]
pub struct Title {
    number: String,
    debtor_name: String,
    installments: Vec<Installment>,
}

impl Title {
    pub fn new(
        number: impl Into<String>,
        debtor_name: impl Into<String>,
        installments: Vec<Installment>,
    ) -> ArrearsResult<Self> {
        let number = number.into();
        let debtor_name = debtor_name.into();

        if number.trim().is_empty() {
            return Err(ArrearsError::InvalidInput {
                field: "number".into(),
                reason: "Title number must not be blank.".into(),
            });
        }
        if debtor_name.trim().is_empty() {
            return Err(ArrearsError::InvalidInput {
                field: "debtor_name".into(),
                reason: "Debtor name must not be blank.".into(),
            });
        }
        if installments.is_empty() {
            return Err(ArrearsError::InvalidInput {
                field: "installments".into(),
                reason: "A title must have at least one installment.".into(),
            });
        }

        Ok(Self {
            number,
            debtor_name,
            installments,
        })
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn debtor_name(&self) -> &str {
        &self.debtor_name
    }

    pub fn installments(&self) -> &[Installment] {
        &self.installments
    }

    /// A title is overdue when at least one of its installments is.
    pub fn is_overdue(&self, reference: NaiveDate) -> bool {
        self.installments.iter().any(|p| p.is_overdue(reference))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_unpaid_past_due_is_overdue() {
        let p = Installment::new(1, dec!(100), date(2025, 12, 1), false).unwrap();
        assert!(p.is_overdue(date(2025, 12, 11)));
        assert_eq!(p.days_late(date(2025, 12, 11)), 10);
    }

    #[test]
    fn test_due_on_reference_date_is_not_overdue() {
        let p = Installment::new(1, dec!(100), date(2025, 12, 11), false).unwrap();
        assert!(!p.is_overdue(date(2025, 12, 11)));
        assert_eq!(p.days_late(date(2025, 12, 11)), 0);
    }

    #[test]
    fn test_paid_installment_is_never_overdue() {
        let p = Installment::new(1, dec!(100), date(2025, 11, 1), true).unwrap();
        assert!(!p.is_overdue(date(2025, 12, 11)));
        assert_eq!(p.days_late(date(2025, 12, 11)), 0);
    }

    #[test]
    fn test_installment_rejects_zero_number() {
        let err = Installment::new(0, dec!(100), date(2025, 12, 1), false).unwrap_err();
        match err {
            ArrearsError::InvalidInput { field, .. } => assert_eq!(field, "number"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_installment_rejects_non_positive_amount() {
        let err = Installment::new(1, dec!(0), date(2025, 12, 1), false).unwrap_err();
        match err {
            ArrearsError::InvalidInput { field, .. } => assert_eq!(field, "amount"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_title_overdue_when_any_installment_is() {
        let title = Title::new(
            "T1",
            "Debtor",
            vec![
                Installment::new(1, dec!(100), date(2025, 12, 20), false).unwrap(),
                Installment::new(2, dec!(100), date(2025, 12, 1), false).unwrap(),
            ],
        )
        .unwrap();
        assert!(title.is_overdue(date(2025, 12, 11)));
    }

    #[test]
    fn test_title_with_only_paid_or_future_installments_is_not_overdue() {
        let title = Title::new(
            "T2",
            "Debtor",
            vec![
                Installment::new(1, dec!(100), date(2025, 11, 1), true).unwrap(),
                Installment::new(2, dec!(100), date(2026, 1, 1), false).unwrap(),
            ],
        )
        .unwrap();
        assert!(!title.is_overdue(date(2025, 12, 11)));
    }

    #[test]
    fn test_title_rejects_blank_number_and_empty_installments() {
        let installment = Installment::new(1, dec!(100), date(2025, 12, 1), false).unwrap();
        assert!(Title::new("  ", "Debtor", vec![installment]).is_err());

        let err = Title::new("T3", "Debtor", Vec::new()).unwrap_err();
        match err {
            ArrearsError::InvalidInput { field, .. } => assert_eq!(field, "installments"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }
}
