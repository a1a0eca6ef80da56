use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::title::Title;
use crate::types::{round_money, Money, Rate};

/// Flat one-time charge on the full face value of an overdue title.
const PENALTY_RATE: Rate = dec!(0.02);

/// Notional monthly interest, accrued daily over a 30-day basis.
const MONTHLY_INTEREST_RATE: Rate = dec!(0.01);
const INTEREST_DAY_BASIS: Decimal = dec!(30);

/// Amounts owed on a title as of a reference date. Money fields are rounded
/// to cents; `max_days_late` is 0 when no installment is overdue.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleRevaluation {
    pub original_amount: Money,
    pub penalty: Money,
    pub total_interest: Money,
    pub updated_amount: Money,
    pub max_days_late: i64,
}

/// Revalue a title as of `reference`.
///
/// The face value sums every installment, paid or not. The penalty is a
/// single 2% charge on that face value, triggered once if any installment
/// is overdue. Interest accrues per overdue installment on that
/// installment's own amount and lateness. Rounding happens once, on the
/// final sums.
///
/// Pure and total: never fails for a constructed `Title`.
pub fn revalue(title: &Title, reference: NaiveDate) -> TitleRevaluation {
    let original_amount: Money = title.installments().iter().map(|p| p.amount()).sum();

    let max_days_late = title
        .installments()
        .iter()
        .map(|p| p.days_late(reference))
        .max()
        .unwrap_or(0);

    let penalty = if title.is_overdue(reference) {
        original_amount * PENALTY_RATE
    } else {
        Decimal::ZERO
    };

    let daily_rate = MONTHLY_INTEREST_RATE / INTEREST_DAY_BASIS;
    let total_interest: Money = title
        .installments()
        .iter()
        .map(|p| p.amount() * daily_rate * Decimal::from(p.days_late(reference)))
        .sum();

    let updated_amount = original_amount + penalty + total_interest;

    TitleRevaluation {
        original_amount: round_money(original_amount),
        penalty: round_money(penalty),
        total_interest: round_money(total_interest),
        updated_amount: round_money(updated_amount),
        max_days_late,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::title::Installment;
    use chrono::Days;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 11).unwrap()
    }

    fn days_ago(n: u64) -> NaiveDate {
        reference().checked_sub_days(Days::new(n)).unwrap()
    }

    fn installment(number: u32, amount: Money, due: NaiveDate, paid: bool) -> Installment {
        Installment::new(number, amount, due, paid).unwrap()
    }

    #[test]
    fn test_penalty_and_per_installment_interest() {
        // 100 ten days late: 100 * (0.01/30) * 10 = 0.3333...
        // 200 five days late: 200 * (0.01/30) * 5  = 0.3333...
        // summed then rounded: 0.6666... -> 0.67
        let title = Title::new(
            "T1",
            "Debtor",
            vec![
                installment(1, dec!(100), days_ago(10), false),
                installment(2, dec!(200), days_ago(5), false),
            ],
        )
        .unwrap();

        let r = revalue(&title, reference());

        assert_eq!(r.original_amount, dec!(300.00));
        assert_eq!(r.penalty, dec!(6.00));
        assert_eq!(r.total_interest, dec!(0.67));
        assert_eq!(r.updated_amount, dec!(306.67));
        assert_eq!(r.max_days_late, 10);
    }

    #[test]
    fn test_not_overdue_title_keeps_original_amount() {
        let title = Title::new(
            "T2",
            "Debtor",
            vec![installment(1, dec!(100), reference().checked_add_days(Days::new(1)).unwrap(), false)],
        )
        .unwrap();

        let r = revalue(&title, reference());

        assert_eq!(r.original_amount, dec!(100.00));
        assert_eq!(r.penalty, dec!(0.00));
        assert_eq!(r.total_interest, dec!(0.00));
        assert_eq!(r.updated_amount, dec!(100.00));
        assert_eq!(r.max_days_late, 0);
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        // 30 one day late: 30 * (0.01/30) * 1 = 0.01 exactly
        let title = Title::new(
            "T3",
            "Debtor",
            vec![installment(1, dec!(30), days_ago(1), false)],
        )
        .unwrap();

        let r = revalue(&title, reference());

        assert_eq!(r.original_amount, dec!(30.00));
        assert_eq!(r.penalty, dec!(0.60));
        assert_eq!(r.total_interest, dec!(0.01));
        assert_eq!(r.updated_amount, dec!(30.61));
        assert_eq!(r.max_days_late, 1);
    }

    #[test]
    fn test_interest_midpoint_rounds_up() {
        // 45 one day late: 45 * (0.01/30) * 1 = 0.015 -> 0.02 away from zero
        let title = Title::new(
            "T4",
            "Debtor",
            vec![installment(1, dec!(45), days_ago(1), false)],
        )
        .unwrap();

        let r = revalue(&title, reference());

        assert_eq!(r.total_interest, dec!(0.02));
    }

    #[test]
    fn test_due_on_reference_date_contributes_nothing() {
        let title = Title::new(
            "T5",
            "Debtor",
            vec![installment(1, dec!(100), reference(), false)],
        )
        .unwrap();

        let r = revalue(&title, reference());

        assert_eq!(r.penalty, dec!(0.00));
        assert_eq!(r.total_interest, dec!(0.00));
        assert_eq!(r.updated_amount, dec!(100.00));
        assert_eq!(r.max_days_late, 0);
    }

    #[test]
    fn test_paid_installment_counts_toward_face_value_only() {
        // Paid installment is overdue-dated: contributes to the penalty base
        // through the face value, never to interest or lateness.
        let title = Title::new(
            "T6",
            "Debtor",
            vec![
                installment(1, dec!(100), days_ago(30), true),
                installment(2, dec!(200), days_ago(5), false),
            ],
        )
        .unwrap();

        let r = revalue(&title, reference());

        assert_eq!(r.original_amount, dec!(300.00));
        // 2% of the full 300, not of the unpaid 200
        assert_eq!(r.penalty, dec!(6.00));
        // 200 * (0.01/30) * 5 = 0.3333... -> 0.33
        assert_eq!(r.total_interest, dec!(0.33));
        assert_eq!(r.max_days_late, 5);
    }

    #[test]
    fn test_fully_paid_title_reports_zeroes() {
        let title = Title::new(
            "T7",
            "Debtor",
            vec![installment(1, dec!(150), days_ago(60), true)],
        )
        .unwrap();

        let r = revalue(&title, reference());

        assert_eq!(r.original_amount, dec!(150.00));
        assert_eq!(r.penalty, dec!(0.00));
        assert_eq!(r.total_interest, dec!(0.00));
        assert_eq!(r.updated_amount, dec!(150.00));
        assert_eq!(r.max_days_late, 0);
    }
}
