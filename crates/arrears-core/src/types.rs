use rust_decimal::{Decimal, RoundingStrategy};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.02 = 2%). Never as percentages.
pub type Rate = Decimal;

/// Round a monetary value to cents, half away from zero (0.005 becomes 0.01).
///
/// Applied once to fully summed values, never per term.
pub fn round_money(value: Money) -> Money {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        assert_eq!(round_money(dec!(0.005)), dec!(0.01));
        assert_eq!(round_money(dec!(0.015)), dec!(0.02));
        assert_eq!(round_money(dec!(-0.005)), dec!(-0.01));
    }

    #[test]
    fn test_sub_midpoint_rounds_down() {
        assert_eq!(round_money(dec!(0.0049)), dec!(0.00));
        assert_eq!(round_money(dec!(306.664)), dec!(306.66));
    }
}
