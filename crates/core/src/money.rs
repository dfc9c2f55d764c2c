//! # Money Module
//!
//! Amounts are plain `rust_decimal::Decimal` values. This module only holds
//! the rules shared by every operation: amounts must be positive, and
//! anything shown to a person is rounded to cents half-up.

use crate::error::{CoreError, CoreResult};
use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places used for display (centavos)
pub const CENT_PLACES: u32 = 2;

/// Round to cents using round-half-up (0.005 -> 0.01, -0.005 -> -0.01).
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CENT_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount with exactly two decimal places.
pub fn format_cents(amount: Decimal) -> String {
    format!("{:.2}", round_cents(amount))
}

/// Reject zero and negative amounts.
pub fn ensure_positive(amount: Decimal) -> CoreResult<()> {
    if amount > Decimal::ZERO {
        Ok(())
    } else {
        Err(CoreError::InvalidAmount(amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_cents_half_up() {
        assert_eq!(round_cents(dec!(10.005)), dec!(10.01));
        assert_eq!(round_cents(dec!(10.004)), dec!(10.00));
        assert_eq!(round_cents(dec!(0.125)), dec!(0.13));
        assert_eq!(round_cents(dec!(-0.125)), dec!(-0.13));
    }

    #[test]
    fn test_format_cents_pads() {
        assert_eq!(format_cents(dec!(1000)), "1000.00");
        assert_eq!(format_cents(dec!(12.5)), "12.50");
        assert_eq!(format_cents(dec!(2.675)), "2.68");
    }

    #[test]
    fn test_ensure_positive() {
        assert!(ensure_positive(dec!(0.01)).is_ok());
        assert_eq!(ensure_positive(dec!(0)), Err(CoreError::InvalidAmount(dec!(0))));
        assert_eq!(
            ensure_positive(dec!(-5)),
            Err(CoreError::InvalidAmount(dec!(-5)))
        );
    }
}
