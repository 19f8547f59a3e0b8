// ============================================================================
// Money
// Monetary amount held at two fractional digits
// ============================================================================

use super::scaled_decimal::ScaledDecimal;
use crate::config::MONEY_SCALE;

/// Monetary amount, rounded half-up to 2 fractional digits.
///
/// Arithmetic with a [`Quantity`](super::Quantity) operand yields `Money`.
pub type Money = ScaledDecimal<MONEY_SCALE>;

impl ScaledDecimal<MONEY_SCALE> {
    /// 100.00
    pub fn hundred() -> Self {
        Self::from_integer(100)
    }

    /// 1,000,000.00
    ///
    /// A business ceiling for amounts, not a representation limit.
    pub fn max_amount() -> Self {
        Self::from_integer(1_000_000)
    }
}
