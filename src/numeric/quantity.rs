// ============================================================================
// Quantity
// Count or measure held at three fractional digits
// ============================================================================

use super::scaled_decimal::ScaledDecimal;
use crate::config::QUANTITY_SCALE;

/// Quantity, rounded half-up to 3 fractional digits.
///
/// Arithmetic with a [`Money`](super::Money) operand yields `Quantity`.
pub type Quantity = ScaledDecimal<QUANTITY_SCALE>;

impl ScaledDecimal<QUANTITY_SCALE> {
    /// 1.000
    pub fn one() -> Self {
        Self::from_integer(1)
    }
}
