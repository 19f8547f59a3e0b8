// ============================================================================
// Scaled Amounts Library
// Immutable fixed-scale decimal values for money and quantities
// ============================================================================

//! # Scaled Amounts
//!
//! Two immutable decimal value types that never touch binary floating point
//! in their arithmetic:
//!
//! - [`Money`](numeric::Money): always 2 fractional digits
//! - [`Quantity`](numeric::Quantity): always 3 fractional digits
//!
//! ## Features
//!
//! - **Round half-up** on construction and after every operation
//! - **Cross-type arithmetic** where the receiver decides the result type and scale
//! - **Value equality and hashing** independent of how a value was built
//! - **Unbounded magnitude**: the significand is a `num_bigint::BigInt`, so
//!   there is no overflow
//! - **Persistence** as a compact byte form, or as a string through serde
//!   (`serde` feature)
//!
//! ## Example
//!
//! ```rust
//! use scaled_amounts::prelude::*;
//!
//! let price = Money::from_f64(10500.45)?;
//! let qty = Quantity::from_f64(24.043)?;
//!
//! // Money receiver: result rounded to 2 digits
//! assert_eq!(&price + &qty, Money::from_f64(10524.49)?);
//!
//! // Quantity receiver: result rounded to 3 digits
//! assert_eq!((&qty * &Money::from(2)).to_string(), "48.086");
//!
//! // Division by a zero value is a typed error
//! assert_eq!(price.checked_div(&Money::zero()), Err(NumericError::DivisionByZero));
//!
//! // Truncation drops the fraction without rounding
//! assert_eq!(Money::from_f64(100.99)?.trunc(), Money::hundred());
//! # Ok::<(), NumericError>(())
//! ```

pub mod config;
#[cfg(feature = "logging")]
pub mod logging;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{Money, NumericError, NumericResult, Quantity, ScaledDecimal};
}
