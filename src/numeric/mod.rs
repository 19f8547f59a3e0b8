// ============================================================================
// Numeric Module
// Fixed-scale decimal values for monetary amounts and quantities
// ============================================================================
//
// This module provides:
// - ScaledDecimal<S>: Immutable decimal normalized to S fractional digits
// - Money / Quantity: The 2- and 3-digit instantiations with their constants
// - NumericError: Error types for construction, arithmetic and decoding
// - A scale-tagged byte codec (plus serde behind the `serde` feature)
//
// Design principles:
// - Round half-up on construction and after every operation
// - Result scale always follows the receiver, never the operand
// - Unbounded significand: only parsing, division by zero and decoding fail
// - Compile-time scale via const generics

mod codec;
mod errors;
mod money;
mod quantity;
mod scaled_decimal;

pub use errors::{NumericError, NumericResult};
pub use money::Money;
pub use quantity::Quantity;
pub use scaled_decimal::ScaledDecimal;
