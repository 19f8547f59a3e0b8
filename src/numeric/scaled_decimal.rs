// ============================================================================
// Scaled Decimal
// Immutable decimal value normalized to a compile-time number of fraction digits
// ============================================================================

use super::errors::{NumericError, NumericResult};
use crate::config::{MONEY_SCALE, QUANTITY_SCALE};
use num_bigint::{BigInt, Sign};
use num_traits::{Pow, Signed, Zero};
use rust_decimal::Decimal;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

/// Decimal value held at exactly `SCALE` fractional digits.
///
/// The value is an unbounded integer count of `10^-SCALE` units, so the
/// magnitude is limited only by memory. Every constructor and every
/// arithmetic result is rounded half-up (ties away from zero) exactly once,
/// from the exact input or exact result, and then padded, so `1.5` stored
/// with `SCALE = 3` is always `1.500`. Values never change after
/// construction; operations return new instances.
///
/// Two instantiations with different scales are different types. Arithmetic
/// accepts a right-hand operand of any scale and always produces a result in
/// the receiver's scale.
///
/// # Example
/// ```
/// use scaled_amounts::numeric::{Money, Quantity};
///
/// let price: Money = "10500.45".parse()?;
/// let qty: Quantity = "24.043".parse()?;
/// assert_eq!((&price + &qty).to_string(), "10524.49");
/// assert_eq!((&qty + &price).to_string(), "10524.493");
/// # Ok::<(), scaled_amounts::numeric::NumericError>(())
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScaledDecimal<const SCALE: u32> {
    /// Value in units of `10^-SCALE`
    units: BigInt,
}

impl<const S: u32> ScaledDecimal<S> {
    /// Number of fractional digits every value of this type carries.
    pub const SCALE: u32 = S;

    /// Zero value
    #[inline]
    pub fn zero() -> Self {
        Self { units: BigInt::zero() }
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from `coefficient × 10^-scale`, rounding half-up to `SCALE` digits.
    ///
    /// This is the exact entry point every other constructor funnels into.
    ///
    /// # Example
    /// ```
    /// use num_bigint::BigInt;
    /// use scaled_amounts::numeric::Money;
    ///
    /// assert_eq!(Money::from_scaled(BigInt::from(125_479), 3).to_string(), "125.48");
    /// ```
    pub fn from_scaled(coefficient: BigInt, scale: u64) -> Self {
        Self { units: rescale_units(coefficient, scale, S) }
    }

    /// Create from a decimal, rounding half-up to `SCALE` digits.
    pub fn from_decimal(value: Decimal) -> Self {
        Self::from_scaled(BigInt::from(value.mantissa()), u64::from(value.scale()))
    }

    /// Create from an integer value.
    pub fn from_integer(value: i64) -> Self {
        Self::from_scaled(BigInt::from(value), 0)
    }

    /// Create from a 64-bit float.
    ///
    /// The float is read through its shortest round-trip decimal text, so
    /// `from_f64(15.549)` sees `15.549` rather than the binary expansion.
    ///
    /// # Errors
    /// Returns `InvalidInput` for NaN or infinities.
    pub fn from_f64(value: f64) -> NumericResult<Self> {
        if !value.is_finite() {
            tracing::debug!(value, "rejected non-finite float");
            return Err(NumericError::InvalidInput);
        }

        format!("{value:e}").parse()
    }

    /// Create from a 32-bit float.
    ///
    /// The float is widened to `f64` first, so the value seen is the exact
    /// binary value of the `f32` (`129.499f32` reads as `129.49899291992188`).
    ///
    /// # Errors
    /// Same as [`from_f64`](Self::from_f64).
    pub fn from_f32(value: f32) -> NumericResult<Self> {
        Self::from_f64(f64::from(value))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The normalized value as an integer count of `10^-SCALE` units.
    ///
    /// Together with [`SCALE`](Self::SCALE) this is the full decimal:
    /// `Money` 12.34 has units `1234`.
    #[inline]
    pub fn units(&self) -> &BigInt {
        &self.units
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.units.is_zero()
    }

    /// Check if value is not zero.
    #[inline]
    pub fn is_not_zero(&self) -> bool {
        !self.is_zero()
    }

    /// Check if value is positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.units.sign() == Sign::Plus
    }

    /// Check if value is negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.units.sign() == Sign::Minus
    }

    /// Get absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        Self { units: self.units.abs() }
    }

    /// Whole-number part, truncated toward zero (no rounding).
    ///
    /// `100.49 -> 100.00`, `-0.99 -> 0.00`.
    pub fn trunc(&self) -> Self {
        let one = pow10(u64::from(S));
        Self { units: (&self.units / &one) * one }
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    // Sums and differences are exact at the finer of the two scales, then
    // rounded once into the receiver's scale.
    fn exact_add<const R: u32>(&self, rhs: &ScaledDecimal<R>) -> Self {
        let common = S.max(R);
        let lhs = &self.units * pow10(u64::from(common - S));
        let rhs = &rhs.units * pow10(u64::from(common - R));
        Self::from_scaled(lhs + rhs, u64::from(common))
    }

    fn exact_sub<const R: u32>(&self, rhs: &ScaledDecimal<R>) -> Self {
        let common = S.max(R);
        let lhs = &self.units * pow10(u64::from(common - S));
        let rhs = &rhs.units * pow10(u64::from(common - R));
        Self::from_scaled(lhs - rhs, u64::from(common))
    }

    // The exact product carries S + R fraction digits.
    fn exact_mul<const R: u32>(&self, rhs: &ScaledDecimal<R>) -> Self {
        Self::from_scaled(&self.units * &rhs.units, u64::from(S) + u64::from(R))
    }

    /// Division with round half-up of the exact quotient.
    ///
    /// The quotient is computed as an integer quotient and remainder at the
    /// receiver's scale and rounded once from the remainder, so no digit is
    /// lost before the half-up decision.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero.
    pub fn checked_div<const R: u32>(&self, rhs: &ScaledDecimal<R>) -> NumericResult<Self> {
        if rhs.is_zero() {
            tracing::debug!(dividend = %self, "rejected division by zero");
            return Err(NumericError::DivisionByZero);
        }

        // (a / 10^S) / (b / 10^R) = q / 10^S  =>  q = a * 10^R / b
        let numerator = &self.units * pow10(u64::from(R));
        Ok(Self { units: div_half_up(&numerator, &rhs.units) })
    }
}

// ============================================================================
// Exact Integer Helpers
// ============================================================================

#[inline]
fn pow10(exponent: u64) -> BigInt {
    Pow::pow(BigInt::from(10u8), exponent)
}

/// `numerator / denominator` rounded half-up (ties away from zero).
fn div_half_up(numerator: &BigInt, denominator: &BigInt) -> BigInt {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;

    if remainder.abs() * 2i32 < denominator.abs() {
        return quotient;
    }
    // A non-zero remainder means both signs are known
    if numerator.sign() == denominator.sign() {
        quotient + 1i32
    } else {
        quotient - 1i32
    }
}

/// Units at scale `to` for `units × 10^-from`, rounded half-up.
fn rescale_units(units: BigInt, from: u64, to: u32) -> BigInt {
    let to = u64::from(to);
    if from <= to {
        return units * pow10(to - from);
    }

    let places = from - to;
    // |units| < 2^bits, which is under half of 10^places once places > bits
    if places > units.bits() {
        return BigInt::zero();
    }
    div_half_up(&units, &pow10(places))
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<const S: u32> Default for ScaledDecimal<S> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<const S: u32> Neg for ScaledDecimal<S> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self { units: -self.units }
    }
}

impl<const S: u32> Neg for &ScaledDecimal<S> {
    type Output = ScaledDecimal<S>;

    #[inline]
    fn neg(self) -> Self::Output {
        ScaledDecimal { units: -&self.units }
    }
}

// Operators take any operand scale and answer in the receiver's scale.
// Every owned/borrowed pairing forwards to the same exact routine.
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $exact:ident) => {
        impl<const L: u32, const R: u32> $trait<&ScaledDecimal<R>> for &ScaledDecimal<L> {
            type Output = ScaledDecimal<L>;

            #[inline]
            fn $method(self, rhs: &ScaledDecimal<R>) -> Self::Output {
                self.$exact(rhs)
            }
        }

        impl<const L: u32, const R: u32> $trait<ScaledDecimal<R>> for &ScaledDecimal<L> {
            type Output = ScaledDecimal<L>;

            #[inline]
            fn $method(self, rhs: ScaledDecimal<R>) -> Self::Output {
                self.$exact(&rhs)
            }
        }

        impl<const L: u32, const R: u32> $trait<&ScaledDecimal<R>> for ScaledDecimal<L> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: &ScaledDecimal<R>) -> Self::Output {
                self.$exact(rhs)
            }
        }

        impl<const L: u32, const R: u32> $trait<ScaledDecimal<R>> for ScaledDecimal<L> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: ScaledDecimal<R>) -> Self::Output {
                self.$exact(&rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, exact_add);
impl_binary_op!(Sub, sub, exact_sub);
impl_binary_op!(Mul, mul, exact_mul);

// ============================================================================
// Conversions
// ============================================================================

impl<const S: u32> From<i32> for ScaledDecimal<S> {
    #[inline]
    fn from(value: i32) -> Self {
        Self::from_integer(i64::from(value))
    }
}

impl<const S: u32> From<i64> for ScaledDecimal<S> {
    #[inline]
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl<const S: u32> From<Decimal> for ScaledDecimal<S> {
    #[inline]
    fn from(value: Decimal) -> Self {
        Self::from_decimal(value)
    }
}

impl<const S: u32> TryFrom<f64> for ScaledDecimal<S> {
    type Error = NumericError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value)
    }
}

impl<const S: u32> TryFrom<f32> for ScaledDecimal<S> {
    type Error = NumericError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::from_f32(value)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl<const S: u32> fmt::Debug for ScaledDecimal<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match S {
            MONEY_SCALE => write!(f, "Money({self})"),
            QUANTITY_SCALE => write!(f, "Quantity({self})"),
            _ => write!(f, "ScaledDecimal<{}>({self})", S),
        }
    }
}

impl<const S: u32> fmt::Display for ScaledDecimal<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let digits = self.units.magnitude().to_string();
        let scale = S as usize;

        if scale == 0 {
            return write!(f, "{sign}{digits}");
        }

        let padded = format!("{digits:0>width$}", width = scale + 1);
        let (whole, fraction) = padded.split_at(padded.len() - scale);
        write!(f, "{sign}{whole}.{fraction}")
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl<const S: u32> FromStr for ScaledDecimal<S> {
    type Err = NumericError;

    /// Parse from decimal text, rounding half-up to `SCALE` digits.
    ///
    /// Accepts an optional sign, digits with an optional fraction, and an
    /// optional `e`/`E` exponent. Every digit takes part in the rounding.
    ///
    /// # Examples
    /// - "125.479" -> 125.48 (scale 2)
    /// - "-0.001" -> 0.00 (scale 2)
    /// - "1.5e2" -> 150.000 (scale 3)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (coefficient, scale) = parse_literal(s).ok_or_else(|| malformed(s))?;

        if coefficient.is_zero() {
            return Ok(Self::zero());
        }
        if let Ok(scale) = u64::try_from(scale) {
            return Ok(Self::from_scaled(coefficient, scale));
        }

        // Negative scale: the literal is a whole number times a power of ten.
        // Exponents that push the shift past the i32 range are refused.
        let shift = u64::from(S) + scale.unsigned_abs();
        if shift > u64::from(i32::MAX.unsigned_abs()) {
            return Err(malformed(s));
        }
        Ok(Self { units: coefficient * pow10(shift) })
    }
}

fn malformed(input: &str) -> NumericError {
    tracing::debug!(input, "rejected malformed decimal literal");
    NumericError::InvalidInput
}

/// Split `[+-]digits[.digits][(e|E)[+-]digits]` into an exact
/// `(coefficient, scale)` pair meaning `coefficient × 10^-scale`.
fn parse_literal(input: &str) -> Option<(BigInt, i64)> {
    let (number, exponent) = match input.split_once(['e', 'E']) {
        Some((number, exponent)) => (number, exponent.parse::<i32>().ok()?),
        None => (input, 0),
    };

    let (negative, unsigned) = match number.as_bytes().first() {
        Some(b'-') => (true, &number[1..]),
        Some(b'+') => (false, &number[1..]),
        _ => (false, number),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
        return None;
    }

    let digits = [whole, fraction].concat();
    let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10)?;
    let coefficient = if negative { -magnitude } else { magnitude };

    let scale = i64::try_from(fraction.len()).ok()? - i64::from(exponent);
    Some((coefficient, scale))
}

// ============================================================================
// Tests
// ============================================================================
