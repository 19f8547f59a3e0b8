// ============================================================================
// Crate Configuration
// Compile-time scales and persisted-layout widths shared by every value type
// ============================================================================

/// Fractional digits carried by [`Money`](crate::numeric::Money).
pub const MONEY_SCALE: u32 = 2;

/// Fractional digits carried by [`Quantity`](crate::numeric::Quantity).
pub const QUANTITY_SCALE: u32 = 3;

/// Width in bytes of the little-endian scale header that opens `to_bytes` output.
pub const SCALE_HEADER_LEN: usize = 4;

/// Width in bytes of the little-endian length prefix `write_to` puts before each value.
pub const LENGTH_PREFIX_LEN: usize = 8;
