// ============================================================================
// Persistence Codec
// Byte encoding and optional serde support for scaled decimals
// ============================================================================
//
// Layout: a little-endian u32 scale header, then the unit count as a
// big-endian two's-complement integer of whatever width it needs. Bytes
// written by one scale are rejected when decoded as another. Streams put a
// little-endian u64 length before each encoded value.

use super::errors::{NumericError, NumericResult};
use super::scaled_decimal::ScaledDecimal;
use crate::config::{LENGTH_PREFIX_LEN, SCALE_HEADER_LEN};
use num_bigint::BigInt;
use std::io::{self, Read, Write};

impl<const S: u32> ScaledDecimal<S> {
    /// Encode into the persisted form.
    pub fn to_bytes(&self) -> Vec<u8> {
        let body = self.units().to_signed_bytes_be();
        let mut bytes = Vec::with_capacity(SCALE_HEADER_LEN + body.len());
        bytes.extend_from_slice(&S.to_le_bytes());
        bytes.extend_from_slice(&body);
        bytes
    }

    /// Decode from the persisted form produced by [`to_bytes`](Self::to_bytes).
    ///
    /// # Errors
    /// Returns `InvalidEncoding` if `bytes` has no unit count after the scale
    /// header or was written by a type with a different scale.
    pub fn from_bytes(bytes: &[u8]) -> NumericResult<Self> {
        if bytes.len() <= SCALE_HEADER_LEN {
            tracing::debug!(len = bytes.len(), "rejected truncated encoded value");
            return Err(NumericError::InvalidEncoding);
        }

        let (header, body) = bytes.split_at(SCALE_HEADER_LEN);
        let mut scale = [0u8; SCALE_HEADER_LEN];
        scale.copy_from_slice(header);
        let scale = u32::from_le_bytes(scale);

        if scale != S {
            tracing::debug!(expected = S, found = scale, "rejected encoded value of foreign scale");
            return Err(NumericError::InvalidEncoding);
        }

        Ok(Self::from_scaled(BigInt::from_signed_bytes_be(body), u64::from(S)))
    }

    /// Write the length-prefixed persisted form to a byte stream.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let bytes = self.to_bytes();
        writer.write_all(&(bytes.len() as u64).to_le_bytes())?;
        writer.write_all(&bytes)
    }

    /// Read one length-prefixed value from a byte stream.
    ///
    /// Malformed bytes surface as [`io::ErrorKind::InvalidData`] wrapping the
    /// [`NumericError`]; a stream that ends early is `UnexpectedEof`.
    pub fn read_from<R: Read>(reader: &mut R) -> io::Result<Self> {
        let mut prefix = [0u8; LENGTH_PREFIX_LEN];
        reader.read_exact(&mut prefix)?;
        let len = u64::from_le_bytes(prefix);

        // Grow with the data actually present instead of trusting the prefix
        let mut bytes = Vec::new();
        reader.take(len).read_to_end(&mut bytes)?;
        if bytes.len() as u64 != len {
            return Err(io::Error::from(io::ErrorKind::UnexpectedEof));
        }

        Self::from_bytes(&bytes).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }
}

// ============================================================================
// Serde (string form)
// ============================================================================

#[cfg(feature = "serde")]
mod serde_support {
    use super::ScaledDecimal;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    impl<const P: u32> Serialize for ScaledDecimal<P> {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(&self.to_string())
        }
    }

    impl<'de, const P: u32> Deserialize<'de> for ScaledDecimal<P> {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let text = String::deserialize(deserializer)?;
            text.parse().map_err(de::Error::custom)
        }
    }
}
