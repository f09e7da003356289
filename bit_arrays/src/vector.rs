//! Fixed-length bit vector.
//!
//! The length travels out of band; the encoding is exactly
//! `ceil(len / 8)` bytes with every padding bit cleared.
//!
//! ```rust
//! use bit_arrays::{BitArray, BitVector};
//!
//! let mut votes = BitVector::from_bitfield(&[0x03], 2).unwrap();
//! assert_eq!(votes.count_ones(), 2);
//!
//! votes.set(1, false).unwrap();
//! assert_eq!(votes.to_bitfield(), vec![0x01]);
//! ```

use crate::array::{BitArray, Sealed};
use crate::bit_ops;
use crate::error::{BitArrayError, Result};

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// Checks that `bytes` is a valid encoding of a `bit_len`-bit vector.
///
/// # Errors
///
/// [`BitArrayError::SizeMismatch`] unless `bytes` is `ceil(bit_len / 8)`
/// long, and [`BitArrayError::PaddingBitsSet`] if any bit at or beyond
/// `bit_len` is set in the last byte.
pub fn validate_length(bytes: &[u8], bit_len: usize) -> Result<()> {
    let expected = bit_ops::bytes_for_bits(bit_len);
    if bytes.len() != expected {
        log::debug!(
            "Bit vector has {} bytes, expected {expected} for {bit_len} bits",
            bytes.len()
        );
        return Err(BitArrayError::SizeMismatch {
            expected,
            found: bytes.len(),
        });
    }

    if bit_len % 8 != 0 {
        let last = expected - 1;
        let last_byte = bytes[last];
        if last_byte & !bit_ops::content_mask(bit_len, last) != 0 {
            log::debug!("Bit vector last byte {last_byte:#04x} has padding set past {bit_len} bits");
            return Err(BitArrayError::PaddingBitsSet { bit_len, last_byte });
        }
    }

    Ok(())
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitVector {
    bytes: Vec<u8>,
    bit_len: usize,
}

impl BitVector {
    /// Creates a vector of `bit_len` zero bits.
    pub fn with_len(bit_len: usize) -> Self {
        Self {
            bytes: vec![0u8; Self::byte_len_for(bit_len)],
            bit_len,
        }
    }

    /// Wraps an already-encoded buffer without validating it.
    pub fn from_raw_parts(bytes: Vec<u8>, bit_len: usize) -> Self {
        debug_assert_eq!(bytes.len(), Self::byte_len_for(bit_len));
        Self { bytes, bit_len }
    }

    /// Validates `bitfield` against `bit_len` and copies it.
    pub fn from_bitfield(bitfield: &[u8], bit_len: usize) -> Result<Self> {
        validate_length(bitfield, bit_len)?;
        log::trace!("Decoded bit vector of {bit_len} bits");
        Ok(Self {
            bytes: bitfield.to_vec(),
            bit_len,
        })
    }

    /// Same as [`BitVector::from_bitfield`].
    #[inline]
    pub fn deserialize(bytes: &[u8], bit_len: usize) -> Result<Self> {
        Self::from_bitfield(bytes, bit_len)
    }

    pub fn to_bitfield(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Same as [`BitVector::to_bitfield`].
    #[inline]
    pub fn serialize(&self) -> Vec<u8> {
        self.to_bitfield()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Shifts every bit up by one and stores `value` at index 0.
    ///
    /// The length does not change: the highest bit falls off the end.
    ///
    /// ```rust
    /// use bit_arrays::{BitArray, BitVector};
    ///
    /// let mut v = BitVector::from_bitfield(&[0x01], 8).unwrap();
    /// v.push(true);
    /// assert_eq!(v.as_bytes(), &[0x03]);
    /// ```
    pub fn push(&mut self, value: bool) {
        let mut carry = value as u8;
        for byte in self.bytes.iter_mut() {
            let old = *byte;
            *byte = (old << 1) | carry;
            carry = old >> 7;
        }

        if self.bit_len % 8 != 0 {
            if let Some(last) = self.bytes.len().checked_sub(1) {
                self.bytes[last] &= bit_ops::content_mask(self.bit_len, last);
            }
        }
    }
}

impl Sealed for BitVector {
    fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

impl BitArray for BitVector {
    fn len(&self) -> usize {
        self.bit_len
    }

    fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn byte_len_for(bit_len: usize) -> usize {
        bit_ops::bytes_for_bits(bit_len)
    }
}
