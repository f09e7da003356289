//! Self-delimiting bit list.
//!
//! The encoding stores the content bits followed by a single `1` sentinel
//! bit; everything above the sentinel is zero. The bit length is therefore
//! recoverable from the bytes alone.
//!
//! ```rust
//! use bit_arrays::{BitArray, BitList};
//!
//! let mut list = BitList::deserialize(&[0x02]).unwrap();
//! assert_eq!(list.len(), 1);
//! assert_eq!(list.get(0), Ok(false));
//!
//! list.set(0, true).unwrap();
//! assert_eq!(list.serialize(), vec![0x03]);
//! assert_eq!(list.to_bitfield(), vec![0x01]);
//! ```

use crate::array::{BitArray, Sealed};
use crate::bit_ops;
use crate::error::{BitArrayError, Result};

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// Derives the bit length of an encoded bit list.
///
/// # Errors
///
/// [`BitArrayError::EmptyInput`] for an empty slice and
/// [`BitArrayError::TrailingZeroByte`] when the last byte carries no
/// sentinel.
pub fn bit_length(bytes: &[u8]) -> Result<usize> {
    let Some(&last) = bytes.last() else {
        log::debug!("Rejecting empty bit list encoding");
        return Err(BitArrayError::EmptyInput);
    };
    if last == 0 {
        log::debug!(
            "Rejecting bit list encoding of {} bytes with trailing zero byte",
            bytes.len()
        );
        return Err(BitArrayError::TrailingZeroByte);
    }
    Ok(((bytes.len() - 1) << 3) + bit_ops::leftmost_set_bit(last))
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitList {
    bytes: Vec<u8>,
    bit_len: usize,
}

impl BitList {
    /// Creates a list of `bit_len` zero bits.
    pub fn with_len(bit_len: usize) -> Self {
        let mut bytes = vec![0u8; Self::byte_len_for(bit_len)];
        bit_ops::write_bit(&mut bytes, bit_len, true);
        Self { bytes, bit_len }
    }

    /// Wraps an already-encoded buffer without validating it.
    ///
    /// `bytes` must be `ceil((bit_len + 1) / 8)` long with the sentinel at
    /// `bit_len`.
    pub fn from_raw_parts(bytes: Vec<u8>, bit_len: usize) -> Self {
        debug_assert_eq!(bytes.len(), Self::byte_len_for(bit_len));
        Self { bytes, bit_len }
    }

    /// Decodes a bit list, deriving its length from the sentinel.
    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        let bit_len = bit_length(bytes)?;
        log::trace!("Decoded bit list of {bit_len} bits");
        Ok(Self {
            bytes: bytes.to_vec(),
            bit_len,
        })
    }

    /// Encodes the list, sentinel included.
    pub fn serialize(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Builds a list from `bit_len` content bits packed without a sentinel.
    ///
    /// Bits of `bitfield` beyond `bit_len` are dropped so the result stays
    /// a canonical encoding.
    ///
    /// # Errors
    ///
    /// [`BitArrayError::SizeMismatch`] unless `bitfield` is exactly
    /// `ceil(bit_len / 8)` bytes long.
    pub fn from_bitfield(bitfield: &[u8], bit_len: usize) -> Result<Self> {
        let expected = bit_ops::bytes_for_bits(bit_len);
        if bitfield.len() != expected {
            log::debug!(
                "Bitfield of {} bytes cannot hold a {bit_len}-bit list",
                bitfield.len()
            );
            return Err(BitArrayError::SizeMismatch {
                expected,
                found: bitfield.len(),
            });
        }

        let mut bytes = Vec::with_capacity(Self::byte_len_for(bit_len));
        bytes.extend_from_slice(bitfield);
        if bit_len % 8 == 0 {
            bytes.push(0);
        } else {
            let last = bytes.len() - 1;
            bytes[last] &= bit_ops::content_mask(bit_len, last);
        }
        bit_ops::write_bit(&mut bytes, bit_len, true);

        Ok(Self { bytes, bit_len })
    }

    /// Returns the content bits as `ceil(len / 8)` bytes, sentinel stripped.
    pub fn to_bitfield(&self) -> Vec<u8> {
        let mut bitfield = self.bytes[..bit_ops::bytes_for_bits(self.bit_len)].to_vec();
        if let Some(last) = bitfield.len().checked_sub(1) {
            bitfield[last] &= bit_ops::content_mask(self.bit_len, last);
        }
        bitfield
    }
}

impl Sealed for BitList {
    fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

impl BitArray for BitList {
    fn len(&self) -> usize {
        self.bit_len
    }

    fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn byte_len_for(bit_len: usize) -> usize {
        bit_ops::bytes_for_bits(bit_len + 1)
    }
}
