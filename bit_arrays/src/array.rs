//! Operations shared by [`BitList`](crate::BitList) and
//! [`BitVector`](crate::BitVector).
//!
//! Both containers own a byte buffer plus a bit length. They differ only in
//! how the trailing byte is laid out, so everything that works on the
//! semantic bits lives here as provided methods of [`BitArray`].
//!
//! # Equality and padding
//!
//! `==` compares the bit length and then every raw byte, padding included,
//! while [`BitArray::overlaps`] ignores every bit at or beyond the bit
//! length. Two containers holding the same semantic bits but different
//! incidental padding (only reachable through `from_raw_parts`) are unequal
//! yet overlap-consistent. This asymmetry is intentional.

use crate::bit_ops;
use crate::error::{BitArrayError, Result};

mod sealed {
    pub trait Sealed {
        /// Whole backing buffer, padding and sentinel included.
        fn bytes_mut(&mut self) -> &mut [u8];
    }
}

pub(crate) use sealed::Sealed;

#[inline]
fn check_index(index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(BitArrayError::IndexOutOfRange { index, len });
    }
    Ok(())
}

#[inline]
fn check_lengths(left: usize, right: usize) -> Result<usize> {
    if left != right {
        return Err(BitArrayError::LengthMismatch { left, right });
    }
    Ok(left)
}

/// A bit-indexed container with a byte-aligned backing buffer.
///
/// Binary operations take `&Self`, so a list can never be combined with a
/// vector.
pub trait BitArray: Sealed + Clone + PartialEq {
    /// Number of semantic bits, excluding any sentinel and padding.
    fn len(&self) -> usize;

    /// The backing buffer exactly as it would be encoded.
    fn as_bytes(&self) -> &[u8];

    /// Buffer size this encoding requires for `bit_len` bits.
    fn byte_len_for(bit_len: usize) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads bit `index`.
    ///
    /// # Errors
    ///
    /// [`BitArrayError::IndexOutOfRange`] if `index >= len()`.
    fn get(&self, index: usize) -> Result<bool> {
        check_index(index, self.len())?;
        Ok(bit_ops::read_bit(self.as_bytes(), index))
    }

    /// Writes bit `index`.
    ///
    /// # Errors
    ///
    /// [`BitArrayError::IndexOutOfRange`] if `index >= len()`; the buffer is
    /// left untouched.
    fn set(&mut self, index: usize, value: bool) -> Result<()> {
        check_index(index, self.len())?;
        bit_ops::write_bit(self.bytes_mut(), index, value);
        Ok(())
    }

    /// Counts the set bits among the first `len()` bits.
    fn count_ones(&self) -> usize {
        let len = self.len();
        self.as_bytes()
            .iter()
            .enumerate()
            .map(|(k, byte)| (byte & bit_ops::content_mask(len, k)).count_ones() as usize)
            .sum()
    }

    /// In-place bitwise OR over the whole backing buffer.
    ///
    /// # Errors
    ///
    /// [`BitArrayError::LengthMismatch`] if the bit lengths differ.
    fn or(&mut self, other: &Self) -> Result<&mut Self> {
        check_lengths(self.len(), other.len())?;
        for (a, b) in self.bytes_mut().iter_mut().zip(other.as_bytes()) {
            *a |= *b;
        }
        Ok(self)
    }

    /// In-place bitwise AND over the whole backing buffer.
    ///
    /// # Errors
    ///
    /// [`BitArrayError::LengthMismatch`] if the bit lengths differ.
    fn and(&mut self, other: &Self) -> Result<&mut Self> {
        check_lengths(self.len(), other.len())?;
        for (a, b) in self.bytes_mut().iter_mut().zip(other.as_bytes()) {
            *a &= *b;
        }
        Ok(self)
    }

    /// Whether some bit below `len()` is set in both containers.
    ///
    /// Sentinel and padding bits are masked off, and empty containers never
    /// overlap.
    ///
    /// # Errors
    ///
    /// [`BitArrayError::LengthMismatch`] if the bit lengths differ.
    fn overlaps(&self, other: &Self) -> Result<bool> {
        let len = check_lengths(self.len(), other.len())?;
        if len == 0 {
            return Ok(false);
        }
        let overlap = self
            .as_bytes()
            .iter()
            .zip(other.as_bytes())
            .enumerate()
            .any(|(k, (a, b))| (!(a ^ b) & b & bit_ops::content_mask(len, k)) != 0);
        Ok(overlap)
    }

    fn iter(&self) -> Bits<'_> {
        Bits {
            bytes: self.as_bytes(),
            index: 0,
            len: self.len(),
        }
    }
}

/// Iterator over the semantic bits of a [`BitArray`], lowest index first.
#[derive(Clone, Debug)]
pub struct Bits<'a> {
    bytes: &'a [u8],
    index: usize,
    len: usize,
}

impl Iterator for Bits<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.len {
            None
        } else {
            let bit = bit_ops::read_bit(self.bytes, self.index);
            self.index += 1;
            Some(bit)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Bits<'_> {}

#[cfg(test)]
mod tests {
    use crate::{BitArray, BitArrayError, BitList, BitVector};

    #[test]
    fn count_ones_skips_sentinel() {
        let list = BitList::deserialize(&[0xFF]).unwrap();
        assert_eq!(list.len(), 7);
        assert_eq!(list.count_ones(), 7);

        let list = BitList::deserialize(&[0xFF, 0x01]).unwrap();
        assert_eq!(list.count_ones(), 8);
    }

    #[test]
    fn count_ones_skips_dirty_padding() {
        let clean = BitVector::from_raw_parts(vec![0x05], 3);
        let dirty = BitVector::from_raw_parts(vec![0xF5], 3);
        assert_eq!(clean.count_ones(), 2);
        assert_eq!(dirty.count_ones(), 2);
    }

    #[test]
    fn or_and_in_place() -> Result<(), BitArrayError> {
        let mut a = BitVector::from_bitfield(&[0b0011], 4)?;
        let b = BitVector::from_bitfield(&[0b0110], 4)?;

        a.or(&b)?;
        assert_eq!(a.as_bytes(), &[0b0111]);

        a.and(&b)?.and(&b)?;
        assert_eq!(a.as_bytes(), &[0b0110]);

        Ok(())
    }

    #[test]
    fn list_or_keeps_sentinel() -> Result<(), BitArrayError> {
        let mut a = BitList::from_bitfield(&[0x01], 8)?;
        let b = BitList::from_bitfield(&[0x80], 8)?;
        a.or(&b)?;
        assert_eq!(a.serialize(), vec![0x81, 0x01]);
        assert_eq!(BitList::deserialize(&a.serialize())?, a);
        Ok(())
    }

    #[test]
    fn binary_ops_reject_length_mismatch() {
        let mut a = BitVector::with_len(4);
        let b = BitVector::with_len(5);
        let err = BitArrayError::LengthMismatch { left: 4, right: 5 };

        assert_eq!(a.or(&b).err(), Some(err.clone()));
        assert_eq!(a.and(&b).err(), Some(err.clone()));
        assert_eq!(a.overlaps(&b), Err(err));
    }

    #[test]
    fn overlaps_ignores_sentinel() -> Result<(), BitArrayError> {
        let a = BitList::deserialize(&[0x02])?;
        let b = BitList::deserialize(&[0x02])?;
        assert!(!a.overlaps(&b)?);

        // Sentinel alone in its own byte.
        let a = BitList::with_len(8);
        let b = BitList::with_len(8);
        assert!(!a.overlaps(&b)?);

        let a = BitList::deserialize(&[0x03])?;
        let b = BitList::deserialize(&[0x03])?;
        assert!(a.overlaps(&b)?);
        Ok(())
    }

    #[test]
    fn overlaps_ignores_padding() -> Result<(), BitArrayError> {
        let a = BitVector::from_raw_parts(vec![0xF1], 3);
        let b = BitVector::from_raw_parts(vec![0xF2], 3);
        assert!(!a.overlaps(&b)?);

        let c = BitVector::from_bitfield(&[0x02], 3)?;
        assert!(b.overlaps(&c)?);
        Ok(())
    }

    #[test]
    fn empty_never_overlaps() -> Result<(), BitArrayError> {
        let a = BitList::deserialize(&[0x01])?;
        assert!(!a.overlaps(&a.clone())?);

        let v = BitVector::from_raw_parts(vec![], 0);
        assert!(!v.overlaps(&v)?);
        Ok(())
    }

    #[test]
    fn equality_sees_padding() {
        let clean = BitVector::from_raw_parts(vec![0x01], 1);
        let dirty = BitVector::from_raw_parts(vec![0x81], 1);
        assert_eq!(clean.get(0), dirty.get(0));
        assert_ne!(clean, dirty);
    }

    #[test]
    fn iter_yields_semantic_bits() {
        let list = BitList::deserialize(&[0b1101]).unwrap();
        let bits: Vec<bool> = list.iter().collect();
        assert_eq!(bits, vec![true, false, true]);
        assert_eq!(list.iter().len(), 3);
    }
}
