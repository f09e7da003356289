// Bit `i` lives at `(bytes[i >> 3] >> (i & 7)) & 1`. None of these check
// bounds; the containers do that before calling in.

/// Returns the index of the highest set bit in `byte`.
///
/// A zero byte has no set bit and yields 0; callers reject zero bytes
/// before asking.
#[inline]
pub fn leftmost_set_bit(byte: u8) -> usize {
    debug_assert_ne!(byte, 0, "zero byte has no set bit");
    byte.checked_ilog2().unwrap_or(0) as usize
}

#[inline]
pub fn read_bit(bytes: &[u8], index: usize) -> bool {
    (bytes[index >> 3] >> (index & 7)) & 1 == 1
}

#[inline]
pub fn write_bit(bytes: &mut [u8], index: usize, value: bool) {
    let bit = 1u8 << (index & 7);
    if value {
        bytes[index >> 3] |= bit;
    } else {
        bytes[index >> 3] &= !bit;
    }
}

/// Number of bytes needed to hold `bit_len` bits.
#[inline]
pub const fn bytes_for_bits(bit_len: usize) -> usize {
    bit_len.div_ceil(8)
}

/// Mask of the bits of byte `byte_index` that fall below `bit_len`.
#[inline]
pub fn content_mask(bit_len: usize, byte_index: usize) -> u8 {
    let start = byte_index * 8;
    if bit_len >= start + 8 {
        0xFF
    } else if bit_len <= start {
        0
    } else {
        0xFF >> (8 - (bit_len - start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leftmost_bit_of_every_power() {
        for i in 0..8 {
            assert_eq!(leftmost_set_bit(1 << i), i);
            assert_eq!(leftmost_set_bit(((1u16 << (i + 1)) - 1) as u8), i);
        }
        assert_eq!(leftmost_set_bit(0x81), 7);
    }

    #[test]
    fn read_write_roundtrip() {
        let mut buf = [0u8; 3];
        write_bit(&mut buf, 0, true);
        write_bit(&mut buf, 9, true);
        write_bit(&mut buf, 23, true);
        assert_eq!(buf, [0x01, 0x02, 0x80]);
        assert!(read_bit(&buf, 9));
        assert!(!read_bit(&buf, 10));

        write_bit(&mut buf, 9, false);
        assert_eq!(buf, [0x01, 0x00, 0x80]);
    }

    #[test]
    fn content_mask_edges() {
        assert_eq!(content_mask(0, 0), 0x00);
        assert_eq!(content_mask(1, 0), 0x01);
        assert_eq!(content_mask(8, 0), 0xFF);
        assert_eq!(content_mask(8, 1), 0x00);
        assert_eq!(content_mask(11, 1), 0x07);
        assert_eq!(content_mask(20, 0), 0xFF);
    }
}
