#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BitArrayError {
    #[cfg_attr(
        feature = "std",
        error("Index {index} is out of bounds for bit length {len}")
    )]
    IndexOutOfRange { index: usize, len: usize },

    #[cfg_attr(feature = "std", error("Bit length mismatch: {left} vs {right}"))]
    LengthMismatch { left: usize, right: usize },

    #[cfg_attr(
        feature = "std",
        error("Byte length mismatch: expected {expected}, found {found}")
    )]
    SizeMismatch { expected: usize, found: usize },

    #[cfg_attr(feature = "std", error("bit list encoding is empty"))]
    EmptyInput,

    #[cfg_attr(feature = "std", error("bit list encoding has a trailing zero byte"))]
    TrailingZeroByte,

    #[cfg_attr(
        feature = "std",
        error("Last byte {last_byte:#04x} has bits set beyond bit length {bit_len}")
    )]
    PaddingBitsSet { bit_len: usize, last_byte: u8 },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitArrayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitArrayError::IndexOutOfRange { index, len } => {
                write!(f, "Index {} is out of bounds for bit length {}", index, len)
            }
            BitArrayError::LengthMismatch { left, right } => {
                write!(f, "Bit length mismatch: {} vs {}", left, right)
            }
            BitArrayError::SizeMismatch { expected, found } => {
                write!(
                    f,
                    "Byte length mismatch: expected {}, found {}",
                    expected, found
                )
            }
            BitArrayError::EmptyInput => write!(f, "bit list encoding is empty"),
            BitArrayError::TrailingZeroByte => {
                write!(f, "bit list encoding has a trailing zero byte")
            }
            BitArrayError::PaddingBitsSet { bit_len, last_byte } => write!(
                f,
                "Last byte {:#04x} has bits set beyond bit length {}",
                last_byte, bit_len
            ),
        }
    }
}

pub type Result<T> = core::result::Result<T, BitArrayError>;
