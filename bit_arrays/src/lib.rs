//! # bit_arrays
//!
//! A `no_std` compatible pair of bit containers with canonical byte
//! encodings:
//!
//! - [`BitList`] carries its own length by ending the content with a single
//!   `1` sentinel bit.
//! - [`BitVector`] has an externally declared length and must keep every
//!   padding bit clear.
//!
//! ```rust
//! use bit_arrays::{BitArray, BitList, BitVector};
//!
//! // Self-delimiting: the length comes from the bytes.
//! let mut seen = BitList::from_bitfield(&[0b0000_0101], 4).unwrap();
//! assert_eq!(seen.serialize(), vec![0b0001_0101]);
//!
//! let other = BitList::deserialize(&[0b0001_0010]).unwrap();
//! assert!(!seen.overlaps(&other).unwrap());
//! seen.or(&other).unwrap();
//! assert_eq!(seen.count_ones(), 3);
//!
//! // Fixed length: the caller supplies it next to the bytes.
//! let committee = BitVector::from_bitfield(&[0xFF, 0x03], 10).unwrap();
//! assert_eq!(committee.count_ones(), 10);
//! assert!(BitVector::from_bitfield(&[0xFF, 0x04], 10).is_err());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub use error::{BitArrayError, Result};

pub mod bit_ops;

mod array;
pub use array::{BitArray, Bits};

pub mod list;
pub use list::BitList;

pub mod vector;
pub use vector::BitVector;

pub mod kind;
pub use kind::{AnyBitArray, BitArrayKind};
