//! Tagged union over both containers, for APIs that accept either kind at
//! runtime.

use crate::array::BitArray;
use crate::error::Result;
use crate::{BitList, BitVector};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BitArrayKind {
    List,
    Vector,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AnyBitArray {
    List(BitList),
    Vector(BitVector),
}

impl AnyBitArray {
    pub fn kind(&self) -> BitArrayKind {
        match self {
            AnyBitArray::List(_) => BitArrayKind::List,
            AnyBitArray::Vector(_) => BitArrayKind::Vector,
        }
    }

    pub fn is_list(&self) -> bool {
        self.kind() == BitArrayKind::List
    }

    pub fn is_vector(&self) -> bool {
        self.kind() == BitArrayKind::Vector
    }

    pub fn as_list(&self) -> Option<&BitList> {
        match self {
            AnyBitArray::List(list) => Some(list),
            AnyBitArray::Vector(_) => None,
        }
    }

    pub fn as_vector(&self) -> Option<&BitVector> {
        match self {
            AnyBitArray::Vector(vector) => Some(vector),
            AnyBitArray::List(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            AnyBitArray::List(list) => list.len(),
            AnyBitArray::Vector(vector) => vector.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Result<bool> {
        match self {
            AnyBitArray::List(list) => list.get(index),
            AnyBitArray::Vector(vector) => vector.get(index),
        }
    }

    pub fn count_ones(&self) -> usize {
        match self {
            AnyBitArray::List(list) => list.count_ones(),
            AnyBitArray::Vector(vector) => vector.count_ones(),
        }
    }

    /// The content bits without sentinel, `ceil(len / 8)` bytes.
    pub fn to_bitfield(&self) -> Vec<u8> {
        match self {
            AnyBitArray::List(list) => list.to_bitfield(),
            AnyBitArray::Vector(vector) => vector.to_bitfield(),
        }
    }
}

impl From<BitList> for AnyBitArray {
    fn from(list: BitList) -> Self {
        AnyBitArray::List(list)
    }
}

impl From<BitVector> for AnyBitArray {
    fn from(vector: BitVector) -> Self {
        AnyBitArray::Vector(vector)
    }
}
