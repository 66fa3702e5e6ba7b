//! Packed bit-vector type used for codes and encoded text.
//!
//! Shannon-Fano codes and the encoded output are logically bit sequences.
//! `BitVec` stores them packed MSB-first (most significant bit of each byte
//! first), which keeps code tables hashable and encoded texts compact.
//!
//! # Padding Rule
//!
//! Unused bits in the final byte are always zero. This keeps equality and
//! hashing canonical: two `BitVec`s with the same bits compare equal
//! regardless of how they were built.
//!
//! # Example
//! ```
//! use shannon_fano_core::bits::BitVec;
//!
//! let mut bits = BitVec::new();
//! bits.push(true);
//! bits.push(false);
//! bits.push(true);
//! assert_eq!(bits.len(), 3);
//! assert_eq!(bits.to_string(), "101");
//! ```

use std::fmt;

/// A growable sequence of bits, packed MSB-first into bytes.
///
/// # Invariants
/// - `len <= bytes.len() * 8`
/// - All bits past `len` in the final byte are zero
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitVec {
    /// Packed storage (MSB of bytes[0] is bit 0)
    bytes: Vec<u8>,
    /// Number of valid bits
    len: usize,
}

impl BitVec {
    /// Create an empty bit vector.
    pub fn new() -> Self {
        Self {
            bytes: Vec::new(),
            len: 0,
        }
    }

    /// Number of bits stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no bits are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append a single bit.
    pub fn push(&mut self, bit: bool) {
        let byte_idx = self.len / 8;
        if byte_idx == self.bytes.len() {
            self.bytes.push(0);
        }
        if bit {
            self.bytes[byte_idx] |= 1 << (7 - self.len % 8);
        }
        self.len += 1;
    }

    /// Get the bit at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        let byte = self.bytes[index / 8];
        Some((byte >> (7 - index % 8)) & 1 == 1)
    }

    /// Append all bits of `other` to `self`.
    ///
    /// Codes are short, so this goes bit by bit rather than splicing bytes.
    pub fn extend_from(&mut self, other: &BitVec) {
        for bit in other.iter() {
            self.push(bit);
        }
    }

    /// Return a copy of `self` with `bit` appended.
    ///
    /// Used to derive the two child prefixes during code construction
    /// without mutating the parent prefix.
    pub fn child(&self, bit: bool) -> BitVec {
        let mut next = self.clone();
        next.push(bit);
        next
    }

    /// Iterate over the bits in order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| (self.bytes[i / 8] >> (7 - i % 8)) & 1 == 1)
    }
}

impl fmt::Display for BitVec {
    /// Renders as a string of '0'/'1' characters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromIterator<bool> for BitVec {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut bits = BitVec::new();
        for bit in iter {
            bits.push(bit);
        }
        bits
    }
}
