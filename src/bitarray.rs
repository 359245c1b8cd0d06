//! BitArray - fixed-size bit array packed into bytes.
//!
//! # Design
//!
//! - Uses `Vec<u8>` for storage, `ceil(size / 8)` bytes, allocated once
//! - Bit indexing: byte_idx = bit_idx / 8, bit_offset = bit_idx % 8
//! - Bit 0 of every byte is its least significant bit (value 1)
//! - Every indexed access is bounds checked and returns [`Result`]
//! - Padding bits of the last byte (indices `>= size`) are always zero
//!
//! The byte buffer is only exposed by copy: [`BitArray::dump`] hands out an
//! owned `Vec<u8>` and [`BitArray::load`] copies the caller's slice in.
//!
//! # Examples
//!
//! ```
//! use barray::BitArray;
//!
//! let mut ba = BitArray::new(10);
//! ba.set(2)?;
//! ba.set(9)?;
//! assert_eq!(ba.set_size(), 2);
//! assert_eq!(ba.dump(), vec![4, 2]);
//! # Ok::<(), barray::BarrayError>(())
//! ```

use crate::error::{BarrayError, Result};
use crate::snapshot::BitArraySnapshot;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FusedIterator;

/// Number of bits per storage byte
pub const BITS_PER_BYTE: usize = 8;

/// Get byte index from bit position
#[inline(always)]
const fn get_byte_idx(bit_pos: usize) -> usize {
    bit_pos >> 3 // bit_pos / 8
}

/// Get bit index within byte from bit position
#[inline(always)]
const fn get_bit_idx(bit_pos: usize) -> usize {
    bit_pos & 7 // bit_pos % 8
}

/// Single-bit mask for a bit position within its byte
#[inline(always)]
const fn bit_mask(bit_pos: usize) -> u8 {
    1 << get_bit_idx(bit_pos)
}

/// Number of bytes needed to hold `size` bits.
///
/// ```
/// assert_eq!(barray::byte_size_for(0), 0);
/// assert_eq!(barray::byte_size_for(8), 1);
/// assert_eq!(barray::byte_size_for(10), 2);
/// ```
#[inline]
pub const fn byte_size_for(size: usize) -> usize {
    size.div_ceil(BITS_PER_BYTE)
}

/// Mask of the bits in the last byte that lie below `size`.
#[inline]
pub(crate) const fn last_byte_mask(size: usize) -> u8 {
    match get_bit_idx(size) {
        0 => u8::MAX,
        used => (1u8 << used) - 1,
    }
}

/// Fixed-size bit array stored in packed bytes.
///
/// The logical capacity is set at construction and never changes.
/// All bit indices are 0-based.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BitArraySnapshot", into = "BitArraySnapshot")]
pub struct BitArray {
    /// Storage bytes, always `byte_size_for(size)` long
    bytes: Vec<u8>,
    /// Logical number of bits
    size: usize,
}

impl BitArray {
    /// Create a new BitArray with `size` bits, all initialized to 0.
    ///
    /// A size of 0 is allowed and yields an empty buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use barray::BitArray;
    ///
    /// let ba = BitArray::new(10);
    /// assert_eq!(ba.size(), 10);
    /// assert_eq!(ba.byte_size(), 2);
    /// assert_eq!(ba.set_size(), 0);
    /// ```
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![0; byte_size_for(size)],
            size,
        }
    }

    /// Create a BitArray with `size` bits and load `data` into it.
    ///
    /// # Errors
    ///
    /// Returns [`BarrayError::LossyOperation`] if `data` is longer than
    /// `byte_size_for(size)`.
    pub fn from_bytes(size: usize, data: &[u8]) -> Result<Self> {
        let mut ba = Self::new(size);
        ba.load(data)?;
        Ok(ba)
    }

    /// Build a BitArray from parts that already satisfy the buffer invariants.
    pub(crate) fn from_raw_parts(size: usize, bytes: Vec<u8>) -> Self {
        debug_assert_eq!(bytes.len(), byte_size_for(size));
        debug_assert_eq!(
            bytes.last().map_or(0, |&b| b & !last_byte_mask(size)),
            0
        );
        Self { bytes, size }
    }

    #[inline]
    fn ensure_position(&self, position: usize) -> Result<()> {
        if position >= self.size {
            trace!("Rejected position {} (size {})", position, self.size);
            return Err(BarrayError::InvalidPosition {
                position,
                size: self.size,
            });
        }
        Ok(())
    }

    /// Read a bit whose position has already been validated.
    #[inline(always)]
    fn read_bit(&self, position: usize) -> u8 {
        (self.bytes[get_byte_idx(position)] >> get_bit_idx(position)) & 1
    }

    // =========================================================================
    // Single Bit Operations
    // =========================================================================

    /// Get bit at `position` (returns 0 or 1).
    ///
    /// # Errors
    ///
    /// Returns [`BarrayError::InvalidPosition`] if `position >= size`.
    #[inline]
    pub fn get(&self, position: usize) -> Result<u8> {
        self.ensure_position(position)?;
        Ok(self.read_bit(position))
    }

    /// Check whether the bit at `position` is 1.
    ///
    /// # Errors
    ///
    /// Returns [`BarrayError::InvalidPosition`] if `position >= size`.
    #[inline]
    pub fn is_set(&self, position: usize) -> Result<bool> {
        Ok(self.get(position)? != 0)
    }

    /// Set bit at `position` to 1.
    ///
    /// # Errors
    ///
    /// Returns [`BarrayError::InvalidPosition`] if `position >= size`; the
    /// buffer is left unmodified.
    #[inline]
    pub fn set(&mut self, position: usize) -> Result<()> {
        self.ensure_position(position)?;
        self.bytes[get_byte_idx(position)] |= bit_mask(position);
        Ok(())
    }

    /// Clear bit at `position` (set to 0).
    ///
    /// # Errors
    ///
    /// Returns [`BarrayError::InvalidPosition`] if `position >= size`; the
    /// buffer is left unmodified.
    #[inline]
    pub fn unset(&mut self, position: usize) -> Result<()> {
        self.ensure_position(position)?;
        self.bytes[get_byte_idx(position)] &= !bit_mask(position);
        Ok(())
    }

    /// Toggle bit at `position` (0 -> 1, 1 -> 0).
    ///
    /// # Errors
    ///
    /// Returns [`BarrayError::InvalidPosition`] if `position >= size`; the
    /// buffer is left unmodified.
    #[inline]
    pub fn toggle(&mut self, position: usize) -> Result<()> {
        self.ensure_position(position)?;
        self.bytes[get_byte_idx(position)] ^= bit_mask(position);
        Ok(())
    }

    /// Assign bit at `position` to `value`.
    #[inline]
    pub fn assign(&mut self, position: usize, value: bool) -> Result<()> {
        if value {
            self.set(position)
        } else {
            self.unset(position)
        }
    }

    // =========================================================================
    // Bulk Operations
    // =========================================================================

    /// Clear all bits to 0.
    pub fn reset(&mut self) {
        self.bytes.fill(0);
        debug!("Reset bit array of {} bits", self.size);
    }

    /// Return an owned copy of the packed byte buffer.
    ///
    /// The result is always exactly [`byte_size`](Self::byte_size) bytes long.
    pub fn dump(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Replace the buffer with a copy of `data`, zero-extended to
    /// [`byte_size`](Self::byte_size) bytes.
    ///
    /// Bits of the last byte that lie beyond `size` are not addressable and
    /// are cleared.
    ///
    /// # Errors
    ///
    /// Returns [`BarrayError::LossyOperation`] if `data` is longer than
    /// `byte_size`. The existing buffer is left unmodified.
    ///
    /// # Examples
    ///
    /// ```
    /// use barray::{BarrayError, BitArray};
    ///
    /// let mut ba = BitArray::new(10);
    /// ba.load(&[0b1010])?;
    /// assert_eq!(ba.set_positions(), vec![1, 3]);
    ///
    /// let err = BitArray::new(3).load(&[0, 0]).unwrap_err();
    /// assert!(matches!(err, BarrayError::LossyOperation { len: 2, byte_size: 1 }));
    /// # Ok::<(), BarrayError>(())
    /// ```
    pub fn load(&mut self, data: &[u8]) -> Result<()> {
        let byte_size = self.byte_size();
        if data.len() > byte_size {
            return Err(BarrayError::LossyOperation {
                len: data.len(),
                byte_size,
            });
        }

        self.bytes[..data.len()].copy_from_slice(data);
        self.bytes[data.len()..].fill(0);

        let mut cleared = 0;
        if let Some(last) = self.bytes.last_mut() {
            let mask = last_byte_mask(self.size);
            cleared = (*last & !mask).count_ones();
            *last &= mask;
        }

        debug!(
            "Loaded {} of {} bytes ({} padding bits cleared)",
            data.len(),
            byte_size,
            cleared
        );
        Ok(())
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Lazily iterate over all bit values (0 or 1), index 0 first.
    ///
    /// Each call starts a fresh traversal from index 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use barray::BitArray;
    ///
    /// let mut ba = BitArray::new(5);
    /// ba.set(1)?;
    /// ba.set(3)?;
    /// assert_eq!(ba.each_bit().collect::<Vec<_>>(), vec![0, 1, 0, 1, 0]);
    /// # Ok::<(), barray::BarrayError>(())
    /// ```
    pub fn each_bit(&self) -> Bits<'_> {
        Bits {
            array: self,
            front: 0,
            back: self.size,
        }
    }

    /// Get indices of all set bits, in ascending order.
    pub fn set_positions(&self) -> Vec<usize> {
        let mut positions = Vec::with_capacity(self.set_size());
        for (byte_idx, &byte) in self.bytes.iter().enumerate() {
            if byte == 0 {
                continue;
            }
            let base = byte_idx * BITS_PER_BYTE;
            for bit_idx in 0..BITS_PER_BYTE {
                if (byte >> bit_idx) & 1 == 1 {
                    positions.push(base + bit_idx);
                }
            }
        }
        positions
    }

    // =========================================================================
    // Counting Operations
    // =========================================================================

    /// Count number of set bits (population count over the buffer).
    #[inline]
    pub fn set_size(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Count number of cleared bits.
    #[inline]
    pub fn unset_size(&self) -> usize {
        self.size - self.set_size()
    }

    // =========================================================================
    // Information
    // =========================================================================

    /// Get logical number of bits.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get number of bytes in storage.
    #[inline]
    pub fn byte_size(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the array holds no bits at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

impl fmt::Display for BitArray {
    /// Render bits as `0`/`1` characters, index 0 first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self {
            f.write_str(if bit == 1 { "1" } else { "0" })?;
        }
        Ok(())
    }
}

// =============================================================================
// Bit Iterator
// =============================================================================

/// Lazy iterator over the bit values of a [`BitArray`].
///
/// Created by [`BitArray::each_bit`].
#[derive(Clone, Debug)]
pub struct Bits<'a> {
    array: &'a BitArray,
    front: usize,
    back: usize,
}

impl Iterator for Bits<'_> {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<u8> {
        if self.front >= self.back {
            return None;
        }
        let bit = self.array.read_bit(self.front);
        self.front += 1;
        Some(bit)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Bits<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<u8> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.array.read_bit(self.back))
    }
}

impl ExactSizeIterator for Bits<'_> {}

impl FusedIterator for Bits<'_> {}

impl<'a> IntoIterator for &'a BitArray {
    type Item = u8;
    type IntoIter = Bits<'a>;

    fn into_iter(self) -> Bits<'a> {
        self.each_bit()
    }
}
