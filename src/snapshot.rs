//! Snapshot support for saving and restoring bit arrays.
//!
//! A [`BitArraySnapshot`] is the plain-data form of a [`BitArray`]: its
//! logical size plus the packed bytes. It can be encoded as JSON or as
//! compact bincode, and every restore goes through validation so a corrupt
//! snapshot can never produce an array that breaks the buffer invariants.
//!
//! # Example
//!
//! ```
//! use barray::{BitArray, BitArraySnapshot};
//!
//! let mut ba = BitArray::new(10);
//! ba.set(2)?;
//! ba.set(9)?;
//!
//! let json = ba.to_snapshot().to_json()?;
//! let restored = BitArray::from_snapshot(&BitArraySnapshot::from_json(&json)?)?;
//! assert_eq!(restored, ba);
//! # Ok::<(), barray::BarrayError>(())
//! ```

use crate::bitarray::{byte_size_for, last_byte_mask, BitArray};
use crate::error::{BarrayError, Result};
use serde::{Deserialize, Serialize};

/// Serializable state of a [`BitArray`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitArraySnapshot {
    /// Logical number of bits
    pub size: usize,
    /// Packed bytes, bit 0 of each byte first
    pub bytes: Vec<u8>,
}

impl BitArraySnapshot {
    /// Check that the snapshot describes a valid bit array.
    ///
    /// The byte count must be exactly `ceil(size / 8)` and bits of the last
    /// byte at indices `>= size` must be zero.
    pub fn validate(&self) -> Result<()> {
        let expected = byte_size_for(self.size);
        if self.bytes.len() != expected {
            return Err(BarrayError::InvalidSnapshot(format!(
                "expected {} bytes for {} bits, got {}",
                expected,
                self.size,
                self.bytes.len()
            )));
        }

        if let Some(&last) = self.bytes.last() {
            let padding = last & !last_byte_mask(self.size);
            if padding != 0 {
                return Err(BarrayError::InvalidSnapshot(format!(
                    "padding bits set in last byte: {:#010b}",
                    padding
                )));
            }
        }

        Ok(())
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON string.
    ///
    /// Only the encoding is checked here; use [`BitArray::from_snapshot`] to
    /// validate the contents.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to binary (bincode).
    pub fn to_binary(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Deserialize from binary (bincode).
    pub fn from_binary(data: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(data)?)
    }
}

impl BitArray {
    /// Export the current state as a snapshot.
    pub fn to_snapshot(&self) -> BitArraySnapshot {
        BitArraySnapshot {
            size: self.size(),
            bytes: self.dump(),
        }
    }

    /// Restore a BitArray from a snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`BarrayError::InvalidSnapshot`] if the snapshot fails
    /// [`BitArraySnapshot::validate`].
    pub fn from_snapshot(snapshot: &BitArraySnapshot) -> Result<Self> {
        Self::try_from(snapshot.clone())
    }
}

impl TryFrom<BitArraySnapshot> for BitArray {
    type Error = BarrayError;

    fn try_from(snapshot: BitArraySnapshot) -> Result<Self> {
        snapshot.validate()?;
        Ok(BitArray::from_raw_parts(snapshot.size, snapshot.bytes))
    }
}

impl From<BitArray> for BitArraySnapshot {
    fn from(ba: BitArray) -> Self {
        ba.to_snapshot()
    }
}
