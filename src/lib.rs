//! barray - fixed-size bit arrays packed into bytes
//!
//! barray provides a single data structure, [`BitArray`]: a bit array whose
//! capacity is fixed at construction and whose bits are packed eight to a
//! byte. It supports per-bit access, aggregate counting and whole-buffer
//! dump/load with an explicit rule against lossy loads.
//!
//! # Byte Layout
//!
//! Bit `i` lives in byte `i / 8` at bit position `i % 8`, where position 0 is
//! the least significant bit (value 1) and position 7 the most significant
//! (value 128). [`BitArray::dump`] always returns `ceil(size / 8)` bytes, and
//! bits of the last byte beyond `size` are always zero.
//!
//! # Examples
//!
//! ## Basic BitArray Usage
//!
//! ```
//! use barray::BitArray;
//!
//! let mut ba = BitArray::new(10);
//! ba.set(2)?;
//! ba.set(9)?;
//!
//! assert_eq!(ba.get(2)?, 1);
//! assert!(ba.is_set(9)?);
//! assert_eq!(ba.set_size(), 2);
//! assert_eq!(ba.unset_size(), 8);
//! assert_eq!(ba.dump(), vec![4, 2]);
//! # Ok::<(), barray::BarrayError>(())
//! ```
//!
//! ## Moving Bits Between Arrays
//!
//! ```
//! use barray::{BarrayError, BitArray};
//!
//! let mut small = BitArray::new(5);
//! small.set(1)?;
//! small.set(3)?;
//!
//! // A larger array accepts the smaller dump, zero-extending it.
//! let mut large = BitArray::new(10);
//! large.load(&small.dump())?;
//! assert_eq!(large.set_positions(), vec![1, 3]);
//!
//! // The other direction would drop data and is rejected.
//! let err = BitArray::new(3).load(&large.dump()).unwrap_err();
//! assert!(matches!(err, BarrayError::LossyOperation { .. }));
//! # Ok::<(), BarrayError>(())
//! ```
//!
//! # Errors
//!
//! Indexed accessors fail with [`BarrayError::InvalidPosition`] for positions
//! `>= size`, and [`BitArray::load`] fails with
//! [`BarrayError::LossyOperation`] when the data does not fit. A failed call
//! never modifies the array.
//!
//! # Concurrency
//!
//! `BitArray` has no interior mutability. It is `Send + Sync`, and shared
//! mutation needs an external lock such as `Mutex<BitArray>`.

// Module declarations
pub mod bitarray;
pub mod error;
pub mod snapshot;

// Re-exports for convenient access
pub use bitarray::{byte_size_for, BitArray, Bits, BITS_PER_BYTE};
pub use error::{BarrayError, Result};
pub use snapshot::BitArraySnapshot;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = "barray";

/// Get version string
pub fn version() -> String {
    format!("{} v{}", NAME, VERSION)
}
