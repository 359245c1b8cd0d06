//! Error types for barray.
//!
//! Every fallible operation returns [`Result`], built on a single
//! `thiserror`-derived enum. All variants describe caller input that was
//! rejected; none of them leave a [`BitArray`](crate::BitArray) partially
//! modified.

use thiserror::Error;

/// The error type for barray operations.
#[derive(Error, Debug)]
pub enum BarrayError {
    /// An indexed accessor was called with a position outside `[0, size)`.
    #[error("Invalid position: {position} is not below array size {size}")]
    InvalidPosition {
        /// The rejected position
        position: usize,
        /// Logical bit capacity of the array
        size: usize,
    },

    /// Loading the data would drop bytes that do not fit the buffer.
    #[error("Lossy operation: {len} bytes do not fit into a buffer of {byte_size} bytes")]
    LossyOperation {
        /// Length of the supplied data
        len: usize,
        /// Capacity of the buffer in bytes
        byte_size: usize,
    },

    /// A snapshot does not describe a valid bit array.
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// Binary (bincode) encoding or decoding failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for barray operations.
pub type Result<T> = std::result::Result<T, BarrayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BarrayError::InvalidPosition {
            position: 5,
            size: 5,
        };
        assert_eq!(
            err.to_string(),
            "Invalid position: 5 is not below array size 5"
        );

        let err = BarrayError::LossyOperation {
            len: 2,
            byte_size: 1,
        };
        assert_eq!(
            err.to_string(),
            "Lossy operation: 2 bytes do not fit into a buffer of 1 bytes"
        );

        let err = BarrayError::InvalidSnapshot("bad".into());
        assert_eq!(err.to_string(), "Invalid snapshot: bad");
    }

    #[test]
    fn test_json_error_converts() {
        fn parse() -> Result<serde_json::Value> {
            Ok(serde_json::from_str("{not json")?)
        }

        assert!(matches!(parse(), Err(BarrayError::Json(_))));
    }

    #[test]
    fn test_result_type() {
        fn returns_result() -> Result<u8> {
            Ok(1)
        }

        assert_eq!(returns_result().unwrap(), 1);
    }
}
