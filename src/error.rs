//! Error types for dimblob

use std::fmt;
use thiserror::Error;

/// A read that ran past the end of the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Truncated {
    /// Byte offset where the read started
    pub offset: usize,
    /// Bytes the read asked for
    pub needed: usize,
    /// Bytes left in the buffer at `offset`
    pub available: usize,
}

impl fmt::Display for Truncated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "needed {} bytes at offset {}, only {} available",
            self.needed, self.offset, self.available
        )
    }
}

/// Why a shape could not be applied to the payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MismatchReason {
    #[error("extent {extent} at index {index} is negative")]
    NegativeExtent { index: usize, extent: i32 },
    #[error("element count overflows")]
    Overflow,
    #[error("expected {expected} elements, payload has {actual}")]
    Length { expected: usize, actual: usize },
}

#[derive(Debug, Error)]
pub enum BlobError {
    #[error("truncated header: {0}")]
    TruncatedHeader(Truncated),
    #[error("truncated shape: {0}")]
    TruncatedShape(Truncated),
    #[error("truncated payload: {0}")]
    TruncatedPayload(Truncated),
    #[error("invalid rank: {0}")]
    InvalidRank(i32),
    #[error("shape {shape:?} does not match payload: {reason}")]
    ShapeMismatch {
        shape: Vec<i32>,
        reason: MismatchReason,
    },
    #[error("size mismatch: consumed {consumed} bytes of {file_size}")]
    SizeMismatch { consumed: u64, file_size: u64 },
    #[error("file is {size} bytes, limit is {limit}")]
    FileTooLarge { size: u64, limit: u64 },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BlobError>;

impl BlobError {
    pub(crate) fn shape_mismatch(shape: &[i32], reason: MismatchReason) -> Self {
        BlobError::ShapeMismatch {
            shape: shape.to_vec(),
            reason,
        }
    }

    /// True for the truncation family of errors
    pub fn is_truncated(&self) -> bool {
        matches!(
            self,
            BlobError::TruncatedHeader(_)
                | BlobError::TruncatedShape(_)
                | BlobError::TruncatedPayload(_)
        )
    }
}
