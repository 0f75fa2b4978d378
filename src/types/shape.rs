//! Shape descriptor

use crate::error::{BlobError, MismatchReason, Result};
use std::fmt;

/// Ordered dimension extents, row-major
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Shape {
    dims: Vec<u32>,
}

impl Shape {
    pub fn new(dims: Vec<u32>) -> Self {
        Self { dims }
    }

    /// Validate extents as stored on disk (signed 32-bit)
    pub fn from_raw(raw: &[i32]) -> Result<Self> {
        let dims = raw
            .iter()
            .enumerate()
            .map(|(index, &extent)| {
                u32::try_from(extent).map_err(|_| {
                    BlobError::shape_mismatch(raw, MismatchReason::NegativeExtent { index, extent })
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { dims })
    }

    pub fn dims(&self) -> &[u32] {
        &self.dims
    }

    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Extents as ndarray dimensions
    pub fn extents(&self) -> Vec<usize> {
        self.dims.iter().map(|&d| d as usize).collect()
    }

    /// Product of all extents; 1 for a rank-0 shape.
    /// `None` if it does not fit in `usize`.
    pub fn element_count(&self) -> Option<usize> {
        self.dims
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d as usize))
    }

    /// Shape as signed on-disk values, for error reporting
    pub fn to_raw(&self) -> Vec<i32> {
        self.dims.iter().map(|&d| d as i32).collect()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.dims)
    }
}
