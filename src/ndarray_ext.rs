//! ndarray integration for blob payloads
//!
//! Conversions between little-endian element buffers and ndarray's `ArrayD`.
//! Buffers are always validated against the requested shape before a shaped
//! array is handed out.

use crate::error::{BlobError, MismatchReason, Result};
use crate::parser::{ByteCursor, Parser, element_le, ntimes};
use crate::types::ELEMENT_SIZE;
use ndarray::{ArrayD, IxDyn};

/// Element types a blob payload can hold
pub trait Element: Copy + Default + std::fmt::Debug + 'static {
    /// Name used on the command line and in logs
    const NAME: &'static str;

    fn from_le_bytes(bytes: [u8; ELEMENT_SIZE]) -> Self;

    fn to_le_bytes(self) -> [u8; ELEMENT_SIZE];
}

impl Element for f32 {
    const NAME: &'static str = "f32";

    fn from_le_bytes(bytes: [u8; ELEMENT_SIZE]) -> Self {
        f32::from_le_bytes(bytes)
    }

    fn to_le_bytes(self) -> [u8; ELEMENT_SIZE] {
        f32::to_le_bytes(self)
    }
}

impl Element for i32 {
    const NAME: &'static str = "i32";

    fn from_le_bytes(bytes: [u8; ELEMENT_SIZE]) -> Self {
        i32::from_le_bytes(bytes)
    }

    fn to_le_bytes(self) -> [u8; ELEMENT_SIZE] {
        i32::to_le_bytes(self)
    }
}

// =============================================================================
// Bytes to ndarray
// =============================================================================

/// Decode a flat little-endian buffer into an array of the given shape
///
/// The buffer must hold exactly `∏shape` elements. A rank-0 shape yields a
/// 0-dimensional array holding one element.
pub fn tensor_from_le_bytes<T: Element>(shape: &[usize], bytes: &[u8]) -> Result<ArrayD<T>> {
    let raw_shape = || shape.iter().map(|&d| d as i32).collect::<Vec<_>>();

    let expected = shape
        .iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .ok_or_else(|| BlobError::shape_mismatch(&raw_shape(), MismatchReason::Overflow))?;

    let actual = bytes.len() / ELEMENT_SIZE;
    if bytes.len() % ELEMENT_SIZE != 0 || actual != expected {
        return Err(BlobError::shape_mismatch(
            &raw_shape(),
            MismatchReason::Length { expected, actual },
        ));
    }

    let mismatch = || {
        BlobError::shape_mismatch(&raw_shape(), MismatchReason::Length { expected, actual })
    };

    let (elements, _) = ntimes(expected, element_le::<T>())
        .parse(ByteCursor::new(bytes))
        .map_err(|_| mismatch())?;

    ArrayD::from_shape_vec(IxDyn(shape), elements).map_err(|_| mismatch())
}

// =============================================================================
// ndarray to bytes
// =============================================================================

/// Flatten an array to little-endian bytes in row-major order,
/// regardless of its memory layout
pub fn tensor_to_le_bytes<T: Element>(array: &ArrayD<T>) -> Vec<u8> {
    array.iter().flat_map(|&x| x.to_le_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn le_bytes<T: Element>(values: &[T]) -> Vec<u8> {
        values.iter().flat_map(|v| v.to_le_bytes()).collect()
    }

    #[test]
    fn from_bytes_1d_f32() {
        let bytes = le_bytes(&[0.5f32, 2.0]);
        let arr: ArrayD<f32> = tensor_from_le_bytes(&[2], &bytes).unwrap();
        assert_eq!(arr, array![0.5f32, 2.0].into_dyn());
    }

    #[test]
    fn from_bytes_2d_i32_row_major() {
        let bytes = le_bytes(&[1i32, 2, 3, 4, 5, 6]);
        let arr: ArrayD<i32> = tensor_from_le_bytes(&[3, 2], &bytes).unwrap();
        assert_eq!(arr, array![[1, 2], [3, 4], [5, 6]].into_dyn());
    }

    #[test]
    fn from_bytes_scalar() {
        let bytes = le_bytes(&[9i32]);
        let arr: ArrayD<i32> = tensor_from_le_bytes(&[], &bytes).unwrap();
        assert_eq!(arr.ndim(), 0);
        assert_eq!(arr.len(), 1);
    }

    #[test]
    fn from_bytes_length_mismatch() {
        let bytes = le_bytes(&[1.0f32, 2.0, 3.0]);
        let result = tensor_from_le_bytes::<f32>(&[2, 2], &bytes);
        assert!(matches!(
            result,
            Err(BlobError::ShapeMismatch {
                reason: MismatchReason::Length {
                    expected: 4,
                    actual: 3
                },
                ..
            })
        ));
    }

    #[test]
    fn from_bytes_partial_element() {
        let bytes = [0u8; 6];
        let result = tensor_from_le_bytes::<f32>(&[1], &bytes);
        assert!(matches!(result, Err(BlobError::ShapeMismatch { .. })));
    }

    #[test]
    fn to_bytes_non_standard_layout() {
        let arr = array![[1i32, 2], [3, 4]].reversed_axes().into_dyn();
        let bytes = tensor_to_le_bytes(&arr);
        assert_eq!(bytes, le_bytes(&[1i32, 3, 2, 4]));
    }

    #[test]
    fn nan_bits_preserved() {
        let nan = f32::from_bits(0x7FC0_0001);
        let bytes = le_bytes(&[nan]);
        let arr: ArrayD<f32> = tensor_from_le_bytes(&[1], &bytes).unwrap();
        assert_eq!(arr.as_slice().unwrap()[0].to_bits(), 0x7FC0_0001);
    }
}
