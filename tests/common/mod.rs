//! Blob encoder for building fixtures

use dimblob::{Element, tensor_to_le_bytes};
use ndarray::ArrayD;
use std::io::Write;
use tempfile::NamedTempFile;

/// Encode header, shape and row-major payload
pub fn encode<T: Element>(array: &ArrayD<T>) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&(array.ndim() as i32).to_le_bytes());
    for &dim in array.shape() {
        bytes.extend_from_slice(&(dim as i32).to_le_bytes());
    }
    bytes.extend_from_slice(&tensor_to_le_bytes(array));
    bytes
}

/// Write raw bytes to a fresh temporary file
pub fn blob_file(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}
