//! File-backed blob reading

use crate::config::ReadOptions;
use crate::error::{BlobError, Result};
use crate::ndarray_ext::Element;
use crate::parser::{parse_bytes, parse_raw};
use crate::types::Decoded;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Reads blob files from disk
///
/// Each read opens the file, pulls its contents into memory and closes the
/// handle before decoding, so no handle outlives a call on any path.
#[derive(Debug, Clone, Default)]
pub struct ArrayBlobReader {
    options: ReadOptions,
}

impl ArrayBlobReader {
    pub fn new(options: ReadOptions) -> Self {
        Self { options }
    }

    /// Read and decode the blob at `path`
    pub fn read<T: Element>(&self, path: impl AsRef<Path>) -> Result<Decoded<T>> {
        let path = path.as_ref();
        let bytes = self.load(path)?;
        let decoded = parse_bytes::<T>(&bytes)?;

        let completeness = decoded.completeness;
        if !completeness.is_complete() {
            if self.options.strict {
                return Err(BlobError::SizeMismatch {
                    consumed: completeness.consumed,
                    file_size: completeness.file_size,
                });
            }
            warn!(
                path = %path.display(),
                consumed = completeness.consumed,
                file_size = completeness.file_size,
                delta = completeness.delta(),
                "blob not fully consumed"
            );
        }

        Ok(decoded)
    }

    /// Read the whole file as bare elements, ignoring any header
    pub fn read_raw<T: Element>(&self, path: impl AsRef<Path>) -> Result<Vec<T>> {
        let bytes = self.load(path.as_ref())?;
        Ok(parse_raw(&bytes))
    }

    fn load(&self, path: &Path) -> Result<Vec<u8>> {
        let mut file = File::open(path)?;
        let size = file.metadata()?.len();
        debug!(path = %path.display(), size, "opened blob");

        if let Some(limit) = self.options.max_file_size {
            if size > limit {
                return Err(BlobError::FileTooLarge { size, limit });
            }
        }

        let mut bytes = Vec::with_capacity(size as usize);
        file.read_to_end(&mut bytes)?;
        Ok(bytes)
    }
}

/// Read an f32 blob with default options
pub fn read_file(path: impl AsRef<Path>) -> Result<Decoded<f32>> {
    ArrayBlobReader::default().read(path)
}

/// Read an f32 blob with the given options
pub fn read_file_with(path: impl AsRef<Path>, options: &ReadOptions) -> Result<Decoded<f32>> {
    ArrayBlobReader::new(options.clone()).read(path)
}

/// Read a blob of any supported element type with default options
pub fn read_file_as<T: Element>(path: impl AsRef<Path>) -> Result<Decoded<T>> {
    ArrayBlobReader::default().read(path)
}

/// Read a headerless file as bare elements
pub fn read_raw<T: Element>(path: impl AsRef<Path>) -> Result<Vec<T>> {
    ArrayBlobReader::default().read_raw(path)
}
