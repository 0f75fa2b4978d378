//! Result of decoding one blob

use super::{Completeness, Header, Shape};
use ndarray::ArrayD;

/// Header, shape, shaped payload and byte accounting of a decoded blob
#[derive(Debug, Clone)]
pub struct Decoded<T> {
    pub header: Header,
    pub shape: Shape,
    pub array: ArrayD<T>,
    pub completeness: Completeness,
}

impl<T> Decoded<T> {
    /// Human-readable summary: completeness, rank, shape, array shape
    pub fn report(&self) -> String {
        let status = if self.completeness.is_complete() {
            "The whole file has been read.".to_string()
        } else {
            format!(
                "Not all data was read. {} bytes remain.",
                self.completeness.remaining()
            )
        };
        format!(
            "{status}\n{}\n{}\n{:?}",
            self.header.rank,
            self.shape,
            self.array.shape()
        )
    }
}
