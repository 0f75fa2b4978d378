//! Position within an input buffer

/// Borrowed input plus read position. Copying a cursor is cheap and never
/// copies the underlying bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    pub fn inner(&self) -> (&'a [u8], usize) {
        (self.data, self.position)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    pub fn eos(&self) -> bool {
        self.remaining() == 0
    }

    pub(crate) fn advanced(self, count: usize) -> Self {
        Self {
            data: self.data,
            position: self.position + count,
        }
    }
}
