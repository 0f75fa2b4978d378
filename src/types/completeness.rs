//! Consumed-versus-total byte accounting

/// How much of the input the decoder consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completeness {
    pub file_size: u64,
    pub consumed: u64,
}

impl Completeness {
    pub fn new(file_size: u64, consumed: u64) -> Self {
        Self {
            file_size,
            consumed,
        }
    }

    /// True iff every byte of the input was consumed
    pub fn is_complete(&self) -> bool {
        self.file_size == self.consumed
    }

    /// `consumed - file_size`; negative when trailing bytes were left unread
    pub fn delta(&self) -> i64 {
        self.consumed as i64 - self.file_size as i64
    }

    /// Trailing bytes left unread
    pub fn remaining(&self) -> u64 {
        self.file_size.saturating_sub(self.consumed)
    }
}
