//! Reader options

/// Options controlling how a blob file is read
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadOptions {
    /// Treat unread trailing bytes as an error instead of a warning
    pub strict: bool,
    /// Refuse files larger than this many bytes
    pub max_file_size: Option<u64>,
}

impl ReadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn max_file_size(mut self, limit: u64) -> Self {
        self.max_file_size = Some(limit);
        self
    }
}
