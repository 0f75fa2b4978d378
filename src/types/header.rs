//! Header layout constants and structure

/// Size in bytes of the rank field
pub const RANK_SIZE: usize = 4;

/// Size in bytes of one shape entry or payload element
pub const ELEMENT_SIZE: usize = 4;

/// Leading blob header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Number of shape dimensions that follow
    pub rank: u32,
}

impl Header {
    pub fn new(rank: u32) -> Self {
        Self { rank }
    }

    /// Bytes occupied by the shape vector
    pub fn shape_size(&self) -> usize {
        (self.rank as usize).saturating_mul(ELEMENT_SIZE)
    }
}
